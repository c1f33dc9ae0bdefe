//! The normalized metadata record

use crate::client::B2File;
use serde::{Deserialize, Serialize};

/// Kind tag carried by every [`FileRecord`].
///
/// The flat store only holds file objects; directories exist purely as key
/// prefixes, so listings never produce a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file object.
    File,
}

/// Visibility levels of the generic storage interface.
///
/// B2 has no per-object ACLs, so the adapter rejects both getting and
/// setting these; the type exists to keep the contract explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// World-readable.
    Public,
    /// Readable only through authorized requests.
    Private,
}

/// The normalized file record returned to interface consumers.
///
/// Every read path of the adapter produces exactly this shape, whichever
/// remote call it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Always [`EntryKind::File`]; see the type docs.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Object key within the bucket.
    pub path: String,
    /// Upload time in seconds since the Unix epoch.
    pub timestamp: u64,
    /// Object size in bytes.
    pub size: u64,
    /// Content type, only when the remote descriptor supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
}

impl From<&B2File> for FileRecord {
    /// Normalize a remote descriptor.
    ///
    /// The store reports upload times in milliseconds; the interface
    /// contract is seconds, obtained by dropping the last three digits.
    /// This conversion happens here and nowhere else.
    fn from(file: &B2File) -> Self {
        FileRecord {
            kind: EntryKind::File,
            path: file.name.clone(),
            timestamp: file.upload_timestamp / 1000,
            size: file.size,
            mimetype: file.content_type.clone(),
        }
    }
}
