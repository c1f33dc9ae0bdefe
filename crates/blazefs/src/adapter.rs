//! The path-semantics adapter

use crate::client::B2Client;
use crate::error::{AdapterError, Result};
use crate::listing::ListScope;
use crate::location::B2Location;
use crate::reader::ContentReader;
use crate::record::{FileRecord, Visibility};
use bytes::Bytes;
use std::fmt;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, trace};

/// Key suffix of the zero-length placeholder object that stands in for a
/// directory in the flat namespace.
const DIRECTORY_MARKER: &str = ".marker";

/// Adapter mapping the generic storage interface onto a B2 bucket.
///
/// Holds exactly two immutable fields, the remote client handle and the
/// bucket name, and keeps no other state between calls. Each operation
/// issues one remote call ([`copy`](Self::copy) and
/// [`rename`](Self::rename) issue two) and returns; concurrent use is as
/// safe as the underlying client makes it.
///
/// Failures surface on two channels, matching the interface contract:
/// operations with a sentinel convention (`read_stream`, `copy`, `rename`)
/// report failure through their return value, everything else propagates
/// the remote error through [`AdapterError`].
#[derive(Clone)]
pub struct B2Adapter {
    client: Arc<dyn B2Client>,
    bucket: String,
}

impl B2Adapter {
    /// Create an adapter over `bucket`, using `client` for all remote
    /// calls.
    pub fn new(client: Arc<dyn B2Client>, bucket: impl Into<String>) -> Self {
        B2Adapter {
            client,
            bucket: bucket.into(),
        }
    }

    /// Create an adapter from a `b2://bucket` location URL.
    pub fn from_url(client: Arc<dyn B2Client>, url: &str) -> Result<Self> {
        let location = B2Location::parse(url)?;
        Ok(Self::new(client, location.bucket))
    }

    /// The remote client handle.
    pub fn client(&self) -> &Arc<dyn B2Client> {
        &self.client
    }

    /// The bucket this adapter operates on.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Whether an object exists at `path`, exactly as the remote store
    /// reports it. Nothing is cached.
    pub async fn has(&self, path: &str) -> Result<bool> {
        Ok(self.client.file_exists(&self.bucket, path).await?)
    }

    /// Upload `contents` as the object at `path`.
    pub async fn write(&self, path: &str, contents: impl Into<Bytes>) -> Result<FileRecord> {
        let body = contents.into();
        debug!("uploading {} bytes to {}", body.len(), path);
        let file = self.client.upload(&self.bucket, path, body).await?;
        Ok(FileRecord::from(&file))
    }

    /// Upload everything `reader` yields as the object at `path`.
    pub async fn write_stream<R: Read>(&self, path: &str, mut reader: R) -> Result<FileRecord> {
        let mut body = Vec::new();
        reader.read_to_end(&mut body)?;
        // the reader must not live across the await
        drop(reader);
        self.write(path, body).await
    }

    /// Replace the object at `path` with `contents`.
    ///
    /// B2 uploads overwrite unconditionally, so this is `write` under the
    /// interface's update name.
    pub async fn update(&self, path: &str, contents: impl Into<Bytes>) -> Result<FileRecord> {
        self.write(path, contents).await
    }

    /// Replace the object at `path` with everything `reader` yields.
    pub async fn update_stream<R: Read>(&self, path: &str, reader: R) -> Result<FileRecord> {
        self.write_stream(path, reader).await
    }

    /// Fetch the full body of the object at `path`.
    pub async fn read(&self, path: &str) -> Result<Bytes> {
        Ok(self.client.download(&self.bucket, path).await?)
    }

    /// Fetch the object at `path` as a seekable reader positioned at
    /// offset 0.
    ///
    /// Sentinel convention: a remote failure yields `None`, never an
    /// error.
    pub async fn read_stream(&self, path: &str) -> Option<ContentReader> {
        match self.client.download(&self.bucket, path).await {
            Ok(body) => Some(ContentReader::new(body)),
            Err(e) => {
                debug!("read_stream of {} failed: {}", path, e);
                None
            }
        }
    }

    /// Copy the object at `path` to `new_path`.
    ///
    /// Sentinel convention: `false` when the source cannot be read as a
    /// stream or the upload fails.
    pub async fn copy(&self, path: &str, new_path: &str) -> bool {
        let Some(mut reader) = self.read_stream(path).await else {
            return false;
        };
        let mut body = Vec::new();
        if reader.read_to_end(&mut body).is_err() {
            return false;
        }
        match self.client.upload(&self.bucket, new_path, body.into()).await {
            Ok(_) => true,
            Err(e) => {
                debug!("copy {} -> {} failed on upload: {}", path, new_path, e);
                false
            }
        }
    }

    /// Move the object at `path` to `new_path` via copy-then-delete.
    ///
    /// The source is deleted only once the copy has succeeded, so a failed
    /// copy leaves it untouched. Sentinel convention: any sub-step failure
    /// yields `false`.
    pub async fn rename(&self, path: &str, new_path: &str) -> bool {
        if !self.copy(path, new_path).await {
            return false;
        }
        match self.client.delete_file(&self.bucket, path).await {
            Ok(deleted) => deleted,
            Err(e) => {
                debug!("rename {} -> {} failed deleting source: {}", path, new_path, e);
                false
            }
        }
    }

    /// Delete the object at `path`.
    pub async fn delete(&self, path: &str) -> Result<bool> {
        debug!("deleting {}", path);
        Ok(self.client.delete_file(&self.bucket, path).await?)
    }

    /// Delete the "directory" at `path`.
    ///
    /// The store has no directory concept, so this deletes the single
    /// object key a same-named [`delete`](Self::delete) would remove. It
    /// does not recurse over keys under the prefix.
    pub async fn delete_dir(&self, path: &str) -> Result<bool> {
        self.delete(path).await
    }

    /// Emulate creating a directory by uploading a zero-length placeholder
    /// object at `<path>/.marker`.
    pub async fn create_dir(&self, path: &str) -> Result<FileRecord> {
        let marker = format!("{path}/{DIRECTORY_MARKER}");
        debug!("creating directory placeholder {}", marker);
        let file = self.client.upload(&self.bucket, &marker, Bytes::new()).await?;
        Ok(FileRecord::from(&file))
    }

    /// Full normalized metadata for the object at `path`.
    pub async fn get_metadata(&self, path: &str) -> Result<FileRecord> {
        self.stat(path).await
    }

    /// Normalized metadata for `path`; callers read the `mimetype` field.
    pub async fn get_mimetype(&self, path: &str) -> Result<FileRecord> {
        self.stat(path).await
    }

    /// Normalized metadata for `path`; callers read the `size` field.
    pub async fn get_size(&self, path: &str) -> Result<FileRecord> {
        self.stat(path).await
    }

    /// Normalized metadata for `path`; callers read the `timestamp` field.
    pub async fn get_timestamp(&self, path: &str) -> Result<FileRecord> {
        self.stat(path).await
    }

    /// List the contents of `directory`.
    ///
    /// The remote store can only list the whole bucket, so the directory
    /// scope is applied locally by key filtering; the listing's relative
    /// order is preserved.
    ///
    /// # Panics
    ///
    /// `directory` must be `""` for the root or a bare prefix without
    /// leading or trailing separators; anything else violates the listing
    /// contract and panics instead of silently returning an empty result.
    pub async fn list_contents(&self, directory: &str, recursive: bool) -> Result<Vec<FileRecord>> {
        let scope = ListScope::new(directory, recursive);
        let files = self.client.list_files(&self.bucket).await?;
        trace!(
            "listing {:?} recursive={} over {} objects",
            directory,
            recursive,
            files.len()
        );
        Ok(files
            .iter()
            .filter(|file| scope.matches(&file.name))
            .map(FileRecord::from)
            .collect())
    }

    /// Set the visibility of the object at `path`.
    ///
    /// B2 has no per-object ACLs; this always fails with
    /// [`AdapterError::Unsupported`] rather than silently ignoring the
    /// request.
    pub fn set_visibility(&self, _path: &str, _visibility: Visibility) -> Result<()> {
        Err(AdapterError::Unsupported("visibility is not supported by B2"))
    }

    /// Get the visibility of the object at `path`.
    ///
    /// Always fails with [`AdapterError::Unsupported`]; see
    /// [`set_visibility`](Self::set_visibility).
    pub fn visibility(&self, _path: &str) -> Result<Visibility> {
        Err(AdapterError::Unsupported("visibility is not supported by B2"))
    }

    async fn stat(&self, path: &str) -> Result<FileRecord> {
        let file = self.client.get_file(&self.bucket, path).await?;
        Ok(FileRecord::from(&file))
    }
}

impl fmt::Debug for B2Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("B2Adapter")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}
