//! The remote client boundary
//!
//! `blazefs` never talks HTTP itself. Everything it needs from Backblaze B2
//! is expressed as the [`B2Client`] trait: six primitive operations keyed by
//! bucket name and object key. Authentication, retries, and connection
//! handling belong to the implementation behind the trait.

use async_trait::async_trait;
use bytes::Bytes;

/// Error type produced by remote client implementations.
///
/// The client is opaque to this crate, so its errors are too.
pub type RemoteError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A file descriptor as reported by the remote store.
///
/// This is the raw shape B2 hands back; consumers of the adapter never see
/// it directly, only its normalized [`FileRecord`](crate::FileRecord) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct B2File {
    /// Object key within the bucket.
    pub name: String,
    /// Object size in bytes.
    pub size: u64,
    /// Upload time in milliseconds since the Unix epoch.
    pub upload_timestamp: u64,
    /// Content type, when the store recorded one.
    pub content_type: Option<String>,
}

/// Primitive operations the remote object store must provide.
///
/// All methods are keyed by `(bucket, key)`. `list_files` returns the whole
/// bucket; B2's listing has no prefix or depth filtering, which is why
/// directory emulation happens client-side in the adapter.
#[async_trait]
pub trait B2Client: Send + Sync {
    /// Upload `body` as the object at `key`, returning its descriptor.
    async fn upload(&self, bucket: &str, key: &str, body: Bytes) -> Result<B2File, RemoteError>;

    /// Download the full body of the object at `key`.
    async fn download(&self, bucket: &str, key: &str) -> Result<Bytes, RemoteError>;

    /// Fetch the descriptor for the object at `key`.
    async fn get_file(&self, bucket: &str, key: &str) -> Result<B2File, RemoteError>;

    /// Delete the object at `key`. Returns whether a deletion happened.
    async fn delete_file(&self, bucket: &str, key: &str) -> Result<bool, RemoteError>;

    /// Check whether an object exists at `key`.
    async fn file_exists(&self, bucket: &str, key: &str) -> Result<bool, RemoteError>;

    /// List every object in the bucket, in the store's listing order.
    async fn list_files(&self, bucket: &str) -> Result<Vec<B2File>, RemoteError>;
}
