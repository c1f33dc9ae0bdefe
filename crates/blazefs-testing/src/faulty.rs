//! Fault injection for partial-failure tests

use async_trait::async_trait;
use blazefs::{B2Client, B2File, RemoteError};
use bytes::Bytes;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A [`B2Client`] wrapper that fails selected operations on demand.
///
/// Used to exercise the adapter's partial-failure contracts, e.g. that a
/// rename whose copy step fails leaves the source object untouched. Flags
/// can be flipped mid-test between calls.
#[derive(Debug)]
pub struct FaultyClient<C> {
    inner: Arc<C>,
    fail_uploads: AtomicBool,
    fail_downloads: AtomicBool,
    fail_deletes: AtomicBool,
}

impl<C: B2Client> FaultyClient<C> {
    /// Wrap `inner`, with all operations passing through until a failure
    /// flag is set.
    pub fn new(inner: Arc<C>) -> Self {
        FaultyClient {
            inner,
            fail_uploads: AtomicBool::new(false),
            fail_downloads: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
        }
    }

    /// Make subsequent uploads fail (or succeed again).
    pub fn fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent downloads fail (or succeed again).
    pub fn fail_downloads(&self, fail: bool) {
        self.fail_downloads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent deletes fail (or succeed again).
    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    fn injected(op: &str) -> RemoteError {
        format!("injected {op} failure").into()
    }
}

#[async_trait]
impl<C: B2Client> B2Client for FaultyClient<C> {
    async fn upload(&self, bucket: &str, key: &str, body: Bytes) -> Result<B2File, RemoteError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(Self::injected("upload"));
        }
        self.inner.upload(bucket, key, body).await
    }

    async fn download(&self, bucket: &str, key: &str) -> Result<Bytes, RemoteError> {
        if self.fail_downloads.load(Ordering::SeqCst) {
            return Err(Self::injected("download"));
        }
        self.inner.download(bucket, key).await
    }

    async fn get_file(&self, bucket: &str, key: &str) -> Result<B2File, RemoteError> {
        self.inner.get_file(bucket, key).await
    }

    async fn delete_file(&self, bucket: &str, key: &str) -> Result<bool, RemoteError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(Self::injected("delete"));
        }
        self.inner.delete_file(bucket, key).await
    }

    async fn file_exists(&self, bucket: &str, key: &str) -> Result<bool, RemoteError> {
        self.inner.file_exists(bucket, key).await
    }

    async fn list_files(&self, bucket: &str) -> Result<Vec<B2File>, RemoteError> {
        self.inner.list_files(bucket).await
    }
}
