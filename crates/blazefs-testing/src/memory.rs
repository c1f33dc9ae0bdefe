//! Deterministic in-memory remote client

use async_trait::async_trait;
use blazefs::{B2Client, B2File, RemoteError};
use bytes::Bytes;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Upload timestamp assigned to the first object, in milliseconds.
///
/// Deliberately carries a non-zero millisecond component so tests observe
/// the truncation to seconds. Later uploads advance in whole seconds.
pub const BASE_UPLOAD_TIMESTAMP: u64 = 1_577_836_800_123;

#[derive(Debug, Clone)]
struct StoredObject {
    body: Bytes,
    upload_timestamp: u64,
    content_type: Option<String>,
}

/// An in-memory [`B2Client`] for tests.
///
/// Objects live in a per-bucket `BTreeMap`, so `list_files` returns keys in
/// lexicographic order, which is also how B2 lists a bucket. Upload
/// timestamps are synthetic and monotonic rather than wall-clock, keeping
/// test assertions deterministic.
#[derive(Debug, Default)]
pub struct InMemoryClient {
    buckets: RwLock<BTreeMap<String, BTreeMap<String, StoredObject>>>,
    uploads: AtomicU64,
}

impl InMemoryClient {
    /// Create an empty client.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_timestamp(&self) -> u64 {
        let n = self.uploads.fetch_add(1, Ordering::Relaxed);
        BASE_UPLOAD_TIMESTAMP + n * 1_000
    }

    /// Insert an object directly, bypassing the client trait.
    ///
    /// Lets fixtures control the content type, which trait uploads leave
    /// unset.
    pub async fn insert(
        &self,
        bucket: &str,
        key: &str,
        body: impl Into<Bytes>,
        content_type: Option<&str>,
    ) {
        let object = StoredObject {
            body: body.into(),
            upload_timestamp: self.next_timestamp(),
            content_type: content_type.map(str::to_string),
        };
        self.buckets
            .write()
            .await
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), object);
    }

    /// Number of objects currently stored in `bucket`.
    pub async fn object_count(&self, bucket: &str) -> usize {
        self.buckets
            .read()
            .await
            .get(bucket)
            .map_or(0, BTreeMap::len)
    }

    fn descriptor(key: &str, object: &StoredObject) -> B2File {
        B2File {
            name: key.to_string(),
            size: object.body.len() as u64,
            upload_timestamp: object.upload_timestamp,
            content_type: object.content_type.clone(),
        }
    }
}

fn missing(bucket: &str, key: &str) -> RemoteError {
    format!("no such file: {bucket}/{key}").into()
}

#[async_trait]
impl B2Client for InMemoryClient {
    async fn upload(&self, bucket: &str, key: &str, body: Bytes) -> Result<B2File, RemoteError> {
        let object = StoredObject {
            body,
            upload_timestamp: self.next_timestamp(),
            content_type: None,
        };
        let descriptor = Self::descriptor(key, &object);
        self.buckets
            .write()
            .await
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), object);
        Ok(descriptor)
    }

    async fn download(&self, bucket: &str, key: &str) -> Result<Bytes, RemoteError> {
        self.buckets
            .read()
            .await
            .get(bucket)
            .and_then(|objects| objects.get(key))
            .map(|object| object.body.clone())
            .ok_or_else(|| missing(bucket, key))
    }

    async fn get_file(&self, bucket: &str, key: &str) -> Result<B2File, RemoteError> {
        self.buckets
            .read()
            .await
            .get(bucket)
            .and_then(|objects| objects.get(key))
            .map(|object| Self::descriptor(key, object))
            .ok_or_else(|| missing(bucket, key))
    }

    async fn delete_file(&self, bucket: &str, key: &str) -> Result<bool, RemoteError> {
        Ok(self
            .buckets
            .write()
            .await
            .get_mut(bucket)
            .and_then(|objects| objects.remove(key))
            .is_some())
    }

    async fn file_exists(&self, bucket: &str, key: &str) -> Result<bool, RemoteError> {
        Ok(self
            .buckets
            .read()
            .await
            .get(bucket)
            .is_some_and(|objects| objects.contains_key(key)))
    }

    async fn list_files(&self, bucket: &str) -> Result<Vec<B2File>, RemoteError> {
        Ok(self
            .buckets
            .read()
            .await
            .get(bucket)
            .map(|objects| {
                objects
                    .iter()
                    .map(|(key, object)| Self::descriptor(key, object))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_then_download_round_trips() {
        let client = InMemoryClient::new();
        client
            .upload("bucket", "a.txt", Bytes::from_static(b"hello"))
            .await
            .unwrap();
        let body = client.download("bucket", "a.txt").await.unwrap();
        assert_eq!(&body[..], b"hello");
    }

    #[tokio::test]
    async fn timestamps_advance_per_upload() {
        let client = InMemoryClient::new();
        let first = client
            .upload("bucket", "a", Bytes::new())
            .await
            .unwrap();
        let second = client
            .upload("bucket", "b", Bytes::new())
            .await
            .unwrap();
        assert_eq!(first.upload_timestamp, BASE_UPLOAD_TIMESTAMP);
        assert_eq!(second.upload_timestamp, BASE_UPLOAD_TIMESTAMP + 1_000);
    }

    #[tokio::test]
    async fn listing_is_lexicographic() {
        let client = InMemoryClient::new();
        for key in ["b", "a", "c/x"] {
            client.upload("bucket", key, Bytes::new()).await.unwrap();
        }
        let names: Vec<String> = client
            .list_files("bucket")
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["a", "b", "c/x"]);
    }

    #[tokio::test]
    async fn buckets_are_isolated() {
        let client = InMemoryClient::new();
        client.upload("one", "a", Bytes::new()).await.unwrap();
        assert!(!client.file_exists("two", "a").await.unwrap());
        assert!(client.list_files("two").await.unwrap().is_empty());
    }
}
