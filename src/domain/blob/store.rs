//! Blob store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Remote blob store holding image content
///
/// Keys are container-relative paths such as `Tagalog/background.jpg`.
#[async_trait]
pub trait BlobStore: Send + Sync + Debug {
    /// Downloads the blob at `key` as raw bytes
    ///
    /// A missing blob is a `Retrieval` error, the same as any other
    /// download failure.
    async fn download(&self, key: &str) -> Result<Vec<u8>, DomainError>;

    /// Checks whether the blob at `key` exists
    ///
    /// Returns `Ok(false)` only when the store definitively reports the
    /// blob absent. Transport and server failures are errors.
    async fn exists(&self, key: &str) -> Result<bool, DomainError>;

    /// Checks whether the configured container exists
    async fn container_exists(&self) -> Result<bool, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock blob store for testing
    ///
    /// Counts remote calls so tests can assert whether a lookup was
    /// served from cache or went to the store.
    #[derive(Debug, Default)]
    pub struct MockBlobStore {
        blobs: Mutex<HashMap<String, Vec<u8>>>,
        error: Mutex<Option<String>>,
        download_calls: AtomicUsize,
        exists_calls: AtomicUsize,
        container_calls: AtomicUsize,
    }

    impl MockBlobStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_blob(self, key: &str, bytes: impl Into<Vec<u8>>) -> Self {
            self.blobs
                .lock()
                .unwrap()
                .insert(key.to_string(), bytes.into());
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        pub fn download_calls(&self) -> usize {
            self.download_calls.load(Ordering::SeqCst)
        }

        pub fn exists_calls(&self) -> usize {
            self.exists_calls.load(Ordering::SeqCst)
        }

        pub fn container_calls(&self) -> usize {
            self.container_calls.load(Ordering::SeqCst)
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::retrieval(error));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl BlobStore for MockBlobStore {
        async fn download(&self, key: &str) -> Result<Vec<u8>, DomainError> {
            self.download_calls.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;

            self.blobs
                .lock()
                .unwrap()
                .get(key)
                .cloned()
                .ok_or_else(|| DomainError::retrieval(format!("Blob '{}' not found", key)))
        }

        async fn exists(&self, key: &str) -> Result<bool, DomainError> {
            self.exists_calls.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;
            Ok(self.blobs.lock().unwrap().contains_key(key))
        }

        async fn container_exists(&self) -> Result<bool, DomainError> {
            self.container_calls.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;
            Ok(true)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_download() {
            let store = MockBlobStore::new().with_blob("a.jpg", b"bytes".to_vec());

            let bytes = store.download("a.jpg").await.unwrap();
            assert_eq!(bytes, b"bytes");
            assert_eq!(store.download_calls(), 1);
        }

        #[tokio::test]
        async fn test_mock_download_missing() {
            let store = MockBlobStore::new();

            let result = store.download("missing.jpg").await;
            assert!(matches!(result, Err(DomainError::Retrieval { .. })));
        }

        #[tokio::test]
        async fn test_mock_exists() {
            let store = MockBlobStore::new().with_blob("a.jpg", b"bytes".to_vec());

            assert!(store.exists("a.jpg").await.unwrap());
            assert!(!store.exists("missing.jpg").await.unwrap());
            assert_eq!(store.exists_calls(), 2);
        }

        #[tokio::test]
        async fn test_mock_with_error() {
            let store = MockBlobStore::new().with_error("connection refused");

            assert!(store.download("a.jpg").await.is_err());
            assert!(store.exists("a.jpg").await.is_err());
            assert!(store.container_exists().await.is_err());
        }
    }
}
