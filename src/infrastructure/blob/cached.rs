//! Cache-aside layer over the blob store

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::{debug, warn};

use crate::domain::blob::BlobStore;
use crate::domain::cache::{Cache, CacheExt};
use crate::domain::DomainError;

/// Reads blob content through two cache regions
///
/// Downloaded bytes are cached base64-encoded in the content region and
/// existence flags in their own region. Failures are never cached: a
/// failed download propagates, a failed existence check reports `false`
/// so the next call goes back to the store.
#[derive(Debug)]
pub struct CachedBlobReader {
    store: Arc<dyn BlobStore>,
    content_cache: Arc<dyn Cache>,
    existence_cache: Arc<dyn Cache>,
}

impl CachedBlobReader {
    pub fn new(
        store: Arc<dyn BlobStore>,
        content_cache: Arc<dyn Cache>,
        existence_cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            store,
            content_cache,
            existence_cache,
        }
    }

    /// Fetches blob content, preferring the cache over the store
    ///
    /// A cached entry that fails to decode is a `Retrieval` error. Cache
    /// infrastructure failures degrade to a miss.
    pub async fn fetch_content(&self, key: &str) -> Result<Vec<u8>, DomainError> {
        match self.content_cache.get_raw(key).await {
            Ok(Some(encoded)) => {
                return STANDARD.decode(&encoded).map_err(|e| {
                    DomainError::retrieval(format!("Failed to decode cached blob '{}': {}", key, e))
                });
            }
            Ok(None) => {}
            Err(e) => {
                warn!(key = key, error = %e, "Blob cache read failed, falling back to store");
            }
        }

        debug!(key = key, "Blob cache miss, downloading from store");
        let bytes = self.store.download(key).await?;

        let encoded = STANDARD.encode(&bytes);
        if let Err(e) = self.content_cache.set_raw(key, &encoded).await {
            warn!(key = key, error = %e, "Failed to cache downloaded blob");
        }

        Ok(bytes)
    }

    /// Checks whether a blob exists, preferring the cache over the store
    ///
    /// A store failure reports `false` without caching it, so a later
    /// call checks the store again.
    pub async fn check_exists(&self, key: &str) -> bool {
        match self.existence_cache.get::<bool>(key).await {
            Ok(Some(exists)) => return exists,
            Ok(None) => {}
            Err(e) => {
                warn!(key = key, error = %e, "Existence cache read failed, falling back to store");
            }
        }

        match self.store.exists(key).await {
            Ok(exists) => {
                if let Err(e) = self.existence_cache.set(key, &exists).await {
                    warn!(key = key, error = %e, "Failed to cache existence flag");
                }
                exists
            }
            Err(e) => {
                warn!(key = key, error = %e, "Blob existence check failed");
                false
            }
        }
    }

    /// Checks whether the backing container exists, without caching
    pub async fn container_exists(&self) -> bool {
        match self.store.container_exists().await {
            Ok(exists) => exists,
            Err(e) => {
                warn!(error = %e, "Container check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blob::MockBlobStore;
    use crate::domain::cache::MockCache;

    fn reader_with(store: MockBlobStore) -> (CachedBlobReader, Arc<MockBlobStore>) {
        let store = Arc::new(store);
        let reader = CachedBlobReader::new(
            store.clone(),
            Arc::new(MockCache::new()),
            Arc::new(MockCache::new()),
        );
        (reader, store)
    }

    #[tokio::test]
    async fn test_fetch_content_downloads_then_serves_from_cache() {
        let store = MockBlobStore::new().with_blob("Tagalog/background.jpg", b"image".to_vec());
        let (reader, store) = reader_with(store);

        let first = reader.fetch_content("Tagalog/background.jpg").await.unwrap();
        assert_eq!(first, b"image");
        assert_eq!(store.download_calls(), 1);

        let second = reader.fetch_content("Tagalog/background.jpg").await.unwrap();
        assert_eq!(second, b"image");
        assert_eq!(store.download_calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_content_preserves_binary_content() {
        let payload: Vec<u8> = (0..2048).map(|i| (i % 251) as u8).collect();
        let store = MockBlobStore::new().with_blob("Tagalog/background.jpg", payload.clone());
        let (reader, store) = reader_with(store);

        let first = reader.fetch_content("Tagalog/background.jpg").await.unwrap();
        assert_eq!(first.len(), 2048);
        assert_eq!(first, payload);

        // Second read decodes the cached copy and must be byte-identical
        let second = reader.fetch_content("Tagalog/background.jpg").await.unwrap();
        assert_eq!(second, payload);
        assert_eq!(store.download_calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_content_after_region_clear_downloads_again() {
        let payload: Vec<u8> = (0..2048).map(|i| (i % 251) as u8).collect();
        let store =
            Arc::new(MockBlobStore::new().with_blob("Tagalog/background.jpg", payload.clone()));
        let content_cache = Arc::new(MockCache::new());
        let existence_cache = Arc::new(MockCache::new());
        let reader = CachedBlobReader::new(
            store.clone(),
            content_cache.clone(),
            existence_cache.clone(),
        );

        assert!(reader.check_exists("Tagalog/background.jpg").await);

        let first = reader.fetch_content("Tagalog/background.jpg").await.unwrap();
        assert_eq!(first, payload);
        let second = reader.fetch_content("Tagalog/background.jpg").await.unwrap();
        assert_eq!(second, payload);
        assert_eq!(store.download_calls(), 1);

        content_cache.clear().await.unwrap();

        let third = reader.fetch_content("Tagalog/background.jpg").await.unwrap();
        assert_eq!(third, payload);
        assert_eq!(store.download_calls(), 2);

        // Clearing the content region leaves the existence region intact
        assert!(reader.check_exists("Tagalog/background.jpg").await);
        assert_eq!(store.exists_calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_content_missing_blob() {
        let (reader, _) = reader_with(MockBlobStore::new());

        let result = reader.fetch_content("missing.jpg").await;
        assert!(matches!(result, Err(DomainError::Retrieval { .. })));
    }

    #[tokio::test]
    async fn test_fetch_content_failure_is_not_cached() {
        let store = Arc::new(MockBlobStore::new().with_error("connection refused"));
        let content_cache = Arc::new(MockCache::new());
        let reader = CachedBlobReader::new(
            store.clone(),
            content_cache.clone(),
            Arc::new(MockCache::new()),
        );

        let result = reader.fetch_content("a.jpg").await;
        assert!(matches!(result, Err(DomainError::Retrieval { .. })));
        assert_eq!(content_cache.size().await.unwrap(), 0);

        // The failure was not cached, so the next call goes back to the store
        let retry = reader.fetch_content("a.jpg").await;
        assert!(retry.is_err());
        assert_eq!(store.download_calls(), 2);
    }

    #[tokio::test]
    async fn test_fetch_content_corrupt_cache_entry() {
        let store = Arc::new(MockBlobStore::new().with_blob("a.jpg", b"image".to_vec()));
        let content_cache = Arc::new(MockCache::new());
        let reader = CachedBlobReader::new(
            store.clone(),
            content_cache.clone(),
            Arc::new(MockCache::new()),
        );

        content_cache.set_raw("a.jpg", "not valid base64!").await.unwrap();

        let result = reader.fetch_content("a.jpg").await;
        assert!(matches!(result, Err(DomainError::Retrieval { .. })));
        assert_eq!(store.download_calls(), 0);
    }

    #[tokio::test]
    async fn test_fetch_content_cache_failure_falls_back_to_store() {
        let store = Arc::new(MockBlobStore::new().with_blob("a.jpg", b"image".to_vec()));
        let reader = CachedBlobReader::new(
            store.clone(),
            Arc::new(MockCache::new().with_error("cache down")),
            Arc::new(MockCache::new()),
        );

        let bytes = reader.fetch_content("a.jpg").await.unwrap();
        assert_eq!(bytes, b"image");
        assert_eq!(store.download_calls(), 1);
    }

    #[tokio::test]
    async fn test_check_exists_caches_positive_result() {
        let store = MockBlobStore::new().with_blob("a.jpg", b"image".to_vec());
        let (reader, store) = reader_with(store);

        assert!(reader.check_exists("a.jpg").await);
        assert_eq!(store.exists_calls(), 1);

        assert!(reader.check_exists("a.jpg").await);
        assert_eq!(store.exists_calls(), 1);
    }

    #[tokio::test]
    async fn test_check_exists_caches_negative_result() {
        let (reader, store) = reader_with(MockBlobStore::new());

        assert!(!reader.check_exists("missing.jpg").await);
        assert_eq!(store.exists_calls(), 1);

        assert!(!reader.check_exists("missing.jpg").await);
        assert_eq!(store.exists_calls(), 1);
    }

    #[tokio::test]
    async fn test_check_exists_failure_reports_false_uncached() {
        let store = Arc::new(MockBlobStore::new().with_error("connection refused"));
        let existence_cache = Arc::new(MockCache::new());
        let reader = CachedBlobReader::new(
            store.clone(),
            Arc::new(MockCache::new()),
            existence_cache.clone(),
        );

        assert!(!reader.check_exists("a.jpg").await);
        assert_eq!(existence_cache.size().await.unwrap(), 0);

        assert!(!reader.check_exists("a.jpg").await);
        assert_eq!(store.exists_calls(), 2);
    }

    #[tokio::test]
    async fn test_container_exists() {
        let (reader, store) = reader_with(MockBlobStore::new());

        assert!(reader.container_exists().await);
        assert_eq!(store.container_calls(), 1);
    }

    #[tokio::test]
    async fn test_container_exists_failure_reports_false() {
        let (reader, _) = reader_with(MockBlobStore::new().with_error("connection refused"));

        assert!(!reader.container_exists().await);
    }
}
