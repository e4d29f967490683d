//! Cache trait definition

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::DomainError;

/// Generic cache trait for key-value operations
///
/// Entries have no expiry: a cached value stays until its region is
/// explicitly cleared. This trait uses JSON strings internally to be
/// dyn-compatible. Use the helper methods for typed get/set operations.
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Gets a raw JSON value from the cache
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Sets a raw JSON value in the cache
    async fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Deletes a value from the cache
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// Checks if a key exists in the cache
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get_raw(key).await?.is_some())
    }

    /// Clears all entries from the cache
    async fn clear(&self) -> Result<(), DomainError>;

    /// Returns approximate number of entries in the cache
    async fn size(&self) -> Result<usize, DomainError>;
}

/// Extension trait providing typed get/set operations
pub trait CacheExt: Cache {
    /// Gets a typed value from the cache
    fn get<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<V>, DomainError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            match self.get_raw(key).await? {
                Some(data) => {
                    let value: V = serde_json::from_str(&data).map_err(|e| {
                        DomainError::cache(format!("Failed to deserialize cache value: {}", e))
                    })?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        }
    }

    /// Sets a typed value in the cache
    fn set<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
    ) -> impl std::future::Future<Output = Result<(), DomainError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let data = serde_json::to_string(value).map_err(|e| {
                DomainError::cache(format!("Failed to serialize cache value: {}", e))
            })?;
            self.set_raw(key, &data).await
        }
    }
}

// Blanket implementation for all types implementing Cache
impl<T: Cache + ?Sized> CacheExt for T {}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock cache for testing
    #[derive(Debug)]
    pub struct MockCache {
        entries: Mutex<HashMap<String, String>>,
        error: Mutex<Option<String>>,
    }

    impl Default for MockCache {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockCache {
        pub fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                error: Mutex::new(None),
            }
        }

        pub fn with_entry<V: Serialize>(self, key: &str, value: &V) -> Self {
            let json = serde_json::to_string(value).unwrap();
            self.entries.lock().unwrap().insert(key.to_string(), json);
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::cache(error));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
            self.check_error()?;
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError> {
            self.check_error()?;
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<bool, DomainError> {
            self.check_error()?;
            Ok(self.entries.lock().unwrap().remove(key).is_some())
        }

        async fn clear(&self) -> Result<(), DomainError> {
            self.check_error()?;
            self.entries.lock().unwrap().clear();
            Ok(())
        }

        async fn size(&self) -> Result<usize, DomainError> {
            self.check_error()?;
            Ok(self.entries.lock().unwrap().len())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_cache_set_get() {
            let cache = MockCache::new();
            cache.set("key1", &"value1").await.unwrap();

            let result: Option<String> = cache.get("key1").await.unwrap();
            assert_eq!(result, Some("value1".to_string()));
        }

        #[tokio::test]
        async fn test_mock_cache_get_missing() {
            let cache = MockCache::new();

            let result: Option<String> = cache.get("missing").await.unwrap();
            assert!(result.is_none());
        }

        #[tokio::test]
        async fn test_mock_cache_delete() {
            let cache = MockCache::new();
            cache.set("key1", &"value1").await.unwrap();

            let deleted = cache.delete("key1").await.unwrap();
            assert!(deleted);

            let result: Option<String> = cache.get("key1").await.unwrap();
            assert!(result.is_none());
        }

        #[tokio::test]
        async fn test_mock_cache_with_error() {
            let cache = MockCache::new().with_error("Test error");

            let result: Result<Option<String>, _> = cache.get("key").await;
            assert!(result.is_err());
        }

        #[tokio::test]
        async fn test_mock_cache_clear() {
            let cache = MockCache::new();
            cache.set("key1", &"value1").await.unwrap();
            cache.set("key2", &"value2").await.unwrap();

            cache.clear().await.unwrap();

            let size = cache.size().await.unwrap();
            assert_eq!(size, 0);
        }
    }
}
