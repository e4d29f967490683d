//! In-memory cache implementation using moka

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::cache::Cache;
use crate::domain::DomainError;

/// Configuration for in-memory cache
#[derive(Debug, Clone, Default)]
pub struct InMemoryCacheConfig {
    /// Maximum number of entries, unbounded when unset
    pub max_capacity: Option<u64>,
}

impl InMemoryCacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of entries the cache will hold
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = Some(capacity);
        self
    }
}

/// Thread-safe in-memory cache implementation using moka
///
/// Entries never expire on their own: a value stays until it is deleted
/// or the whole cache is cleared.
#[derive(Debug)]
pub struct InMemoryCache {
    cache: MokaCache<String, String>,
}

impl InMemoryCache {
    /// Creates a new in-memory cache with default configuration
    pub fn new() -> Self {
        Self::with_config(InMemoryCacheConfig::default())
    }

    /// Creates a new in-memory cache with the given configuration
    pub fn with_config(config: InMemoryCacheConfig) -> Self {
        let mut builder = MokaCache::builder();

        if let Some(capacity) = config.max_capacity {
            builder = builder.max_capacity(capacity);
        }

        Self {
            cache: builder.build(),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.cache.get(key).await)
    }

    async fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.cache.insert(key.to_string(), value.to_string()).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    async fn size(&self) -> Result<usize, DomainError> {
        self.cache.run_pending_tasks().await;
        Ok(self.cache.entry_count() as usize)
    }
}
