//! Cache factory assembling the region registry

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::cache::{Cache, CacheRegistry, ALL_REGIONS};

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};

/// Factory for creating cache instances
#[derive(Debug, Default)]
pub struct CacheFactory;

impl CacheFactory {
    /// Creates a new cache factory
    pub fn new() -> Self {
        Self
    }

    /// Creates the full region registry
    ///
    /// Every known region gets its own independent in-memory cache so
    /// that clearing one region never touches another.
    pub fn create_registry(&self, config: &InMemoryCacheConfig) -> CacheRegistry {
        let mut regions: HashMap<String, Arc<dyn Cache>> = HashMap::new();

        for name in ALL_REGIONS {
            let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::with_config(config.clone()));
            regions.insert((*name).to_string(), cache);
        }

        CacheRegistry::new(regions)
    }

    /// Creates a single in-memory cache with default settings
    pub fn create_in_memory(&self) -> Arc<dyn Cache> {
        Arc::new(InMemoryCache::new())
    }

    /// Creates a single in-memory cache with custom configuration
    pub fn create_in_memory_with_config(&self, config: InMemoryCacheConfig) -> Arc<dyn Cache> {
        Arc::new(InMemoryCache::with_config(config))
    }
}
