//! Named cache regions and the registry that owns them

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use super::repository::Cache;
use crate::domain::DomainError;

/// Region holding downloaded blob content (base64-encoded)
pub const BLOBS: &str = "blobs";
/// Region holding blob existence flags
pub const BLOB_EXISTENCE: &str = "blob-existence";
/// Region holding language query results
pub const LANGUAGES: &str = "languages";
/// Region holding module query results
pub const MODULES: &str = "modules";
/// Region holding sentence query results
pub const SENTENCES: &str = "sentences";

/// All region names, in the order they are created
pub const ALL_REGIONS: &[&str] = &[BLOBS, BLOB_EXISTENCE, LANGUAGES, MODULES, SENTENCES];

/// Registry of named cache regions
///
/// Each region is an independent cache instance. Invalidation is
/// region-wide: writers clear a whole region rather than tracking
/// individual keys.
#[derive(Debug, Clone)]
pub struct CacheRegistry {
    regions: Arc<HashMap<String, Arc<dyn Cache>>>,
}

impl CacheRegistry {
    /// Creates a registry from named regions
    pub fn new(regions: HashMap<String, Arc<dyn Cache>>) -> Self {
        Self {
            regions: Arc::new(regions),
        }
    }

    /// Looks up a region by name
    pub fn region(&self, name: &str) -> Option<Arc<dyn Cache>> {
        self.regions.get(name).cloned()
    }

    /// Region names, sorted for stable output
    pub fn region_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.regions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Clears every entry in one region
    ///
    /// Returns `false` if no region with that name exists.
    pub async fn clear_region(&self, name: &str) -> Result<bool, DomainError> {
        match self.regions.get(name) {
            Some(cache) => {
                cache.clear().await?;
                info!(region = name, "Cleared cache region");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clears every region
    pub async fn clear_all(&self) -> Result<(), DomainError> {
        for (name, cache) in self.regions.iter() {
            cache.clear().await?;
            info!(region = name.as_str(), "Cleared cache region");
        }
        Ok(())
    }

    /// Entry counts per region, sorted by region name
    pub async fn sizes(&self) -> Result<Vec<(String, usize)>, DomainError> {
        let mut sizes = Vec::with_capacity(self.regions.len());

        for name in self.region_names() {
            if let Some(cache) = self.regions.get(&name) {
                sizes.push((name, cache.size().await?));
            }
        }

        Ok(sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::repository::mock::MockCache;
    use crate::domain::cache::CacheExt;

    fn registry_with(names: &[&str]) -> CacheRegistry {
        let mut regions: HashMap<String, Arc<dyn Cache>> = HashMap::new();

        for name in names {
            regions.insert(name.to_string(), Arc::new(MockCache::new()));
        }

        CacheRegistry::new(regions)
    }

    #[tokio::test]
    async fn test_region_lookup() {
        let registry = registry_with(&[LANGUAGES, MODULES]);

        assert!(registry.region(LANGUAGES).is_some());
        assert!(registry.region("unknown").is_none());
    }

    #[tokio::test]
    async fn test_region_names_sorted() {
        let registry = registry_with(&[SENTENCES, BLOBS, LANGUAGES]);

        assert_eq!(
            registry.region_names(),
            vec![
                BLOBS.to_string(),
                LANGUAGES.to_string(),
                SENTENCES.to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_clear_region() {
        let registry = registry_with(&[LANGUAGES, MODULES]);

        let languages = registry.region(LANGUAGES).unwrap();
        let modules = registry.region(MODULES).unwrap();
        languages.set("all", &"cached").await.unwrap();
        modules.set("language:1", &"cached").await.unwrap();

        let cleared = registry.clear_region(LANGUAGES).await.unwrap();
        assert!(cleared);

        assert_eq!(languages.size().await.unwrap(), 0);
        // Other regions are untouched
        assert_eq!(modules.size().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clear_unknown_region() {
        let registry = registry_with(&[LANGUAGES]);

        let cleared = registry.clear_region("unknown").await.unwrap();
        assert!(!cleared);
    }

    #[tokio::test]
    async fn test_clear_all() {
        let registry = registry_with(ALL_REGIONS);

        for name in ALL_REGIONS {
            registry
                .region(name)
                .unwrap()
                .set("key", &"value")
                .await
                .unwrap();
        }

        registry.clear_all().await.unwrap();

        for name in ALL_REGIONS {
            assert_eq!(registry.region(name).unwrap().size().await.unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn test_sizes() {
        let registry = registry_with(&[LANGUAGES, MODULES]);

        let languages = registry.region(LANGUAGES).unwrap();
        languages.set("all", &"cached").await.unwrap();
        languages.set("name:Tagalog", &"cached").await.unwrap();

        let sizes = registry.sizes().await.unwrap();
        assert_eq!(
            sizes,
            vec![(LANGUAGES.to_string(), 2), (MODULES.to_string(), 0)]
        );
    }
}
