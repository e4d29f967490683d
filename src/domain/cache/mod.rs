//! Cache domain - Named regions with explicit, region-wide invalidation

mod regions;
mod repository;

pub use regions::{
    CacheRegistry, ALL_REGIONS, BLOBS, BLOB_EXISTENCE, LANGUAGES, MODULES, SENTENCES,
};
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
