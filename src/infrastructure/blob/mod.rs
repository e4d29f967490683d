//! Blob storage infrastructure - Azure client and cache-aside reader

mod azure;
mod cached;

pub use azure::{AzureBlobConfig, AzureBlobStore};
pub use cached::CachedBlobReader;
