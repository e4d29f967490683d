//! Blob domain - Remote image content abstraction

mod store;

pub use store::BlobStore;

#[cfg(test)]
pub use store::mock::MockBlobStore;
