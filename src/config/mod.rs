//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, BlobStoreConfig, CacheConfig, DatabaseBackend, DatabaseConfig, LogFormat,
    LoggingConfig, ServerConfig,
};
