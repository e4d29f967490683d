//! Admin API endpoints for cache and storage introspection

pub mod cache;
pub mod storage;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create admin API router
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        // Cache regions
        .route("/cache", get(cache::cache_status))
        .route("/cache/{region}/clear", post(cache::clear_cache_region))
        // Blob storage
        .route("/storage/status", get(storage::storage_status))
}
