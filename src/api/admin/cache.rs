//! Cache region admin endpoints

use axum::extract::{Path, State};
use serde::Serialize;
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Entry count for one cache region
#[derive(Debug, Clone, Serialize)]
pub struct CacheRegionStatus {
    pub name: String,
    pub entries: usize,
}

/// Cache status response
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatusResponse {
    pub regions: Vec<CacheRegionStatus>,
}

/// GET /admin/cache
pub async fn cache_status(
    State(state): State<AppState>,
) -> Result<Json<CacheStatusResponse>, ApiError> {
    debug!("Reporting cache region sizes");

    let sizes = state
        .cache_registry
        .sizes()
        .await
        .map_err(ApiError::from)?;

    let regions = sizes
        .into_iter()
        .map(|(name, entries)| CacheRegionStatus { name, entries })
        .collect();

    Ok(Json(CacheStatusResponse { regions }))
}

/// POST /admin/cache/{region}/clear
pub async fn clear_cache_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    info!(region = %region, "Clearing cache region on request");

    let cleared = state
        .cache_registry
        .clear_region(&region)
        .await
        .map_err(ApiError::from)?;

    if !cleared {
        return Err(ApiError::not_found(format!(
            "Cache region '{}' not found",
            region
        )));
    }

    Ok(Json(serde_json::json!({
        "cleared": true,
        "region": region
    })))
}
