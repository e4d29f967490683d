//! Blob storage admin endpoints

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Query parameters for the storage status check
#[derive(Debug, Clone, Deserialize)]
pub struct StorageStatusQuery {
    /// Optional blob key to probe for existence
    #[serde(default)]
    pub probe: Option<String>,
}

/// Result of probing a single blob
#[derive(Debug, Clone, Serialize)]
pub struct BlobProbeResult {
    pub key: String,
    pub exists: bool,
}

/// Storage status response
#[derive(Debug, Clone, Serialize)]
pub struct StorageStatusResponse {
    pub container_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe: Option<BlobProbeResult>,
}

/// GET /admin/storage/status
pub async fn storage_status(
    State(state): State<AppState>,
    Query(query): Query<StorageStatusQuery>,
) -> Result<Json<StorageStatusResponse>, ApiError> {
    debug!(probe = ?query.probe, "Checking blob storage status");

    let container_exists = state.image_reader.container_exists().await;

    let probe = match query.probe {
        Some(key) => {
            let exists = state.image_reader.check_exists(&key).await;
            Some(BlobProbeResult { key, exists })
        }
        None => None,
    };

    Ok(Json(StorageStatusResponse {
        container_exists,
        probe,
    }))
}
