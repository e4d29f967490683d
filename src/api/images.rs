//! Image content endpoint backed by the cached blob reader

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// GET /images/{*key}
///
/// Serves blob content through the cache-aside reader. Every retrieval
/// failure surfaces as a 404.
pub async fn get_image(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, ApiError> {
    debug!(key = %key, "Serving image");

    let bytes = match state.image_reader.fetch_content(&key).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(key = %key, error = %e, "Image fetch failed");
            return Err(ApiError::not_found(format!("Image '{}' not found", key)));
        }
    };

    let content_type = content_type_for(&key);

    Ok(([(header::CONTENT_TYPE, content_type)], Bytes::from(bytes)).into_response())
}

/// Content type guessed from the key's file extension
fn content_type_for(key: &str) -> String {
    mime_guess::from_path(key)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
