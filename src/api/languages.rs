//! Language endpoints

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{parse_id, ApiError, Json};
use crate::domain::Language;
use crate::infrastructure::services::{CreateLanguageRequest, UpdateLanguageRequest};

/// Request to create a new language
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLanguageApiRequest {
    pub name: String,
    #[serde(default)]
    pub background_image_url: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub language_presentation: Option<String>,
}

/// Request to update a language
///
/// The body replaces every stored field, so optional fields omitted
/// here come back as null.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLanguageApiRequest {
    pub name: String,
    #[serde(default)]
    pub background_image_url: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub language_presentation: Option<String>,
}

/// List languages response
#[derive(Debug, Clone, Serialize)]
pub struct ListLanguagesResponse {
    pub languages: Vec<Language>,
    pub total: usize,
}

/// GET /languages
pub async fn list_languages(
    State(state): State<AppState>,
) -> Result<Json<ListLanguagesResponse>, ApiError> {
    debug!("Listing languages");

    let languages = state.language_service.list().await.map_err(ApiError::from)?;
    let total = languages.len();

    Ok(Json(ListLanguagesResponse { languages, total }))
}

/// POST /languages
pub async fn create_language(
    State(state): State<AppState>,
    Json(request): Json<CreateLanguageApiRequest>,
) -> Result<Json<Language>, ApiError> {
    debug!(name = %request.name, "Creating language");

    let create_request = CreateLanguageRequest {
        name: request.name,
        background_image_url: request.background_image_url,
        country_code: request.country_code,
        language_presentation: request.language_presentation,
    };

    let language = state
        .language_service
        .create(create_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(language))
}

/// GET /languages/{name}
pub async fn get_language(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Language>, ApiError> {
    debug!(name = %name, "Getting language by name");

    let language = state
        .language_service
        .get_by_name(&name)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Language '{}' not found", name)))?;

    Ok(Json(language))
}

/// PUT /languages/{id}
pub async fn update_language(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(request): Json<UpdateLanguageApiRequest>,
) -> Result<Json<Language>, ApiError> {
    let id = parse_id(&raw_id, "language")?;
    debug!(id, "Updating language");

    let update_request = UpdateLanguageRequest {
        name: request.name,
        background_image_url: request.background_image_url,
        country_code: request.country_code,
        language_presentation: request.language_presentation,
    };

    let language = state
        .language_service
        .update(id, update_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(language))
}

/// DELETE /languages/{id}
pub async fn delete_language(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&raw_id, "language")?;
    debug!(id, "Deleting language");

    let deleted = state
        .language_service
        .delete(id)
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(Json(serde_json::json!({
            "deleted": true,
            "id": id
        })))
    } else {
        Err(ApiError::not_found(format!("Language '{}' not found", id)))
    }
}
