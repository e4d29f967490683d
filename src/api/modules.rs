//! Module endpoints

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{parse_id, ApiError, Json};
use crate::domain::Module;
use crate::infrastructure::services::CreateModuleRequest;

/// Request to create a new module
#[derive(Debug, Clone, Deserialize)]
pub struct CreateModuleApiRequest {
    pub language_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub module_presentation: Option<String>,
    #[serde(default)]
    pub material_icon_name: Option<String>,
}

/// List modules response
#[derive(Debug, Clone, Serialize)]
pub struct ListModulesResponse {
    pub modules: Vec<Module>,
    pub total: usize,
}

/// GET /languages/{name}/modules
///
/// An unknown language name yields an empty list rather than a 404.
pub async fn list_modules_for_language(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ListModulesResponse>, ApiError> {
    debug!(language = %name, "Listing modules for language");

    let modules = state
        .module_service
        .list_by_language_name(&name)
        .await
        .map_err(ApiError::from)?;
    let total = modules.len();

    Ok(Json(ListModulesResponse { modules, total }))
}

/// POST /modules
pub async fn create_module(
    State(state): State<AppState>,
    Json(request): Json<CreateModuleApiRequest>,
) -> Result<Json<Module>, ApiError> {
    debug!(language_id = request.language_id, name = %request.name, "Creating module");

    let create_request = CreateModuleRequest {
        language_id: request.language_id,
        name: request.name,
        description: request.description,
        module_presentation: request.module_presentation,
        material_icon_name: request.material_icon_name,
    };

    let module = state
        .module_service
        .create(create_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(module))
}

/// DELETE /modules/{id}
pub async fn delete_module(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&raw_id, "module")?;
    debug!(id, "Deleting module");

    let deleted = state
        .module_service
        .delete(id)
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(Json(serde_json::json!({
            "deleted": true,
            "id": id
        })))
    } else {
        Err(ApiError::not_found(format!("Module '{}' not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_module_request_deserialization() {
        let json = r#"{
            "language_id": 1,
            "name": "Greetings",
            "description": "Basic greetings",
            "module_presentation": "Start here",
            "material_icon_name": "waving_hand"
        }"#;

        let request: CreateModuleApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.language_id, 1);
        assert_eq!(request.name, "Greetings");
        assert_eq!(request.description.as_deref(), Some("Basic greetings"));
        assert_eq!(request.material_icon_name.as_deref(), Some("waving_hand"));
    }

    #[test]
    fn test_create_module_request_minimal() {
        let json = r#"{"language_id": 2, "name": "Numbers"}"#;

        let request: CreateModuleApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.language_id, 2);
        assert_eq!(request.name, "Numbers");
        assert!(request.description.is_none());
        assert!(request.module_presentation.is_none());
        assert!(request.material_icon_name.is_none());
    }

    #[test]
    fn test_create_module_request_requires_language_id() {
        let json = r#"{"name": "Orphan"}"#;

        let result: Result<CreateModuleApiRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_modules_response_serialization() {
        let response = ListModulesResponse {
            modules: vec![Module::new(3, 1, "Greetings").with_description("Basic greetings")],
            total: 1,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"total\":1"));
        assert!(json.contains("\"name\":\"Greetings\""));
        assert!(json.contains("\"language_id\":1"));
    }
}
