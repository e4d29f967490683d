//! Sentence endpoints

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{parse_id, ApiError, Json};
use crate::domain::Sentence;
use crate::infrastructure::services::CreateSentenceRequest;

/// Request to create a new sentence
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSentenceApiRequest {
    pub module_id: i64,
    pub position: i32,
    pub learning_text: String,
    pub translation_text: String,
    #[serde(default)]
    pub speaker: Option<i32>,
}

/// List sentences response
#[derive(Debug, Clone, Serialize)]
pub struct ListSentencesResponse {
    pub sentences: Vec<Sentence>,
    pub total: usize,
}

/// GET /modules/{id}/sentences
pub async fn list_sentences_for_module(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ListSentencesResponse>, ApiError> {
    let module_id = parse_id(&raw_id, "module")?;
    debug!(module_id, "Listing sentences for module");

    let sentences = state
        .sentence_service
        .list_by_module(module_id)
        .await
        .map_err(ApiError::from)?;
    let total = sentences.len();

    Ok(Json(ListSentencesResponse { sentences, total }))
}

/// POST /sentences
pub async fn create_sentence(
    State(state): State<AppState>,
    Json(request): Json<CreateSentenceApiRequest>,
) -> Result<Json<Sentence>, ApiError> {
    debug!(module_id = request.module_id, "Creating sentence");

    let create_request = CreateSentenceRequest {
        module_id: request.module_id,
        position: request.position,
        learning_text: request.learning_text,
        translation_text: request.translation_text,
        speaker: request.speaker,
    };

    let sentence = state
        .sentence_service
        .create(create_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(sentence))
}

/// DELETE /sentences/{id}
pub async fn delete_sentence(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&raw_id, "sentence")?;
    debug!(id, "Deleting sentence");

    let deleted = state
        .sentence_service
        .delete(id)
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(Json(serde_json::json!({
            "deleted": true,
            "id": id
        })))
    } else {
        Err(ApiError::not_found(format!("Sentence '{}' not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sentence_request_deserialization() {
        let json = r#"{
            "module_id": 3,
            "position": 1,
            "learning_text": "Kamusta ka?",
            "translation_text": "How are you?",
            "speaker": 1
        }"#;

        let request: CreateSentenceApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.module_id, 3);
        assert_eq!(request.position, 1);
        assert_eq!(request.learning_text, "Kamusta ka?");
        assert_eq!(request.translation_text, "How are you?");
        assert_eq!(request.speaker, Some(1));
    }

    #[test]
    fn test_create_sentence_request_speaker_optional() {
        let json = r#"{
            "module_id": 3,
            "position": 2,
            "learning_text": "Salamat",
            "translation_text": "Thank you"
        }"#;

        let request: CreateSentenceApiRequest = serde_json::from_str(json).unwrap();
        assert!(request.speaker.is_none());
    }

    #[test]
    fn test_create_sentence_request_requires_texts() {
        let json = r#"{"module_id": 3, "position": 1}"#;

        let result: Result<CreateSentenceApiRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_sentences_response_serialization() {
        let response = ListSentencesResponse {
            sentences: vec![
                Sentence::new(10, 3, 1, "Kamusta ka?", "How are you?").with_speaker(1)
            ],
            total: 1,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"total\":1"));
        assert!(json.contains("\"learning_text\":\"Kamusta ka?\""));
        assert!(json.contains("\"speaker\":1"));
    }
}
