//! Vocabulary item endpoints

use axum::extract::State;
use serde::Serialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::Item;

/// List items response
#[derive(Debug, Clone, Serialize)]
pub struct ListItemsResponse {
    pub items: Vec<Item>,
    pub total: usize,
}

/// GET /items
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<ListItemsResponse>, ApiError> {
    debug!("Listing items");

    let items = state.item_service.list().await.map_err(ApiError::from)?;
    let total = items.len();

    Ok(Json(ListItemsResponse { items, total }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_items_response_serialization() {
        let response = ListItemsResponse {
            items: vec![Item::new(1, "kamusta", "hello")],
            total: 1,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"tagalog\":\"kamusta\""));
        assert!(json.contains("\"english\":\"hello\""));
        assert!(json.contains("\"total\":1"));
    }
}
