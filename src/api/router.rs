use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::admin;
use super::health;
use super::images;
use super::items;
use super::languages;
use super::modules;
use super::sentences;
use super::state::AppState;

/// Create a minimal router without state (for testing/backward compatibility)
/// Note: /ready endpoint is not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Greeting used by clients as a cheap reachability probe
        .route("/", get(greeting))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Languages
        .route("/languages", get(languages::list_languages))
        .route("/languages", post(languages::create_language))
        .route("/languages/{language}", get(languages::get_language))
        .route("/languages/{language}", put(languages::update_language))
        .route("/languages/{language}", delete(languages::delete_language))
        .route(
            "/languages/{language}/modules",
            get(modules::list_modules_for_language),
        )
        // Modules
        .route("/modules", post(modules::create_module))
        .route("/modules/{module_id}", delete(modules::delete_module))
        .route(
            "/modules/{module_id}/sentences",
            get(sentences::list_sentences_for_module),
        )
        // Sentences
        .route("/sentences", post(sentences::create_sentence))
        .route("/sentences/{sentence_id}", delete(sentences::delete_sentence))
        // Vocabulary items
        .route("/items", get(items::list_items))
        // Image content
        .route("/images/{*key}", get(images::get_image))
        // Admin API
        .nest("/admin", admin::create_admin_router())
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// GET /
async fn greeting() -> &'static str {
    "Hello, World!"
}
