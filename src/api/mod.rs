//! API layer - HTTP endpoints and shared state

pub mod admin;
pub mod health;
pub mod images;
pub mod items;
pub mod languages;
pub mod modules;
pub mod router;
pub mod sentences;
pub mod state;
pub mod types;

pub use router::{create_router, create_router_with_state};
pub use state::AppState;
