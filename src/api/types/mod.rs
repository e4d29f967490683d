//! Shared API types

pub mod error;
pub mod json;

pub use error::{parse_id, ApiError, ApiErrorResponse};
pub use json::Json;
