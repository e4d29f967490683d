//! Structured JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error categories reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    NotFoundError,
    ConflictError,
    ServerError,
    ServiceUnavailableError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ConflictError => write!(f, "conflict_error"),
            Self::ServerError => write!(f, "server_error"),
            Self::ServiceUnavailableError => write!(f, "service_unavailable_error"),
        }
    }
}

/// Error response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(
        status: StatusCode,
        error_type: ApiErrorType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            },
        }
    }

    /// Add parameter info
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    /// Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ApiErrorType::ConflictError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    /// Service unavailable
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorType::ServiceUnavailableError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::InvalidId { message } => {
                Self::bad_request(message).with_param("id")
            }
            DomainError::Retrieval { message } => Self::unavailable(message),
            DomainError::Configuration { message } => Self::internal(message),
            DomainError::Conflict { message } => Self::conflict(message),
            DomainError::Internal { message } => Self::internal(message),
            DomainError::Storage { message } => Self::internal(message),
            DomainError::Cache { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

/// Parse a numeric path segment into an entity ID
pub fn parse_id(raw: &str, resource: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::bad_request(format!("Invalid {} id '{}'", resource, raw)).with_param("id")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid language");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.error_type, ApiErrorType::InvalidRequestError);
        assert_eq!(err.response.error.message, "Invalid language");
    }

    #[test]
    fn test_api_error_with_param() {
        let err = ApiError::bad_request("Invalid value")
            .with_param("country_code")
            .with_code("invalid_format");

        assert_eq!(err.response.error.param, Some("country_code".to_string()));
        assert_eq!(err.response.error.code, Some("invalid_format".to_string()));
    }

    #[test]
    fn test_domain_error_conversion() {
        let domain_err = DomainError::not_found("Language 'Klingon' not found");
        let api_err: ApiError = domain_err.into();

        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.response.error.error_type, ApiErrorType::NotFoundError);
    }

    #[test]
    fn test_conflict_conversion() {
        let domain_err = DomainError::conflict("Language 'Tagalog' already exists");
        let api_err: ApiError = domain_err.into();

        assert_eq!(api_err.status, StatusCode::CONFLICT);
        assert_eq!(api_err.response.error.error_type, ApiErrorType::ConflictError);
    }

    #[test]
    fn test_retrieval_conversion() {
        let domain_err = DomainError::retrieval("Blob store timed out");
        let api_err: ApiError = domain_err.into();

        assert_eq!(api_err.status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_id_conversion_sets_param() {
        let domain_err = DomainError::invalid_id("Invalid id 'abc'");
        let api_err: ApiError = domain_err.into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.response.error.param, Some("id".to_string()));
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::not_found("Language 'Klingon' not found");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("not_found_error"));
        assert!(json.contains("Language 'Klingon' not found"));
    }

    #[test]
    fn test_all_error_types() {
        assert_eq!(ApiError::bad_request("").status, StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("").status, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("").status, StatusCode::CONFLICT);
        assert_eq!(ApiError::internal("").status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::unavailable("").status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "language").unwrap(), 42);

        let err = parse_id("forty-two", "language").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.param, Some("id".to_string()));
        assert!(err.response.error.message.contains("forty-two"));
    }
}
