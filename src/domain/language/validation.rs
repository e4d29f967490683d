//! Language validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during language validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LanguageValidationError {
    #[error("Language name cannot be empty")]
    EmptyName,

    #[error("Language name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Invalid country code '{0}': must be two letters")]
    InvalidCountryCode(String),
}

const MAX_LANGUAGE_NAME_LENGTH: usize = 100;

static COUNTRY_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{2}$").unwrap());

/// Validate a language name
pub fn validate_language_name(name: &str) -> Result<(), LanguageValidationError> {
    if name.trim().is_empty() {
        return Err(LanguageValidationError::EmptyName);
    }

    if name.len() > MAX_LANGUAGE_NAME_LENGTH {
        return Err(LanguageValidationError::NameTooLong(
            MAX_LANGUAGE_NAME_LENGTH,
        ));
    }

    Ok(())
}

/// Validate an ISO 3166-1 alpha-2 country code
pub fn validate_country_code(code: &str) -> Result<(), LanguageValidationError> {
    if !COUNTRY_CODE_PATTERN.is_match(code) {
        return Err(LanguageValidationError::InvalidCountryCode(
            code.to_string(),
        ));
    }

    Ok(())
}
