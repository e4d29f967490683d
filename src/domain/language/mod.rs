//! Language domain - Languages offered for study

mod entity;
mod repository;
mod validation;

pub use entity::{Language, NewLanguage};
pub use repository::{in_memory::InMemoryLanguageRepository, LanguageRepository};
pub use validation::{validate_country_code, validate_language_name, LanguageValidationError};

#[cfg(test)]
pub use repository::mock::MockLanguageRepository;
