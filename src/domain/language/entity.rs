//! Language entity and related types

use serde::{Deserialize, Serialize};

/// A language available for study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    /// Database-assigned identifier
    pub id: i64,
    /// Display name, unique across languages
    pub name: String,
    /// Blob path of the background image shown for this language
    pub background_image_url: Option<String>,
    /// ISO 3166-1 alpha-2 code used to pick the flag icon
    pub country_code: Option<String>,
    /// Introductory text shown on the language page
    pub language_presentation: Option<String>,
}

impl Language {
    /// Creates a language with the required fields
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            background_image_url: None,
            country_code: None,
            language_presentation: None,
        }
    }

    /// Sets the background image path
    pub fn with_background_image_url(mut self, url: impl Into<String>) -> Self {
        self.background_image_url = Some(url.into());
        self
    }

    /// Sets the country code
    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    /// Sets the presentation text
    pub fn with_language_presentation(mut self, text: impl Into<String>) -> Self {
        self.language_presentation = Some(text.into());
        self
    }
}

/// A language that has not been persisted yet
///
/// The repository assigns the identifier on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLanguage {
    pub name: String,
    pub background_image_url: Option<String>,
    pub country_code: Option<String>,
    pub language_presentation: Option<String>,
}

impl NewLanguage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background_image_url: None,
            country_code: None,
            language_presentation: None,
        }
    }

    /// Builds the persisted entity once an ID has been assigned
    pub fn into_language(self, id: i64) -> Language {
        Language {
            id,
            name: self.name,
            background_image_url: self.background_image_url,
            country_code: self.country_code,
            language_presentation: self.language_presentation,
        }
    }
}
