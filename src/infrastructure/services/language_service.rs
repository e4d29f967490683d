//! Language service - cached CRUD operations for languages

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};

use crate::domain::cache::{Cache, CacheExt};
use crate::domain::language::{
    validate_country_code, validate_language_name, Language, LanguageRepository, NewLanguage,
};
use crate::domain::DomainError;

const ALL_KEY: &str = "all";

/// Request to create a new language
#[derive(Debug, Clone)]
pub struct CreateLanguageRequest {
    pub name: String,
    pub background_image_url: Option<String>,
    pub country_code: Option<String>,
    pub language_presentation: Option<String>,
}

/// Request to update an existing language
///
/// Updates replace every field of the stored language.
#[derive(Debug, Clone)]
pub struct UpdateLanguageRequest {
    pub name: String,
    pub background_image_url: Option<String>,
    pub country_code: Option<String>,
    pub language_presentation: Option<String>,
}

/// Language service with read-through caching
///
/// Query results live in the languages cache region. Every successful
/// write clears the whole region rather than evicting individual keys.
#[derive(Debug)]
pub struct LanguageService<R: LanguageRepository> {
    repository: Arc<R>,
    cache: Arc<dyn Cache>,
}

impl<R: LanguageRepository> LanguageService<R> {
    /// Create a new LanguageService backed by the given repository and
    /// the languages cache region
    pub fn new(repository: Arc<R>, cache: Arc<dyn Cache>) -> Self {
        Self { repository, cache }
    }

    /// List all languages
    pub async fn list(&self) -> Result<Vec<Language>, DomainError> {
        if let Some(languages) = self.cache_get::<Vec<Language>>(ALL_KEY).await {
            return Ok(languages);
        }

        let languages = self.repository.list().await?;
        self.cache_put(ALL_KEY, &languages).await;
        Ok(languages)
    }

    /// Get a language by its unique name
    ///
    /// Only found languages are cached, so a miss keeps hitting the
    /// repository until the language shows up.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Language>, DomainError> {
        let key = format!("name:{}", name);

        if let Some(language) = self.cache_get::<Language>(&key).await {
            return Ok(Some(language));
        }

        match self.repository.get_by_name(name).await? {
            Some(language) => {
                self.cache_put(&key, &language).await;
                Ok(Some(language))
            }
            None => Ok(None),
        }
    }

    /// Create a new language
    pub async fn create(&self, request: CreateLanguageRequest) -> Result<Language, DomainError> {
        self.validate(&request.name, request.country_code.as_deref())?;

        let language = NewLanguage {
            name: request.name,
            background_image_url: request.background_image_url,
            country_code: request.country_code,
            language_presentation: request.language_presentation,
        };

        let created = self.repository.create(language).await?;
        self.clear_cache().await;

        info!(id = created.id, name = %created.name, "Created language");
        Ok(created)
    }

    /// Update an existing language, replacing all of its fields
    pub async fn update(
        &self,
        id: i64,
        request: UpdateLanguageRequest,
    ) -> Result<Language, DomainError> {
        self.validate(&request.name, request.country_code.as_deref())?;

        let mut language = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Language '{}' not found", id)))?;

        language.name = request.name;
        language.background_image_url = request.background_image_url;
        language.country_code = request.country_code;
        language.language_presentation = request.language_presentation;

        let updated = self.repository.update(language).await?;
        self.clear_cache().await;

        info!(id = updated.id, "Updated language");
        Ok(updated)
    }

    /// Delete a language by ID
    pub async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;

        if deleted {
            self.clear_cache().await;
            info!(id = id, "Deleted language");
        }

        Ok(deleted)
    }

    fn validate(&self, name: &str, country_code: Option<&str>) -> Result<(), DomainError> {
        validate_language_name(name).map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(code) = country_code {
            validate_country_code(code).map_err(|e| DomainError::validation(e.to_string()))?;
        }

        Ok(())
    }

    async fn cache_get<V: DeserializeOwned + Send>(&self, key: &str) -> Option<V> {
        match self.cache.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key = key, error = %e, "Language cache read failed");
                None
            }
        }
    }

    async fn cache_put<V: Serialize + Send + Sync>(&self, key: &str, value: &V) {
        if let Err(e) = self.cache.set(key, value).await {
            warn!(key = key, error = %e, "Language cache write failed");
        }
    }

    async fn clear_cache(&self) {
        if let Err(e) = self.cache.clear().await {
            warn!(error = %e, "Language cache clear failed");
        }
    }
}
