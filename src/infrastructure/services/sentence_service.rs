//! Sentence service - cached operations for practice sentences

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};

use crate::domain::cache::{Cache, CacheExt};
use crate::domain::module::ModuleRepository;
use crate::domain::sentence::{NewSentence, Sentence, SentenceRepository};
use crate::domain::DomainError;

/// Request to create a new sentence
#[derive(Debug, Clone)]
pub struct CreateSentenceRequest {
    pub module_id: i64,
    pub position: i32,
    pub learning_text: String,
    pub translation_text: String,
    pub speaker: Option<i32>,
}

/// Sentence service with read-through caching
///
/// Lookups by module and by language are cached under distinct key
/// prefixes in the sentences region. Every successful write clears the
/// whole region.
#[derive(Debug)]
pub struct SentenceService<R: SentenceRepository, M: ModuleRepository> {
    repository: Arc<R>,
    module_repository: Arc<M>,
    cache: Arc<dyn Cache>,
}

impl<R: SentenceRepository, M: ModuleRepository> SentenceService<R, M> {
    /// Create a new SentenceService backed by the given repositories and
    /// the sentences cache region
    pub fn new(repository: Arc<R>, module_repository: Arc<M>, cache: Arc<dyn Cache>) -> Self {
        Self {
            repository,
            module_repository,
            cache,
        }
    }

    /// List all sentences of a module, ordered by position
    pub async fn list_by_module(&self, module_id: i64) -> Result<Vec<Sentence>, DomainError> {
        let key = format!("module:{}", module_id);

        if let Some(sentences) = self.cache_get::<Vec<Sentence>>(&key).await {
            return Ok(sentences);
        }

        let sentences = self.repository.list_by_module(module_id).await?;
        self.cache_put(&key, &sentences).await;
        Ok(sentences)
    }

    /// List all sentences of a language across its modules
    pub async fn list_by_language(&self, language_id: i64) -> Result<Vec<Sentence>, DomainError> {
        let key = format!("language:{}", language_id);

        if let Some(sentences) = self.cache_get::<Vec<Sentence>>(&key).await {
            return Ok(sentences);
        }

        let modules = self.module_repository.list_by_language(language_id).await?;
        let module_ids: Vec<i64> = modules.iter().map(|m| m.id).collect();
        let sentences = self.repository.list_by_modules(&module_ids).await?;

        self.cache_put(&key, &sentences).await;
        Ok(sentences)
    }

    /// Create a new sentence under an existing module
    pub async fn create(&self, request: CreateSentenceRequest) -> Result<Sentence, DomainError> {
        if request.learning_text.trim().is_empty() {
            return Err(DomainError::validation("Sentence learning text is required"));
        }

        if request.translation_text.trim().is_empty() {
            return Err(DomainError::validation(
                "Sentence translation text is required",
            ));
        }

        if self
            .module_repository
            .get(request.module_id)
            .await?
            .is_none()
        {
            return Err(DomainError::validation(format!(
                "Module '{}' does not exist",
                request.module_id
            )));
        }

        let sentence = NewSentence {
            module_id: request.module_id,
            position: request.position,
            learning_text: request.learning_text,
            translation_text: request.translation_text,
            speaker: request.speaker.unwrap_or(0),
        };

        let created = self.repository.create(sentence).await?;
        self.clear_cache().await;

        info!(
            id = created.id,
            module_id = created.module_id,
            "Created sentence"
        );
        Ok(created)
    }

    /// Delete a sentence by ID
    pub async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;

        if deleted {
            self.clear_cache().await;
            info!(id = id, "Deleted sentence");
        }

        Ok(deleted)
    }

    async fn cache_get<V: DeserializeOwned + Send>(&self, key: &str) -> Option<V> {
        match self.cache.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key = key, error = %e, "Sentence cache read failed");
                None
            }
        }
    }

    async fn cache_put<V: Serialize + Send + Sync>(&self, key: &str, value: &V) {
        if let Err(e) = self.cache.set(key, value).await {
            warn!(key = key, error = %e, "Sentence cache write failed");
        }
    }

    async fn clear_cache(&self) {
        if let Err(e) = self.cache.clear().await {
            warn!(error = %e, "Sentence cache clear failed");
        }
    }
}
