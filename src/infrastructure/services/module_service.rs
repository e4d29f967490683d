//! Module service - cached operations for course modules

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};

use crate::domain::cache::{Cache, CacheExt};
use crate::domain::language::LanguageRepository;
use crate::domain::module::{Module, ModuleRepository, NewModule};
use crate::domain::DomainError;

/// Request to create a new module
#[derive(Debug, Clone)]
pub struct CreateModuleRequest {
    pub language_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub module_presentation: Option<String>,
    pub material_icon_name: Option<String>,
}

/// Module service with read-through caching
///
/// Lookups by language ID and by language name are cached under
/// distinct key prefixes in the modules region. Every successful write
/// clears the whole region.
#[derive(Debug)]
pub struct ModuleService<R: ModuleRepository, L: LanguageRepository> {
    repository: Arc<R>,
    language_repository: Arc<L>,
    cache: Arc<dyn Cache>,
}

impl<R: ModuleRepository, L: LanguageRepository> ModuleService<R, L> {
    /// Create a new ModuleService backed by the given repositories and
    /// the modules cache region
    pub fn new(repository: Arc<R>, language_repository: Arc<L>, cache: Arc<dyn Cache>) -> Self {
        Self {
            repository,
            language_repository,
            cache,
        }
    }

    /// List all modules belonging to a language
    pub async fn list_by_language(&self, language_id: i64) -> Result<Vec<Module>, DomainError> {
        let key = format!("language:{}", language_id);

        if let Some(modules) = self.cache_get::<Vec<Module>>(&key).await {
            return Ok(modules);
        }

        let modules = self.repository.list_by_language(language_id).await?;
        self.cache_put(&key, &modules).await;
        Ok(modules)
    }

    /// List all modules belonging to the language with the given name
    ///
    /// An unknown language name yields an empty list, and that result is
    /// cached like any other.
    pub async fn list_by_language_name(&self, name: &str) -> Result<Vec<Module>, DomainError> {
        let key = format!("language-name:{}", name);

        if let Some(modules) = self.cache_get::<Vec<Module>>(&key).await {
            return Ok(modules);
        }

        let modules = match self.language_repository.get_by_name(name).await? {
            Some(language) => self.repository.list_by_language(language.id).await?,
            None => Vec::new(),
        };

        self.cache_put(&key, &modules).await;
        Ok(modules)
    }

    /// Create a new module under an existing language
    pub async fn create(&self, request: CreateModuleRequest) -> Result<Module, DomainError> {
        if request.name.trim().is_empty() {
            return Err(DomainError::validation("Module name is required"));
        }

        if self
            .language_repository
            .get(request.language_id)
            .await?
            .is_none()
        {
            return Err(DomainError::validation(format!(
                "Language '{}' does not exist",
                request.language_id
            )));
        }

        let module = NewModule {
            language_id: request.language_id,
            name: request.name,
            description: request.description,
            module_presentation: request.module_presentation,
            material_icon_name: request.material_icon_name,
        };

        let created = self.repository.create(module).await?;
        self.clear_cache().await;

        info!(
            id = created.id,
            language_id = created.language_id,
            "Created module"
        );
        Ok(created)
    }

    /// Delete a module by ID
    pub async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;

        if deleted {
            self.clear_cache().await;
            info!(id = id, "Deleted module");
        }

        Ok(deleted)
    }

    async fn cache_get<V: DeserializeOwned + Send>(&self, key: &str) -> Option<V> {
        match self.cache.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key = key, error = %e, "Module cache read failed");
                None
            }
        }
    }

    async fn cache_put<V: Serialize + Send + Sync>(&self, key: &str, value: &V) {
        if let Err(e) = self.cache.set(key, value).await {
            warn!(key = key, error = %e, "Module cache write failed");
        }
    }

    async fn clear_cache(&self) {
        if let Err(e) = self.cache.clear().await {
            warn!(error = %e, "Module cache clear failed");
        }
    }
}
