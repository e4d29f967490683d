//! Language repository trait

use async_trait::async_trait;

use super::{Language, NewLanguage};
use crate::domain::DomainError;

/// Repository trait for Language persistence
#[async_trait]
pub trait LanguageRepository: Send + Sync + std::fmt::Debug {
    /// Get a language by ID
    async fn get(&self, id: i64) -> Result<Option<Language>, DomainError>;

    /// Get a language by its unique name
    async fn get_by_name(&self, name: &str) -> Result<Option<Language>, DomainError>;

    /// Get all languages
    async fn list(&self) -> Result<Vec<Language>, DomainError>;

    /// Insert a new language, assigning its ID
    async fn create(&self, language: NewLanguage) -> Result<Language, DomainError>;

    /// Update an existing language
    async fn update(&self, language: Language) -> Result<Language, DomainError>;

    /// Delete a language by ID
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

/// In-memory implementation of LanguageRepository
pub mod in_memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::RwLock;

    /// In-memory implementation of LanguageRepository for testing and development
    #[derive(Debug, Default)]
    pub struct InMemoryLanguageRepository {
        languages: RwLock<HashMap<i64, Language>>,
        next_id: AtomicI64,
    }

    impl InMemoryLanguageRepository {
        pub fn new() -> Self {
            Self {
                languages: RwLock::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }

        fn assign_id(&self) -> i64 {
            self.next_id.fetch_add(1, Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LanguageRepository for InMemoryLanguageRepository {
        async fn get(&self, id: i64) -> Result<Option<Language>, DomainError> {
            let languages = self
                .languages
                .read()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            Ok(languages.get(&id).cloned())
        }

        async fn get_by_name(&self, name: &str) -> Result<Option<Language>, DomainError> {
            let languages = self
                .languages
                .read()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            Ok(languages.values().find(|l| l.name == name).cloned())
        }

        async fn list(&self) -> Result<Vec<Language>, DomainError> {
            let languages = self
                .languages
                .read()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            let mut languages: Vec<Language> = languages.values().cloned().collect();
            languages.sort_by_key(|l| l.id);
            Ok(languages)
        }

        async fn create(&self, language: NewLanguage) -> Result<Language, DomainError> {
            let mut languages = self
                .languages
                .write()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            if languages.values().any(|l| l.name == language.name) {
                return Err(DomainError::conflict(format!(
                    "Language '{}' already exists",
                    language.name
                )));
            }

            let language = language.into_language(self.assign_id());
            languages.insert(language.id, language.clone());
            Ok(language)
        }

        async fn update(&self, language: Language) -> Result<Language, DomainError> {
            let mut languages = self
                .languages
                .write()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            if !languages.contains_key(&language.id) {
                return Err(DomainError::not_found(format!(
                    "Language '{}' not found",
                    language.id
                )));
            }

            if languages
                .values()
                .any(|l| l.id != language.id && l.name == language.name)
            {
                return Err(DomainError::conflict(format!(
                    "Language '{}' already exists",
                    language.name
                )));
            }

            languages.insert(language.id, language.clone());
            Ok(language)
        }

        async fn delete(&self, id: i64) -> Result<bool, DomainError> {
            let mut languages = self
                .languages
                .write()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            Ok(languages.remove(&id).is_some())
        }
    }
}
