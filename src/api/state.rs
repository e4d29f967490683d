//! Application state for shared services

use std::sync::Arc;

use crate::domain::item::ItemRepository;
use crate::domain::language::LanguageRepository;
use crate::domain::module::ModuleRepository;
use crate::domain::sentence::SentenceRepository;
use crate::domain::{CacheRegistry, DomainError, Item, Language, Module, Sentence};
use crate::infrastructure::blob::CachedBlobReader;
use crate::infrastructure::services::{
    CreateLanguageRequest, CreateModuleRequest, CreateSentenceRequest, ItemService,
    LanguageService, ModuleService, SentenceService, UpdateLanguageRequest,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub language_service: Arc<dyn LanguageServiceTrait>,
    pub module_service: Arc<dyn ModuleServiceTrait>,
    pub sentence_service: Arc<dyn SentenceServiceTrait>,
    pub item_service: Arc<dyn ItemServiceTrait>,
    pub image_reader: Arc<CachedBlobReader>,
    pub cache_registry: CacheRegistry,
}

/// Trait for language service operations
#[async_trait::async_trait]
pub trait LanguageServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Language>, DomainError>;
    async fn get_by_name(&self, name: &str) -> Result<Option<Language>, DomainError>;
    async fn create(&self, request: CreateLanguageRequest) -> Result<Language, DomainError>;
    async fn update(&self, id: i64, request: UpdateLanguageRequest)
        -> Result<Language, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

/// Trait for module service operations
#[async_trait::async_trait]
pub trait ModuleServiceTrait: Send + Sync {
    async fn list_by_language_name(&self, name: &str) -> Result<Vec<Module>, DomainError>;
    async fn create(&self, request: CreateModuleRequest) -> Result<Module, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

/// Trait for sentence service operations
#[async_trait::async_trait]
pub trait SentenceServiceTrait: Send + Sync {
    async fn list_by_module(&self, module_id: i64) -> Result<Vec<Sentence>, DomainError>;
    async fn create(&self, request: CreateSentenceRequest) -> Result<Sentence, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

/// Trait for item service operations
#[async_trait::async_trait]
pub trait ItemServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Item>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: LanguageRepository + 'static> LanguageServiceTrait for LanguageService<R> {
    async fn list(&self) -> Result<Vec<Language>, DomainError> {
        LanguageService::list(self).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Language>, DomainError> {
        LanguageService::get_by_name(self, name).await
    }

    async fn create(&self, request: CreateLanguageRequest) -> Result<Language, DomainError> {
        LanguageService::create(self, request).await
    }

    async fn update(
        &self,
        id: i64,
        request: UpdateLanguageRequest,
    ) -> Result<Language, DomainError> {
        LanguageService::update(self, id, request).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        LanguageService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: ModuleRepository + 'static, L: LanguageRepository + 'static> ModuleServiceTrait
    for ModuleService<R, L>
{
    async fn list_by_language_name(&self, name: &str) -> Result<Vec<Module>, DomainError> {
        ModuleService::list_by_language_name(self, name).await
    }

    async fn create(&self, request: CreateModuleRequest) -> Result<Module, DomainError> {
        ModuleService::create(self, request).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        ModuleService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: SentenceRepository + 'static, M: ModuleRepository + 'static> SentenceServiceTrait
    for SentenceService<R, M>
{
    async fn list_by_module(&self, module_id: i64) -> Result<Vec<Sentence>, DomainError> {
        SentenceService::list_by_module(self, module_id).await
    }

    async fn create(&self, request: CreateSentenceRequest) -> Result<Sentence, DomainError> {
        SentenceService::create(self, request).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        SentenceService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: ItemRepository + 'static> ItemServiceTrait for ItemService<R> {
    async fn list(&self) -> Result<Vec<Item>, DomainError> {
        ItemService::list(self).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        language_service: Arc<dyn LanguageServiceTrait>,
        module_service: Arc<dyn ModuleServiceTrait>,
        sentence_service: Arc<dyn SentenceServiceTrait>,
        item_service: Arc<dyn ItemServiceTrait>,
        image_reader: Arc<CachedBlobReader>,
        cache_registry: CacheRegistry,
    ) -> Self {
        Self {
            language_service,
            module_service,
            sentence_service,
            item_service,
            image_reader,
            cache_registry,
        }
    }
}
