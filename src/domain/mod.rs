//! Domain layer - Core business logic and entities

pub mod blob;
pub mod cache;
pub mod error;
pub mod item;
pub mod language;
pub mod module;
pub mod sentence;

pub use blob::BlobStore;
pub use cache::{Cache, CacheExt, CacheRegistry};
pub use error::DomainError;
pub use item::{InMemoryItemRepository, Item, ItemRepository};
pub use language::{
    validate_country_code, validate_language_name, InMemoryLanguageRepository, Language,
    LanguageRepository, LanguageValidationError, NewLanguage,
};
pub use module::{InMemoryModuleRepository, Module, ModuleRepository, NewModule};
pub use sentence::{InMemorySentenceRepository, NewSentence, Sentence, SentenceRepository};
