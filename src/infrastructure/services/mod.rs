//! Infrastructure services

mod item_service;
mod language_service;
mod module_service;
mod sentence_service;

pub use item_service::ItemService;
pub use language_service::{CreateLanguageRequest, LanguageService, UpdateLanguageRequest};
pub use module_service::{CreateModuleRequest, ModuleService};
pub use sentence_service::{CreateSentenceRequest, SentenceService};
