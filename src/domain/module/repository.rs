//! Module repository trait

use async_trait::async_trait;

use super::{Module, NewModule};
use crate::domain::DomainError;

/// Repository trait for Module persistence
#[async_trait]
pub trait ModuleRepository: Send + Sync + std::fmt::Debug {
    /// Get a module by ID
    async fn get(&self, id: i64) -> Result<Option<Module>, DomainError>;

    /// Get all modules for a language, ordered by ID
    async fn list_by_language(&self, language_id: i64) -> Result<Vec<Module>, DomainError>;

    /// Insert a new module, assigning its ID
    async fn create(&self, module: NewModule) -> Result<Module, DomainError>;

    /// Delete a module by ID
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

/// In-memory implementation of ModuleRepository
pub mod in_memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::RwLock;

    /// In-memory implementation of ModuleRepository for testing and development
    #[derive(Debug, Default)]
    pub struct InMemoryModuleRepository {
        modules: RwLock<HashMap<i64, Module>>,
        next_id: AtomicI64,
    }

    impl InMemoryModuleRepository {
        pub fn new() -> Self {
            Self {
                modules: RwLock::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    #[async_trait]
    impl ModuleRepository for InMemoryModuleRepository {
        async fn get(&self, id: i64) -> Result<Option<Module>, DomainError> {
            let modules = self
                .modules
                .read()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            Ok(modules.get(&id).cloned())
        }

        async fn list_by_language(&self, language_id: i64) -> Result<Vec<Module>, DomainError> {
            let modules = self
                .modules
                .read()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            let mut modules: Vec<Module> = modules
                .values()
                .filter(|m| m.language_id == language_id)
                .cloned()
                .collect();
            modules.sort_by_key(|m| m.id);
            Ok(modules)
        }

        async fn create(&self, module: NewModule) -> Result<Module, DomainError> {
            let mut modules = self
                .modules
                .write()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let module = module.into_module(id);
            modules.insert(module.id, module.clone());
            Ok(module)
        }

        async fn delete(&self, id: i64) -> Result<bool, DomainError> {
            let mut modules = self
                .modules
                .write()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            Ok(modules.remove(&id).is_some())
        }
    }
}
