//! Item service - read access to legacy vocabulary items

use std::sync::Arc;

use crate::domain::item::{Item, ItemRepository};
use crate::domain::DomainError;

/// Item service exposing the externally seeded vocabulary list
///
/// Items predate the module and sentence structure and are read
/// straight from the repository without caching.
#[derive(Debug)]
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all items
    pub async fn list(&self) -> Result<Vec<Item>, DomainError> {
        self.repository.list().await
    }
}
