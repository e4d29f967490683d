//! Item domain - Legacy vocabulary pairs

mod entity;
mod repository;

pub use entity::Item;
pub use repository::{in_memory::InMemoryItemRepository, ItemRepository};

#[cfg(test)]
pub use repository::mock::MockItemRepository;
