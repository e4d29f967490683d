//! Module domain - Course modules within a language

mod entity;
mod repository;

pub use entity::{Module, NewModule};
pub use repository::{in_memory::InMemoryModuleRepository, ModuleRepository};

#[cfg(test)]
pub use repository::mock::MockModuleRepository;
