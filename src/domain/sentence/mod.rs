//! Sentence domain - Practice sentences within a module

mod entity;
mod repository;

pub use entity::{NewSentence, Sentence};
pub use repository::{in_memory::InMemorySentenceRepository, SentenceRepository};

#[cfg(test)]
pub use repository::mock::MockSentenceRepository;
