//! Item entity

use serde::{Deserialize, Serialize};

/// A Tagalog/English vocabulary pair
///
/// Items predate the module/sentence structure and are kept for the
/// original flashcard view. The table is seeded externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Database-assigned identifier
    pub id: i64,
    /// Tagalog side of the card
    pub tagalog: String,
    /// English side of the card
    pub english: String,
}

impl Item {
    pub fn new(id: i64, tagalog: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            id,
            tagalog: tagalog.into(),
            english: english.into(),
        }
    }
}
