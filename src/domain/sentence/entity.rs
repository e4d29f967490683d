//! Sentence entity and related types

use serde::{Deserialize, Serialize};

/// A practice sentence belonging to a module
///
/// `speaker` distinguishes the voices of a dialogue so the frontend
/// can alternate sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Database-assigned identifier
    pub id: i64,
    /// Module this sentence belongs to
    pub module_id: i64,
    /// Order within the module
    pub position: i32,
    /// Text in the language being learned
    pub learning_text: String,
    /// Translation in the learner's language
    pub translation_text: String,
    /// Dialogue speaker index
    pub speaker: i32,
}

impl Sentence {
    pub fn new(
        id: i64,
        module_id: i64,
        position: i32,
        learning_text: impl Into<String>,
        translation_text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            module_id,
            position,
            learning_text: learning_text.into(),
            translation_text: translation_text.into(),
            speaker: 0,
        }
    }

    /// Sets the speaker index
    pub fn with_speaker(mut self, speaker: i32) -> Self {
        self.speaker = speaker;
        self
    }
}

/// A sentence that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSentence {
    pub module_id: i64,
    pub position: i32,
    pub learning_text: String,
    pub translation_text: String,
    pub speaker: i32,
}

impl NewSentence {
    pub fn new(
        module_id: i64,
        position: i32,
        learning_text: impl Into<String>,
        translation_text: impl Into<String>,
    ) -> Self {
        Self {
            module_id,
            position,
            learning_text: learning_text.into(),
            translation_text: translation_text.into(),
            speaker: 0,
        }
    }

    /// Builds the persisted entity once an ID has been assigned
    pub fn into_sentence(self, id: i64) -> Sentence {
        Sentence {
            id,
            module_id: self.module_id,
            position: self.position,
            learning_text: self.learning_text,
            translation_text: self.translation_text,
            speaker: self.speaker,
        }
    }
}
