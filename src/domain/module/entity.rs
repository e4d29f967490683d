//! Module entity and related types

use serde::{Deserialize, Serialize};

/// A course module belonging to a language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Database-assigned identifier
    pub id: i64,
    /// Language this module belongs to
    pub language_id: i64,
    /// Display name
    pub name: String,
    /// Short description shown in the module list
    pub description: Option<String>,
    /// Introductory text shown when the module is opened
    pub module_presentation: Option<String>,
    /// Material icon rendered next to the module name
    pub material_icon_name: Option<String>,
}

impl Module {
    /// Creates a module with the required fields
    pub fn new(id: i64, language_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            language_id,
            name: name.into(),
            description: None,
            module_presentation: None,
            material_icon_name: None,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the presentation text
    pub fn with_module_presentation(mut self, text: impl Into<String>) -> Self {
        self.module_presentation = Some(text.into());
        self
    }

    /// Sets the icon name
    pub fn with_material_icon_name(mut self, icon: impl Into<String>) -> Self {
        self.material_icon_name = Some(icon.into());
        self
    }
}

/// A module that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewModule {
    pub language_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub module_presentation: Option<String>,
    pub material_icon_name: Option<String>,
}

impl NewModule {
    pub fn new(language_id: i64, name: impl Into<String>) -> Self {
        Self {
            language_id,
            name: name.into(),
            description: None,
            module_presentation: None,
            material_icon_name: None,
        }
    }

    /// Builds the persisted entity once an ID has been assigned
    pub fn into_module(self, id: i64) -> Module {
        Module {
            id,
            language_id: self.language_id,
            name: self.name,
            description: self.description,
            module_presentation: self.module_presentation,
            material_icon_name: self.material_icon_name,
        }
    }
}
