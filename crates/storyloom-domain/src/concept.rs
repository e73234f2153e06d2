//! Story concepts brainstormed from a handful of seed inputs

use serde::{Deserialize, Serialize};

/// Seed inputs for concept generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptInputs {
    /// Genre (e.g. "cyberpunk")
    pub genre: String,

    /// Theme or core idea
    pub theme: String,

    /// Protagonist traits
    pub hero: String,

    /// Setting
    pub setting: String,
}

impl ConceptInputs {
    /// Check that there is enough to brainstorm from
    ///
    /// At least one of genre or theme must be non-blank.
    pub fn validate(&self) -> Result<(), String> {
        if self.genre.trim().is_empty() && self.theme.trim().is_empty() {
            return Err("at least one of genre or theme is required".to_string());
        }
        Ok(())
    }
}

/// A generated story concept with its lead character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryConcept {
    /// Working title
    pub title: String,

    /// Short synopsis
    pub synopsis: String,

    /// Lead character's name
    pub character_name: String,

    /// Lead character's role
    pub character_role: String,

    /// Lead character's background
    pub character_desc: String,

    /// Lead character's core conflict
    pub character_conflict: String,
}
