//! Stories and their chapters

use crate::{ChapterId, CharacterId, StoryId};
use serde::{Deserialize, Serialize};

/// A story - the top-level container of a writing project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Unique identifier
    pub id: StoryId,

    /// Display title
    pub title: String,

    /// Genre label (free text)
    pub genre: String,

    /// Short synopsis
    pub synopsis: String,

    /// Cover colour shown in the library
    pub cover_color: String,

    /// Last modification (milliseconds since Unix epoch)
    pub updated_at: u64,
}

impl Story {
    /// Create a new story with a fresh identifier
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        synopsis: impl Into<String>,
        updated_at: u64,
    ) -> Self {
        Self {
            id: StoryId::new(),
            title: title.into(),
            genre: genre.into(),
            synopsis: synopsis.into(),
            cover_color: "indigo".to_string(),
            updated_at,
        }
    }
}

/// A chapter of prose belonging to a story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Unique identifier
    pub id: ChapterId,

    /// Owning story
    pub story_id: StoryId,

    /// Chapter title
    pub title: String,

    /// Prose content
    pub content: String,

    /// 1-based position within the story
    pub order: u32,

    /// Point-of-view character, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pov_character_id: Option<CharacterId>,
}

impl Chapter {
    /// Create an empty chapter at the given position
    pub fn new(story_id: StoryId, title: impl Into<String>, order: u32) -> Self {
        Self {
            id: ChapterId::new(),
            story_id,
            title: title.into(),
            content: String::new(),
            order,
            pov_character_id: None,
        }
    }

    /// Length of the content in characters
    ///
    /// Counted in `char`s so CJK prose measures the same as the editor shows it.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
