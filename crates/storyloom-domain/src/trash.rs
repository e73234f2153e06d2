//! Recycle bin entries

use crate::{Chapter, Character, Relationship, Story, TrashId};
use serde::{Deserialize, Serialize};

/// Kind of record held by a trash entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrashKind {
    /// A story with its chapters
    Story,
    /// A character with its relationships
    Character,
}

/// The deleted record, kept whole so it can be restored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrashedRecord {
    /// A deleted story and the chapters that belonged to it
    Story {
        /// The story
        story: Story,
        /// Its chapters at deletion time
        chapters: Vec<Chapter>,
    },
    /// A deleted character and the relationships that touched it
    Character {
        /// The character
        character: Character,
        /// Relationships removed along with it
        relationships: Vec<Relationship>,
    },
}

impl TrashedRecord {
    /// Kind of the wrapped record
    pub fn kind(&self) -> TrashKind {
        match self {
            TrashedRecord::Story { .. } => TrashKind::Story,
            TrashedRecord::Character { .. } => TrashKind::Character,
        }
    }

    /// Human-readable title of the wrapped record
    pub fn title(&self) -> &str {
        match self {
            TrashedRecord::Story { story, .. } => &story.title,
            TrashedRecord::Character { character, .. } => &character.name,
        }
    }
}

/// An entry in the recycle bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashItem {
    /// Identifier of the trash entry itself
    pub id: TrashId,

    /// The deleted record
    pub record: TrashedRecord,

    /// Deletion time (milliseconds since Unix epoch)
    pub deleted_at: u64,
}

impl TrashItem {
    /// Wrap a deleted record
    pub fn new(record: TrashedRecord, deleted_at: u64) -> Self {
        Self {
            id: TrashId::new(),
            record,
            deleted_at,
        }
    }

    /// Kind of the deleted record
    pub fn kind(&self) -> TrashKind {
        self.record.kind()
    }

    /// Title of the deleted record
    pub fn title(&self) -> &str {
        self.record.title()
    }
}
