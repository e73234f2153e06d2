//! Plot outlines mapped onto a tension curve

use crate::{OutlineId, StoryId};
use serde::{Deserialize, Serialize};

/// Highest tension score on the curve
pub const MAX_TENSION: u8 = 100;

/// One stage of a plot outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlinePoint {
    /// Stage name (e.g. "Setup", "Climax")
    pub stage: String,

    /// Narrative tension, 0-100
    pub tension: u8,

    /// Summary of events at this stage
    pub description: String,
}

impl OutlinePoint {
    /// Create a point, clamping tension into 0-100
    pub fn new(stage: impl Into<String>, tension: i64, description: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            tension: tension.clamp(0, MAX_TENSION as i64) as u8,
            description: description.into(),
        }
    }
}

/// A named sequence of outline points attached to a story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    /// Unique identifier
    pub id: OutlineId,

    /// Owning story
    pub story_id: StoryId,

    /// Display title
    pub title: String,

    /// Plot stages in story order
    pub points: Vec<OutlinePoint>,
}
