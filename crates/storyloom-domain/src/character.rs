//! Character sheets and the relationships between them

use crate::{CharacterId, RelationshipId, StoryId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrative role of a character
///
/// Roles arrive as free text from the AI backend, so anything that does not
/// match a known role is kept verbatim in [`CharacterRole::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterRole {
    /// Main character
    Protagonist,
    /// Opposing force
    Antagonist,
    /// Secondary character
    Supporting,
    /// Walk-on part
    Extra,
    /// Anything else
    Other(String),
}

impl CharacterRole {
    /// Parse a role leniently (case-insensitive, a few common synonyms)
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "protagonist" | "main" | "hero" | "主角" => CharacterRole::Protagonist,
            "antagonist" | "villain" | "反派" => CharacterRole::Antagonist,
            "supporting" | "support" | "配角" => CharacterRole::Supporting,
            "extra" | "minor" | "路人" => CharacterRole::Extra,
            _ => CharacterRole::Other(s.trim().to_string()),
        }
    }

    /// Display name of the role
    pub fn as_str(&self) -> &str {
        match self {
            CharacterRole::Protagonist => "Protagonist",
            CharacterRole::Antagonist => "Antagonist",
            CharacterRole::Supporting => "Supporting",
            CharacterRole::Extra => "Extra",
            CharacterRole::Other(s) => s,
        }
    }
}

impl Default for CharacterRole {
    fn default() -> Self {
        CharacterRole::Supporting
    }
}

impl From<String> for CharacterRole {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<CharacterRole> for String {
    fn from(role: CharacterRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for CharacterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A character sheet
///
/// The four narrative pillars (conflict, obstacle, action, ending) are what
/// the extraction adapter asks the backend for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,

    /// Owning story
    pub story_id: StoryId,

    /// Character name
    pub name: String,

    /// Narrative role
    pub role: CharacterRole,

    /// Internal or external conflict driving the character
    pub conflict: String,

    /// Main forces opposing the character
    pub obstacle: String,

    /// Key actions taken by the character
    pub action: String,

    /// Projected or actual resolution
    pub ending: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl Character {
    /// Create a character with empty narrative fields
    pub fn new(story_id: StoryId, name: impl Into<String>, role: CharacterRole) -> Self {
        Self {
            id: CharacterId::new(),
            story_id,
            name: name.into(),
            role,
            conflict: String::new(),
            obstacle: String::new(),
            action: String::new(),
            ending: String::new(),
            description: String::new(),
        }
    }
}

/// A directed relationship between two characters of the same story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Unique identifier
    pub id: RelationshipId,

    /// Owning story
    pub story_id: StoryId,

    /// Character the relationship is recorded on
    pub source_character_id: CharacterId,

    /// The other character
    pub target_character_id: CharacterId,

    /// Relationship label (e.g. "mentor", "rival")
    pub kind: String,

    /// Free-form description
    pub description: String,
}

impl Relationship {
    /// Whether the relationship involves the given character on either end
    pub fn involves(&self, character: CharacterId) -> bool {
        self.source_character_id == character || self.target_character_id == character
    }
}

/// A character as recovered from prose by the extraction adapter
///
/// Fields are whatever the backend inferred, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterSketch {
    /// Character name
    pub name: String,

    /// Free-form role label, if one was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// What the character wants that is blocked
    #[serde(default)]
    pub conflict: String,

    /// What stands in the way
    #[serde(default)]
    pub obstacle: String,

    /// What the character does about it
    #[serde(default)]
    pub action: String,

    /// How it turns out
    #[serde(default)]
    pub ending: String,

    /// Short description, if one was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Character {
    /// Build a full character sheet from a sketch
    ///
    /// A blank name becomes "Unknown" and a missing role becomes
    /// [`CharacterRole::Supporting`].
    pub fn from_sketch(story_id: StoryId, sketch: CharacterSketch) -> Self {
        let name = match sketch.name.trim() {
            "" => "Unknown".to_string(),
            name => name.to_string(),
        };
        let role = sketch
            .role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(CharacterRole::parse)
            .unwrap_or_default();

        Self {
            conflict: sketch.conflict,
            obstacle: sketch.obstacle,
            action: sketch.action,
            ending: sketch.ending,
            description: sketch.description.unwrap_or_default(),
            ..Self::new(story_id, name, role)
        }
    }
}
