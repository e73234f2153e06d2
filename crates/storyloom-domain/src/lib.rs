//! Storyloom Domain Layer
//!
//! Plain narrative records shared by every other crate in the workspace.
//! Nothing here talks to the network or keeps state; the records are
//! produced by the AI adapters and owned by the workspace store.
//!
//! ## Key Concepts
//!
//! - **Story**: a titled work with chapters, characters and outlines
//! - **Chapter**: ordered prose belonging to a story
//! - **Character**: a character sheet built around conflict, obstacle, action and ending
//! - **Outline**: plot stages with a narrative tension score
//! - **Message**: one turn of an assistant conversation
//! - **TrashItem**: a deleted record waiting in the recycle bin

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod character;
pub mod concept;
pub mod id;
pub mod message;
pub mod outline;
pub mod story;
pub mod trash;

// Re-exports for convenience
pub use character::{Character, CharacterRole, CharacterSketch, Relationship};
pub use concept::{ConceptInputs, StoryConcept};
pub use id::{ChapterId, CharacterId, OutlineId, RelationshipId, StoryId, TrashId};
pub use message::{Message, Speaker};
pub use outline::{Outline, OutlinePoint};
pub use story::{Chapter, Story};
pub use trash::{TrashItem, TrashKind, TrashedRecord};
