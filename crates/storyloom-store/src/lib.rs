//! Storyloom Storage Layer
//!
//! An owned, in-memory workspace of stories, chapters, characters, outlines
//! and the recycle bin, with the writing ledger fed by chapter saves.
//! Nothing is written to disk.
//!
//! # Examples
//!
//! ```
//! use storyloom_store::Workspace;
//! use storyloom_stats::today;
//!
//! let mut workspace = Workspace::new();
//! let story = workspace.create_story("The Long Night", "Fantasy", "");
//! let chapter = workspace.chapters(story)[0].id;
//!
//! workspace
//!     .save_chapter(chapter, "It began with a bell.", None, None, today())
//!     .unwrap();
//! assert_eq!(workspace.ledger().word_count(today()), 21);
//! ```

#![warn(missing_docs)]

mod workspace;

pub use workspace::Workspace;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record with the given id
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind ("story", "chapter", ...)
        kind: &'static str,
        /// The id that was looked up
        id: String,
    },
}

impl StoreError {
    pub(crate) fn not_found(kind: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
