//! Book record model.
//!
//! # Responsibility
//! - Define the `(id, title, author)` tuple stored by the catalog.
//!
//! # Invariants
//! - `id` is never validated for uniqueness, sign or bounds.
//! - `title` and `author` may be empty but must not contain line breaks to
//!   survive a flat-file round trip.

use serde::{Deserialize, Serialize};

/// Caller-supplied book identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = i32;

/// One book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl BookRecord {
    /// Creates a record from caller input without any validation.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }

    /// Returns whether title or author contain characters the flat-file
    /// format cannot represent.
    pub fn has_line_breaks(&self) -> bool {
        [&self.title, &self.author]
            .iter()
            .any(|value| value.contains(['\n', '\r']))
    }
}
