//! Record type for extracted quotes
//!
//! This module defines the `Quote` record produced by extraction and
//! consumed by the CSV writer. A record is created once per item block,
//! never mutated, and discarded after serialization.

/// A single quote extracted from one item block on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quoted text content
    pub text: String,

    /// Attributed author name
    pub author: String,

    /// Tag labels in the order they appear on the page (may be empty)
    pub tags: Vec<String>,
}

impl Quote {
    /// Flattens the tag list into a single field by joining with `", "`
    ///
    /// The join is lossy if a tag itself contains `", "`: such a tag cannot
    /// be told apart from two tags after joining. This is a known limitation
    /// of the flat output field.
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }
}
