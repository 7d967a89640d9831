//! Journal entry value type

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Stable identifier of a journal entry.
pub type EntryId = Uuid;

/// Title shown for entries that have none
pub const UNTITLED: &str = "My Journal";

/// A single journal note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: EntryId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub is_bookmarked: bool,
}

impl JournalEntry {
    /// Create an empty entry with a fresh id, dated now
    pub fn new() -> Self {
        JournalEntry {
            id: Uuid::new_v4(),
            title: String::new(),
            body: String::new(),
            date: Utc::now(),
            is_bookmarked: false,
        }
    }

    /// Create an entry with the given content and a fresh id
    pub fn with_content(
        title: impl Into<String>,
        body: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        JournalEntry {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            date,
            is_bookmarked: false,
        }
    }

    /// Mark the entry as bookmarked (builder style)
    pub fn bookmarked(mut self) -> Self {
        self.is_bookmarked = true;
        self
    }

    /// True when both title and body are empty.
    ///
    /// Whitespace counts as content here; only a never-touched entry is blank.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }

    /// Title for display, falling back to a placeholder
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Check whether title or body contains an already normalized needle
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }
}

impl Default for JournalEntry {
    fn default() -> Self {
        Self::new()
    }
}
