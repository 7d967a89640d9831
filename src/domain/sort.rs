//! Sort modes for the entry list

use crate::domain::JournalEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How the derived entry list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Most recent first
    #[default]
    #[serde(rename = "date")]
    ByDate,
    /// Bookmarked first, then most recent first
    #[serde(rename = "bookmark")]
    ByBookmark,
}

impl SortMode {
    /// Menu label for this mode
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::ByDate => "Entry Date",
            SortMode::ByBookmark => "Bookmark",
        }
    }

    /// Config/CLI keyword for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::ByDate => "date",
            SortMode::ByBookmark => "bookmark",
        }
    }

    /// Compare two entries; `Less` means `a` is listed before `b`
    pub fn compare(&self, a: &JournalEntry, b: &JournalEntry) -> Ordering {
        match self {
            SortMode::ByDate => b.date.cmp(&a.date),
            SortMode::ByBookmark => b
                .is_bookmarked
                .cmp(&a.is_bookmarked)
                .then_with(|| b.date.cmp(&a.date)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "by-date" => Ok(SortMode::ByDate),
            "bookmark" | "by-bookmark" => Ok(SortMode::ByBookmark),
            _ => Err(format!(
                "Invalid sort mode: '{}'. Valid modes are: date, bookmark",
                s
            )),
        }
    }
}
