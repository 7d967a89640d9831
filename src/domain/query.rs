//! Search filtering and ordering of entries
//!
//! The derived view is always recomputed from the full collection:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use jotbook::domain::{filter_and_sort, JournalEntry, SortMode};
//!
//! let cake = JournalEntry::with_content(
//!     "My Birthday",
//!     "Had cake with friends",
//!     Utc.with_ymd_and_hms(2025, 10, 21, 8, 0, 0).unwrap(),
//! );
//! let walk = JournalEntry::with_content(
//!     "Great Day",
//!     "Walked, studied, and relaxed.",
//!     Utc.with_ymd_and_hms(2025, 10, 20, 8, 0, 0).unwrap(),
//! );
//! let entries = vec![walk, cake.clone()];
//!
//! let view = filter_and_sort(&entries, "  CAKE ", SortMode::ByDate);
//! assert_eq!(view, vec![cake]);
//! ```

use crate::domain::{JournalEntry, SortMode};

/// Normalize raw search input: trim surrounding whitespace and lowercase
pub fn normalize_search(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Filter entries by search text, then order them by sort mode.
///
/// Empty (or whitespace-only) search text keeps every entry. The sort is
/// stable, so entries that compare equal keep collection order.
pub fn filter_and_sort(
    entries: &[JournalEntry],
    search_text: &str,
    sort_mode: SortMode,
) -> Vec<JournalEntry> {
    let needle = normalize_search(search_text);

    let mut view: Vec<JournalEntry> = if needle.is_empty() {
        entries.to_vec()
    } else {
        entries
            .iter()
            .filter(|entry| entry.matches(&needle))
            .cloned()
            .collect()
    };

    view.sort_by(|a, b| sort_mode.compare(a, b));
    view
}
