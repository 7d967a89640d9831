//! Domain layer - Journal entries, ordering and deletion state

pub mod deletion;
pub mod entry;
pub mod query;
pub mod sort;

pub use deletion::DeletionState;
pub use entry::{EntryId, JournalEntry};
pub use query::{filter_and_sort, normalize_search};
pub use sort::SortMode;
