//! Entry store: the in-memory collection and its intents
//!
//! All intents are total. Lookups that find nothing are no-ops, and only
//! effective changes are announced to subscribers.

use crate::domain::{filter_and_sort, DeletionState, EntryId, JournalEntry, SortMode};
use chrono::{DateTime, Duration, Utc};
use log::debug;
use std::fmt;

/// Change notification published after an effective mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    EntryCreated(EntryId),
    EntrySaved { id: EntryId, inserted: bool },
    BookmarkToggled { id: EntryId, is_bookmarked: bool },
    DeletionRequested(EntryId),
    DeletionCancelled(EntryId),
    EntryDeleted(EntryId),
    SearchChanged,
    SortChanged(SortMode),
}

/// Handle returned by [`EntryStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Owns the journal entries plus search, sort and deletion state
pub struct EntryStore {
    entries: Vec<JournalEntry>,
    search_text: String,
    sort_mode: SortMode,
    deletion: DeletionState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl EntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        EntryStore {
            entries: Vec::new(),
            search_text: String::new(),
            sort_mode: SortMode::default(),
            deletion: DeletionState::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a store holding the three sample entries, dated relative to `now`
    pub fn with_samples(now: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        store.entries = vec![
            JournalEntry::with_content(
                "My Birthday",
                "Had cake with friends 🎂",
                now - Duration::days(1),
            )
            .bookmarked(),
            JournalEntry::with_content(
                "Today's Journal",
                "Learned about ownership and borrowing.",
                now - Duration::days(2),
            ),
            JournalEntry::with_content(
                "Great Day",
                "Walked, studied, and relaxed.",
                now - Duration::days(3),
            ),
        ];
        store
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id
    pub fn get(&self, id: EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn deletion(&self) -> DeletionState {
        self.deletion
    }

    /// Id of the entry awaiting delete confirmation
    pub fn pending_deletion(&self) -> Option<EntryId> {
        self.deletion.pending()
    }

    /// Replace the search text
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search_text {
            return;
        }
        debug!("event=search_changed len={}", text.len());
        self.search_text = text;
        self.notify(StoreEvent::SearchChanged);
    }

    /// Replace the sort mode
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        if mode == self.sort_mode {
            return;
        }
        debug!("event=sort_changed mode={}", mode);
        self.sort_mode = mode;
        self.notify(StoreEvent::SortChanged(mode));
    }

    /// Insert a new empty entry at the head of the collection and return it
    pub fn create_empty_entry(&mut self) -> JournalEntry {
        let entry = JournalEntry::new();
        debug!("event=entry_created id={}", entry.id);
        self.entries.insert(0, entry.clone());
        self.notify(StoreEvent::EntryCreated(entry.id));
        entry
    }

    /// Replace the entry with the same id in place, or insert at the head.
    ///
    /// Replacement overwrites every field.
    pub fn save(&mut self, entry: JournalEntry) {
        let id = entry.id;
        let inserted = match self.position(id) {
            Some(index) => {
                self.entries[index] = entry;
                false
            }
            None => {
                self.entries.insert(0, entry);
                true
            }
        };
        debug!("event=entry_saved id={} inserted={}", id, inserted);
        self.notify(StoreEvent::EntrySaved { id, inserted });
    }

    /// Flip the bookmark flag of an entry; unknown ids are ignored
    pub fn toggle_bookmark(&mut self, id: EntryId) {
        let Some(index) = self.position(id) else {
            debug!("event=bookmark_toggle_skipped id={} reason=not_found", id);
            return;
        };
        let entry = &mut self.entries[index];
        entry.is_bookmarked = !entry.is_bookmarked;
        let is_bookmarked = entry.is_bookmarked;
        debug!("event=bookmark_toggled id={} bookmarked={}", id, is_bookmarked);
        self.notify(StoreEvent::BookmarkToggled { id, is_bookmarked });
    }

    /// Mark an entry as awaiting delete confirmation.
    ///
    /// A request made while another is pending replaces it.
    pub fn request_delete(&mut self, entry: &JournalEntry) {
        debug!("event=delete_requested id={}", entry.id);
        self.deletion = DeletionState::AwaitingConfirmation(entry.id);
        self.notify(StoreEvent::DeletionRequested(entry.id));
    }

    /// Remove the entry awaiting confirmation and return to idle
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.deletion.pending() else {
            return;
        };
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.deletion = DeletionState::Idle;
        debug!(
            "event=delete_confirmed id={} removed={}",
            id,
            before - self.entries.len()
        );
        self.notify(StoreEvent::EntryDeleted(id));
    }

    /// Drop a pending delete request without removing anything
    pub fn cancel_delete(&mut self) {
        let Some(id) = self.deletion.pending() else {
            return;
        };
        self.deletion = DeletionState::Idle;
        debug!("event=delete_cancelled id={}", id);
        self.notify(StoreEvent::DeletionCancelled(id));
    }

    /// Current entries filtered by search text and ordered by sort mode.
    ///
    /// Recomputed on every call.
    pub fn filtered_and_sorted(&self) -> Vec<JournalEntry> {
        filter_and_sort(&self.entries, &self.search_text, self.sort_mode)
    }

    /// Register a listener called synchronously after every change
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryStore")
            .field("entries", &self.entries)
            .field("search_text", &self.search_text)
            .field("sort_mode", &self.sort_mode)
            .field("deletion", &self.deletion)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
