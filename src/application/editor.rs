//! Entry editing use case
//!
//! Holds a draft title/body for one entry and applies it to the store on
//! save or cancel.

use crate::application::EntryStore;
use crate::domain::JournalEntry;
use crate::error::{JotbookError, Result};
use chrono::{DateTime, Utc};

/// Draft state for editing one entry
#[derive(Debug, Clone)]
pub struct EditorSession {
    entry: Option<JournalEntry>,
    original_title: String,
    original_body: String,
    title: String,
    body: String,
}

impl EditorSession {
    /// Start editing `entry`, or a brand new entry when `None`
    pub fn new(entry: Option<JournalEntry>) -> Self {
        let (title, body) = entry
            .as_ref()
            .map(|e| (e.title.clone(), e.body.clone()))
            .unwrap_or_default();

        EditorSession {
            entry,
            original_title: title.clone(),
            original_body: body.clone(),
            title,
            body,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Append a line to the body
    pub fn append_body_line(&mut self, line: &str) {
        if !self.body.is_empty() {
            self.body.push('\n');
        }
        self.body.push_str(line);
    }

    /// True when the trimmed title or trimmed body has content
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty() || !self.body.trim().is_empty()
    }

    /// True when the draft differs from the values at editor entry
    pub fn has_unsaved(&self) -> bool {
        self.title != self.original_title || self.body != self.original_body
    }

    /// Cancelling now would lose typed content, so ask first
    pub fn needs_discard_confirmation(&self) -> bool {
        self.has_unsaved() && self.can_save()
    }

    /// Save the draft, dated now
    pub fn save(&self, store: &mut EntryStore) -> Result<JournalEntry> {
        self.save_at(store, Utc::now())
    }

    /// Save the draft with an explicit timestamp.
    ///
    /// Title and body are stored trimmed. The edited entry keeps its id and
    /// bookmark; without one a new entry is created.
    pub fn save_at(&self, store: &mut EntryStore, now: DateTime<Utc>) -> Result<JournalEntry> {
        if !self.can_save() {
            return Err(JotbookError::NothingToSave);
        }

        let mut updated = self.entry.clone().unwrap_or_default();
        updated.title = self.title.trim().to_string();
        updated.body = self.body.trim().to_string();
        updated.date = now;

        store.save(updated.clone());
        Ok(updated)
    }

    /// Leave the editor without saving.
    ///
    /// An entry that was blank when opened is a throwaway created for this
    /// editor; it is removed through the regular two-phase delete.
    pub fn cancel(&self, store: &mut EntryStore) {
        if let Some(entry) = self.entry.as_ref().filter(|e| e.is_blank()) {
            store.request_delete(entry);
            store.confirm_delete();
        }
    }
}
