//! Two-phase deletion state

use crate::domain::EntryId;

/// Whether an entry is waiting for delete confirmation.
///
/// Holds the id only: an entry edited between request and confirmation is
/// still the one removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionState {
    #[default]
    Idle,
    AwaitingConfirmation(EntryId),
}

impl DeletionState {
    /// Id of the entry awaiting confirmation, if any
    pub fn pending(&self) -> Option<EntryId> {
        match self {
            DeletionState::Idle => None,
            DeletionState::AwaitingConfirmation(id) => Some(*id),
        }
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self, DeletionState::AwaitingConfirmation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_default_is_idle() {
        let state = DeletionState::default();
        assert_eq!(state, DeletionState::Idle);
        assert!(!state.is_awaiting());
        assert!(state.pending().is_none());
    }

    #[test]
    fn test_awaiting_exposes_id() {
        let id = Uuid::new_v4();
        let state = DeletionState::AwaitingConfirmation(id);
        assert!(state.is_awaiting());
        assert_eq!(state.pending(), Some(id));
    }
}
