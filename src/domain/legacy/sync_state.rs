//! Whether the mainframe has caught up with the local status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Sync state of one subject's dual status.
///
/// Valid transitions:
/// - Pending -> Synced (forced or batch sync)
/// - Synced -> Pending (a newer decision was published)
/// - Pending -> Pending (a newer decision replaced a queued one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    #[default]
    Pending,
    Synced,
}

impl StateMachine for SyncState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SyncState::*;
        matches!(
            (self, target),
            (Pending, Synced) | (Synced, Pending) | (Pending, Pending)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            SyncState::Pending => vec![SyncState::Synced, SyncState::Pending],
            SyncState::Synced => vec![SyncState::Pending],
        }
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SyncState::Pending => "Pending",
            SyncState::Synced => "Synced",
        };
        write!(f, "{}", s)
    }
}
