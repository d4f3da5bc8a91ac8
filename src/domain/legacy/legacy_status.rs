//! Dual-status view: what ClearanceOS knows versus what the mainframe shows.

use serde::{Deserialize, Serialize};

use super::{ClearanceStatus, SyncState};
use crate::domain::foundation::{StateMachine, Timestamp, ValidationError};

/// Local and mainframe status of one subject.
///
/// # Invariants
///
/// - `sync_lag_hours` is 0 whenever `sync_state` is `Synced`
/// - after a sync `mainframe_status == local_status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyStatus {
    local_status: ClearanceStatus,
    mainframe_status: ClearanceStatus,
    last_sync: Option<Timestamp>,
    sync_lag_hours: u32,
    sync_state: SyncState,
}

impl LegacyStatus {
    /// Status for a subject the mainframe has never heard about from us.
    pub fn new(local_status: ClearanceStatus, sync_lag_hours: u32) -> Self {
        Self {
            local_status,
            mainframe_status: ClearanceStatus::default(),
            last_sync: None,
            sync_lag_hours,
            sync_state: SyncState::Pending,
        }
    }

    /// Records a newer local decision; the mainframe value is untouched.
    pub fn record_local(
        &mut self,
        local_status: ClearanceStatus,
        sync_lag_hours: u32,
    ) -> Result<(), ValidationError> {
        self.sync_state = self.sync_state.transition_to(SyncState::Pending)?;
        self.local_status = local_status;
        self.sync_lag_hours = sync_lag_hours;
        Ok(())
    }

    /// Copies the local value to the mainframe side.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` on `state_transition` if already synced
    pub fn mark_synced(&mut self, at: Timestamp) -> Result<(), ValidationError> {
        self.sync_state = self.sync_state.transition_to(SyncState::Synced)?;
        self.mainframe_status = self.local_status;
        self.last_sync = Some(at);
        self.sync_lag_hours = 0;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn local_status(&self) -> ClearanceStatus {
        self.local_status
    }

    pub fn mainframe_status(&self) -> ClearanceStatus {
        self.mainframe_status
    }

    pub fn last_sync(&self) -> Option<&Timestamp> {
        self.last_sync.as_ref()
    }

    pub fn sync_lag_hours(&self) -> u32 {
        self.sync_lag_hours
    }

    pub fn sync_state(&self) -> SyncState {
        self.sync_state
    }

    /// True while a local decision has not reached the mainframe.
    pub fn is_pending(&self) -> bool {
        self.sync_state == SyncState::Pending
    }

    /// True when the two systems currently disagree.
    pub fn is_divergent(&self) -> bool {
        self.local_status != self.mainframe_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_status_assumes_mainframe_active() {
        let status = LegacyStatus::new(ClearanceStatus::Revoked, 96);
        assert_eq!(status.mainframe_status(), ClearanceStatus::Active);
        assert_eq!(status.local_status(), ClearanceStatus::Revoked);
        assert!(status.is_pending());
        assert!(status.is_divergent());
        assert!(status.last_sync().is_none());
        assert_eq!(status.sync_lag_hours(), 96);
    }

    #[test]
    fn mark_synced_copies_local_to_mainframe() {
        let mut status = LegacyStatus::new(ClearanceStatus::Suspended, 96);
        let at = Timestamp::now();
        status.mark_synced(at).unwrap();

        assert_eq!(status.mainframe_status(), ClearanceStatus::Suspended);
        assert_eq!(status.last_sync(), Some(&at));
        assert_eq!(status.sync_lag_hours(), 0);
        assert!(!status.is_pending());
        assert!(!status.is_divergent());
    }

    #[test]
    fn mark_synced_twice_fails() {
        let mut status = LegacyStatus::new(ClearanceStatus::Active, 96);
        status.mark_synced(Timestamp::now()).unwrap();
        assert!(status.mark_synced(Timestamp::now()).is_err());
    }

    #[test]
    fn record_local_keeps_previous_mainframe_value() {
        let mut status = LegacyStatus::new(ClearanceStatus::Suspended, 96);
        status.mark_synced(Timestamp::now()).unwrap();

        status.record_local(ClearanceStatus::Active, 96).unwrap();
        assert_eq!(status.mainframe_status(), ClearanceStatus::Suspended);
        assert_eq!(status.local_status(), ClearanceStatus::Active);
        assert!(status.is_pending());
        assert!(status.last_sync().is_some());
    }

    #[test]
    fn new_active_status_is_pending_but_not_divergent() {
        let status = LegacyStatus::new(ClearanceStatus::Active, 96);
        assert!(status.is_pending());
        assert!(!status.is_divergent());
    }
}
