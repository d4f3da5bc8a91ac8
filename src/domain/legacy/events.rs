//! Legacy synchronization domain events.

use serde::{Deserialize, Serialize};

use super::ClearanceStatus;
use crate::domain::adjudication::Recommendation;
use crate::domain::foundation::{domain_event, DecisionId, EventId, SubjectId, Timestamp};

/// How a sync was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncTrigger {
    /// Operator pressed the force-sync button.
    Forced,
    /// Nightly batch job or auto-sync timer.
    Batch,
}

/// Published when a decision is cached locally and queued for the mainframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionPublished {
    pub event_id: EventId,
    pub subject_id: SubjectId,
    pub decision_id: DecisionId,
    pub recommendation: Recommendation,
    pub local_status: ClearanceStatus,
    pub mainframe_status: ClearanceStatus,
    pub published_at: Timestamp,
}

domain_event!(
    DecisionPublished,
    event_type = "decision.published.v1",
    aggregate_id = subject_id,
    aggregate_type = "Subject",
    occurred_at = published_at,
    event_id = event_id
);

/// Published when the mainframe status has been brought in line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacySyncCompleted {
    pub event_id: EventId,
    pub subject_id: SubjectId,
    pub status: ClearanceStatus,
    pub trigger: SyncTrigger,
    pub synced_at: Timestamp,
}

domain_event!(
    LegacySyncCompleted,
    event_type = "legacy.sync_completed.v1",
    aggregate_id = subject_id,
    aggregate_type = "Subject",
    occurred_at = synced_at,
    event_id = event_id
);
