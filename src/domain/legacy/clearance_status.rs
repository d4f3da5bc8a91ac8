//! Clearance status as recorded by either system.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::adjudication::Recommendation;

/// Status of a subject's clearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClearanceStatus {
    /// The mainframe assumes this until told otherwise.
    #[default]
    Active,
    Pending,
    Revoked,
    Suspended,
}

impl ClearanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearanceStatus::Active => "ACTIVE",
            ClearanceStatus::Pending => "PENDING",
            ClearanceStatus::Revoked => "REVOKED",
            ClearanceStatus::Suspended => "SUSPENDED",
        }
    }

    /// Returns true if the subject may currently access classified material.
    pub fn grants_access(&self) -> bool {
        matches!(self, ClearanceStatus::Active)
    }
}

impl From<Recommendation> for ClearanceStatus {
    fn from(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::Grant => ClearanceStatus::Active,
            Recommendation::Deny => ClearanceStatus::Pending,
            Recommendation::Revoke => ClearanceStatus::Revoked,
            Recommendation::ManualReview => ClearanceStatus::Suspended,
        }
    }
}

impl fmt::Display for ClearanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
