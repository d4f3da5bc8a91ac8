//! Recommendation outcome of an adjudication.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The enumerated outcomes the rule ladder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Grant,
    Deny,
    Revoke,
    ManualReview,
}

impl Recommendation {
    /// Wire/display form, e.g. `MANUAL_REVIEW`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Grant => "GRANT",
            Recommendation::Deny => "DENY",
            Recommendation::Revoke => "REVOKE",
            Recommendation::ManualReview => "MANUAL_REVIEW",
        }
    }

    /// Returns true when a human adjudicator still has to act.
    pub fn requires_human(&self) -> bool {
        matches!(self, Recommendation::ManualReview)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
