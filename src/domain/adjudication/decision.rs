//! Adjudication decision and audit log entry.

use serde::{Deserialize, Serialize};

use super::{Citation, Recommendation, RiskScore};
use crate::domain::foundation::{DecisionId, ReportId, Timestamp};
use crate::domain::guidelines::GuidelineCode;

/// Output of one adjudication run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjudicationDecision {
    pub id: DecisionId,
    pub recommendation: Recommendation,
    /// Capped at the engine's maximum.
    pub risk_score: RiskScore,
    /// Guidelines a rule actually relied on, in rule order.
    pub citations: Vec<Citation>,
    /// Every guideline the keyword lookup surfaced, cited or not.
    pub related_guidelines: Vec<GuidelineCode>,
    pub generated_sor: String,
    pub timestamp: Timestamp,
}

impl AdjudicationDecision {
    /// Returns true if the given guideline label (e.g. `Guideline G`) was cited.
    pub fn cites(&self, code: GuidelineCode) -> bool {
        let label = code.label();
        self.citations.iter().any(|c| c.guideline == label)
    }
}

/// Audit trail record kept by the engine for every decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionLogEntry {
    pub decision_id: DecisionId,
    pub incident_id: ReportId,
    pub recommendation: Recommendation,
    pub timestamp: Timestamp,
}
