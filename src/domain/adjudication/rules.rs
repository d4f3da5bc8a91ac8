//! Tunable weights and thresholds of the rule ladder.

use serde::{Deserialize, Serialize};

/// Weights and thresholds the engine applies.
///
/// Defaults reproduce the published prototype behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjudicationRules {
    /// Added when the record flags alcohol involvement.
    pub alcohol_weight: f64,
    /// Added when the drug guideline is retrieved for the record.
    pub drug_weight: f64,
    /// Added for criminal conduct when any charge is a felony.
    pub felony_weight: f64,
    /// Added for criminal conduct when there are several non-felony charges.
    pub multiple_charges_weight: f64,
    /// Score at or above which revocation is recommended.
    pub revoke_threshold: f64,
    /// Score at or above which manual review is recommended.
    pub review_threshold: f64,
    /// Upper bound of the reported score.
    pub max_risk_score: f64,
    /// Characters of the concern statement quoted in each citation.
    pub citation_excerpt_chars: usize,
}

impl Default for AdjudicationRules {
    fn default() -> Self {
        Self {
            alcohol_weight: 2.0,
            drug_weight: 2.0,
            felony_weight: 3.0,
            multiple_charges_weight: 2.0,
            revoke_threshold: 4.0,
            review_threshold: 2.0,
            max_risk_score: 10.0,
            citation_excerpt_chars: 150,
        }
    }
}
