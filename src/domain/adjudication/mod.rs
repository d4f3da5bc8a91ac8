//! Adjudication module - the rule-evaluation core.
//!
//! # Rule set
//!
//! | Rule | Trigger | Guideline | Weight (default) |
//! |------|---------|-----------|------------------|
//! | Alcohol | `alcohol_involved` | G | 2.0 |
//! | Drugs | lookup surfaced H | H | 2.0 |
//! | Criminal conduct | any felony, or more than one charge | J | 3.0 felony / 2.0 otherwise |
//!
//! The summed score is mapped onto REVOKE (>= 4), MANUAL_REVIEW (>= 2),
//! DENY (> 0) or GRANT. The reported score is capped at 10.

mod citation;
mod decision;
mod engine;
mod recommendation;
mod risk_score;
mod rules;
mod statement_of_reasons;

pub use citation::Citation;
pub use decision::{AdjudicationDecision, DecisionLogEntry};
pub use engine::AdjudicationEngine;
pub use recommendation::Recommendation;
pub use risk_score::RiskScore;
pub use rules::AdjudicationRules;
pub use statement_of_reasons::generate_statement_of_reasons;
