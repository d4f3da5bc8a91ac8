//! Deterministic rule engine.
//!
//! Plain IF/THEN rules over the incident record; no model inference.

use tracing::{debug, info};

use super::statement_of_reasons::generate_statement_of_reasons;
use super::{
    AdjudicationDecision, AdjudicationRules, Citation, DecisionLogEntry, Recommendation, RiskScore,
};
use crate::domain::foundation::{DecisionId, Timestamp};
use crate::domain::guidelines::{guideline, search_guidelines, GuidelineCode};
use crate::domain::incident::Incident;

const REVOKE_FINDING: &str =
    "Risk threshold exceeded. Immediate revocation recommended pending investigation.";
const REVIEW_FINDING: &str = "Case requires Subject Interview per SOP-101 and adjudicator review.";
const DENY_FINDING: &str = "Derogatory information present. Clearance application denied.";
const GRANT_FINDING: &str = "No disqualifying information found.";

/// Rule engine with an in-memory decision log.
#[derive(Debug, Clone, Default)]
pub struct AdjudicationEngine {
    rules: AdjudicationRules,
    decision_log: Vec<DecisionLogEntry>,
}

/// Intermediate state while rules fire.
struct Assessment {
    score: RiskScore,
    citations: Vec<Citation>,
    findings: Vec<String>,
}

impl Assessment {
    fn new() -> Self {
        Self {
            score: RiskScore::ZERO,
            citations: Vec::new(),
            findings: Vec::new(),
        }
    }

    fn flag(&mut self, code: GuidelineCode, weight: f64, excerpt_chars: usize, finding: String) {
        debug!(guideline = %code, weight, "rule fired");
        self.citations
            .push(Citation::from_guideline(guideline(code), excerpt_chars));
        self.score = self.score.add(weight);
        self.findings.push(finding);
    }
}

impl AdjudicationEngine {
    /// Creates an engine with the default rule weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom weights and thresholds.
    pub fn with_rules(rules: AdjudicationRules) -> Self {
        Self {
            rules,
            decision_log: Vec::new(),
        }
    }

    pub fn rules(&self) -> &AdjudicationRules {
        &self.rules
    }

    /// Decisions made so far, oldest first.
    pub fn decision_log(&self) -> &[DecisionLogEntry] {
        &self.decision_log
    }

    /// Runs the rule set against an incident and logs the outcome.
    pub fn adjudicate_case(&mut self, incident: &Incident) -> AdjudicationDecision {
        let rules = &self.rules;
        let related_guidelines: Vec<GuidelineCode> = search_guidelines(&incident.search_text())
            .into_iter()
            .map(|m| m.code)
            .collect();
        debug!(
            report_id = %incident.report_id(),
            related = ?related_guidelines,
            "guideline lookup complete"
        );

        let mut assessment = Assessment::new();

        // Alcohol involvement
        if incident.alcohol_involved() {
            assessment.flag(
                GuidelineCode::G,
                rules.alcohol_weight,
                rules.citation_excerpt_chars,
                format!(
                    "Alcohol involvement detected in incident dated {}.",
                    incident.date()
                ),
            );
        }

        // Drug involvement surfaced by the lookup
        if related_guidelines.contains(&GuidelineCode::H) {
            assessment.flag(
                GuidelineCode::H,
                rules.drug_weight,
                rules.citation_excerpt_chars,
                format!(
                    "Drug or controlled substance involvement indicated in report {}.",
                    incident.report_id()
                ),
            );
        }

        // Criminal conduct
        let has_felony = incident.has_felony();
        if has_felony || incident.charge_count() > 1 {
            let weight = if has_felony {
                rules.felony_weight
            } else {
                rules.multiple_charges_weight
            };
            let first = incident
                .charges()
                .first()
                .map(|c| c.description())
                .unwrap_or_default();
            assessment.flag(
                GuidelineCode::J,
                weight,
                rules.citation_excerpt_chars,
                format!(
                    "Subject faces {} charge(s), including {}.",
                    incident.charge_count(),
                    first
                ),
            );
        }

        let recommendation = self.classify(assessment.score);
        assessment.findings.push(
            match recommendation {
                Recommendation::Revoke => REVOKE_FINDING,
                Recommendation::ManualReview => REVIEW_FINDING,
                Recommendation::Deny => DENY_FINDING,
                Recommendation::Grant => GRANT_FINDING,
            }
            .to_string(),
        );

        let generated_sor =
            generate_statement_of_reasons(incident, &assessment.findings, &assessment.citations);

        let decision = AdjudicationDecision {
            id: DecisionId::new(),
            recommendation,
            risk_score: assessment.score.capped_at(self.rules.max_risk_score),
            citations: assessment.citations,
            related_guidelines,
            generated_sor,
            timestamp: Timestamp::now(),
        };

        self.decision_log.push(DecisionLogEntry {
            decision_id: decision.id,
            incident_id: incident.report_id().clone(),
            recommendation,
            timestamp: decision.timestamp,
        });

        info!(
            report_id = %incident.report_id(),
            recommendation = %decision.recommendation,
            risk_score = %decision.risk_score,
            citations = decision.citations.len(),
            "case adjudicated"
        );

        decision
    }

    /// Maps an uncapped score onto the recommendation ladder.
    pub fn classify(&self, score: RiskScore) -> Recommendation {
        let value = score.value();
        if value >= self.rules.revoke_threshold {
            Recommendation::Revoke
        } else if value >= self.rules.review_threshold {
            Recommendation::ManualReview
        } else if value > 0.0 {
            Recommendation::Deny
        } else {
            Recommendation::Grant
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ReportId;
    use crate::domain::incident::{Charge, Severity};

    fn charge(description: &str, severity: Severity) -> Charge {
        Charge::new(description, severity, None).unwrap()
    }

    fn incident(narrative: &str, charges: Vec<Charge>, alcohol: bool) -> Incident {
        Incident::new(
            ReportId::new("LEA-TEST-1").unwrap(),
            Incident::parse_date("2024-05-12").unwrap(),
            "John Doe",
            narrative,
            charges,
            alcohol,
        )
        .unwrap()
    }

    #[test]
    fn clean_record_is_granted() {
        let mut engine = AdjudicationEngine::new();
        let decision = engine.adjudicate_case(&incident("Routine check.", vec![], false));

        assert_eq!(decision.recommendation, Recommendation::Grant);
        assert!(decision.risk_score.is_zero());
        assert!(decision.citations.is_empty());
        assert!(!decision.generated_sor.contains("LEGAL BASIS"));
        assert!(decision.generated_sor.ends_with(GRANT_FINDING));
    }

    #[test]
    fn alcohol_with_two_misdemeanors_is_revoked() {
        let mut engine = AdjudicationEngine::new();
        let decision = engine.adjudicate_case(&incident(
            "Strong odor of alcoholic beverage.",
            vec![
                charge("Driving Under Influence of Alcohol", Severity::Misdemeanor),
                charge("Reckless Driving", Severity::Misdemeanor),
            ],
            true,
        ));

        assert_eq!(decision.recommendation, Recommendation::Revoke);
        assert_eq!(decision.risk_score.value(), 4.0);
        assert!(decision.cites(GuidelineCode::G));
        assert!(decision.cites(GuidelineCode::J));
        assert!(decision
            .generated_sor
            .contains("Subject faces 2 charge(s), including Driving Under Influence of Alcohol."));
        assert!(decision
            .generated_sor
            .contains("Alcohol involvement detected in incident dated 2024-05-12."));
    }

    #[test]
    fn alcohol_alone_needs_manual_review() {
        let mut engine = AdjudicationEngine::new();
        let decision = engine.adjudicate_case(&incident(
            "Open container.",
            vec![charge("Open Container", Severity::Infraction)],
            true,
        ));

        assert_eq!(decision.recommendation, Recommendation::ManualReview);
        assert_eq!(decision.citations.len(), 1);
        assert_eq!(decision.citations[0].guideline, "Guideline G");
    }

    #[test]
    fn single_felony_needs_manual_review() {
        let mut engine = AdjudicationEngine::new();
        let decision = engine.adjudicate_case(&incident(
            "Vehicle stop.",
            vec![charge("Grand Theft Auto", Severity::Felony)],
            false,
        ));

        assert_eq!(decision.recommendation, Recommendation::ManualReview);
        assert_eq!(decision.risk_score.value(), 3.0);
        assert!(decision.cites(GuidelineCode::J));
    }

    #[test]
    fn single_misdemeanor_without_flags_is_granted() {
        let mut engine = AdjudicationEngine::new();
        let decision = engine.adjudicate_case(&incident(
            "Shoplifting report.",
            vec![charge("Petty Theft", Severity::Misdemeanor)],
            false,
        ));

        assert_eq!(decision.recommendation, Recommendation::Grant);
    }

    #[test]
    fn drug_keyword_cites_guideline_h() {
        let mut engine = AdjudicationEngine::new();
        let decision = engine.adjudicate_case(&incident(
            "Marijuana found in glove box.",
            vec![charge("Possession", Severity::Misdemeanor)],
            false,
        ));

        assert_eq!(decision.recommendation, Recommendation::ManualReview);
        assert!(decision.cites(GuidelineCode::H));
        assert_eq!(decision.related_guidelines, vec![GuidelineCode::H]);
    }

    #[test]
    fn related_guidelines_do_not_add_risk_without_a_rule() {
        let mut engine = AdjudicationEngine::new();
        let decision = engine.adjudicate_case(&incident(
            "Allegation of harassment at the office.",
            vec![],
            false,
        ));

        assert_eq!(decision.related_guidelines, vec![GuidelineCode::D]);
        assert_eq!(decision.recommendation, Recommendation::Grant);
    }

    #[test]
    fn low_positive_score_is_denied() {
        let rules = AdjudicationRules {
            alcohol_weight: 1.0,
            ..AdjudicationRules::default()
        };
        let mut engine = AdjudicationEngine::with_rules(rules);
        let decision = engine.adjudicate_case(&incident("Drank at lunch.", vec![], true));

        assert_eq!(decision.recommendation, Recommendation::Deny);
        assert!(decision.generated_sor.ends_with(DENY_FINDING));
    }

    #[test]
    fn score_is_capped_but_ladder_uses_raw_value() {
        let rules = AdjudicationRules {
            felony_weight: 25.0,
            ..AdjudicationRules::default()
        };
        let mut engine = AdjudicationEngine::with_rules(rules);
        let decision = engine.adjudicate_case(&incident(
            "Armed robbery.",
            vec![charge("Robbery", Severity::Felony)],
            false,
        ));

        assert_eq!(decision.risk_score.value(), 10.0);
        assert_eq!(decision.recommendation, Recommendation::Revoke);
    }

    #[test]
    fn every_decision_is_logged() {
        let mut engine = AdjudicationEngine::new();
        let first = engine.adjudicate_case(&incident("", vec![], false));
        let second = engine.adjudicate_case(&incident("", vec![], true));

        let log = engine.decision_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].decision_id, first.id);
        assert_eq!(log[1].recommendation, second.recommendation);
        assert_eq!(log[1].incident_id.as_str(), "LEA-TEST-1");
    }

    #[test]
    fn classify_boundaries_are_inclusive() {
        let engine = AdjudicationEngine::new();
        assert_eq!(engine.classify(RiskScore::new(4.0)), Recommendation::Revoke);
        assert_eq!(engine.classify(RiskScore::new(3.99)), Recommendation::ManualReview);
        assert_eq!(engine.classify(RiskScore::new(2.0)), Recommendation::ManualReview);
        assert_eq!(engine.classify(RiskScore::new(0.5)), Recommendation::Deny);
        assert_eq!(engine.classify(RiskScore::ZERO), Recommendation::Grant);
    }
}
