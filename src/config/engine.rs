//! Rule engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::adjudication::AdjudicationRules;

/// Weights and thresholds for the adjudication rules
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_alcohol_weight")]
    pub alcohol_weight: f64,

    #[serde(default = "default_drug_weight")]
    pub drug_weight: f64,

    #[serde(default = "default_felony_weight")]
    pub felony_weight: f64,

    #[serde(default = "default_multiple_charges_weight")]
    pub multiple_charges_weight: f64,

    #[serde(default = "default_revoke_threshold")]
    pub revoke_threshold: f64,

    #[serde(default = "default_review_threshold")]
    pub review_threshold: f64,

    #[serde(default = "default_max_risk_score")]
    pub max_risk_score: f64,

    /// Characters of the concern statement quoted per citation
    #[serde(default = "default_citation_excerpt_chars")]
    pub citation_excerpt_chars: usize,
}

impl EngineConfig {
    /// Rules the engine should run with
    pub fn rules(&self) -> AdjudicationRules {
        AdjudicationRules {
            alcohol_weight: self.alcohol_weight,
            drug_weight: self.drug_weight,
            felony_weight: self.felony_weight,
            multiple_charges_weight: self.multiple_charges_weight,
            revoke_threshold: self.revoke_threshold,
            review_threshold: self.review_threshold,
            max_risk_score: self.max_risk_score,
            citation_excerpt_chars: self.citation_excerpt_chars,
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let weights = [
            ("alcohol_weight", self.alcohol_weight),
            ("drug_weight", self.drug_weight),
            ("felony_weight", self.felony_weight),
            ("multiple_charges_weight", self.multiple_charges_weight),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ValidationError::NegativeWeight(name));
            }
        }

        let thresholds = [
            ("review_threshold", self.review_threshold),
            ("revoke_threshold", self.revoke_threshold),
            ("max_risk_score", self.max_risk_score),
        ];
        for (name, threshold) in thresholds {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(ValidationError::NonPositiveThreshold(name));
            }
        }

        if self.review_threshold > self.revoke_threshold
            || self.revoke_threshold > self.max_risk_score
        {
            return Err(ValidationError::ThresholdsOutOfOrder);
        }

        if self.citation_excerpt_chars == 0 {
            return Err(ValidationError::InvalidExcerptLength);
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alcohol_weight: default_alcohol_weight(),
            drug_weight: default_drug_weight(),
            felony_weight: default_felony_weight(),
            multiple_charges_weight: default_multiple_charges_weight(),
            revoke_threshold: default_revoke_threshold(),
            review_threshold: default_review_threshold(),
            max_risk_score: default_max_risk_score(),
            citation_excerpt_chars: default_citation_excerpt_chars(),
        }
    }
}

fn default_alcohol_weight() -> f64 {
    2.0
}

fn default_drug_weight() -> f64 {
    2.0
}

fn default_felony_weight() -> f64 {
    3.0
}

fn default_multiple_charges_weight() -> f64 {
    2.0
}

fn default_revoke_threshold() -> f64 {
    4.0
}

fn default_review_threshold() -> f64 {
    2.0
}

fn default_max_risk_score() -> f64 {
    10.0
}

fn default_citation_excerpt_chars() -> usize {
    150
}
