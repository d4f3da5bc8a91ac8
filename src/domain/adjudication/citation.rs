//! Legal citation attached to a decision.

use serde::{Deserialize, Serialize};

use crate::domain::guidelines::Guideline;

/// Reference to the guideline a rule relied on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Label such as `Guideline G`.
    pub guideline: String,
    /// Truncated concern statement followed by `...`.
    pub text: String,
    /// Paragraph reference, e.g. `SEAD 4, Adjudicative Guidelines, Paragraph 21`.
    pub source_paragraph: String,
}

impl Citation {
    /// Builds a citation quoting the first `excerpt_chars` characters of the concern.
    pub fn from_guideline(guideline: &Guideline, excerpt_chars: usize) -> Self {
        Self {
            guideline: guideline.code.label(),
            text: format!("{}...", guideline.concern_excerpt(excerpt_chars)),
            source_paragraph: guideline.citation.to_string(),
        }
    }
}
