//! Incident record produced by document extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Charge;
use crate::domain::foundation::{ReportId, ValidationError};

/// Structured incident record.
///
/// # Invariants
///
/// - `subject_name` is non-empty
/// - every charge has a non-empty description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    report_id: ReportId,
    date: NaiveDate,
    subject_name: String,
    location: Option<String>,
    narrative_summary: String,
    charges: Vec<Charge>,
    alcohol_involved: bool,
}

impl Incident {
    /// Creates an incident record.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the subject name is blank
    pub fn new(
        report_id: ReportId,
        date: NaiveDate,
        subject_name: impl Into<String>,
        narrative_summary: impl Into<String>,
        charges: Vec<Charge>,
        alcohol_involved: bool,
    ) -> Result<Self, ValidationError> {
        let subject_name = subject_name.into();
        if subject_name.trim().is_empty() {
            return Err(ValidationError::empty_field("subject_name"));
        }
        Ok(Self {
            report_id,
            date,
            subject_name,
            location: None,
            narrative_summary: narrative_summary.into(),
            charges,
            alcohol_involved,
        })
    }

    /// Parses an ISO `YYYY-MM-DD` incident date.
    pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| ValidationError::invalid_format("date", e.to_string()))
    }

    /// Sets the location where the incident happened.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn report_id(&self) -> &ReportId {
        &self.report_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn narrative_summary(&self) -> &str {
        &self.narrative_summary
    }

    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    pub fn alcohol_involved(&self) -> bool {
        self.alcohol_involved
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of charges filed.
    pub fn charge_count(&self) -> usize {
        self.charges.len()
    }

    /// Returns true if any charge is a felony.
    pub fn has_felony(&self) -> bool {
        self.charges.iter().any(|c| c.severity().is_felony())
    }

    /// Text searched against the guideline keywords: the narrative followed
    /// by every charge description, space separated.
    pub fn search_text(&self) -> String {
        std::iter::once(self.narrative_summary.as_str())
            .chain(self.charges.iter().map(Charge::description))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
