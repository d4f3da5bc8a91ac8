//! Criminal charge value object and severity scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Severity class of a charge as written on the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Severity {
    Felony,
    Misdemeanor,
    Infraction,
    #[default]
    Unknown,
}

impl Severity {
    /// Relative weight of the severity class.
    ///
    /// Unknown sits between infraction and misdemeanor.
    pub fn weight(&self) -> f64 {
        match self {
            Severity::Felony => 3.0,
            Severity::Misdemeanor => 2.0,
            Severity::Infraction => 1.0,
            Severity::Unknown => 1.5,
        }
    }

    /// Returns true for felony charges.
    pub fn is_felony(&self) -> bool {
        matches!(self, Severity::Felony)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Felony => "Felony",
            Severity::Misdemeanor => "Misdemeanor",
            Severity::Infraction => "Infraction",
            Severity::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// A single charge filed against the subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    description: String,
    severity: Severity,
    statute: Option<String>,
}

impl Charge {
    /// Creates a charge.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the description is blank
    pub fn new(
        description: impl Into<String>,
        severity: Severity,
        statute: Option<String>,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("charge.description"));
        }
        Ok(Self {
            description,
            severity,
            statute,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn statute(&self) -> Option<&str> {
        self.statute.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_weights_follow_scale() {
        assert_eq!(Severity::Felony.weight(), 3.0);
        assert_eq!(Severity::Misdemeanor.weight(), 2.0);
        assert_eq!(Severity::Infraction.weight(), 1.0);
        assert_eq!(Severity::Unknown.weight(), 1.5);
    }

    #[test]
    fn severity_serializes_as_written() {
        assert_eq!(serde_json::to_string(&Severity::Felony).unwrap(), "\"Felony\"");
        let s: Severity = serde_json::from_str("\"Misdemeanor\"").unwrap();
        assert_eq!(s, Severity::Misdemeanor);
    }

    #[test]
    fn charge_rejects_blank_description() {
        assert!(Charge::new("  ", Severity::Felony, None).is_err());
    }

    #[test]
    fn charge_exposes_statute() {
        let charge = Charge::new(
            "Reckless Driving",
            Severity::Misdemeanor,
            Some("VC 23103".to_string()),
        )
        .unwrap();
        assert_eq!(charge.statute(), Some("VC 23103"));
        assert!(!charge.severity().is_felony());
    }
}
