//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Modulus applied to the file-name digest when deriving a subject ID.
const SUBJECT_NUMBER_SPACE: u64 = 100_000;

/// Identifier of the person a case is about (e.g. `SUBJ-12345`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    /// Creates a new SubjectId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("subject_id"));
        }
        Ok(Self(id))
    }

    /// Derives a stable subject ID from an uploaded file name.
    ///
    /// The first eight bytes of the SHA-256 digest are read as a big-endian
    /// integer and reduced to five digits, so the same file name always maps
    /// to the same subject.
    pub fn from_file_name(file_name: &str) -> Self {
        let digest = Sha256::digest(file_name.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let number = u64::from_be_bytes(prefix) % SUBJECT_NUMBER_SPACE;
        Self(format!("SUBJ-{:05}", number))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubjectId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Law-enforcement report reference (e.g. `LEA-2024-8892`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Creates a new ReportId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("report_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an adjudication decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionId(Uuid);

impl DecisionId {
    /// Creates a new random DecisionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a DecisionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DecisionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DecisionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_id_rejects_empty() {
        assert!(SubjectId::new("").is_err());
        assert!(SubjectId::new("   ").is_err());
    }

    #[test]
    fn subject_id_from_file_name_is_deterministic() {
        let a = SubjectId::from_file_name("dui_report.pdf");
        let b = SubjectId::from_file_name("dui_report.pdf");
        assert_eq!(a, b);
    }

    #[test]
    fn subject_id_from_file_name_has_expected_shape() {
        let id = SubjectId::from_file_name("drug_report.pdf");
        let s = id.as_str();
        assert!(s.starts_with("SUBJ-"));
        assert_eq!(s.len(), "SUBJ-".len() + 5);
        assert!(s["SUBJ-".len()..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn subject_id_parses_from_str() {
        let id: SubjectId = "SUBJ-12345".parse().unwrap();
        assert_eq!(id.to_string(), "SUBJ-12345");
    }

    #[test]
    fn report_id_rejects_empty() {
        assert!(ReportId::new("").is_err());
        assert_eq!(ReportId::new("LEA-1").unwrap().as_str(), "LEA-1");
    }

    #[test]
    fn decision_id_roundtrips_through_string() {
        let id = DecisionId::new();
        let parsed: DecisionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
