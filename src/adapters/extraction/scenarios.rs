//! Canned incident records served by the simulated extractor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ReportId, ValidationError};
use crate::domain::incident::{Charge, Incident, Severity};

/// Preset case files the demo can "extract".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Scanned DUI arrest report.
    Dui,
    /// Marijuana possession report.
    DrugPossession,
    /// Non-derogatory contact report.
    Clean,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Dui, Scenario::DrugPossession, Scenario::Clean];

    /// Chooses a scenario from an uploaded file name.
    ///
    /// Anything not recognised falls back to the DUI report.
    pub fn from_file_name(file_name: &str) -> Self {
        let name = file_name.to_lowercase();
        if name.contains("drug") {
            Scenario::DrugPossession
        } else if name.contains("clean") {
            Scenario::Clean
        } else {
            Scenario::Dui
        }
    }

    /// Default file name for the scenario.
    pub fn file_name(&self) -> &'static str {
        match self {
            Scenario::Dui => "arrest_report_scanned.pdf",
            Scenario::DrugPossession => "drug_report.pdf",
            Scenario::Clean => "clean_record.pdf",
        }
    }

    /// Builds the preset record.
    pub fn incident(&self) -> Result<Incident, ValidationError> {
        match self {
            Scenario::Dui => dui_report(),
            Scenario::DrugPossession => drug_possession_report(),
            Scenario::Clean => clean_report(),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scenario::Dui => "DUI Incident (Alcohol)",
            Scenario::DrugPossession => "Drug Possession",
            Scenario::Clean => "Clean Record",
        };
        write!(f, "{}", s)
    }
}

fn dui_report() -> Result<Incident, ValidationError> {
    let charges = vec![
        Charge::new(
            "Driving Under Influence of Alcohol",
            Severity::Misdemeanor,
            Some("VC 23152(a)".to_string()),
        )?,
        Charge::new(
            "Reckless Driving",
            Severity::Misdemeanor,
            Some("VC 23103".to_string()),
        )?,
    ];

    Ok(Incident::new(
        ReportId::new("LEA-2024-8892")?,
        Incident::parse_date("2024-05-12")?,
        "John Doe",
        "Subject observed weaving across lanes at 0145 hours. \
         Vehicle pulled over. Strong odor of alcoholic beverage detected. \
         Field sobriety tests administered - subject failed horizontal gaze nystagmus, \
         walk-and-turn, and one-leg stand. Refused breathalyzer. \
         Subject stated 'I only had two beers' during questioning.",
        charges,
        true,
    )?
    .with_location("Interstate 95, Exit 42"))
}

fn drug_possession_report() -> Result<Incident, ValidationError> {
    let charges = vec![Charge::new(
        "Possession of Controlled Substance",
        Severity::Misdemeanor,
        Some("HS 11357(b)".to_string()),
    )?];

    Ok(Incident::new(
        ReportId::new("LEA-2024-9127")?,
        Incident::parse_date("2024-08-03")?,
        "Jane Smith",
        "Officers responded to a report of suspicious activity in a parked vehicle. \
         Subject was found in possession of approximately 14 grams of marijuana and a glass pipe. \
         Subject cooperated and admitted recreational use.",
        charges,
        false,
    )?
    .with_location("Riverside Park, North Lot"))
}

fn clean_report() -> Result<Incident, ValidationError> {
    Ok(Incident::new(
        ReportId::new("LEA-2024-0417")?,
        Incident::parse_date("2024-02-19")?,
        "Alex Morgan",
        "Subject reported a lost wallet at the front desk. No enforcement action taken.",
        Vec::new(),
        false,
    )?
    .with_location("Central Precinct"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_selects_scenario() {
        assert_eq!(Scenario::from_file_name("DRUG_report.pdf"), Scenario::DrugPossession);
        assert_eq!(Scenario::from_file_name("clean_record.pdf"), Scenario::Clean);
        assert_eq!(Scenario::from_file_name("dui_report.pdf"), Scenario::Dui);
        assert_eq!(Scenario::from_file_name("whatever.txt"), Scenario::Dui);
    }

    #[test]
    fn default_file_names_select_their_own_scenario() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_file_name(scenario.file_name()), scenario);
        }
    }

    #[test]
    fn every_scenario_builds() {
        for scenario in Scenario::ALL {
            assert!(scenario.incident().is_ok(), "{} failed to build", scenario);
        }
    }

    #[test]
    fn dui_record_matches_arrest_report() {
        let incident = Scenario::Dui.incident().unwrap();
        assert_eq!(incident.report_id().as_str(), "LEA-2024-8892");
        assert_eq!(incident.subject_name(), "John Doe");
        assert_eq!(incident.location(), Some("Interstate 95, Exit 42"));
        assert_eq!(incident.charge_count(), 2);
        assert!(incident.alcohol_involved());
        assert_eq!(incident.charges()[0].statute(), Some("VC 23152(a)"));
    }

    #[test]
    fn clean_record_has_no_charges() {
        let incident = Scenario::Clean.incident().unwrap();
        assert_eq!(incident.charge_count(), 0);
        assert!(!incident.alcohol_involved());
    }
}
