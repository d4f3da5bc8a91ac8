//! Simulated vision-language extraction.
//!
//! Pretends to read a scanned report and returns the canned record for the
//! matching scenario. The file bytes are never inspected.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

use super::Scenario;
use crate::domain::incident::Incident;
use crate::ports::{DocumentExtractor, ExtractionError};

/// Instructions the production extractor would send to the vision model.
pub const VLM_SYSTEM_PROMPT: &str = "\
You are a law-enforcement records analyst. You will receive a scanned police
report. Extract a single JSON object with exactly these fields:

  report_id          string, the agency report number
  date               string, incident date as YYYY-MM-DD
  subject_name       string, full name of the primary subject
  location           string or null
  narrative_summary  string, two to five sentences, factual, no speculation
  charges            array of { description, severity, statute }
                     severity is one of Felony, Misdemeanor, Infraction, Unknown
                     statute is the cited code section or null
  alcohol_involved   boolean, true if the report mentions alcohol in any way

Do not infer charges that are not written on the report. If a field is
illegible, use Unknown for severity and null for optional strings.
Return only the JSON object.";

const PROCESSING_STAGES: [&str; 3] = [
    "reading pixel data",
    "detecting text regions",
    "extracting structured data",
];

/// Extractor that returns preset records after a simulated delay.
#[derive(Debug, Clone, Default)]
pub struct SimulatedVlmExtractor {
    stage_latency: Duration,
}

impl SimulatedVlmExtractor {
    /// Creates an extractor with no artificial delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delay applied to each simulated processing stage.
    pub fn with_stage_latency(mut self, latency: Duration) -> Self {
        self.stage_latency = latency;
        self
    }
}

#[async_trait]
impl DocumentExtractor for SimulatedVlmExtractor {
    async fn extract(&self, file_name: &str, bytes: &[u8]) -> Result<Incident, ExtractionError> {
        if file_name.trim().is_empty() {
            return Err(ExtractionError::UnsupportedDocument(
                "file name is empty".to_string(),
            ));
        }

        let scenario = Scenario::from_file_name(file_name);
        info!(file_name, bytes = bytes.len(), scenario = %scenario, "extracting case file");

        for stage in PROCESSING_STAGES {
            debug!(stage, "extraction stage");
            if !self.stage_latency.is_zero() {
                sleep(self.stage_latency).await;
            }
        }

        let incident = scenario.incident()?;
        info!(report_id = %incident.report_id(), charges = incident.charge_count(), "extraction complete");
        Ok(incident)
    }
}
