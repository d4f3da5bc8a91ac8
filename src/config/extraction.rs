//! Extraction configuration

use serde::Deserialize;
use std::time::Duration;

/// Simulated extractor timing
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Delay per simulated processing stage
    #[serde(default = "default_stage_latency_ms")]
    pub stage_latency_ms: u64,
}

impl ExtractionConfig {
    pub fn stage_latency(&self) -> Duration {
        Duration::from_millis(self.stage_latency_ms)
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            stage_latency_ms: default_stage_latency_ms(),
        }
    }
}

fn default_stage_latency_ms() -> u64 {
    500
}
