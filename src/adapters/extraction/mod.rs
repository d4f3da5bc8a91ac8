//! Extraction adapters.
//!
//! - `SimulatedVlmExtractor` - Canned records standing in for model inference

mod scenarios;
mod simulated_vlm;

pub use scenarios::Scenario;
pub use simulated_vlm::{SimulatedVlmExtractor, VLM_SYSTEM_PROMPT};
