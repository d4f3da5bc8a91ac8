//! Adapters - Implementations of port interfaces.
//!
//! - `cli` - Terminal rendering
//! - `events` - In-process event bus and logging subscriber
//! - `extraction` - Simulated document extraction
//! - `legacy` - Mock mainframe endpoint

pub mod cli;
pub mod events;
pub mod extraction;
pub mod legacy;

pub use events::{InMemoryEventBus, TracingEventHandler};
pub use extraction::{Scenario, SimulatedVlmExtractor, VLM_SYSTEM_PROMPT};
pub use legacy::MockMainframe;
