//! Application layer - Pipeline orchestration.
//!
//! Coordinates the domain with the extraction, mainframe and event ports.

mod anti_corruption_layer;
pub mod handlers;

pub use anti_corruption_layer::{AclSettings, AntiCorruptionLayer, QueuedUpdate};
pub use handlers::{
    ForceSyncCommand, ForceSyncHandler, ProcessCaseCommand, ProcessCaseError, ProcessCaseHandler,
    ProcessCaseResult,
};
