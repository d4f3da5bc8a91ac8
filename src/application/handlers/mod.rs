//! Command handlers.

mod force_sync;
mod process_case;

pub use force_sync::{ForceSyncCommand, ForceSyncHandler};
pub use process_case::{
    ProcessCaseCommand, ProcessCaseError, ProcessCaseHandler, ProcessCaseResult,
};
