//! Legacy module - the dual-status model behind the anti-corruption layer.
//!
//! ClearanceOS decides in real time; the mainframe only learns about a
//! decision when a sync copies the local status across. Until then the two
//! values may disagree and the subject is flagged as pending.

mod clearance_status;
mod errors;
mod events;
mod legacy_status;
mod soap_envelope;
mod sync_state;

pub use clearance_status::ClearanceStatus;
pub use errors::AclError;
pub use events::{DecisionPublished, LegacySyncCompleted, SyncTrigger};
pub use legacy_status::LegacyStatus;
pub use soap_envelope::{build_status_update, SoapEnvelope};
pub use sync_state::SyncState;
