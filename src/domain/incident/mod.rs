//! Incident domain module.
//!
//! The fixed-shape record that the extraction stage produces and the
//! adjudication engine consumes.

mod charge;
mod incident;

pub use charge::{Charge, Severity};
pub use incident::Incident;
