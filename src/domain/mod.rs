//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `incident` - The structured record produced by extraction
//! - `guidelines` - Static SEAD 4 excerpts and keyword lookup
//! - `adjudication` - Deterministic rule engine and Statement of Reasons
//! - `legacy` - Local vs. mainframe dual status and the SOAP translation

pub mod adjudication;
pub mod foundation;
pub mod guidelines;
pub mod incident;
pub mod legacy;
