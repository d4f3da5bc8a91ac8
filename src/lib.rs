//! ClearanceOS - Automated adjudication prototype
//!
//! Runs a scanned case file through simulated extraction, SEAD 4 guideline
//! lookup and a deterministic rule engine, then holds the decision in a
//! dual-status buffer until the legacy mainframe is synced.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
