//! Terminal presentation helpers for the `clearance-os` binary.

pub mod render;
