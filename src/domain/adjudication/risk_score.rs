//! Risk score value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accumulated risk, never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    pub const ZERO: Self = Self(0.0);

    /// Creates a score, clamping negatives and NaN to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() || value < 0.0 {
            Self::ZERO
        } else {
            Self(value)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns a new score with `weight` added.
    pub fn add(self, weight: f64) -> Self {
        Self::new(self.0 + weight)
    }

    /// Caps the score at `max`.
    pub fn capped_at(self, max: f64) -> Self {
        Self::new(self.0.min(max))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
