//! Compatibility score value object (0-100 scale).
//!
//! Scores are assigned by the matching backend and carried as-is; this crate
//! never computes them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A compatibility percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityScore(u8);

impl CompatibilityScore {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new score, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "compatibility_score",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Creates a score from a fraction (0.0 to 1.0), as the backend wire
    /// format carries it.
    pub fn from_fraction(fraction: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&fraction) || fraction.is_nan() {
            return Err(ValidationError::invalid_format(
                "compatibility_score",
                format!("fraction {} is not within 0.0..=1.0", fraction),
            ));
        }
        Ok(Self((fraction * 100.0).round() as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for CompatibilityScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for CompatibilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% match", self.0)
    }
}
