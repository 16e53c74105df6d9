//! Percentile value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A position relative to a reference population, between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percentile(f64);

impl Percentile {
    /// Zero percentile.
    pub const MIN: Self = Self(0.0);

    /// The population midpoint, used wherever a dimension is missing.
    pub const NEUTRAL: Self = Self(50.0);

    /// One hundredth percentile.
    pub const MAX: Self = Self(100.0);

    /// Creates a new Percentile, clamping to valid range. NaN maps to neutral.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a Percentile, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "percentile",
                0.0,
                100.0,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the mirrored value (`100 - p`), used for inverted blends.
    pub fn inverted(&self) -> f64 {
        100.0 - self.0
    }

    /// Absolute distance between two percentiles.
    pub fn gap(&self, other: Percentile) -> f64 {
        (self.0 - other.0).abs()
    }

    /// Absolute distance from the population midpoint.
    pub fn deviation_from_neutral(&self) -> f64 {
        (self.0 - Self::NEUTRAL.0).abs()
    }
}

impl Default for Percentile {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<f64> for Percentile {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentile> for f64 {
    fn from(p: Percentile) -> Self {
        p.0
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
