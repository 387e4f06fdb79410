//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole number between 0 and 100 inclusive.
///
/// Deserialization rejects values above 100 instead of clamping, so a
/// stored trait profile can never smuggle an out-of-range axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Fifty percent, the neutral point of every trait axis.
    pub const NEUTRAL: Self = Self(50);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Rounds a real value to the nearest whole percent and clamps it into range.
    ///
    /// Halves round away from zero. NaN maps to zero.
    pub fn from_f64_rounded(value: f64) -> Self {
        let rounded = value.round().clamp(0.0, 100.0);
        // `as` saturates and maps NaN to 0
        Self(rounded as u8)
    }

    /// Returns the value as u8.
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `100 - value`.
    pub const fn complement(&self) -> Self {
        Self(100 - self.0)
    }

    /// Absolute distance between two percentages.
    pub const fn distance(&self, other: Percentage) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
