//! Trait axes and the four-axis value shapes built on them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Percentage, ValidationError};

/// One of the four behavioral dimensions derived from voting history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// How often the user votes with the eventual majority.
    Conformity,
    /// How quickly the user casts a vote.
    Speed,
    /// How many distinct topic categories the user votes on.
    Diversity,
    /// How often the user takes the minority side of a lopsided question.
    Courage,
}

impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Axis; 4] = [Axis::Conformity, Axis::Speed, Axis::Diversity, Axis::Courage];

    /// Stable wire name of the axis.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Conformity => "conformity",
            Axis::Speed => "speed",
            Axis::Diversity => "diversity",
            Axis::Courage => "courage",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Axis::ALL
            .into_iter()
            .find(|axis| axis.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("axis", format!("unknown axis '{}'", s)))
    }
}

/// A user's position on every axis, each in `[0, 100]`.
///
/// Profiles are immutable: recomputation produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitProfile {
    conformity: Percentage,
    speed: Percentage,
    diversity: Percentage,
    courage: Percentage,
}

impl TraitProfile {
    /// Profile sitting at the neutral point of every axis.
    pub const NEUTRAL: Self = Self {
        conformity: Percentage::NEUTRAL,
        speed: Percentage::NEUTRAL,
        diversity: Percentage::NEUTRAL,
        courage: Percentage::NEUTRAL,
    };

    /// Creates a profile, clamping each value into `[0, 100]`.
    pub const fn new(conformity: u8, speed: u8, diversity: u8, courage: u8) -> Self {
        Self {
            conformity: Percentage::new(conformity),
            speed: Percentage::new(speed),
            diversity: Percentage::new(diversity),
            courage: Percentage::new(courage),
        }
    }

    /// Creates a profile, rejecting any value above 100.
    pub fn try_new(
        conformity: u8,
        speed: u8,
        diversity: u8,
        courage: u8,
    ) -> Result<Self, ValidationError> {
        let check = |axis: Axis, value: u8| {
            Percentage::try_new(value).map_err(|_| {
                ValidationError::out_of_range(axis.as_str(), 0, 100, i32::from(value))
            })
        };

        Ok(Self {
            conformity: check(Axis::Conformity, conformity)?,
            speed: check(Axis::Speed, speed)?,
            diversity: check(Axis::Diversity, diversity)?,
            courage: check(Axis::Courage, courage)?,
        })
    }

    /// Builds a profile by evaluating `f` once per axis in canonical order.
    pub fn from_fn(mut f: impl FnMut(Axis) -> Percentage) -> Self {
        Self {
            conformity: f(Axis::Conformity),
            speed: f(Axis::Speed),
            diversity: f(Axis::Diversity),
            courage: f(Axis::Courage),
        }
    }

    /// Value on the given axis.
    pub fn get(&self, axis: Axis) -> Percentage {
        match axis {
            Axis::Conformity => self.conformity,
            Axis::Speed => self.speed,
            Axis::Diversity => self.diversity,
            Axis::Courage => self.courage,
        }
    }

    pub fn conformity(&self) -> Percentage {
        self.conformity
    }

    pub fn speed(&self) -> Percentage {
        self.speed
    }

    pub fn diversity(&self) -> Percentage {
        self.diversity
    }

    pub fn courage(&self) -> Percentage {
        self.courage
    }

    /// Iterates `(axis, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, Percentage)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}

impl Default for TraitProfile {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Per-axis similarity between two profiles, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisScores {
    pub conformity: Percentage,
    pub speed: Percentage,
    pub diversity: Percentage,
    pub courage: Percentage,
}

impl AxisScores {
    /// Builds scores by evaluating `f` once per axis in canonical order.
    pub fn from_fn(mut f: impl FnMut(Axis) -> Percentage) -> Self {
        Self {
            conformity: f(Axis::Conformity),
            speed: f(Axis::Speed),
            diversity: f(Axis::Diversity),
            courage: f(Axis::Courage),
        }
    }

    /// Score on the given axis.
    pub fn get(&self, axis: Axis) -> Percentage {
        match axis {
            Axis::Conformity => self.conformity,
            Axis::Speed => self.speed,
            Axis::Diversity => self.diversity,
            Axis::Courage => self.courage,
        }
    }

    /// Iterates `(axis, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, Percentage)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}
