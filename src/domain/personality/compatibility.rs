//! Compatibility Engine - symmetric similarity between two trait profiles.
//!
//! # Algorithm
//!
//! 1. Per axis: `score = 100 - |mine - theirs|`
//! 2. Weighted base: conformity 30%, speed 20%, diversity 25%, courage 25%
//! 3. Complementary bonus on courage (5) and speed (3) when the distance
//!    exceeds 50, scaling linearly to the full bonus at distance 100
//! 4. Clamp to `[0, 100]` and round
//! 5. Label from ordered thresholds
//! 6. Common ground (`>= 70`) and differences (`<= 40`) in canonical axis order

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

use super::{Axis, AxisScores, TraitProfile};

/// Axis weights in whole percent, canonical order. Sum to 100.
pub const AXIS_WEIGHTS: [(Axis, u8); 4] = [
    (Axis::Conformity, 30),
    (Axis::Speed, 20),
    (Axis::Diversity, 25),
    (Axis::Courage, 25),
];

/// Axes where large divergence is partly rewarded, with the full bonus size.
pub const COMPLEMENTARY_BONUSES: [(Axis, f64); 2] = [(Axis::Courage, 5.0), (Axis::Speed, 3.0)];

/// Distance an axis must exceed before its complementary bonus applies.
pub const COMPLEMENTARY_DISTANCE_THRESHOLD: u8 = 50;

/// Axis score at or above which the axis counts as common ground.
pub const COMMON_GROUND_THRESHOLD: u8 = 70;

/// Axis score at or below which the axis counts as a difference.
pub const DIFFERENCE_THRESHOLD: u8 = 40;

/// Qualitative tier of an overall compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompatibilityLabel {
    /// 85 and above.
    Soulmate,
    /// 70 to 84.
    VeryCompatible,
    /// 50 to 69.
    Compatible,
    /// 30 to 49.
    Different,
    /// Below 30.
    Opposite,
}

impl CompatibilityLabel {
    /// Labels from the highest tier down.
    pub const ALL: [CompatibilityLabel; 5] = [
        Self::Soulmate,
        Self::VeryCompatible,
        Self::Compatible,
        Self::Different,
        Self::Opposite,
    ];

    /// Lowest overall score that earns this label.
    pub fn min_score(&self) -> u8 {
        match self {
            Self::Soulmate => 85,
            Self::VeryCompatible => 70,
            Self::Compatible => 50,
            Self::Different => 30,
            Self::Opposite => 0,
        }
    }

    /// Picks the highest tier whose minimum the score reaches.
    pub fn from_score(score: Percentage) -> Self {
        Self::ALL
            .into_iter()
            .find(|label| score.value() >= label.min_score())
            .unwrap_or(Self::Opposite)
    }

    /// Stable wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soulmate => "soulmate",
            Self::VeryCompatible => "veryCompatible",
            Self::Compatible => "compatible",
            Self::Different => "different",
            Self::Opposite => "opposite",
        }
    }
}

impl fmt::Display for CompatibilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of comparing two profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub overall_score: Percentage,
    pub axis_scores: AxisScores,
    pub label: CompatibilityLabel,
    /// Axes scoring at least 70, canonical order.
    pub common_ground: Vec<Axis>,
    /// Axes scoring at most 40, canonical order.
    pub differences: Vec<Axis>,
}

/// Pure compatibility computation.
pub struct CompatibilityEngine;

impl CompatibilityEngine {
    /// Compares two profiles.
    ///
    /// Symmetric: swapping the arguments yields an identical result.
    pub fn compute(mine: &TraitProfile, theirs: &TraitProfile) -> CompatibilityResult {
        let axis_scores = Self::axis_scores(mine, theirs);
        let raw = Self::base_score(&axis_scores) + Self::complementary_bonus(mine, theirs);
        let overall_score = Percentage::from_f64_rounded(raw.clamp(0.0, 100.0));

        let mut common_ground = Vec::new();
        let mut differences = Vec::new();
        for (axis, score) in axis_scores.iter() {
            if score.value() >= COMMON_GROUND_THRESHOLD {
                common_ground.push(axis);
            } else if score.value() <= DIFFERENCE_THRESHOLD {
                differences.push(axis);
            }
        }

        CompatibilityResult {
            overall_score,
            axis_scores,
            label: CompatibilityLabel::from_score(overall_score),
            common_ground,
            differences,
        }
    }

    /// Per-axis similarity, `100 - |mine - theirs|`.
    pub fn axis_scores(mine: &TraitProfile, theirs: &TraitProfile) -> AxisScores {
        AxisScores::from_fn(|axis| Percentage::new(100 - mine.get(axis).distance(theirs.get(axis))))
    }

    /// Weighted mean of the axis scores, before any bonus.
    pub fn base_score(axis_scores: &AxisScores) -> f64 {
        let weighted: u32 = AXIS_WEIGHTS
            .iter()
            .map(|(axis, weight)| u32::from(axis_scores.get(*axis).value()) * u32::from(*weight))
            .sum();
        f64::from(weighted) / 100.0
    }

    /// Bonus for strongly diverging on complementary axes.
    pub fn complementary_bonus(mine: &TraitProfile, theirs: &TraitProfile) -> f64 {
        COMPLEMENTARY_BONUSES
            .iter()
            .map(|(axis, bonus)| {
                let distance = mine.get(*axis).distance(theirs.get(*axis));
                if distance > COMPLEMENTARY_DISTANCE_THRESHOLD {
                    let excess = f64::from(distance - COMPLEMENTARY_DISTANCE_THRESHOLD);
                    bonus * excess / f64::from(COMPLEMENTARY_DISTANCE_THRESHOLD)
                } else {
                    0.0
                }
            })
            .sum()
    }
}
