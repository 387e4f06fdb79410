//! Axes Calculator - maps a behavior aggregate onto the four trait axes.

use crate::domain::foundation::Percentage;

use super::{Axis, BehaviorAggregate, TraitProfile};

/// Value used for an axis whose ratio has a zero denominator.
pub const NEUTRAL_AXIS_VALUE: Percentage = Percentage::NEUTRAL;

/// Average vote time at or above which speed bottoms out at 0.
pub const SPEED_CEILING_SECONDS: f64 = 10.0;

/// Distinct categories at which diversity saturates at 100.
pub const DIVERSITY_SATURATION_CATEGORIES: f64 = 10.0;

/// Pure conversion from voting behavior to a trait profile.
pub struct AxesCalculator;

impl AxesCalculator {
    /// Computes the full trait profile for an aggregate.
    ///
    /// Total over every input: zero denominators fall back to
    /// [`NEUTRAL_AXIS_VALUE`] and every axis ends up inside `[0, 100]`.
    pub fn compute(aggregate: &BehaviorAggregate) -> TraitProfile {
        TraitProfile::from_fn(|axis| match axis {
            Axis::Conformity => Self::conformity(aggregate),
            Axis::Speed => Self::speed(aggregate),
            Axis::Diversity => Self::diversity(aggregate),
            Axis::Courage => Self::courage(aggregate),
        })
    }

    /// Share of votes cast with the eventual majority.
    pub fn conformity(aggregate: &BehaviorAggregate) -> Percentage {
        ratio_percent(aggregate.majority_count, aggregate.total_votes)
    }

    /// Inverse of average vote time, scaled against the 10 second ceiling.
    ///
    /// A NaN average is treated as the ceiling.
    pub fn speed(aggregate: &BehaviorAggregate) -> Percentage {
        let seconds = if aggregate.avg_vote_time_seconds.is_nan() {
            SPEED_CEILING_SECONDS
        } else {
            aggregate
                .avg_vote_time_seconds
                .clamp(0.0, SPEED_CEILING_SECONDS)
        };

        Percentage::from_f64_rounded((1.0 - seconds / SPEED_CEILING_SECONDS) * 100.0)
    }

    /// Breadth of categories voted on, saturating at ten.
    pub fn diversity(aggregate: &BehaviorAggregate) -> Percentage {
        let categories = f64::from(aggregate.unique_categories);
        Percentage::from_f64_rounded(categories / DIVERSITY_SATURATION_CATEGORIES * 100.0)
    }

    /// Share of lopsided questions where the user sided with the minority.
    pub fn courage(aggregate: &BehaviorAggregate) -> Percentage {
        ratio_percent(aggregate.minority_in_skewed, aggregate.skewed_questions)
    }
}

fn ratio_percent(numerator: u32, denominator: u32) -> Percentage {
    if denominator == 0 {
        return NEUTRAL_AXIS_VALUE;
    }
    Percentage::from_f64_rounded(f64::from(numerator) / f64::from(denominator) * 100.0)
}
