//! Personality module - trait profiles, archetypes and compatibility.
//!
//! # Components
//!
//! - `AxesCalculator` - behavior aggregate -> four-axis trait profile
//! - `ArchetypeClassifier` - trait profile -> one of eight archetypes
//! - `CompatibilityEngine` - two trait profiles -> symmetric compatibility
//!
//! # Design Philosophy
//!
//! Everything here is pure and stateless. Inputs are immutable `Copy`
//! values, nothing performs I/O, and every function is total over its
//! input domain, so the components can be called from any thread or
//! runtime without coordination.

mod archetype;
mod axes_calculator;
mod axis;
mod behavior;
mod classification;
mod classifier;
mod compatibility;
mod events;

pub use archetype::{Archetype, ArchetypeId, Polarity, WeightedTrait, ARCHETYPE_CATALOG};
pub use axes_calculator::{
    AxesCalculator, DIVERSITY_SATURATION_CATEGORIES, NEUTRAL_AXIS_VALUE, SPEED_CEILING_SECONDS,
};
pub use axis::{Axis, AxisScores, TraitProfile};
pub use behavior::BehaviorAggregate;
pub use classification::PersonalityClassification;
pub use classifier::{ArchetypeClassifier, ArchetypeRanking, ArchetypeScore};
pub use compatibility::{
    CompatibilityEngine, CompatibilityLabel, CompatibilityResult, AXIS_WEIGHTS,
    COMMON_GROUND_THRESHOLD, COMPLEMENTARY_BONUSES, COMPLEMENTARY_DISTANCE_THRESHOLD,
    DIFFERENCE_THRESHOLD,
};
pub use events::PersonalityClassified;

/// Maps a behavior aggregate to a trait profile.
pub fn compute_axes(aggregate: &BehaviorAggregate) -> TraitProfile {
    AxesCalculator::compute(aggregate)
}

/// Classifies a trait profile into its archetype.
pub fn classify(profile: &TraitProfile) -> &'static Archetype {
    ArchetypeClassifier::classify(profile)
}

/// Compares two trait profiles.
pub fn compute_compatibility(mine: &TraitProfile, theirs: &TraitProfile) -> CompatibilityResult {
    CompatibilityEngine::compute(mine, theirs)
}
