//! RecomputePolicy - decides whether a stored classification is stale.

use crate::config::ClassificationConfig;
use crate::domain::personality::BehaviorAggregate;

/// Why a classification was (or was not) recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeDecision {
    /// No archetype has been stored for the user yet.
    FirstClassification,
    /// Enough new votes arrived since the last classification.
    IntervalReached { new_votes: u32 },
    /// Vote history is shorter than when it was last classified.
    HistoryReset,
    /// The caller asked for a recompute regardless of history.
    Forced,
    /// Too few new votes; keep the stored classification.
    Skip { new_votes: u32 },
}

impl RecomputeDecision {
    pub fn should_recompute(&self) -> bool {
        !matches!(self, Self::Skip { .. })
    }
}

/// Recompute rule driven by `classification.recompute_interval_votes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecomputePolicy {
    interval_votes: u32,
}

impl RecomputePolicy {
    /// An interval of zero is treated as one.
    pub fn new(interval_votes: u32) -> Self {
        Self {
            interval_votes: interval_votes.max(1),
        }
    }

    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self::new(config.recompute_interval_votes)
    }

    pub fn interval_votes(&self) -> u32 {
        self.interval_votes
    }

    /// Evaluates the aggregate's classification bookkeeping.
    pub fn decide(&self, aggregate: &BehaviorAggregate, force: bool) -> RecomputeDecision {
        if force {
            return RecomputeDecision::Forced;
        }
        if !aggregate.has_been_classified() {
            return RecomputeDecision::FirstClassification;
        }
        if aggregate.total_votes < aggregate.votes_analyzed {
            return RecomputeDecision::HistoryReset;
        }

        let new_votes = aggregate.votes_since_classification();
        if new_votes >= self.interval_votes {
            RecomputeDecision::IntervalReached { new_votes }
        } else {
            RecomputeDecision::Skip { new_votes }
        }
    }
}

impl Default for RecomputePolicy {
    fn default() -> Self {
        Self::from_config(&ClassificationConfig::default())
    }
}
