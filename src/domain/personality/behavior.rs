//! Voting-behavior aggregate supplied by the vote aggregation service.

use serde::{Deserialize, Serialize};

use super::ArchetypeId;

/// Raw counts describing how a user has voted so far.
///
/// The upstream aggregator guarantees non-negative counts and
/// `majority_count <= total_votes`; nothing here re-validates them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BehaviorAggregate {
    /// Votes cast in total.
    pub total_votes: u32,
    /// Votes cast with the eventual majority.
    pub majority_count: u32,
    /// Mean seconds between a question opening and the user's vote.
    pub avg_vote_time_seconds: f64,
    /// Distinct topic categories voted on.
    pub unique_categories: u32,
    /// Minority picks on lopsided questions.
    pub minority_in_skewed: u32,
    /// Lopsided questions the user has voted on.
    pub skewed_questions: u32,
    /// Archetype stored at the last classification, if any.
    #[serde(default)]
    pub current_type: Option<ArchetypeId>,
    /// `total_votes` at the time of the last classification.
    #[serde(default)]
    pub votes_analyzed: u32,
}

impl BehaviorAggregate {
    /// Votes cast since the last classification.
    ///
    /// Zero when the vote history shrank (for example after a reset).
    pub fn votes_since_classification(&self) -> u32 {
        self.total_votes.saturating_sub(self.votes_analyzed)
    }

    /// True once a classification has been stored for this user.
    pub fn has_been_classified(&self) -> bool {
        self.current_type.is_some()
    }
}
