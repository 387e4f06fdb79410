//! Stored classification of a user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

use super::{
    ArchetypeClassifier, ArchetypeId, ArchetypeRanking, AxesCalculator, BehaviorAggregate,
    TraitProfile,
};

/// What the caller persists after classifying a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityClassification {
    pub user_id: UserId,
    pub archetype_id: ArchetypeId,
    pub profile: TraitProfile,
    /// `total_votes` of the aggregate this was computed from.
    pub votes_analyzed: u32,
    pub classified_at: Timestamp,
}

impl PersonalityClassification {
    /// Runs aggregate -> axes -> archetype and returns the record with its ranking.
    pub fn from_aggregate(
        user_id: UserId,
        aggregate: &BehaviorAggregate,
        classified_at: Timestamp,
    ) -> (Self, ArchetypeRanking) {
        let profile = AxesCalculator::compute(aggregate);
        let ranking = ArchetypeClassifier::rank(&profile);

        let classification = Self {
            user_id,
            archetype_id: ranking.winner,
            profile,
            votes_analyzed: aggregate.total_votes,
            classified_at,
        };

        (classification, ranking)
    }
}
