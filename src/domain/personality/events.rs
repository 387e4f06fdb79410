//! Personality domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, Timestamp, UserId};

use super::{ArchetypeId, PersonalityClassification, TraitProfile};

/// Published whenever a user's classification is recomputed and stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityClassified {
    pub event_id: EventId,
    pub user_id: UserId,
    pub archetype_id: ArchetypeId,
    /// Archetype stored before this recompute, if any.
    pub previous_archetype: Option<ArchetypeId>,
    pub profile: TraitProfile,
    pub votes_analyzed: u32,
    pub classified_at: Timestamp,
}

domain_event!(
    PersonalityClassified,
    event_type = "personality.classified.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "Personality",
    occurred_at = classified_at,
    event_id = event_id
);

impl PersonalityClassified {
    pub fn from_classification(
        classification: &PersonalityClassification,
        previous_archetype: Option<ArchetypeId>,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            user_id: classification.user_id.clone(),
            archetype_id: classification.archetype_id,
            previous_archetype,
            profile: classification.profile,
            votes_analyzed: classification.votes_analyzed,
            classified_at: classification.classified_at,
        }
    }

    /// True when the user moved to a different archetype.
    pub fn archetype_changed(&self) -> bool {
        self.previous_archetype
            .map_or(true, |previous| previous != self.archetype_id)
    }
}
