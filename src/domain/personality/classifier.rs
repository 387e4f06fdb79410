//! Archetype Classifier - picks the best-scoring archetype for a profile.

use serde::{Deserialize, Serialize};

use super::{Archetype, ArchetypeId, TraitProfile, ARCHETYPE_CATALOG};

/// Score of a single archetype for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeScore {
    pub archetype_id: ArchetypeId,
    pub score: f64,
}

/// Full classification breakdown, for explaining why an archetype won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeRanking {
    /// The classified archetype.
    pub winner: ArchetypeId,
    /// Every archetype's score, in catalog order.
    pub scores: Vec<ArchetypeScore>,
}

impl ArchetypeRanking {
    /// Score recorded for a given archetype.
    pub fn score_for(&self, id: ArchetypeId) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.archetype_id == id)
            .map(|s| s.score)
    }

    /// Best-scoring archetype other than the winner (earliest on ties).
    pub fn runner_up(&self) -> Option<ArchetypeScore> {
        self.scores
            .iter()
            .filter(|s| s.archetype_id != self.winner)
            .fold(None, |best: Option<ArchetypeScore>, candidate| match best {
                Some(b) if b.score >= candidate.score => Some(b),
                _ => Some(*candidate),
            })
    }

    /// Lead of the winner over the runner-up, zero on a tie.
    pub fn margin(&self) -> f64 {
        let winner = self.score_for(self.winner).unwrap_or(0.0);
        self.runner_up()
            .map(|runner_up| winner - runner_up.score)
            .unwrap_or(winner)
    }
}

/// Classification over the fixed archetype catalog.
pub struct ArchetypeClassifier;

impl ArchetypeClassifier {
    /// Returns the archetype with the highest score.
    ///
    /// On equal scores the entry defined first in the catalog wins.
    pub fn classify(profile: &TraitProfile) -> &'static Archetype {
        &ARCHETYPE_CATALOG[first_maximum(&ARCHETYPE_CATALOG, profile)]
    }

    /// Scores every archetype and reports the winner.
    pub fn rank(profile: &TraitProfile) -> ArchetypeRanking {
        let winner = Self::classify(profile).id;
        let scores = ARCHETYPE_CATALOG
            .iter()
            .map(|archetype| ArchetypeScore {
                archetype_id: archetype.id,
                score: archetype.score(profile),
            })
            .collect();

        ArchetypeRanking { winner, scores }
    }
}

/// Index of the first entry holding the maximum score.
///
/// `catalog` must be non-empty; an empty slice yields index 0.
pub(crate) fn first_maximum(catalog: &[Archetype], profile: &TraitProfile) -> usize {
    let mut best_index = 0;
    let mut best_sum = None;

    for (index, archetype) in catalog.iter().enumerate() {
        let sum = archetype.weighted_sum(profile);
        // strict comparison keeps the earliest maximum
        if best_sum.map_or(true, |best| sum > best) {
            best_index = index;
            best_sum = Some(sum);
        }
    }

    best_index
}
