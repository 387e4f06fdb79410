//! Classification policy configuration

use serde::Deserialize;

use super::ValidationError;

/// Controls when a user's archetype is shown and recomputed
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationConfig {
    /// Below this many votes a classification is reported as provisional
    #[serde(default = "default_min_votes_for_reveal")]
    pub min_votes_for_reveal: u32,

    /// New votes required since the last classification before recomputing
    #[serde(default = "default_recompute_interval_votes")]
    pub recompute_interval_votes: u32,
}

fn default_min_votes_for_reveal() -> u32 {
    10
}

fn default_recompute_interval_votes() -> u32 {
    5
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            min_votes_for_reveal: default_min_votes_for_reveal(),
            recompute_interval_votes: default_recompute_interval_votes(),
        }
    }
}

impl ClassificationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recompute_interval_votes == 0 {
            return Err(ValidationError::InvalidRecomputeInterval);
        }
        Ok(())
    }
}
