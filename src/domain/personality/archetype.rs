//! Archetype catalog - the eight behavioral classifications and their weights.
//!
//! Each archetype scores a profile as a convex combination of axis values
//! (or their complements). Weights are whole percents summing to 100 so
//! scores compare exactly and ties are real ties.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::{Axis, TraitProfile};

/// Stable identifier of an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeId {
    Trailblazer,
    Guardian,
    Explorer,
    Rebel,
    Diplomat,
    Strategist,
    Specialist,
    CrowdSurfer,
}

impl ArchetypeId {
    /// Stable wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trailblazer => "trailblazer",
            Self::Guardian => "guardian",
            Self::Explorer => "explorer",
            Self::Rebel => "rebel",
            Self::Diplomat => "diplomat",
            Self::Strategist => "strategist",
            Self::Specialist => "specialist",
            Self::CrowdSurfer => "crowd_surfer",
        }
    }

    /// Catalog entry for this identifier.
    pub fn archetype(&self) -> &'static Archetype {
        &ARCHETYPE_CATALOG[self.catalog_index()]
    }

    fn catalog_index(&self) -> usize {
        match self {
            Self::Trailblazer => 0,
            Self::Guardian => 1,
            Self::Explorer => 2,
            Self::Rebel => 3,
            Self::Diplomat => 4,
            Self::Strategist => 5,
            Self::Specialist => 6,
            Self::CrowdSurfer => 7,
        }
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArchetypeId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ARCHETYPE_CATALOG
            .iter()
            .map(|archetype| archetype.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("archetype_id", format!("unknown archetype '{}'", s))
            })
    }
}

/// Whether an archetype rewards a high or a low value on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Scores the axis value itself.
    High,
    /// Scores `100 - value`.
    Low,
}

/// One weighted term of an archetype's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedTrait {
    pub axis: Axis,
    pub polarity: Polarity,
    /// Weight in whole percent.
    pub weight: u8,
}

impl WeightedTrait {
    const fn high(axis: Axis, weight: u8) -> Self {
        Self {
            axis,
            polarity: Polarity::High,
            weight,
        }
    }

    const fn low(axis: Axis, weight: u8) -> Self {
        Self {
            axis,
            polarity: Polarity::Low,
            weight,
        }
    }

    /// Contribution of this term in hundredths of a score point.
    fn contribution(&self, profile: &TraitProfile) -> u32 {
        let value = profile.get(self.axis);
        let oriented = match self.polarity {
            Polarity::High => value,
            Polarity::Low => value.complement(),
        };
        u32::from(oriented.value()) * u32::from(self.weight)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub id: ArchetypeId,
    /// Key the caller resolves to localized name, emoji and description.
    pub display_key: &'static str,
    pub traits: &'static [WeightedTrait],
}

impl Archetype {
    /// Score of a profile against this archetype, in `[0, 100]`.
    pub fn score(&self, profile: &TraitProfile) -> f64 {
        f64::from(self.weighted_sum(profile)) / 100.0
    }

    /// Exact score scaled by 100.
    pub(crate) fn weighted_sum(&self, profile: &TraitProfile) -> u32 {
        self.traits.iter().map(|t| t.contribution(profile)).sum()
    }

    /// Sum of all term weights in percent.
    pub fn total_weight(&self) -> u32 {
        self.traits.iter().map(|t| u32::from(t.weight)).sum()
    }
}

/// The catalog, in tie-break order: on equal scores the earlier entry wins.
pub const ARCHETYPE_CATALOG: [Archetype; 8] = [
    Archetype {
        id: ArchetypeId::Trailblazer,
        display_key: "archetype.trailblazer",
        traits: &[
            WeightedTrait::high(Axis::Speed, 40),
            WeightedTrait::low(Axis::Conformity, 30),
            WeightedTrait::high(Axis::Courage, 30),
        ],
    },
    Archetype {
        id: ArchetypeId::Guardian,
        display_key: "archetype.guardian",
        traits: &[
            WeightedTrait::low(Axis::Speed, 40),
            WeightedTrait::high(Axis::Conformity, 40),
            WeightedTrait::low(Axis::Diversity, 20),
        ],
    },
    Archetype {
        id: ArchetypeId::Explorer,
        display_key: "archetype.explorer",
        traits: &[
            WeightedTrait::high(Axis::Diversity, 50),
            WeightedTrait::high(Axis::Courage, 25),
            WeightedTrait::high(Axis::Speed, 25),
        ],
    },
    Archetype {
        id: ArchetypeId::Rebel,
        display_key: "archetype.rebel",
        traits: &[
            WeightedTrait::high(Axis::Courage, 50),
            WeightedTrait::low(Axis::Conformity, 50),
        ],
    },
    Archetype {
        id: ArchetypeId::Diplomat,
        display_key: "archetype.diplomat",
        traits: &[
            WeightedTrait::high(Axis::Conformity, 50),
            WeightedTrait::high(Axis::Diversity, 30),
            WeightedTrait::low(Axis::Courage, 20),
        ],
    },
    Archetype {
        id: ArchetypeId::Strategist,
        display_key: "archetype.strategist",
        traits: &[
            WeightedTrait::low(Axis::Speed, 50),
            WeightedTrait::high(Axis::Diversity, 30),
            WeightedTrait::high(Axis::Courage, 20),
        ],
    },
    Archetype {
        id: ArchetypeId::Specialist,
        display_key: "archetype.specialist",
        traits: &[
            WeightedTrait::low(Axis::Diversity, 60),
            WeightedTrait::low(Axis::Speed, 20),
            WeightedTrait::high(Axis::Courage, 20),
        ],
    },
    Archetype {
        id: ArchetypeId::CrowdSurfer,
        display_key: "archetype.crowd_surfer",
        traits: &[
            WeightedTrait::high(Axis::Speed, 50),
            WeightedTrait::high(Axis::Conformity, 30),
            WeightedTrait::low(Axis::Courage, 20),
        ],
    },
];
