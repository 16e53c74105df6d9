//! Relationship modes and their per-dimension weighting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::Dimension;
use Dimension::*;

/// Relationship context that decides how similarity and complementarity count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityMode {
    Work,
    Romantic,
    Friendship,
    Parent,
    Child,
}

/// How much a dimension rewards matching versus offsetting percentiles.
///
/// Each pair sums to 1.0, which keeps every dimension score within 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    pub similarity: f64,
    pub complementary: f64,
}

const fn w(similarity: f64, complementary: f64) -> DimensionWeights {
    DimensionWeights {
        similarity,
        complementary,
    }
}

const WORK: [(Dimension, DimensionWeights); 7] = [
    (Conscientiousness, w(0.8, 0.2)),
    (Extraversion, w(0.2, 0.8)),
    (Openness, w(0.5, 0.5)),
    (Agreeableness, w(0.6, 0.4)),
    (EmotionalResilience, w(0.5, 0.5)),
    (HonestyHumility, w(0.8, 0.2)),
    (Adaptability, w(0.4, 0.6)),
];

const ROMANTIC: [(Dimension, DimensionWeights); 7] = [
    (HonestyHumility, w(0.7, 0.3)),
    (Agreeableness, w(0.6, 0.4)),
    (Openness, w(0.6, 0.4)),
    (Conscientiousness, w(0.5, 0.5)),
    (EmotionalResilience, w(0.5, 0.5)),
    (Extraversion, w(0.4, 0.6)),
    (Adaptability, w(0.2, 0.8)),
];

const FRIENDSHIP: [(Dimension, DimensionWeights); 7] = [
    (Openness, w(0.7, 0.3)),
    (Agreeableness, w(0.7, 0.3)),
    (HonestyHumility, w(0.7, 0.3)),
    (Extraversion, w(0.5, 0.5)),
    (EmotionalResilience, w(0.5, 0.5)),
    (Adaptability, w(0.5, 0.5)),
    (Conscientiousness, w(0.4, 0.6)),
];

const PARENT: [(Dimension, DimensionWeights); 7] = [
    (HonestyHumility, w(0.7, 0.3)),
    (Agreeableness, w(0.6, 0.4)),
    (Conscientiousness, w(0.5, 0.5)),
    (Openness, w(0.4, 0.6)),
    (EmotionalResilience, w(0.4, 0.6)),
    (Extraversion, w(0.3, 0.7)),
    (Adaptability, w(0.3, 0.7)),
];

const CHILD: [(Dimension, DimensionWeights); 7] = [
    (Agreeableness, w(0.7, 0.3)),
    (HonestyHumility, w(0.6, 0.4)),
    (Openness, w(0.5, 0.5)),
    (Conscientiousness, w(0.4, 0.6)),
    (Extraversion, w(0.4, 0.6)),
    (Adaptability, w(0.4, 0.6)),
    (EmotionalResilience, w(0.3, 0.7)),
];

impl CompatibilityMode {
    pub const ALL: [CompatibilityMode; 5] = [
        CompatibilityMode::Work,
        CompatibilityMode::Romantic,
        CompatibilityMode::Friendship,
        CompatibilityMode::Parent,
        CompatibilityMode::Child,
    ];

    /// Weight table in category order.
    pub fn weights(&self) -> &'static [(Dimension, DimensionWeights); 7] {
        match self {
            CompatibilityMode::Work => &WORK,
            CompatibilityMode::Romantic => &ROMANTIC,
            CompatibilityMode::Friendship => &FRIENDSHIP,
            CompatibilityMode::Parent => &PARENT,
            CompatibilityMode::Child => &CHILD,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CompatibilityMode::Work => "Work",
            CompatibilityMode::Romantic => "Romantic",
            CompatibilityMode::Friendship => "Friendship",
            CompatibilityMode::Parent => "Parent",
            CompatibilityMode::Child => "Child",
        }
    }
}

impl fmt::Display for CompatibilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
