//! Dimensional profiles produced by the upstream scoring pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Dimension;
use crate::domain::foundation::{Percentile, ValidationError};

/// A single scored dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub percentile: Percentile,
}

impl DimensionScore {
    pub fn new(dimension: Dimension, percentile: Percentile) -> Self {
        Self {
            dimension,
            percentile,
        }
    }
}

/// A completed personality profile: at most one score per dimension.
///
/// Dimensions that were never scored read as [`Percentile::NEUTRAL`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DimensionScore>", into = "Vec<DimensionScore>")]
pub struct Profile {
    scores: BTreeMap<Dimension, Percentile>,
}

impl Profile {
    /// Creates an empty profile (every dimension neutral).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a profile from a score list, rejecting repeated dimensions.
    pub fn from_scores(scores: Vec<DimensionScore>) -> Result<Self, ValidationError> {
        let mut map = BTreeMap::new();
        for score in scores {
            if map.insert(score.dimension, score.percentile).is_some() {
                return Err(ValidationError::duplicate(
                    "profile dimension",
                    score.dimension.key(),
                ));
            }
        }
        Ok(Self { scores: map })
    }

    /// Sets one dimension, clamping the value to 0-100.
    pub fn with(mut self, dimension: Dimension, percentile: f64) -> Self {
        self.scores.insert(dimension, Percentile::new(percentile));
        self
    }

    /// Percentile for a dimension, neutral when missing.
    pub fn get(&self, dimension: Dimension) -> Percentile {
        self.scores.get(&dimension).copied().unwrap_or_default()
    }

    /// True if the dimension was actually scored.
    pub fn has(&self, dimension: Dimension) -> bool {
        self.scores.contains_key(&dimension)
    }

    /// Dimensions that fall back to neutral.
    pub fn missing_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| !self.scores.contains_key(d))
            .collect()
    }

    pub fn scores(&self) -> Vec<DimensionScore> {
        self.scores
            .iter()
            .map(|(d, p)| DimensionScore::new(*d, *p))
            .collect()
    }
}

impl TryFrom<Vec<DimensionScore>> for Profile {
    type Error = ValidationError;

    fn try_from(scores: Vec<DimensionScore>) -> Result<Self, Self::Error> {
        Self::from_scores(scores)
    }
}

impl From<Profile> for Vec<DimensionScore> {
    fn from(profile: Profile) -> Self {
        profile.scores()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dimension_reads_neutral() {
        let profile = Profile::new().with(Dimension::Openness, 80.0);
        assert_eq!(profile.get(Dimension::Openness).value(), 80.0);
        assert_eq!(profile.get(Dimension::Adaptability), Percentile::NEUTRAL);
        assert!(!profile.has(Dimension::Adaptability));
        assert_eq!(profile.missing_dimensions().len(), 6);
    }

    #[test]
    fn from_scores_rejects_duplicates() {
        let scores = vec![
            DimensionScore::new(Dimension::Openness, Percentile::new(10.0)),
            DimensionScore::new(Dimension::Openness, Percentile::new(20.0)),
        ];
        assert!(matches!(
            Profile::from_scores(scores),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn with_clamps_out_of_range_values() {
        let profile = Profile::new().with(Dimension::Extraversion, 140.0);
        assert_eq!(profile.get(Dimension::Extraversion), Percentile::MAX);
    }

    #[test]
    fn deserializes_from_score_list() {
        let json = r#"[
            {"dimension": "openness", "percentile": 72},
            {"dimension": "honesty_humility", "percentile": 31.5}
        ]"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.get(Dimension::Openness).value(), 72.0);
        assert_eq!(profile.get(Dimension::HonestyHumility).value(), 31.5);
    }

    #[test]
    fn deserialize_rejects_out_of_range_percentile() {
        let json = r#"[{"dimension": "openness", "percentile": 120}]"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }
}
