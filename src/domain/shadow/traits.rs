//! Dark Triad trait vocabulary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::Percentile;

/// Score at or above which a trait is `Elevated`.
pub const ELEVATED_THRESHOLD: u8 = 65;

/// Score at or above which a trait is at least `Moderate`.
pub const MODERATE_THRESHOLD: u8 = 40;

/// The three shadow traits, in tie-breaking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DarkTrait {
    Machiavellianism,
    Narcissism,
    Psychopathy,
}

impl DarkTrait {
    pub const ALL: [DarkTrait; 3] = [
        DarkTrait::Machiavellianism,
        DarkTrait::Narcissism,
        DarkTrait::Psychopathy,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DarkTrait::Machiavellianism => "Machiavellianism",
            DarkTrait::Narcissism => "Narcissism",
            DarkTrait::Psychopathy => "Psychopathy",
        }
    }
}

impl fmt::Display for DarkTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Bucket for a rounded trait score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitLevel {
    Low,
    Moderate,
    Elevated,
}

impl TraitLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= ELEVATED_THRESHOLD {
            TraitLevel::Elevated
        } else if score >= MODERATE_THRESHOLD {
            TraitLevel::Moderate
        } else {
            TraitLevel::Low
        }
    }
}

/// Directly measured trait values from supplementary questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtendedResponses(BTreeMap<DarkTrait, Percentile>);

impl ExtendedResponses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter; out-of-range values are clamped.
    pub fn with(mut self, dark_trait: DarkTrait, value: f64) -> Self {
        self.0.insert(dark_trait, Percentile::new(value));
        self
    }

    pub fn get(&self, dark_trait: DarkTrait) -> Option<Percentile> {
        self.0.get(&dark_trait).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_bucket_on_thresholds() {
        assert_eq!(TraitLevel::from_score(0), TraitLevel::Low);
        assert_eq!(TraitLevel::from_score(39), TraitLevel::Low);
        assert_eq!(TraitLevel::from_score(40), TraitLevel::Moderate);
        assert_eq!(TraitLevel::from_score(64), TraitLevel::Moderate);
        assert_eq!(TraitLevel::from_score(65), TraitLevel::Elevated);
        assert_eq!(TraitLevel::from_score(100), TraitLevel::Elevated);
    }

    #[test]
    fn extended_responses_clamp_values() {
        let responses = ExtendedResponses::new().with(DarkTrait::Narcissism, 140.0);
        assert_eq!(responses.get(DarkTrait::Narcissism), Some(Percentile::MAX));
        assert_eq!(responses.get(DarkTrait::Psychopathy), None);
    }

    #[test]
    fn extended_responses_deserialize_from_map() {
        let responses: ExtendedResponses =
            serde_json::from_str(r#"{"machiavellianism": 72.5}"#).unwrap();
        assert_eq!(
            responses.get(DarkTrait::Machiavellianism).map(|p| p.value()),
            Some(72.5)
        );
    }

    #[test]
    fn extended_responses_reject_out_of_range_on_deserialize() {
        let result: Result<ExtendedResponses, _> =
            serde_json::from_str(r#"{"psychopathy": 120}"#);
        assert!(result.is_err());
    }
}
