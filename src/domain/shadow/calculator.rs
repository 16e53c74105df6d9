//! Dark Triad Calculator - Shadow-trait projection from a percentile profile.

use serde::{Deserialize, Serialize};

use super::{DarkTrait, ExtendedResponses, ShadowInsights, TraitLevel};
use crate::domain::assessment::{Dimension, Profile};

/// Weight of the profile-derived estimate when a measured value is present.
pub const DERIVED_WEIGHT: f64 = 0.6;

/// Weight of a directly measured value.
pub const MEASURED_WEIGHT: f64 = 0.4;

/// Dominant trait must score strictly above this.
pub const DOMINANT_THRESHOLD: u8 = 50;

/// One term of a trait blend.
#[derive(Debug, Clone, Copy)]
struct Term {
    dimension: Dimension,
    weight: f64,
    inverted: bool,
}

const fn term(dimension: Dimension, weight: f64) -> Term {
    Term {
        dimension,
        weight,
        inverted: false,
    }
}

const fn inv(dimension: Dimension, weight: f64) -> Term {
    Term {
        dimension,
        weight,
        inverted: true,
    }
}

const MACHIAVELLIANISM: [Term; 4] = [
    inv(Dimension::HonestyHumility, 0.35),
    inv(Dimension::Agreeableness, 0.25),
    term(Dimension::Conscientiousness, 0.20),
    term(Dimension::EmotionalResilience, 0.20),
];

const NARCISSISM: [Term; 4] = [
    inv(Dimension::HonestyHumility, 0.30),
    term(Dimension::Extraversion, 0.30),
    inv(Dimension::Agreeableness, 0.20),
    term(Dimension::EmotionalResilience, 0.20),
];

const PSYCHOPATHY: [Term; 4] = [
    inv(Dimension::Agreeableness, 0.30),
    inv(Dimension::EmotionalResilience, 0.25),
    inv(Dimension::Conscientiousness, 0.25),
    term(Dimension::Adaptability, 0.20),
];

fn blend(dark_trait: DarkTrait) -> &'static [Term; 4] {
    match dark_trait {
        DarkTrait::Machiavellianism => &MACHIAVELLIANISM,
        DarkTrait::Narcissism => &NARCISSISM,
        DarkTrait::Psychopathy => &PSYCHOPATHY,
    }
}

/// A rounded trait score with its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScore {
    #[serde(rename = "trait")]
    pub dark_trait: DarkTrait,
    pub score: u8,
    pub level: TraitLevel,
}

/// Shadow-trait report for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DarkTriadProfile {
    pub scores: Vec<TraitScore>,
    pub overall_shadow_index: u8,
    pub dominant_trait: Option<DarkTrait>,
    pub insights: ShadowInsights,
}

impl DarkTriadProfile {
    pub fn score(&self, dark_trait: DarkTrait) -> Option<TraitScore> {
        self.scores.iter().find(|s| s.dark_trait == dark_trait).copied()
    }
}

/// Calculator for Dark Triad projections.
pub struct DarkTriadCalculator;

impl DarkTriadCalculator {
    /// Unrounded estimate of a trait from the profile alone.
    ///
    /// Missing dimensions read as the 50th percentile.
    pub fn derived_score(profile: &Profile, dark_trait: DarkTrait) -> f64 {
        blend(dark_trait)
            .iter()
            .map(|t| {
                let p = profile.get(t.dimension);
                let value = if t.inverted { p.inverted() } else { p.value() };
                value * t.weight
            })
            .sum::<f64>()
            .clamp(0.0, 100.0)
    }

    /// Rounded trait score, blending in a measured value when one is supplied.
    pub fn trait_score(
        profile: &Profile,
        dark_trait: DarkTrait,
        extended: Option<&ExtendedResponses>,
    ) -> u8 {
        let derived = Self::derived_score(profile, dark_trait);
        let blended = match extended.and_then(|e| e.get(dark_trait)) {
            Some(measured) => DERIVED_WEIGHT * derived + MEASURED_WEIGHT * measured.value(),
            None => derived,
        };
        blended.round().clamp(0.0, 100.0) as u8
    }

    /// Highest trait above the threshold. Ties go to the earlier trait.
    pub fn dominant_trait(scores: &[TraitScore]) -> Option<DarkTrait> {
        let mut best: Option<TraitScore> = None;
        for score in scores {
            if best.map_or(true, |b| score.score > b.score) {
                best = Some(*score);
            }
        }
        best.filter(|b| b.score > DOMINANT_THRESHOLD)
            .map(|b| b.dark_trait)
    }

    /// Computes the full shadow-trait report.
    pub fn calculate(profile: &Profile, extended: Option<&ExtendedResponses>) -> DarkTriadProfile {
        let scores: Vec<TraitScore> = DarkTrait::ALL
            .iter()
            .map(|t| {
                let score = Self::trait_score(profile, *t, extended);
                TraitScore {
                    dark_trait: *t,
                    score,
                    level: TraitLevel::from_score(score),
                }
            })
            .collect();

        let total: u32 = scores.iter().map(|s| u32::from(s.score)).sum();
        let overall_shadow_index = (f64::from(total) / scores.len() as f64).round() as u8;
        let dominant_trait = Self::dominant_trait(&scores);
        let levels: Vec<(DarkTrait, TraitLevel)> =
            scores.iter().map(|s| (s.dark_trait, s.level)).collect();
        let insights = ShadowInsights::build(&levels, overall_shadow_index);

        DarkTriadProfile {
            scores,
            overall_shadow_index,
            dominant_trait,
            insights,
        }
    }
}
