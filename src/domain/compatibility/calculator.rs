//! Compatibility Calculator - Pairwise scoring of two percentile profiles.

use serde::{Deserialize, Serialize};

use super::statements::{
    challenge_statement, dimension_tip, general_tips, strength_statement, TIP_DIMENSIONS,
    TIP_GAP_THRESHOLD,
};
use super::CompatibilityMode;
use crate::domain::assessment::{Dimension, Profile};
use crate::domain::foundation::Percentile;

/// Number of strengths reported per result.
pub const STRENGTH_COUNT: usize = 3;

/// Number of challenges reported per result.
pub const CHALLENGE_COUNT: usize = 2;

/// Number of tips reported per result.
pub const TIP_COUNT: usize = 3;

/// Upper bound of the `Similar` band (exclusive).
pub const SIMILAR_GAP_LIMIT: f64 = 15.0;

/// Upper bound of the `GrowthOpportunity` band (inclusive).
pub const GROWTH_GAP_LIMIT: f64 = 30.0;

/// How the complementary term treats the two deviations from neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplementaryFormula {
    /// `min(100, 50 + |a-50| + |b-50|/2)`. Order-sensitive: only the second
    /// deviation is halved.
    #[default]
    Reference,
    /// `50 + (|a-50| + |b-50|) / 2`. Swapping the profiles gives the same score.
    Symmetric,
}

/// Qualitative band for the percentile gap on one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapBand {
    Similar,
    GrowthOpportunity,
    RequiresCommunication,
}

impl GapBand {
    pub fn from_gap(gap: f64) -> Self {
        if gap < SIMILAR_GAP_LIMIT {
            GapBand::Similar
        } else if gap <= GROWTH_GAP_LIMIT {
            GapBand::GrowthOpportunity
        } else {
            GapBand::RequiresCommunication
        }
    }

    /// Human-readable sentence for this band on a dimension.
    pub fn describe(&self, dimension: Dimension) -> String {
        let name = dimension.display_name();
        match self {
            GapBand::Similar => format!("You have similar levels of {}.", name),
            GapBand::GrowthOpportunity => {
                format!("Your differences in {} are a growth opportunity.", name)
            }
            GapBand::RequiresCommunication => {
                format!("Your differences in {} require communication.", name)
            }
        }
    }
}

/// Score for one dimension of the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub dimension: Dimension,
    pub score: f64,
    pub similarity_score: f64,
    pub complementary_score: f64,
    pub gap: f64,
    pub band: GapBand,
    pub description: String,
}

/// A ranked canned statement tied to the dimension that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedStatement {
    pub dimension: Dimension,
    pub text: String,
}

/// Full compatibility report for a pair of profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub mode: CompatibilityMode,
    pub overall_score: u8,
    pub categories: Vec<CategoryScore>,
    pub strengths: Vec<RankedStatement>,
    pub challenges: Vec<RankedStatement>,
    pub tips: Vec<String>,
}

/// Calculator for pairwise compatibility.
///
/// Pure and deterministic. Dimensions missing from either profile are read
/// as the neutral 50th percentile.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityCalculator {
    formula: ComplementaryFormula,
}

impl CompatibilityCalculator {
    pub fn new(formula: ComplementaryFormula) -> Self {
        Self { formula }
    }

    pub fn formula(&self) -> ComplementaryFormula {
        self.formula
    }

    /// `100 - |a - b|`.
    pub fn similarity_score(a: Percentile, b: Percentile) -> f64 {
        100.0 - a.gap(b)
    }

    /// Rewards pairs whose scores sit away from the midpoint.
    ///
    /// Always within [50, 100].
    pub fn complementary_score(&self, a: Percentile, b: Percentile) -> f64 {
        let (da, db) = (a.deviation_from_neutral(), b.deviation_from_neutral());
        match self.formula {
            ComplementaryFormula::Reference => (50.0 + da + db / 2.0).min(100.0),
            ComplementaryFormula::Symmetric => 50.0 + (da + db) / 2.0,
        }
    }

    /// Scores one dimension for the given mode.
    pub fn category_score(
        &self,
        mode: CompatibilityMode,
        dimension: Dimension,
        a: Percentile,
        b: Percentile,
    ) -> CategoryScore {
        let weights = mode
            .weights()
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, w)| *w)
            .unwrap_or(super::DimensionWeights {
                similarity: 0.5,
                complementary: 0.5,
            });
        let similarity_score = Self::similarity_score(a, b);
        let complementary_score = self.complementary_score(a, b);
        let gap = a.gap(b);
        let band = GapBand::from_gap(gap);

        CategoryScore {
            dimension,
            score: (similarity_score * weights.similarity
                + complementary_score * weights.complementary)
                .clamp(0.0, 100.0),
            similarity_score,
            complementary_score,
            gap,
            band,
            description: band.describe(dimension),
        }
    }

    /// Computes the full report for `profile_a` against `profile_b`.
    pub fn calculate(
        &self,
        profile_a: &Profile,
        profile_b: &Profile,
        mode: CompatibilityMode,
    ) -> CompatibilityResult {
        let categories: Vec<CategoryScore> = mode
            .weights()
            .iter()
            .map(|(dimension, _)| {
                self.category_score(
                    mode,
                    *dimension,
                    profile_a.get(*dimension),
                    profile_b.get(*dimension),
                )
            })
            .collect();

        let overall_score = Self::overall_score(&categories);
        let strengths = Self::rank(&categories, true, STRENGTH_COUNT)
            .into_iter()
            .map(|d| RankedStatement {
                dimension: d,
                text: strength_statement(mode, d).to_string(),
            })
            .collect();
        let challenges = Self::rank(&categories, false, CHALLENGE_COUNT)
            .into_iter()
            .map(|d| RankedStatement {
                dimension: d,
                text: challenge_statement(mode, d).to_string(),
            })
            .collect();
        let tips = Self::tips(mode, profile_a, profile_b);

        CompatibilityResult {
            mode,
            overall_score,
            categories,
            strengths,
            challenges,
            tips,
        }
    }

    /// Rounded mean of the category scores, clamped to 0-100.
    ///
    /// # Edge Cases
    /// - No categories: returns 0
    pub fn overall_score(categories: &[CategoryScore]) -> u8 {
        if categories.is_empty() {
            return 0;
        }
        let mean = categories.iter().map(|c| c.score).sum::<f64>() / categories.len() as f64;
        mean.round().clamp(0.0, 100.0) as u8
    }

    /// Dimensions of the top (or bottom) `count` categories. Ties keep table order.
    fn rank(categories: &[CategoryScore], highest_first: bool, count: usize) -> Vec<Dimension> {
        let mut ranked: Vec<&CategoryScore> = categories.iter().collect();
        ranked.sort_by(|x, y| {
            let ordering = x.score.total_cmp(&y.score);
            if highest_first {
                ordering.reverse()
            } else {
                ordering
            }
        });
        ranked.into_iter().take(count).map(|c| c.dimension).collect()
    }

    fn tips(mode: CompatibilityMode, profile_a: &Profile, profile_b: &Profile) -> Vec<String> {
        let mut tips: Vec<String> = TIP_DIMENSIONS
            .iter()
            .filter(|d| profile_a.get(**d).gap(profile_b.get(**d)) > TIP_GAP_THRESHOLD)
            .filter_map(|d| dimension_tip(*d))
            .take(TIP_COUNT)
            .map(str::to_string)
            .collect();

        for generic in general_tips(mode) {
            if tips.len() >= TIP_COUNT {
                break;
            }
            if !tips.iter().any(|t| t == generic) {
                tips.push(generic.to_string());
            }
        }
        tips
    }
}

/// Scores a pair with the default complementary formula.
pub fn calculate_compatibility(
    profile_a: &Profile,
    profile_b: &Profile,
    mode: CompatibilityMode,
) -> CompatibilityResult {
    CompatibilityCalculator::default().calculate(profile_a, profile_b, mode)
}
