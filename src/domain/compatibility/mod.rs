//! Compatibility Module - Pairwise profile comparison.
//!
//! - `CompatibilityMode` - Relationship context with its weight table
//! - `CompatibilityCalculator` - Category scoring, ranking and tips
//! - `statements` - Canned text keyed by mode and dimension

mod calculator;
mod mode;
pub mod statements;

pub use calculator::{
    calculate_compatibility, CategoryScore, CompatibilityCalculator, CompatibilityResult,
    ComplementaryFormula, GapBand, RankedStatement, CHALLENGE_COUNT, GROWTH_GAP_LIMIT,
    SIMILAR_GAP_LIMIT, STRENGTH_COUNT, TIP_COUNT,
};
pub use mode::{CompatibilityMode, DimensionWeights};
