//! Shadow Module - Dark Triad projection from a completed profile.
//!
//! Scores are fixed linear blends of the seven dimensions, optionally mixed
//! with directly measured values, then bucketed and narrated from canned tables.

mod calculator;
mod insights;
mod traits;

pub use calculator::{
    DarkTriadCalculator, DarkTriadProfile, TraitScore, DERIVED_WEIGHT, DOMINANT_THRESHOLD,
    MEASURED_WEIGHT,
};
pub use insights::{
    trait_strengths, trait_watch_areas, RelationshipStyle, ShadowInsights, WorkplaceStyle,
    HIGH_INDEX_THRESHOLD, MID_INDEX_THRESHOLD,
};
pub use traits::{
    DarkTrait, ExtendedResponses, TraitLevel, ELEVATED_THRESHOLD, MODERATE_THRESHOLD,
};
