//! Compatibility configuration

use serde::Deserialize;

use crate::domain::compatibility::{CompatibilityCalculator, ComplementaryFormula};

/// Compatibility configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompatibilityConfig {
    #[serde(default)]
    pub complementary_formula: ComplementaryFormula,
}

impl CompatibilityConfig {
    pub fn calculator(&self) -> CompatibilityCalculator {
        CompatibilityCalculator::new(self.complementary_formula)
    }
}
