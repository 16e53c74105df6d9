//! Selection configuration

use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::BankFormat;
use crate::domain::assessment::{AssessmentTier, Framework};

/// What to do when a user's unseen questions cannot fill a form.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionFallback {
    /// Deliver the short form and let validation report the shortfall.
    Never,
    /// Reselect from the whole bank, allowing repeats.
    #[default]
    WhenInsufficient,
}

/// Selection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    /// Tier used when a request does not name one
    #[serde(default = "default_tier")]
    pub default_tier: AssessmentTier,

    #[serde(default)]
    pub exclusion_fallback: ExclusionFallback,

    /// Fixed seed for reproducible forms
    pub seed: Option<u64>,

    /// Frameworks to cover besides the native dimensions
    #[serde(default = "default_frameworks")]
    pub frameworks: Vec<Framework>,

    /// Bank file for the file-backed source
    pub question_bank_path: Option<PathBuf>,
}

fn default_tier() -> AssessmentTier {
    AssessmentTier::Standard
}

fn default_frameworks() -> Vec<Framework> {
    vec![Framework::Prism]
}

impl SelectionConfig {
    pub fn framework_set(&self) -> HashSet<Framework> {
        self.frameworks.iter().copied().collect()
    }

    /// Validate selection configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.question_bank_path {
            if BankFormat::from_path(path).is_none() {
                return Err(ValidationError::UnsupportedBankFormat(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_tier: default_tier(),
            exclusion_fallback: ExclusionFallback::default(),
            seed: None,
            frameworks: default_frameworks(),
            question_bank_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_standard_tier_and_prism() {
        let config = SelectionConfig::default();
        assert_eq!(config.default_tier, AssessmentTier::Standard);
        assert_eq!(config.exclusion_fallback, ExclusionFallback::WhenInsufficient);
        assert_eq!(config.framework_set(), HashSet::from([Framework::Prism]));
    }

    #[test]
    fn yaml_and_json_bank_paths_validate() {
        for name in ["bank.json", "bank.yaml", "bank.YML"] {
            let config = SelectionConfig {
                question_bank_path: Some(PathBuf::from(name)),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "{}", name);
        }
    }

    #[test]
    fn other_bank_extensions_are_rejected() {
        let config = SelectionConfig {
            question_bank_path: Some(PathBuf::from("bank.csv")),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnsupportedBankFormat("bank.csv".to_string()))
        );
    }
}
