//! Assessment tiers and their selection constraints.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Dimension;
use crate::domain::foundation::ValidationError;

/// Named assessment length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentTier {
    Quick,
    Standard,
    Comprehensive,
}

impl AssessmentTier {
    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            AssessmentTier::Quick => "Quick",
            AssessmentTier::Standard => "Standard",
            AssessmentTier::Comprehensive => "Comprehensive",
        }
    }

    /// Returns the predefined constraints for this tier.
    pub fn constraints(&self) -> SelectionConstraints {
        SelectionConstraints::for_tier(*self)
    }
}

impl fmt::Display for AssessmentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Inclusive bounds on the fraction of reverse-scored items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioRange {
    pub min: f64,
    pub max: f64,
}

impl RatioRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.min && ratio <= self.max
    }
}

/// Coverage requirements for assembling a test form.
///
/// The three tiers are presets; any validated instance is accepted by the
/// selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionConstraints {
    pub total_questions: usize,
    pub min_per_prism_dimension: usize,
    pub min_per_question_type: usize,
    #[serde(default)]
    pub min_per_mbti_dimension: usize,
    #[serde(default)]
    pub min_per_enneagram_type: usize,
    pub reverse_scored_ratio: RatioRange,
}

impl SelectionConstraints {
    /// Get the constraints for a specific tier.
    ///
    /// | Tier | Total | /Dimension | /Type | /MBTI axis | /Enneagram | Reverse |
    /// |------|-------|------------|-------|------------|------------|---------|
    /// | Quick | 35 | 5 | 2 | 0 | 0 | 0.30-0.50 |
    /// | Standard | 70 | 8 | 5 | 3 | 1 | 0.30-0.50 |
    /// | Comprehensive | 140 | 15 | 10 | 5 | 3 | 0.35-0.50 |
    pub fn for_tier(tier: AssessmentTier) -> Self {
        match tier {
            AssessmentTier::Quick => Self {
                total_questions: 35,
                min_per_prism_dimension: 5,
                min_per_question_type: 2,
                min_per_mbti_dimension: 0,
                min_per_enneagram_type: 0,
                reverse_scored_ratio: RatioRange::new(0.3, 0.5),
            },
            AssessmentTier::Standard => Self {
                total_questions: 70,
                min_per_prism_dimension: 8,
                min_per_question_type: 5,
                min_per_mbti_dimension: 3,
                min_per_enneagram_type: 1,
                reverse_scored_ratio: RatioRange::new(0.3, 0.5),
            },
            AssessmentTier::Comprehensive => Self {
                total_questions: 140,
                min_per_prism_dimension: 15,
                min_per_question_type: 10,
                min_per_mbti_dimension: 5,
                min_per_enneagram_type: 3,
                reverse_scored_ratio: RatioRange::new(0.35, 0.5),
            },
        }
    }

    /// Maximum number of core items admitted by the core guarantee phase.
    pub fn core_cap(&self) -> usize {
        self.total_questions * 3 / 5
    }

    /// Per-dimension ceiling applied while filling by weight.
    pub fn dimension_soft_cap(&self) -> usize {
        (self.total_questions + Dimension::COUNT - 1) / Dimension::COUNT + 2
    }

    /// Rejects constraint sets that no bank could satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_questions == 0 {
            return Err(ValidationError::out_of_range(
                "total_questions",
                1.0,
                f64::MAX,
                0.0,
            ));
        }
        let ratio = self.reverse_scored_ratio;
        let bounds = [
            ("reverse_scored_ratio.min", ratio.min),
            ("reverse_scored_ratio.max", ratio.max),
        ];
        for (field, value) in bounds {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::out_of_range(field, 0.0, 1.0, value));
            }
        }
        if ratio.min > ratio.max {
            return Err(ValidationError::invalid_format(
                "reverse_scored_ratio",
                format!("min {} exceeds max {}", ratio.min, ratio.max),
            ));
        }
        let dimension_floor = self.min_per_prism_dimension * Dimension::COUNT;
        if dimension_floor > self.total_questions {
            return Err(ValidationError::out_of_range(
                "min_per_prism_dimension",
                0.0,
                (self.total_questions / Dimension::COUNT) as f64,
                self.min_per_prism_dimension as f64,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_tier_matches_reference_numbers() {
        let c = SelectionConstraints::for_tier(AssessmentTier::Quick);
        assert_eq!(c.total_questions, 35);
        assert_eq!(c.min_per_prism_dimension, 5);
        assert_eq!(c.min_per_question_type, 2);
        assert_eq!(c.reverse_scored_ratio, RatioRange::new(0.3, 0.5));
    }

    #[test]
    fn presets_are_valid() {
        for tier in [AssessmentTier::Quick, AssessmentTier::Standard, AssessmentTier::Comprehensive] {
            assert!(tier.constraints().validate().is_ok(), "{} should validate", tier);
        }
    }

    #[test]
    fn core_cap_is_sixty_percent() {
        assert_eq!(AssessmentTier::Quick.constraints().core_cap(), 21);
        assert_eq!(AssessmentTier::Standard.constraints().core_cap(), 42);
        assert_eq!(AssessmentTier::Comprehensive.constraints().core_cap(), 84);
    }

    #[test]
    fn soft_cap_rounds_up_then_adds_two() {
        assert_eq!(AssessmentTier::Quick.constraints().dimension_soft_cap(), 7);
        assert_eq!(AssessmentTier::Standard.constraints().dimension_soft_cap(), 12);
        assert_eq!(AssessmentTier::Comprehensive.constraints().dimension_soft_cap(), 22);
    }

    #[test]
    fn validate_rejects_zero_total() {
        let mut c = AssessmentTier::Quick.constraints();
        c.total_questions = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_ratio() {
        let mut c = AssessmentTier::Quick.constraints();
        c.reverse_scored_ratio = RatioRange::new(0.6, 0.4);
        assert!(matches!(c.validate(), Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn validate_rejects_unreachable_dimension_minimum() {
        let mut c = AssessmentTier::Quick.constraints();
        c.min_per_prism_dimension = 6;
        assert!(c.validate().is_err());
    }

    #[test]
    fn ratio_range_is_inclusive() {
        let r = RatioRange::new(0.3, 0.5);
        assert!(r.contains(0.3));
        assert!(r.contains(0.5));
        assert!(!r.contains(0.29));
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&AssessmentTier::Comprehensive).unwrap();
        assert_eq!(json, "\"comprehensive\"");
    }
}
