//! Question records as supplied by the question bank.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Dimension, QuestionType};
use crate::domain::foundation::{QuestionId, ValidationError};
use crate::domain::selection::normalize_text;

/// A single assessment item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub dimension: Dimension,
    /// Raw responses are inverted upstream before aggregation.
    #[serde(default)]
    pub reverse_scored: bool,
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Higher values are more informative and preferred when sampling.
    #[serde(default = "default_weight")]
    pub discrimination: f64,
    #[serde(default)]
    pub framework_tags: BTreeSet<String>,
    /// Core items are prioritized regardless of coverage constraints.
    #[serde(default)]
    pub is_core: bool,
}

fn default_weight() -> f64 {
    1.0
}

impl Question {
    /// Creates a question with default weight, discrimination and flags.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        question_type: QuestionType,
        dimension: Dimension,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            question_type,
            dimension,
            reverse_scored: false,
            weight: default_weight(),
            discrimination: default_weight(),
            framework_tags: BTreeSet::new(),
            is_core: false,
        }
    }

    pub fn reverse_scored(mut self, reverse: bool) -> Self {
        self.reverse_scored = reverse;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_discrimination(mut self, discrimination: f64) -> Self {
        self.discrimination = discrimination;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.framework_tags.insert(tag.into());
        self
    }

    pub fn core(mut self, is_core: bool) -> Self {
        self.is_core = is_core;
        self
    }

    /// True if the question carries the given framework tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.framework_tags.contains(tag)
    }

    /// Sampling weight used by the weighted fill phase.
    pub fn sampling_weight(&self) -> f64 {
        self.discrimination * self.weight
    }

    /// Checks the record-level invariants.
    ///
    /// Errors name the offending question so malformed banks are reported
    /// before any selection work starts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ValidationError::empty_field("question.id"));
        }
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field(format!(
                "question[{}].text",
                self.id
            )));
        }
        // Wording compares by normalized text, which must not collapse to nothing.
        if normalize_text(&self.text).is_empty() {
            return Err(ValidationError::invalid_format(
                format!("question[{}].text", self.id),
                "must contain at least one letter or digit",
            ));
        }
        check_positive(&self.id, "weight", self.weight)?;
        check_positive(&self.id, "discrimination", self.discrimination)?;
        Ok(())
    }
}

fn check_positive(id: &QuestionId, field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::out_of_range(
            format!("question[{}].{}", id, field),
            f64::MIN_POSITIVE,
            f64::MAX,
            value,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        Question::new(
            QuestionId::new(id).unwrap(),
            "I enjoy trying new foods.",
            QuestionType::Likert,
            Dimension::Openness,
        )
    }

    #[test]
    fn question_defaults() {
        let q = question("q1");
        assert!(!q.reverse_scored);
        assert!(!q.is_core);
        assert_eq!(q.weight, 1.0);
        assert_eq!(q.discrimination, 1.0);
        assert!(q.framework_tags.is_empty());
    }

    #[test]
    fn sampling_weight_is_product() {
        let q = question("q1").with_weight(2.0).with_discrimination(1.5);
        assert_eq!(q.sampling_weight(), 3.0);
    }

    #[test]
    fn validate_rejects_blank_text() {
        let mut q = question("q1");
        q.text = "   ".to_string();
        match q.validate() {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "question[q1].text"),
            other => panic!("Expected EmptyField, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_punctuation_only_text() {
        let mut q = question("q1");
        q.text = "?!".to_string();
        match q.validate() {
            Err(ValidationError::InvalidFormat { field, .. }) => {
                assert_eq!(field, "question[q1].text")
            }
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_non_positive_weight() {
        assert!(question("q1").with_weight(0.0).validate().is_err());
        assert!(question("q1").with_weight(-1.0).validate().is_err());
        assert!(question("q1").with_discrimination(f64::NAN).validate().is_err());
        assert!(question("q1").with_weight(0.5).validate().is_ok());
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "id": "ext-04",
            "text": "I start conversations with strangers.",
            "type": "behavioral_frequency",
            "dimension": "extraversion"
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id.as_str(), "ext-04");
        assert_eq!(q.question_type, QuestionType::BehavioralFrequency);
        assert_eq!(q.dimension, Dimension::Extraversion);
        assert_eq!(q.weight, 1.0);
        assert_eq!(q.discrimination, 1.0);
        assert!(!q.is_core);
    }

    #[test]
    fn deserializes_framework_tags() {
        let json = r#"{
            "id": "ext-05",
            "text": "Parties energize me.",
            "type": "likert",
            "dimension": "extraversion",
            "reverse_scored": true,
            "framework_tags": ["mbti_ei", "enneagram_7"],
            "is_core": true
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();
        assert!(q.reverse_scored);
        assert!(q.is_core);
        assert!(q.has_tag("mbti_ei"));
        assert!(q.has_tag("enneagram_7"));
    }
}
