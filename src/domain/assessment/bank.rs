//! Validated, immutable question catalogue.

use serde::Serialize;
use std::collections::HashSet;

use super::Question;
use crate::domain::foundation::ValidationError;

/// A question bank whose records have passed boundary validation.
///
/// Selection never re-checks record invariants, so every bank handed to the
/// selector goes through [`QuestionBank::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validates every record and the uniqueness of ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            question.validate()?;
            if !seen.insert(question.id.as_str()) {
                return Err(ValidationError::duplicate("question id", question.id.as_str()));
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions not in the exclusion set.
    pub fn available_count(&self, exclude_ids: &HashSet<String>) -> usize {
        self.questions
            .iter()
            .filter(|q| !exclude_ids.contains(q.id.as_str()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{Dimension, QuestionType};
    use crate::domain::foundation::QuestionId;

    fn question(id: &str) -> Question {
        Question::new(
            QuestionId::new(id).unwrap(),
            format!("Statement {}", id),
            QuestionType::Likert,
            Dimension::Agreeableness,
        )
    }

    #[test]
    fn accepts_well_formed_bank() {
        let bank = QuestionBank::new(vec![question("a"), question("b")]).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(!bank.is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = QuestionBank::new(vec![question("a"), question("a")]);
        match result {
            Err(ValidationError::Duplicate { value, .. }) => assert_eq!(value, "a"),
            other => panic!("Expected Duplicate, got {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_record() {
        let result = QuestionBank::new(vec![question("a"), question("b").with_discrimination(0.0)]);
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn rejects_text_without_letters_or_digits() {
        let mut symbols = question("b");
        symbols.text = "... ?!".to_string();
        let result = QuestionBank::new(vec![question("a"), symbols]);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn available_count_skips_excluded() {
        let bank = QuestionBank::new(vec![question("a"), question("b"), question("c")]).unwrap();
        let exclude: HashSet<String> = ["b".to_string()].into_iter().collect();
        assert_eq!(bank.available_count(&exclude), 2);
    }
}
