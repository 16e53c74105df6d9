//! Selection Validator - Audits an assembled form against its constraints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::assessment::{Dimension, Question, QuestionType, SelectionConstraints};

/// A form may hold this fraction of the target before being flagged short.
pub const MIN_FILL_FRACTION: f64 = 0.9;

/// Tolerance multipliers applied to the reverse-scored ratio bounds.
pub const REVERSE_RATIO_LOWER_TOLERANCE: f64 = 0.8;
pub const REVERSE_RATIO_UPPER_TOLERANCE: f64 = 1.2;

/// Aggregate statistics for a set of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionStats {
    pub total: usize,
    pub by_dimension: BTreeMap<Dimension, usize>,
    pub by_type: BTreeMap<QuestionType, usize>,
    pub reverse_scored: usize,
    pub reverse_ratio: f64,
    pub average_weight: f64,
    pub average_discrimination: f64,
    pub core_count: usize,
    pub framework_tags: BTreeMap<String, usize>,
}

impl SelectionStats {
    /// Computes statistics; ratios and averages over an empty set are 0.
    pub fn compute(questions: &[Question]) -> Self {
        let mut by_dimension: BTreeMap<Dimension, usize> =
            Dimension::ALL.into_iter().map(|d| (d, 0)).collect();
        let mut by_type: BTreeMap<QuestionType, usize> =
            QuestionType::ALL.into_iter().map(|t| (t, 0)).collect();
        let mut framework_tags = BTreeMap::new();

        for question in questions {
            *by_dimension.entry(question.dimension).or_insert(0) += 1;
            *by_type.entry(question.question_type).or_insert(0) += 1;
            for tag in &question.framework_tags {
                *framework_tags.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        let total = questions.len();
        let reverse_scored = questions.iter().filter(|q| q.reverse_scored).count();
        let core_count = questions.iter().filter(|q| q.is_core).count();

        Self {
            total,
            by_dimension,
            by_type,
            reverse_scored,
            reverse_ratio: ratio(reverse_scored as f64, total),
            average_weight: ratio(questions.iter().map(|q| q.weight).sum(), total),
            average_discrimination: ratio(questions.iter().map(|q| q.discrimination).sum(), total),
            core_count,
            framework_tags,
        }
    }

    pub fn dimension_count(&self, dimension: Dimension) -> usize {
        self.by_dimension.get(&dimension).copied().unwrap_or(0)
    }

    pub fn type_count(&self, question_type: QuestionType) -> usize {
        self.by_type.get(&question_type).copied().unwrap_or(0)
    }
}

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

/// A single constraint violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionIssue {
    TooFewQuestions { actual: usize, expected: usize },
    DimensionBelowMinimum { dimension: Dimension, actual: usize, minimum: usize },
    TypeBelowMinimum { question_type: QuestionType, actual: usize, minimum: usize },
    ReverseRatioTooLow { actual: f64, minimum: f64 },
    ReverseRatioTooHigh { actual: f64, maximum: f64 },
}

impl fmt::Display for SelectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionIssue::TooFewQuestions { actual, expected } => {
                write!(f, "Only {} questions selected, expected {}", actual, expected)
            }
            SelectionIssue::DimensionBelowMinimum {
                dimension,
                actual,
                minimum,
            } => write!(f, "{} has {} questions, minimum is {}", dimension, actual, minimum),
            SelectionIssue::TypeBelowMinimum {
                question_type,
                actual,
                minimum,
            } => write!(
                f,
                "Question type {} has {} questions, minimum is {}",
                question_type, actual, minimum
            ),
            SelectionIssue::ReverseRatioTooLow { actual, minimum } => write!(
                f,
                "Reverse-scored ratio {:.2} is below minimum {:.2}",
                actual, minimum
            ),
            SelectionIssue::ReverseRatioTooHigh { actual, maximum } => write!(
                f,
                "Reverse-scored ratio {:.2} is above maximum {:.2}",
                actual, maximum
            ),
        }
    }
}

/// Outcome of validating a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionReport {
    pub valid: bool,
    pub issues: Vec<SelectionIssue>,
    pub stats: SelectionStats,
}

impl SelectionReport {
    /// Issues rendered as human-readable strings.
    pub fn issue_messages(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.to_string()).collect()
    }
}

/// Validator for assembled forms. Reports problems, never fails.
pub struct SelectionValidator;

impl SelectionValidator {
    /// Flags each violated constraint as an independent issue.
    ///
    /// # Checks
    /// - Total below 90% of the target
    /// - Any dimension or question type below its minimum
    /// - Reverse ratio below 80% of the minimum or above 120% of the maximum
    pub fn validate(questions: &[Question], constraints: &SelectionConstraints) -> SelectionReport {
        let stats = SelectionStats::compute(questions);
        let mut issues = Vec::new();

        let expected = constraints.total_questions;
        if (stats.total as f64) < expected as f64 * MIN_FILL_FRACTION {
            issues.push(SelectionIssue::TooFewQuestions {
                actual: stats.total,
                expected,
            });
        }

        for dimension in Dimension::ALL {
            let actual = stats.dimension_count(dimension);
            if actual < constraints.min_per_prism_dimension {
                issues.push(SelectionIssue::DimensionBelowMinimum {
                    dimension,
                    actual,
                    minimum: constraints.min_per_prism_dimension,
                });
            }
        }

        for question_type in QuestionType::ALL {
            let actual = stats.type_count(question_type);
            if actual < constraints.min_per_question_type {
                issues.push(SelectionIssue::TypeBelowMinimum {
                    question_type,
                    actual,
                    minimum: constraints.min_per_question_type,
                });
            }
        }

        let range = constraints.reverse_scored_ratio;
        if stats.reverse_ratio < range.min * REVERSE_RATIO_LOWER_TOLERANCE {
            issues.push(SelectionIssue::ReverseRatioTooLow {
                actual: stats.reverse_ratio,
                minimum: range.min,
            });
        } else if stats.reverse_ratio > range.max * REVERSE_RATIO_UPPER_TOLERANCE {
            issues.push(SelectionIssue::ReverseRatioTooHigh {
                actual: stats.reverse_ratio,
                maximum: range.max,
            });
        }

        SelectionReport {
            valid: issues.is_empty(),
            issues,
            stats,
        }
    }
}
