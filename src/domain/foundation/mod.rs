//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod percentile;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{FormId, QuestionId, UserId};
pub use percentile::Percentile;
