//! Selection Module - Test form assembly and auditing.
//!
//! - `QuestionSelector` - Five-phase constrained, weighted-random selection
//! - `SelectionValidator` - Constraint audit returning issues instead of errors
//! - `normalize_text` - Wording canonicalisation used for duplicate detection
//!
//! Randomness is always supplied by the caller, either as an `Rng` handle or
//! as a seed, so forms are reproducible in tests.

mod sampling;
mod selector;
mod validator;

pub use sampling::normalize_text;
pub use selector::QuestionSelector;
pub use validator::{
    SelectionIssue, SelectionReport, SelectionStats, SelectionValidator, MIN_FILL_FRACTION,
    REVERSE_RATIO_LOWER_TOLERANCE, REVERSE_RATIO_UPPER_TOLERANCE,
};
