//! Assessment Module - The vocabulary shared by selection and scoring.
//!
//! # Components
//!
//! - `Dimension` / `QuestionType` - The closed enumerations items are tagged with
//! - `Question` / `QuestionBank` - Item records and the validated catalogue
//! - `Framework` / `MbtiAxis` / `EnneagramType` - Cross-framework coverage tags
//! - `AssessmentTier` / `SelectionConstraints` - Test form size and coverage rules
//! - `Profile` / `DimensionScore` - Completed percentile profiles

mod bank;
mod dimension;
mod framework;
mod profile;
mod question;
mod tier;

pub use bank::QuestionBank;
pub use dimension::{Dimension, QuestionType};
pub use framework::{EnneagramType, Framework, MbtiAxis};
pub use profile::{DimensionScore, Profile};
pub use question::Question;
pub use tier::{AssessmentTier, RatioRange, SelectionConstraints};
