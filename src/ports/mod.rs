//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionBankSource` - Loads and validates the question bank
//! - `SeenQuestionTracker` - Per-user history of delivered questions
//! - `ProfileReader` - Completed percentile profiles for report generation

mod profile_reader;
mod question_bank_source;
mod seen_question_tracker;

pub use profile_reader::ProfileReader;
pub use question_bank_source::QuestionBankSource;
pub use seen_question_tracker::SeenQuestionTracker;
