//! Adapters - Implementations of port interfaces.
//!
//! - `question_bank` - In-memory and file-backed (JSON/YAML) bank sources
//! - `tracking` - Seen-question history
//! - `profile` - Profile storage

pub mod profile;
pub mod question_bank;
pub mod tracking;

pub use profile::InMemoryProfileStore;
pub use question_bank::{BankFormat, FileQuestionBank, InMemoryQuestionBank};
pub use tracking::InMemorySeenQuestionTracker;
