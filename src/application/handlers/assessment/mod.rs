//! Assessment form handlers.

mod select_questions;

pub use select_questions::{SelectQuestionsCommand, SelectQuestionsHandler, SelectQuestionsResult};
