//! Question bank sources

mod file;
mod in_memory;

pub use file::{BankFormat, FileQuestionBank};
pub use in_memory::InMemoryQuestionBank;
