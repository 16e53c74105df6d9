//! Seen-question tracking

mod in_memory;

pub use in_memory::InMemorySeenQuestionTracker;
