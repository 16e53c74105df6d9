//! SeenQuestionTracker port for per-user exposure history

use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::foundation::{DomainError, UserId};

/// Tracks which questions a user has already been shown.
#[async_trait]
pub trait SeenQuestionTracker: Send + Sync {
    /// Ids of every question previously delivered to the user.
    async fn seen_ids(&self, user_id: &UserId) -> Result<HashSet<String>, DomainError>;

    /// Record a delivered form. Ids already recorded are ignored.
    async fn record_seen(&self, user_id: &UserId, question_ids: &[String])
        -> Result<(), DomainError>;
}
