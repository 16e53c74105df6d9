//! In-memory seen-question tracker.
//!
//! Port methods report a poisoned lock as `StorageError`; the test helpers panic.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::SeenQuestionTracker;

/// Per-user seen-question history held in process memory.
#[derive(Default)]
pub struct InMemorySeenQuestionTracker {
    seen: RwLock<HashMap<UserId, HashSet<String>>>,
}

impl InMemorySeenQuestionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Number of distinct questions recorded for a user.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn seen_count(&self, user_id: &UserId) -> usize {
        self.seen
            .read()
            .expect("seen lock poisoned")
            .get(user_id)
            .map_or(0, HashSet::len)
    }
}

fn lock_poisoned() -> DomainError {
    DomainError::new(ErrorCode::StorageError, "seen store lock poisoned")
}

#[async_trait]
impl SeenQuestionTracker for InMemorySeenQuestionTracker {
    async fn seen_ids(&self, user_id: &UserId) -> Result<HashSet<String>, DomainError> {
        Ok(self
            .seen
            .read()
            .map_err(|_| lock_poisoned())?
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn record_seen(
        &self,
        user_id: &UserId,
        question_ids: &[String],
    ) -> Result<(), DomainError> {
        self.seen
            .write()
            .map_err(|_| lock_poisoned())?
            .entry(user_id.clone())
            .or_default()
            .extend(question_ids.iter().cloned());
        Ok(())
    }
}
