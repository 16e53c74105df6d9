//! In-memory profile store.
//!
//! `get_profile` reports a poisoned lock as `StorageError`; `save` panics.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::assessment::Profile;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::ProfileReader;

/// Holds the latest scored profile per user.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<UserId, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a profile, replacing any previous one for the user.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn save(&self, user_id: UserId, profile: Profile) {
        self.profiles
            .write()
            .expect("profile lock poisoned")
            .insert(user_id, profile);
    }

    /// Builder-style variant of [`save`](Self::save).
    pub fn with_profile(self, user_id: UserId, profile: Profile) -> Self {
        self.save(user_id, profile);
        self
    }
}

fn lock_poisoned() -> DomainError {
    DomainError::new(ErrorCode::StorageError, "profile store lock poisoned")
}

#[async_trait]
impl ProfileReader for InMemoryProfileStore {
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(self
            .profiles
            .read()
            .map_err(|_| lock_poisoned())?
            .get(user_id)
            .cloned())
    }
}
