//! ProfileReader port for completed percentile profiles

use async_trait::async_trait;

use crate::domain::assessment::Profile;
use crate::domain::foundation::{DomainError, UserId};

/// Query operations for scored profiles
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Get the user's latest profile, if one has been scored
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError>;
}
