//! Report handlers for completed profiles.

mod get_compatibility_report;
mod get_shadow_report;

pub use get_compatibility_report::{GetCompatibilityReportHandler, GetCompatibilityReportQuery};
pub use get_shadow_report::{GetShadowReportHandler, GetShadowReportQuery};

use crate::domain::assessment::Profile;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::ProfileReader;

/// Fetches a profile, mapping absence to `ProfileNotFound`.
async fn require_profile(
    reader: &dyn ProfileReader,
    user_id: &UserId,
) -> Result<Profile, DomainError> {
    reader.get_profile(user_id).await?.ok_or_else(|| {
        DomainError::new(
            ErrorCode::ProfileNotFound,
            format!("No scored profile for user: {}", user_id),
        )
        .with_detail("user_id", user_id.as_str())
    })
}
