//! GetCompatibilityReport - Query handler comparing two users' profiles.

use std::sync::Arc;

use tracing::{debug, info};

use super::require_profile;
use crate::domain::assessment::Profile;
use crate::domain::compatibility::{CompatibilityCalculator, CompatibilityMode, CompatibilityResult};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ProfileReader;

/// Query for a compatibility report. Order matters under the reference formula.
#[derive(Debug, Clone)]
pub struct GetCompatibilityReportQuery {
    pub user_a: UserId,
    pub user_b: UserId,
    pub mode: CompatibilityMode,
}

/// Handler for compatibility reports.
pub struct GetCompatibilityReportHandler {
    profiles: Arc<dyn ProfileReader>,
    calculator: CompatibilityCalculator,
}

impl GetCompatibilityReportHandler {
    pub fn new(profiles: Arc<dyn ProfileReader>, calculator: CompatibilityCalculator) -> Self {
        Self {
            profiles,
            calculator,
        }
    }

    pub async fn handle(
        &self,
        query: GetCompatibilityReportQuery,
    ) -> Result<CompatibilityResult, DomainError> {
        let profile_a = require_profile(self.profiles.as_ref(), &query.user_a).await?;
        let profile_b = require_profile(self.profiles.as_ref(), &query.user_b).await?;
        log_missing(&query.user_a, &profile_a);
        log_missing(&query.user_b, &profile_b);

        let result = self.calculator.calculate(&profile_a, &profile_b, query.mode);

        info!(
            user_a = %query.user_a,
            user_b = %query.user_b,
            mode = %query.mode,
            overall_score = result.overall_score,
            "computed compatibility report"
        );
        Ok(result)
    }
}

fn log_missing(user_id: &UserId, profile: &Profile) {
    let missing = profile.missing_dimensions();
    if !missing.is_empty() {
        debug!(%user_id, ?missing, "scoring missing dimensions as neutral");
    }
}
