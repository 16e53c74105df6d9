//! GetShadowReport - Query handler for a user's Dark Triad projection.

use std::sync::Arc;

use tracing::info;

use super::require_profile;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::shadow::{DarkTriadCalculator, DarkTriadProfile, ExtendedResponses};
use crate::ports::ProfileReader;

/// Query for a shadow-trait report.
#[derive(Debug, Clone)]
pub struct GetShadowReportQuery {
    pub user_id: UserId,
    /// Measured trait values from supplementary questions, if collected.
    pub extended: Option<ExtendedResponses>,
}

/// Handler for shadow-trait reports.
pub struct GetShadowReportHandler {
    profiles: Arc<dyn ProfileReader>,
}

impl GetShadowReportHandler {
    pub fn new(profiles: Arc<dyn ProfileReader>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, query: GetShadowReportQuery) -> Result<DarkTriadProfile, DomainError> {
        let profile = require_profile(self.profiles.as_ref(), &query.user_id).await?;
        let report = DarkTriadCalculator::calculate(&profile, query.extended.as_ref());

        info!(
            user_id = %query.user_id,
            overall_shadow_index = report.overall_shadow_index,
            dominant_trait = ?report.dominant_trait,
            extended = query.extended.is_some(),
            "computed shadow report"
        );
        Ok(report)
    }
}
