//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//!
//! - `assessment` - Form selection for a user
//! - `reports` - Compatibility and shadow-trait reports

pub mod assessment;
pub mod reports;

pub use assessment::{SelectQuestionsCommand, SelectQuestionsHandler, SelectQuestionsResult};
pub use reports::{
    GetCompatibilityReportHandler, GetCompatibilityReportQuery, GetShadowReportHandler,
    GetShadowReportQuery,
};
