//! QuestionBankSource port for loading the item catalogue.

use async_trait::async_trait;

use crate::domain::assessment::QuestionBank;
use crate::domain::foundation::DomainError;

/// Supplies a validated question bank.
///
/// Implementations must reject malformed records at load time, so callers
/// never hand an unchecked bank to the selector.
#[async_trait]
pub trait QuestionBankSource: Send + Sync {
    /// Load the full bank.
    async fn load(&self) -> Result<QuestionBank, DomainError>;
}
