//! In-memory question bank source.

use async_trait::async_trait;

use crate::domain::assessment::QuestionBank;
use crate::domain::foundation::DomainError;
use crate::ports::QuestionBankSource;

/// Serves a bank that was validated when it was constructed.
pub struct InMemoryQuestionBank {
    bank: QuestionBank,
}

impl InMemoryQuestionBank {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }
}

#[async_trait]
impl QuestionBankSource for InMemoryQuestionBank {
    async fn load(&self) -> Result<QuestionBank, DomainError> {
        Ok(self.bank.clone())
    }
}
