//! File-backed question bank source (JSON or YAML).

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::config::SelectionConfig;
use crate::domain::assessment::{Question, QuestionBank};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::QuestionBankSource;

/// Serialization format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankFormat {
    Json,
    Yaml,
}

impl BankFormat {
    /// Detects the format from `.json`, `.yaml` or `.yml`.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Some(BankFormat::Json),
            Some("yaml") | Some("yml") => Some(BankFormat::Yaml),
            _ => None,
        }
    }
}

/// Reads a list of question records from disk and validates them on every load.
pub struct FileQuestionBank {
    path: PathBuf,
}

impl FileQuestionBank {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Source for `selection.question_bank_path`, if one is configured.
    pub fn from_config(config: &SelectionConfig) -> Option<Self> {
        config.question_bank_path.as_ref().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, format: BankFormat, content: &str) -> Result<Vec<Question>, DomainError> {
        let parsed = match format {
            BankFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            BankFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|e| {
            DomainError::new(
                ErrorCode::MalformedQuestionBank,
                format!("Failed to parse question bank: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })
    }
}

#[async_trait]
impl QuestionBankSource for FileQuestionBank {
    async fn load(&self) -> Result<QuestionBank, DomainError> {
        let format = BankFormat::from_path(&self.path).ok_or_else(|| {
            DomainError::new(
                ErrorCode::MalformedQuestionBank,
                "Question bank must be a .json, .yaml or .yml file",
            )
            .with_detail("path", self.path.display().to_string())
        })?;

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            let code = if e.kind() == std::io::ErrorKind::NotFound {
                ErrorCode::QuestionBankNotFound
            } else {
                ErrorCode::StorageError
            };
            DomainError::new(code, format!("Failed to read question bank: {}", e))
                .with_detail("path", self.path.display().to_string())
        })?;

        let questions = self.parse(format, &content)?;
        let bank = QuestionBank::new(questions).map_err(|e| {
            DomainError::from(e).with_detail("path", self.path.display().to_string())
        })?;

        debug!(path = %self.path.display(), questions = bank.len(), "loaded question bank");
        Ok(bank)
    }
}
