//! SelectQuestions - Assembles a test form for a user.
//!
//! Questions the user has already seen are excluded. When too few unseen
//! questions remain, the configured fallback decides whether to deliver a
//! short form or reselect from the whole bank.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use crate::config::{ExclusionFallback, SelectionConfig};
use crate::domain::assessment::{AssessmentTier, Framework, Question};
use crate::domain::foundation::{DomainError, FormId, UserId};
use crate::domain::selection::{QuestionSelector, SelectionReport, SelectionValidator};
use crate::ports::{QuestionBankSource, SeenQuestionTracker};

/// Command to select a form for a user.
#[derive(Debug, Clone)]
pub struct SelectQuestionsCommand {
    pub user_id: UserId,
    /// Falls back to the configured default tier.
    pub tier: Option<AssessmentTier>,
    /// Falls back to the configured frameworks.
    pub frameworks: Option<HashSet<Framework>>,
    /// Falls back to the configured seed, then to a fresh random one.
    pub seed: Option<u64>,
}

impl SelectQuestionsCommand {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            tier: None,
            frameworks: None,
            seed: None,
        }
    }

    pub fn with_tier(mut self, tier: AssessmentTier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn with_frameworks(mut self, frameworks: impl IntoIterator<Item = Framework>) -> Self {
        self.frameworks = Some(frameworks.into_iter().collect());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of a selection.
#[derive(Debug, Clone)]
pub struct SelectQuestionsResult {
    pub form_id: FormId,
    pub tier: AssessmentTier,
    pub questions: Vec<Question>,
    pub validation: SelectionReport,
    /// True when seen questions were allowed back in.
    pub used_fallback: bool,
    /// Seed that reproduces this form from the same bank and history.
    pub seed: u64,
}

/// Handler for selecting forms.
pub struct SelectQuestionsHandler {
    bank_source: Arc<dyn QuestionBankSource>,
    seen_tracker: Arc<dyn SeenQuestionTracker>,
    config: SelectionConfig,
}

impl SelectQuestionsHandler {
    pub fn new(
        bank_source: Arc<dyn QuestionBankSource>,
        seen_tracker: Arc<dyn SeenQuestionTracker>,
        config: SelectionConfig,
    ) -> Self {
        Self {
            bank_source,
            seen_tracker,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: SelectQuestionsCommand,
    ) -> Result<SelectQuestionsResult, DomainError> {
        let tier = cmd.tier.unwrap_or(self.config.default_tier);
        let frameworks = cmd
            .frameworks
            .unwrap_or_else(|| self.config.framework_set());
        let seed = cmd
            .seed
            .or(self.config.seed)
            .unwrap_or_else(|| rand::thread_rng().gen());

        // 1. Load the bank and the user's history
        let bank = self.bank_source.load().await?;
        let seen = self.seen_tracker.seen_ids(&cmd.user_id).await?;

        // 2. Select, widening to the whole bank if the policy allows
        let selector = QuestionSelector::for_tier(tier);
        let target = selector.constraints().total_questions;
        let available = bank.available_count(&seen);
        let widen = available < target
            && !seen.is_empty()
            && self.config.exclusion_fallback == ExclusionFallback::WhenInsufficient;

        let questions = if widen {
            warn!(
                user_id = %cmd.user_id,
                available,
                target,
                "not enough unseen questions, reselecting from full bank"
            );
            selector.select_seeded(&bank, &frameworks, &HashSet::new(), seed)
        } else {
            selector.select_seeded(&bank, &frameworks, &seen, seed)
        };

        // 3. Audit the form
        let validation = SelectionValidator::validate(&questions, selector.constraints());
        if !validation.valid {
            warn!(
                user_id = %cmd.user_id,
                issues = ?validation.issue_messages(),
                "selected form failed validation"
            );
        }

        // 4. Remember what was delivered
        let ids: Vec<String> = questions.iter().map(|q| q.id.to_string()).collect();
        self.seen_tracker.record_seen(&cmd.user_id, &ids).await?;

        let form_id = FormId::new();
        info!(
            user_id = %cmd.user_id,
            %form_id,
            %tier,
            questions = questions.len(),
            used_fallback = widen,
            seed,
            "selected assessment form"
        );

        Ok(SelectQuestionsResult {
            form_id,
            tier,
            questions,
            validation,
            used_fallback: widen,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryQuestionBank, InMemorySeenQuestionTracker};
    use crate::domain::assessment::{Dimension, QuestionBank, QuestionType};
    use crate::domain::foundation::{ErrorCode, QuestionId};
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Fixtures
    // ─────────────────────────────────────────────────────────────────────

    fn balanced_bank(size: usize) -> QuestionBank {
        let questions = (0..size)
            .map(|i| {
                Question::new(
                    QuestionId::new(format!("q{}", i)).unwrap(),
                    format!("Statement number {}", i),
                    QuestionType::ALL[(i / 7) % 4],
                    Dimension::ALL[i % 7],
                )
                .reverse_scored(i % 5 < 2)
            })
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    struct FailingBank;

    #[async_trait]
    impl QuestionBankSource for FailingBank {
        async fn load(&self) -> Result<QuestionBank, DomainError> {
            Err(DomainError::new(ErrorCode::QuestionBankNotFound, "no bank"))
        }
    }

    fn handler(
        bank: QuestionBank,
        tracker: Arc<InMemorySeenQuestionTracker>,
        config: SelectionConfig,
    ) -> SelectQuestionsHandler {
        SelectQuestionsHandler::new(Arc::new(InMemoryQuestionBank::new(bank)), tracker, config)
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn quick() -> SelectQuestionsCommand {
        SelectQuestionsCommand::for_user(user()).with_tier(AssessmentTier::Quick)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn selects_valid_form_and_records_it() {
        let tracker = Arc::new(InMemorySeenQuestionTracker::new());
        let handler = handler(balanced_bank(200), tracker.clone(), SelectionConfig::default());

        let result = handler.handle(quick().with_seed(3)).await.unwrap();

        assert_eq!(result.questions.len(), 35);
        assert!(result.validation.valid, "{:?}", result.validation.issue_messages());
        assert!(!result.used_fallback);
        assert_eq!(result.seed, 3);
        assert_eq!(tracker.seen_count(&user()), 35);
    }

    #[tokio::test]
    async fn second_form_avoids_seen_questions() {
        let tracker = Arc::new(InMemorySeenQuestionTracker::new());
        let handler = handler(balanced_bank(200), tracker.clone(), SelectionConfig::default());

        let first = handler.handle(quick().with_seed(1)).await.unwrap();
        let second = handler.handle(quick().with_seed(2)).await.unwrap();

        let first_ids: HashSet<&str> = first.questions.iter().map(|q| q.id.as_str()).collect();
        assert!(second.questions.iter().all(|q| !first_ids.contains(q.id.as_str())));
        assert!(!second.used_fallback);
        assert_eq!(tracker.seen_count(&user()), 70);
    }

    #[tokio::test]
    async fn exhausted_bank_falls_back_to_full_bank() {
        let tracker = Arc::new(InMemorySeenQuestionTracker::new());
        let handler = handler(balanced_bank(40), tracker.clone(), SelectionConfig::default());

        handler.handle(quick().with_seed(1)).await.unwrap();
        let second = handler.handle(quick().with_seed(2)).await.unwrap();

        assert!(second.used_fallback);
        assert_eq!(second.questions.len(), 35);
    }

    #[tokio::test]
    async fn never_fallback_delivers_short_form() {
        let tracker = Arc::new(InMemorySeenQuestionTracker::new());
        let config = SelectionConfig {
            exclusion_fallback: ExclusionFallback::Never,
            ..Default::default()
        };
        let handler = handler(balanced_bank(40), tracker, config);

        handler.handle(quick().with_seed(1)).await.unwrap();
        let second = handler.handle(quick().with_seed(2)).await.unwrap();

        assert!(!second.used_fallback);
        assert_eq!(second.questions.len(), 5);
        assert!(!second.validation.valid);
    }

    #[tokio::test]
    async fn configured_seed_makes_forms_reproducible() {
        let config = SelectionConfig {
            seed: Some(99),
            ..Default::default()
        };
        let a = handler(
            balanced_bank(200),
            Arc::new(InMemorySeenQuestionTracker::new()),
            config.clone(),
        );
        let b = handler(
            balanced_bank(200),
            Arc::new(InMemorySeenQuestionTracker::new()),
            config,
        );

        let first = a.handle(quick()).await.unwrap();
        let second = b.handle(quick()).await.unwrap();

        assert_eq!(first.seed, 99);
        assert_eq!(first.questions, second.questions);
        assert_ne!(first.form_id, second.form_id);
    }

    #[tokio::test]
    async fn command_seed_overrides_configured_seed() {
        let config = SelectionConfig {
            seed: Some(99),
            ..Default::default()
        };
        let handler = handler(
            balanced_bank(200),
            Arc::new(InMemorySeenQuestionTracker::new()),
            config,
        );

        let result = handler.handle(quick().with_seed(7)).await.unwrap();
        assert_eq!(result.seed, 7);
    }

    #[tokio::test]
    async fn default_tier_comes_from_config() {
        let handler = handler(
            balanced_bank(200),
            Arc::new(InMemorySeenQuestionTracker::new()),
            SelectionConfig::default(),
        );

        let result = handler
            .handle(SelectQuestionsCommand::for_user(user()).with_seed(5))
            .await
            .unwrap();
        assert_eq!(result.tier, AssessmentTier::Standard);
        assert_eq!(result.questions.len(), 70);
    }

    #[tokio::test]
    async fn bank_errors_propagate() {
        let handler = SelectQuestionsHandler::new(
            Arc::new(FailingBank),
            Arc::new(InMemorySeenQuestionTracker::new()),
            SelectionConfig::default(),
        );

        let err = handler.handle(quick()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionBankNotFound);
    }
}
