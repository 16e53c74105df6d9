//! Integration tests for form selection against a realistic bank.
//!
//! The bank has 200 items spread evenly over the seven dimensions and four
//! question types, 40% reverse-scored and 30 marked as core.

use std::collections::HashSet;

use persona_engine::domain::assessment::{
    AssessmentTier, Dimension, Framework, Question, QuestionBank, QuestionType,
};
use persona_engine::domain::foundation::QuestionId;
use persona_engine::domain::selection::{normalize_text, QuestionSelector, SelectionValidator};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn scenario_bank() -> QuestionBank {
    let questions = (0..200)
        .map(|i| {
            Question::new(
                QuestionId::new(format!("item-{:03}", i)).unwrap(),
                format!("I would describe myself with statement {}", i),
                QuestionType::ALL[(i / 7) % 4],
                Dimension::ALL[i % 7],
            )
            .reverse_scored(i % 5 < 2)
            .with_discrimination(0.5 + (i % 10) as f64 / 10.0)
            .core(i % 20 < 3)
        })
        .collect();
    QuestionBank::new(questions).unwrap()
}

/// `size` items over the seven dimensions where only the first `scarce`
/// items are forced-choice; the rest rotate through the other three types.
fn skewed_bank(size: usize, scarce: usize) -> QuestionBank {
    let common = [
        QuestionType::Likert,
        QuestionType::SituationalJudgment,
        QuestionType::BehavioralFrequency,
    ];
    let questions = (0..size)
        .map(|i| {
            let question_type = if i < scarce {
                QuestionType::ForcedChoice
            } else {
                common[(i / 7) % 3]
            };
            Question::new(
                QuestionId::new(format!("skew-{:03}", i)).unwrap(),
                format!("When plans change I respond with approach {}", i),
                question_type,
                Dimension::ALL[i % 7],
            )
            .reverse_scored(i % 5 < 2)
            .with_discrimination(0.5 + (i % 10) as f64 / 10.0)
        })
        .collect();
    QuestionBank::new(questions).unwrap()
}

/// 700 items, 100 per dimension and 175 per type, for the comprehensive tier.
fn large_bank() -> QuestionBank {
    let questions = (0..700)
        .map(|i| {
            Question::new(
                QuestionId::new(format!("large-{:03}", i)).unwrap(),
                format!("In most weeks I notice behaviour pattern {}", i),
                QuestionType::ALL[(i / 7) % 4],
                Dimension::ALL[i % 7],
            )
            .reverse_scored(i % 5 < 2)
            .with_discrimination(0.5 + (i % 10) as f64 / 10.0)
            .core(i % 20 < 3)
        })
        .collect();
    QuestionBank::new(questions).unwrap()
}

fn forced_choice_count(form: &[Question]) -> usize {
    form.iter()
        .filter(|q| q.question_type == QuestionType::ForcedChoice)
        .count()
}

fn prism() -> HashSet<Framework> {
    HashSet::from([Framework::Prism])
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn bank_matches_scenario_shape() {
    let bank = scenario_bank();
    let reverse = bank.questions().iter().filter(|q| q.reverse_scored).count();
    let core = bank.questions().iter().filter(|q| q.is_core).count();
    assert_eq!(bank.len(), 200);
    assert_eq!(reverse, 80);
    assert_eq!(core, 30);
    for dimension in Dimension::ALL {
        assert!(bank.questions().iter().filter(|q| q.dimension == dimension).count() >= 20);
    }
    for question_type in QuestionType::ALL {
        assert!(bank.questions().iter().filter(|q| q.question_type == question_type).count() >= 40);
    }
}

#[test]
fn quick_tier_meets_every_constraint_across_seeds() {
    let bank = scenario_bank();
    let selector = QuestionSelector::for_tier(AssessmentTier::Quick);

    for seed in 0..50 {
        let form = selector.select_seeded(&bank, &prism(), &HashSet::new(), seed);

        assert_eq!(form.len(), 35, "seed {}", seed);
        let ids: HashSet<&str> = form.iter().map(|q| q.id.as_str()).collect();
        let texts: HashSet<String> = form.iter().map(|q| normalize_text(&q.text)).collect();
        assert_eq!(ids.len(), 35);
        assert_eq!(texts.len(), 35);

        for dimension in Dimension::ALL {
            let count = form.iter().filter(|q| q.dimension == dimension).count();
            assert!(count >= 5, "seed {} {} has {}", seed, dimension, count);
        }
        for question_type in QuestionType::ALL {
            let count = form.iter().filter(|q| q.question_type == question_type).count();
            assert!(count >= 2, "seed {} {} has {}", seed, question_type, count);
        }
        let ratio = form.iter().filter(|q| q.reverse_scored).count() as f64 / 35.0;
        assert!((0.3..=0.5).contains(&ratio), "seed {} ratio {}", seed, ratio);
    }
}

#[test]
fn selected_forms_validate_cleanly() {
    let bank = scenario_bank();
    for tier in [AssessmentTier::Quick, AssessmentTier::Standard] {
        let selector = QuestionSelector::for_tier(tier);
        for seed in 0..10 {
            let form = selector.select_seeded(&bank, &prism(), &HashSet::new(), seed);
            let report = SelectionValidator::validate(&form, selector.constraints());
            assert!(report.valid, "{} seed {}: {:?}", tier, seed, report.issue_messages());
        }
    }
}

#[test]
fn excluded_items_never_reappear() {
    let bank = scenario_bank();
    let selector = QuestionSelector::for_tier(AssessmentTier::Quick);
    let first = selector.select_seeded(&bank, &prism(), &HashSet::new(), 11);
    let seen: HashSet<String> = first.iter().map(|q| q.id.to_string()).collect();

    let second = selector.select_seeded(&bank, &prism(), &seen, 12);

    assert_eq!(second.len(), 35);
    assert!(second.iter().all(|q| !seen.contains(q.id.as_str())));
}

#[test]
fn undersized_bank_yields_short_form_with_issues() {
    let bank = QuestionBank::new(scenario_bank().questions()[..20].to_vec()).unwrap();
    let selector = QuestionSelector::for_tier(AssessmentTier::Quick);

    let form = selector.select_seeded(&bank, &prism(), &HashSet::new(), 0);
    let report = SelectionValidator::validate(&form, selector.constraints());

    assert_eq!(form.len(), 20);
    assert!(!report.valid);
    assert!(!report.issues.is_empty());
}

#[test]
fn scarce_question_type_reaches_minimum_in_full_quick_form() {
    // Seven dimensions at five each fill all 35 slots before types are checked.
    let bank = skewed_bank(210, 7);
    let selector = QuestionSelector::for_tier(AssessmentTier::Quick);

    for seed in 0..50 {
        let form = selector.select_seeded(&bank, &prism(), &HashSet::new(), seed);
        let report = SelectionValidator::validate(&form, selector.constraints());

        assert_eq!(form.len(), 35, "seed {}", seed);
        assert!(forced_choice_count(&form) >= 2, "seed {} has {}", seed, forced_choice_count(&form));
        assert!(report.valid, "seed {}: {:?}", seed, report.issue_messages());
    }
}

#[test]
fn scarce_question_type_reaches_minimum_in_standard_form() {
    let bank = skewed_bank(280, 14);
    let selector = QuestionSelector::for_tier(AssessmentTier::Standard);

    for seed in 0..20 {
        let form = selector.select_seeded(&bank, &prism(), &HashSet::new(), seed);
        let report = SelectionValidator::validate(&form, selector.constraints());

        assert_eq!(form.len(), 70, "seed {}", seed);
        assert!(forced_choice_count(&form) >= 5, "seed {} has {}", seed, forced_choice_count(&form));
        assert!(report.valid, "seed {}: {:?}", seed, report.issue_messages());
    }
}

#[test]
fn comprehensive_tier_validates_on_large_bank() {
    let bank = large_bank();
    let selector = QuestionSelector::for_tier(AssessmentTier::Comprehensive);

    for seed in 0..10 {
        let form = selector.select_seeded(&bank, &prism(), &HashSet::new(), seed);
        let report = SelectionValidator::validate(&form, selector.constraints());

        assert_eq!(form.len(), 140, "seed {}", seed);
        for dimension in Dimension::ALL {
            let count = form.iter().filter(|q| q.dimension == dimension).count();
            assert!(count >= 15, "seed {} {} has {}", seed, dimension, count);
        }
        assert!(report.valid, "seed {}: {:?}", seed, report.issue_messages());
    }
}
