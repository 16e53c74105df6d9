//! Question Selector - Constrained assembly of a test form from a bank.
//!
//! Selection runs in five ordered phases. Every phase only adds items that are
//! not already on the form and whose normalized wording differs from every
//! item already on it, and no phase adds items once the target size is met.
//!
//! 1. Core guarantee: core items by discrimination, capped at 60% of the form
//! 2. Minimum coverage: dimension, question type, then requested frameworks.
//!    A type still short once the form is full is swapped in within a dimension
//! 3. Weighted fill: discrimination x weight sampling with a dimension soft cap
//! 4. Reverse-ratio balancing: same-dimension swaps toward the allowed range
//! 5. Shuffle

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use super::sampling::{normalize_text, shuffled, weighted_draw};
use crate::domain::assessment::{
    AssessmentTier, Dimension, EnneagramType, Framework, MbtiAxis, Question, QuestionBank,
    QuestionType, SelectionConstraints,
};

/// Tolerance when turning ratio bounds into item counts.
const RATIO_EPSILON: f64 = 1e-9;

/// Assembles test forms for one set of constraints.
#[derive(Debug, Clone)]
pub struct QuestionSelector {
    constraints: SelectionConstraints,
}

impl QuestionSelector {
    pub fn new(constraints: SelectionConstraints) -> Self {
        Self { constraints }
    }

    /// Selector preconfigured with a named tier's constraints.
    pub fn for_tier(tier: AssessmentTier) -> Self {
        Self::new(tier.constraints())
    }

    pub fn constraints(&self) -> &SelectionConstraints {
        &self.constraints
    }

    /// Selects a form using a deterministic generator seeded from `seed`.
    ///
    /// The same bank, frameworks, exclusions and seed always yield the same
    /// form in the same order.
    pub fn select_seeded(
        &self,
        bank: &QuestionBank,
        frameworks: &HashSet<Framework>,
        exclude_ids: &HashSet<String>,
        seed: u64,
    ) -> Vec<Question> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.select(bank, frameworks, exclude_ids, &mut rng)
    }

    /// Selects up to `total_questions` items from the bank.
    ///
    /// Never fails: a bank too small for the constraints yields a shorter
    /// form, which [`super::SelectionValidator`] reports.
    pub fn select<R: Rng + ?Sized>(
        &self,
        bank: &QuestionBank,
        frameworks: &HashSet<Framework>,
        exclude_ids: &HashSet<String>,
        rng: &mut R,
    ) -> Vec<Question> {
        let available: Vec<&Question> = bank
            .questions()
            .iter()
            .filter(|q| !exclude_ids.contains(q.id.as_str()))
            .collect();

        let target = self.constraints.total_questions;
        if available.len() < target {
            warn!(
                available = available.len(),
                target,
                excluded = exclude_ids.len(),
                "question bank cannot fill the requested form"
            );
        }

        let mut form = FormBuilder::new(target);

        self.add_core_items(&mut form, &available);
        debug!(selected = form.len(), "core guarantee phase complete");

        self.add_minimum_coverage(&mut form, &available, frameworks, rng);
        debug!(selected = form.len(), "minimum coverage phase complete");

        self.fill_by_weight(&mut form, &available, rng);
        debug!(selected = form.len(), "weighted fill phase complete");

        let form = self.balance_reverse_ratio(form, &available, frameworks, rng);
        debug!(
            selected = form.len(),
            reverse = form.reverse_count(),
            "reverse ratio phase complete"
        );

        let mut selected: Vec<Question> = form.into_questions().into_iter().cloned().collect();
        selected.shuffle(rng);
        selected
    }

    fn add_core_items<'a>(&self, form: &mut FormBuilder<'a>, available: &[&'a Question]) {
        let mut core: Vec<&Question> = available.iter().copied().filter(|q| q.is_core).collect();
        // Stable sort keeps bank order among equal discrimination.
        core.sort_by(|a, b| b.discrimination.total_cmp(&a.discrimination));

        let cap = self.constraints.core_cap();
        for question in core {
            if form.len() >= cap {
                break;
            }
            form.add(question);
        }
    }

    fn add_minimum_coverage<'a, R: Rng + ?Sized>(
        &self,
        form: &mut FormBuilder<'a>,
        available: &[&'a Question],
        frameworks: &HashSet<Framework>,
        rng: &mut R,
    ) {
        let c = &self.constraints;

        for dimension in Dimension::ALL {
            let needed = c
                .min_per_prism_dimension
                .saturating_sub(form.dimension_count(dimension));
            fill_uniform(form, available, needed, rng, |q| q.dimension == dimension);
        }

        for question_type in QuestionType::ALL {
            let needed = c
                .min_per_question_type
                .saturating_sub(form.type_count(question_type));
            fill_uniform(form, available, needed, rng, |q| q.question_type == question_type);

            let short = c
                .min_per_question_type
                .saturating_sub(form.type_count(question_type));
            if short > 0 {
                self.swap_in_type(form, available, question_type, short, rng);
            }
        }

        if frameworks.contains(&Framework::Mbti) && c.min_per_mbti_dimension > 0 {
            for axis in MbtiAxis::ALL {
                let tag = axis.tag();
                let needed = c.min_per_mbti_dimension.saturating_sub(form.tag_count(tag));
                fill_uniform(form, available, needed, rng, |q| q.has_tag(tag));
            }
        }

        if frameworks.contains(&Framework::Enneagram) && c.min_per_enneagram_type > 0 {
            for enneagram_type in EnneagramType::all() {
                let tag = enneagram_type.tag();
                let needed = c.min_per_enneagram_type.saturating_sub(form.tag_count(&tag));
                fill_uniform(form, available, needed, rng, |q| q.has_tag(&tag));
            }
        }
    }

    /// Replaces non-core items of over-supplied types with same-dimension
    /// items of `question_type`, keeping form size and dimension counts.
    fn swap_in_type<'a, R: Rng + ?Sized>(
        &self,
        form: &mut FormBuilder<'a>,
        available: &[&'a Question],
        question_type: QuestionType,
        needed: usize,
        rng: &mut R,
    ) {
        let min_per_type = self.constraints.min_per_question_type;
        let candidates = shuffled(
            available
                .iter()
                .copied()
                .filter(|q| q.question_type == question_type && form.accepts(q))
                .collect(),
            rng,
        );

        let mut swapped = 0;
        for incoming in candidates {
            if swapped >= needed {
                break;
            }
            let outgoing = form.questions().iter().position(|q| {
                !q.is_core
                    && q.dimension == incoming.dimension
                    && q.question_type != question_type
                    && form.type_count(q.question_type) > min_per_type
            });
            if let Some(index) = outgoing {
                if form.replace(index, incoming) {
                    swapped += 1;
                }
            }
        }

        if swapped < needed {
            warn!(
                %question_type,
                swapped,
                needed,
                "question type minimum unreachable without breaking other minimums"
            );
        }
    }

    fn fill_by_weight<'a, R: Rng + ?Sized>(
        &self,
        form: &mut FormBuilder<'a>,
        available: &[&'a Question],
        rng: &mut R,
    ) {
        let remaining = form.remaining();
        if remaining == 0 {
            return;
        }

        let soft_cap = self.constraints.dimension_soft_cap();
        let saturated: HashSet<Dimension> = Dimension::ALL
            .into_iter()
            .filter(|d| form.dimension_count(*d) >= soft_cap)
            .collect();

        let pool: Vec<&Question> = available.iter().copied().filter(|q| form.accepts(q)).collect();
        let capped: Vec<&Question> = pool
            .iter()
            .copied()
            .filter(|q| !saturated.contains(&q.dimension))
            .collect();

        let primary = if capped.is_empty() { pool } else { capped };
        weighted_draw(primary, remaining, rng, |q| form.add(q));

        // The soft cap must not leave the form short when other items exist.
        let remaining = form.remaining();
        if remaining > 0 {
            let leftovers: Vec<&Question> =
                available.iter().copied().filter(|q| form.accepts(q)).collect();
            weighted_draw(leftovers, remaining, rng, |q| form.add(q));
        }
    }

    /// Swaps non-core items for same-dimension items of the opposite keying
    /// until the reverse-scored fraction sits inside the allowed range.
    ///
    /// Swaps are planned against a snapshot and applied in one pass.
    fn balance_reverse_ratio<'a, R: Rng + ?Sized>(
        &self,
        form: FormBuilder<'a>,
        available: &[&'a Question],
        frameworks: &HashSet<Framework>,
        rng: &mut R,
    ) -> FormBuilder<'a> {
        let n = form.len();
        if n == 0 {
            return form;
        }

        let range = self.constraints.reverse_scored_ratio;
        let reverse = form.reverse_count();
        let floor = (range.min * n as f64 - RATIO_EPSILON).ceil().max(0.0) as usize;
        let ceiling = (range.max * n as f64 + RATIO_EPSILON).floor() as usize;

        let (want_reverse, needed) = if reverse < floor {
            (true, floor - reverse)
        } else if reverse > ceiling {
            (false, reverse - ceiling)
        } else {
            return form;
        };

        let snapshot: Vec<&'a Question> = form.questions().to_vec();
        let mut outgoing: Vec<usize> = snapshot
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.is_core && q.reverse_scored != want_reverse)
            .map(|(i, _)| i)
            .collect();
        outgoing.shuffle(rng);

        let replacements = shuffled(
            available
                .iter()
                .copied()
                .filter(|q| q.reverse_scored == want_reverse && form.accepts(q))
                .collect(),
            rng,
        );

        let mut type_counts: HashMap<QuestionType, usize> = QuestionType::ALL
            .into_iter()
            .map(|t| (t, form.type_count(t)))
            .collect();
        let mut tag_counts: HashMap<&str, usize> = HashMap::new();
        for question in snapshot.iter().copied() {
            for tag in &question.framework_tags {
                *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        let mut used: HashSet<&str> = HashSet::new();
        let mut used_texts: HashSet<String> = HashSet::new();
        let mut swaps: Vec<(usize, &'a Question)> = Vec::new();
        let min_per_type = self.constraints.min_per_question_type;

        for index in outgoing {
            if swaps.len() >= needed {
                break;
            }
            let out = snapshot[index];
            // Items holding a framework tag at its minimum stay on the form.
            let load_bearing = out.framework_tags.iter().any(|tag| {
                let minimum = self.tag_minimum(tag, frameworks);
                minimum > 0 && tag_counts.get(tag.as_str()).copied().unwrap_or(0) <= minimum
            });
            if load_bearing {
                continue;
            }
            let can_drop_type =
                type_counts.get(&out.question_type).copied().unwrap_or(0) > min_per_type;

            let eligible = |q: &&'a Question| {
                q.dimension == out.dimension
                    && !used.contains(q.id.as_str())
                    && !used_texts.contains(&normalize_text(&q.text))
            };
            let choice = replacements
                .iter()
                .copied()
                .filter(eligible)
                .find(|q| q.question_type == out.question_type)
                .or_else(|| {
                    if can_drop_type {
                        replacements.iter().copied().find(eligible)
                    } else {
                        None
                    }
                });

            if let Some(incoming) = choice {
                *type_counts.entry(out.question_type).or_insert(0) -= 1;
                *type_counts.entry(incoming.question_type).or_insert(0) += 1;
                for tag in &out.framework_tags {
                    if let Some(count) = tag_counts.get_mut(tag.as_str()) {
                        *count = count.saturating_sub(1);
                    }
                }
                for tag in &incoming.framework_tags {
                    *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
                }
                used.insert(incoming.id.as_str());
                used_texts.insert(normalize_text(&incoming.text));
                swaps.push((index, incoming));
            }
        }

        if swaps.len() < needed {
            warn!(
                planned = swaps.len(),
                needed,
                want_reverse,
                "not enough replacements to reach the reverse-scored ratio range"
            );
        }
        if swaps.is_empty() {
            return form;
        }

        let mut rebuilt = snapshot;
        for (index, incoming) in swaps {
            rebuilt[index] = incoming;
        }
        FormBuilder::from_questions(form.target, rebuilt)
    }
}

impl QuestionSelector {
    /// Coverage minimum that applies to a framework tag for this request.
    fn tag_minimum(&self, tag: &str, frameworks: &HashSet<Framework>) -> usize {
        let is_mbti = MbtiAxis::ALL.iter().any(|a| a.tag() == tag);
        if is_mbti && frameworks.contains(&Framework::Mbti) {
            return self.constraints.min_per_mbti_dimension;
        }
        let is_enneagram = EnneagramType::all().any(|t| t.tag() == tag);
        if is_enneagram && frameworks.contains(&Framework::Enneagram) {
            return self.constraints.min_per_enneagram_type;
        }
        0
    }
}

/// Adds up to `needed` uniformly chosen items matching `matches`.
fn fill_uniform<'a, R, F>(
    form: &mut FormBuilder<'a>,
    available: &[&'a Question],
    needed: usize,
    rng: &mut R,
    matches: F,
) where
    R: Rng + ?Sized,
    F: Fn(&Question) -> bool,
{
    if needed == 0 {
        return;
    }
    let candidates = shuffled(
        available
            .iter()
            .copied()
            .filter(|q| matches(q) && form.accepts(q))
            .collect(),
        rng,
    );

    let mut added = 0;
    for question in candidates {
        if added >= needed || form.is_full() {
            break;
        }
        if form.add(question) {
            added += 1;
        }
    }
}

/// In-progress form with running tallies.
#[derive(Debug)]
struct FormBuilder<'a> {
    target: usize,
    questions: Vec<&'a Question>,
    ids: HashSet<&'a str>,
    texts: HashSet<String>,
    dimensions: HashMap<Dimension, usize>,
    types: HashMap<QuestionType, usize>,
}

impl<'a> FormBuilder<'a> {
    fn new(target: usize) -> Self {
        Self {
            target,
            questions: Vec::with_capacity(target),
            ids: HashSet::new(),
            texts: HashSet::new(),
            dimensions: HashMap::new(),
            types: HashMap::new(),
        }
    }

    fn from_questions(target: usize, questions: Vec<&'a Question>) -> Self {
        let mut form = Self::new(target);
        for question in questions {
            form.add(question);
        }
        form
    }

    fn len(&self) -> usize {
        self.questions.len()
    }

    fn is_full(&self) -> bool {
        self.questions.len() >= self.target
    }

    fn remaining(&self) -> usize {
        self.target.saturating_sub(self.questions.len())
    }

    fn accepts(&self, question: &Question) -> bool {
        !self.ids.contains(question.id.as_str())
            && !self.texts.contains(&normalize_text(&question.text))
    }

    /// Adds the question if there is room and it is not a duplicate.
    fn add(&mut self, question: &'a Question) -> bool {
        if self.is_full() || !self.accepts(question) {
            return false;
        }
        self.ids.insert(question.id.as_str());
        self.texts.insert(normalize_text(&question.text));
        *self.dimensions.entry(question.dimension).or_insert(0) += 1;
        *self.types.entry(question.question_type).or_insert(0) += 1;
        self.questions.push(question);
        true
    }

    /// Puts `incoming` in place of the item at `index`, updating tallies.
    fn replace(&mut self, index: usize, incoming: &'a Question) -> bool {
        if index >= self.questions.len() || !self.accepts(incoming) {
            return false;
        }
        let outgoing = self.questions[index];
        self.ids.remove(outgoing.id.as_str());
        self.texts.remove(&normalize_text(&outgoing.text));
        if let Some(count) = self.dimensions.get_mut(&outgoing.dimension) {
            *count = count.saturating_sub(1);
        }
        if let Some(count) = self.types.get_mut(&outgoing.question_type) {
            *count = count.saturating_sub(1);
        }

        self.ids.insert(incoming.id.as_str());
        self.texts.insert(normalize_text(&incoming.text));
        *self.dimensions.entry(incoming.dimension).or_insert(0) += 1;
        *self.types.entry(incoming.question_type).or_insert(0) += 1;
        self.questions[index] = incoming;
        true
    }

    fn dimension_count(&self, dimension: Dimension) -> usize {
        self.dimensions.get(&dimension).copied().unwrap_or(0)
    }

    fn type_count(&self, question_type: QuestionType) -> usize {
        self.types.get(&question_type).copied().unwrap_or(0)
    }

    fn tag_count(&self, tag: &str) -> usize {
        self.questions.iter().filter(|q| q.has_tag(tag)).count()
    }

    fn reverse_count(&self) -> usize {
        self.questions.iter().filter(|q| q.reverse_scored).count()
    }

    fn questions(&self) -> &[&'a Question] {
        &self.questions
    }

    fn into_questions(self) -> Vec<&'a Question> {
        self.questions
    }
}
