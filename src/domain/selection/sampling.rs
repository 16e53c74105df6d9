//! Text normalisation and random sampling helpers for form assembly.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::assessment::Question;

/// Canonical form used to detect items whose wording is identical.
///
/// Lowercases, strips punctuation and symbols, then trims.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Uniform random permutation of a candidate list.
pub(crate) fn shuffled<'a, R: Rng + ?Sized>(
    mut candidates: Vec<&'a Question>,
    rng: &mut R,
) -> Vec<&'a Question> {
    candidates.shuffle(rng);
    candidates
}

/// Draws up to `count` items without replacement, each draw proportional to
/// the remaining items' sampling weight.
///
/// `accept` is consulted for every draw; rejected items are discarded and do
/// not count toward `count`.
pub(crate) fn weighted_draw<'a, R, F>(
    pool: Vec<&'a Question>,
    count: usize,
    rng: &mut R,
    mut accept: F,
) -> usize
where
    R: Rng + ?Sized,
    F: FnMut(&'a Question) -> bool,
{
    let mut entries: Vec<(&Question, f64)> = pool
        .into_iter()
        .map(|q| (q, q.sampling_weight().max(0.0)))
        .collect();
    let mut accepted = 0;

    while accepted < count && !entries.is_empty() {
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        let index = if total > 0.0 && total.is_finite() {
            pick_weighted(&entries, rng.gen_range(0.0..total))
        } else {
            rng.gen_range(0..entries.len())
        };

        let (question, _) = entries.swap_remove(index);
        if accept(question) {
            accepted += 1;
        }
    }

    accepted
}

fn pick_weighted(entries: &[(&Question, f64)], target: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, (_, weight)) in entries.iter().enumerate() {
        cumulative += weight;
        if target < cumulative {
            return i;
        }
    }
    // Rounding can leave `target` a hair above the final cumulative sum.
    entries.len() - 1
}
