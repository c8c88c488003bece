//! Ranking and elitist pairing.
//!
//! Parents are never drawn at random. The population is ranked by descending
//! fitness and the best `2 * n_pairs` members are paired off in rank order:
//! (0, 1), (2, 3), and so on. This is truncation selection without
//! replacement.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Chromosome;
use std::cmp::Ordering;

/// A pair of parent ranks chosen for crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentPair {
    /// Rank of the first parent.
    pub first: usize,
    /// Rank of the second parent (always `first + 1`).
    pub second: usize,
}

/// Sorts `samples` in place by descending fitness and returns the scores in
/// the new order.
///
/// Every member is evaluated exactly once per call. A `NaN` score ranks below
/// every other score, including negative infinity. The sort is stable;
/// members with equal scores keep their relative order.
pub fn rank_descending<C: Chromosome>(samples: &mut Vec<C>) -> Vec<f64> {
    let mut scored: Vec<(f64, C)> = samples.drain(..).map(|c| (c.evaluate(), c)).collect();
    scored.sort_by(|a, b| {
        rank_key(b.0)
            .total_cmp(&rank_key(a.0))
            .then(nan_last(a.0, b.0))
    });
    let mut scores = Vec::with_capacity(scored.len());
    samples.extend(scored.into_iter().map(|(score, c)| {
        scores.push(score);
        c
    }));
    scores
}

fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

/// Breaks the tie between `NaN` and a genuine negative infinity.
fn nan_last(a: f64, b: f64) -> Ordering {
    a.is_nan().cmp(&b.is_nan())
}

/// Pairs the first `2 * n_pairs` ranks as `(2k, 2k + 1)`.
pub fn elitist_pairs(n_pairs: usize) -> Vec<ParentPair> {
    (0..n_pairs)
        .map(|k| ParentPair {
            first: 2 * k,
            second: 2 * k + 1,
        })
        .collect()
}
