//! Single-point prefix crossover.
//!
//! Both parents are cloned and the genes at positions `0..=cutoff` are
//! exchanged between the two clones. Of the two recombined children only the
//! fitter one is kept.

use super::types::Chromosome;
use rand::Rng;

/// Swaps genes `0..=cutoff` between clones of `first` and `second`.
///
/// The cutoff position itself is part of the exchanged prefix, so
/// `cutoff = len - 1` swaps every gene. Parents are left untouched.
///
/// # Panics
/// Panics if `cutoff` is out of range for either parent.
pub fn prefix_swap<C: Chromosome>(first: &C, second: &C, cutoff: usize) -> (C, C) {
    let mut a = first.clone();
    let mut b = second.clone();
    for position in 0..=cutoff {
        a.swap_genes(&mut b, position);
    }
    (a, b)
}

/// Recombines two parents at a fixed cutoff and returns the fitter child.
///
/// On equal fitness the child carrying `second`'s prefix (the first clone)
/// wins.
pub fn fitter_child<C: Chromosome>(first: &C, second: &C, cutoff: usize) -> C {
    let (a, b) = prefix_swap(first, second, cutoff);
    if a.evaluate() < b.evaluate() {
        b
    } else {
        a
    }
}

/// Recombines two parents at a uniformly random cutoff in `[0, n_gene)` and
/// returns the fitter child.
///
/// # Panics
/// Panics if `n_gene` is zero.
pub fn single_point<C: Chromosome, R: Rng>(
    first: &C,
    second: &C,
    n_gene: usize,
    rng: &mut R,
) -> C {
    let cutoff = rng.random_range(0..n_gene);
    tracing::trace!(cutoff, "single-point crossover");
    fitter_child(first, second, cutoff)
}
