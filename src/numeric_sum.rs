//! Reference candidate: integers that should add up to a target.
//!
//! Each [`NumericSum`] holds a fixed number of [`IntGene`]s. Its fitness is
//! the negative distance between the gene sum and the target, so a perfect
//! candidate scores `0.0` and every other candidate scores below it.

use crate::ga::{Chromosome, Gene};
use rand::Rng;
use std::fmt;

/// Lower bound of the initial gene values.
pub const INITIAL_MIN: i64 = -50;

/// Upper bound (inclusive) of the initial gene values.
pub const INITIAL_MAX: i64 = 50;

/// Mutation steps are drawn from `0..MUTATION_STEP`.
pub const MUTATION_STEP: i64 = 25;

/// An integer gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntGene(pub i64);

impl Gene for IntGene {
    /// Adds or subtracts, with equal probability, a step in
    /// `0..MUTATION_STEP`. A zero step leaves the gene unchanged.
    fn mutate<R: Rng>(&mut self, rng: &mut R) {
        let step = rng.random_range(0..MUTATION_STEP);
        if rng.random_bool(0.5) {
            self.0 += step;
        } else {
            self.0 -= step;
        }
    }
}

/// A vector of integers scored by how close their sum is to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericSum {
    genes: Vec<IntGene>,
    target: i64,
}

impl NumericSum {
    /// Creates a candidate from explicit values.
    pub fn new(values: impl IntoIterator<Item = i64>, target: i64) -> Self {
        Self {
            genes: values.into_iter().map(IntGene).collect(),
            target,
        }
    }

    /// Creates a candidate of `n_gene` values drawn uniformly from
    /// `[INITIAL_MIN, INITIAL_MAX]`.
    pub fn random<R: Rng>(n_gene: usize, target: i64, rng: &mut R) -> Self {
        Self::new(
            (0..n_gene).map(|_| rng.random_range(INITIAL_MIN..=INITIAL_MAX)),
            target,
        )
    }

    /// Creates `n` random candidates sharing the same target.
    pub fn random_population<R: Rng>(
        n: usize,
        n_gene: usize,
        target: i64,
        rng: &mut R,
    ) -> Vec<Self> {
        (0..n)
            .map(|_| Self::random(n_gene, target, &mut *rng))
            .collect()
    }

    /// Sum of the gene values.
    pub fn sum(&self) -> i64 {
        self.genes.iter().map(|g| g.0).sum()
    }

    /// The sum this candidate aims for.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Gene values in order.
    pub fn values(&self) -> Vec<i64> {
        self.genes.iter().map(|g| g.0).collect()
    }
}

impl Chromosome for NumericSum {
    type Gene = IntGene;

    fn evaluate(&self) -> f64 {
        -((self.target - self.sum()).abs() as f64)
    }

    /// Mutates one uniformly chosen gene.
    fn mutate<R: Rng>(&mut self, rng: &mut R) {
        if self.genes.is_empty() {
            return;
        }
        let i = rng.random_range(0..self.genes.len());
        self.genes[i].mutate(rng);
    }

    fn genes(&self) -> &[IntGene] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [IntGene] {
        &mut self.genes
    }
}

impl fmt::Display for NumericSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gene) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", gene.0)?;
        }
        write!(f, "] (sum {}, target {})", self.sum(), self.target)
    }
}
