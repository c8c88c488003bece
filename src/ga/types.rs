//! Core trait definitions for the GA engine.
//!
//! The two central traits — [`Gene`] and [`Chromosome`] — define the
//! contract between the generic [`Population`](super::Population) engine and
//! domain-specific candidate representations. The engine never inspects gene
//! values; it only moves genes between chromosomes by position, asks a
//! chromosome for its score, and asks it to mutate.

use rand::Rng;

/// The smallest mutable unit of a candidate solution.
///
/// Mutation is an in-place perturbation that depends only on the gene itself
/// (and the random source), never on sibling genes.
pub trait Gene {
    /// Perturbs this gene in place.
    fn mutate<R: Rng>(&mut self, rng: &mut R);
}

/// A candidate solution: an ordered sequence of [`Gene`]s plus a fitness
/// function.
///
/// **Higher fitness is better.** The engine ranks candidates in descending
/// order of [`evaluate`](Chromosome::evaluate) and there is no way to flip
/// that direction; minimization problems negate their objective.
///
/// `Clone` is the copy operation used by crossover and must produce a fully
/// independent duplicate. Owned containers such as `Vec` give this for free;
/// types sharing state through `Rc`/`Arc` must implement `Clone` by hand.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Bits(Vec<Bit>);
///
/// impl Chromosome for Bits {
///     type Gene = Bit;
///     fn evaluate(&self) -> f64 { self.0.iter().filter(|b| b.0).count() as f64 }
///     fn mutate<R: Rng>(&mut self, rng: &mut R) {
///         let i = rng.random_range(0..self.0.len());
///         self.0[i].mutate(rng);
///     }
///     fn genes(&self) -> &[Bit] { &self.0 }
///     fn genes_mut(&mut self) -> &mut [Bit] { &mut self.0 }
/// }
/// ```
pub trait Chromosome: Clone {
    /// The gene type this chromosome is made of.
    type Gene: Gene;

    /// Returns the fitness score.
    ///
    /// Must be deterministic for a given gene state and must not modify the
    /// chromosome. The engine calls this many times per generation and never
    /// caches the result across a mutation.
    fn evaluate(&self) -> f64;

    /// Perturbs the chromosome in place.
    ///
    /// Which genes change, and by how much, is up to the implementation. The
    /// engine calls this exactly once per member per generation.
    fn mutate<R: Rng>(&mut self, rng: &mut R);

    /// Read access to the genes by position.
    fn genes(&self) -> &[Self::Gene];

    /// Mutable access to the genes by position.
    ///
    /// Implementations must not change the gene count through this view.
    fn genes_mut(&mut self) -> &mut [Self::Gene];

    /// Number of genes. Constant for the lifetime of the chromosome.
    fn len(&self) -> usize {
        self.genes().len()
    }

    /// Returns `true` if the chromosome has no genes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchanges the gene at `position` with the gene at the same position
    /// in `other`.
    ///
    /// # Panics
    /// Panics if `position` is out of range for either chromosome.
    fn swap_genes(&mut self, other: &mut Self, position: usize) {
        std::mem::swap(
            &mut self.genes_mut()[position],
            &mut other.genes_mut()[position],
        );
    }
}
