//! Error taxonomy for population construction.
//!
//! The engine checks its inputs once, when a [`Population`](crate::ga::Population)
//! is built. Nothing inside the generational loop returns an error.

use thiserror::Error;

/// Errors returned when building a population.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvolveError {
    /// A sample's gene count differs from the population-wide gene count.
    #[error("sample {index} has {actual} genes, population expects {expected}")]
    GeneLengthMismatch {
        /// Position of the offending sample in the input.
        index: usize,
        /// Gene count declared for the population.
        expected: usize,
        /// Gene count reported by the sample.
        actual: usize,
    },

    /// The reproduction ratio is not a finite value in `[0, 1]`.
    #[error("reproduction ratio must be within [0, 1], got {0}")]
    InvalidRatio(f64),

    /// The ratio asks for more parent pairs than the population can supply.
    #[error("{pairs} parent pairs do not fit in a population of {samples}")]
    PairingOutOfRange {
        /// Number of pairs derived from the ratio.
        pairs: usize,
        /// Number of samples in the population.
        samples: usize,
    },

    /// Crossover was requested on chromosomes without genes.
    #[error("crossover needs at least one gene per chromosome")]
    EmptyChromosome,
}

/// Result alias for fallible construction.
pub type Result<T> = std::result::Result<T, EvolveError>;
