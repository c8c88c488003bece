//! Population configuration.
//!
//! [`PopulationConfig`] holds the parameters that control the generational
//! loop of a [`Population`](super::Population).

use crate::error::{EvolveError, Result};

/// Configuration for a [`Population`](super::Population).
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::PopulationConfig;
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.n_gene, 10);
/// assert_eq!(config.n_iterations, 100);
/// assert!((config.ratio - 0.5).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::PopulationConfig;
///
/// let config = PopulationConfig::default()
///     .with_n_gene(8)
///     .with_n_iterations(250)
///     .with_ratio(0.4)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig {
    /// Number of genes every chromosome must carry.
    pub n_gene: usize,

    /// Number of generations executed by one call to `run`.
    pub n_iterations: usize,

    /// Fraction of the population paired up for reproduction (0.0–1.0).
    ///
    /// Each generation forms `round(ratio * n_samples / 2)` parent pairs
    /// from the top of the ranking, and each pair contributes one child.
    pub ratio: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            n_gene: 10,
            n_iterations: 100,
            ratio: 0.5,
            seed: None,
        }
    }
}

impl PopulationConfig {
    /// Sets the gene count.
    pub fn with_n_gene(mut self, n: usize) -> Self {
        self.n_gene = n;
        self
    }

    /// Sets the number of generations per run.
    pub fn with_n_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    /// Sets the reproduction ratio, clamped to `[0, 1]`.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parent pairs formed per generation for `n_samples` members.
    ///
    /// Halves are rounded away from zero, so 25 samples at ratio 0.5 give
    /// `round(6.25) = 6` pairs and 5 samples at ratio 1.0 give
    /// `round(2.5) = 3` pairs.
    pub fn pair_count(&self, n_samples: usize) -> usize {
        (self.ratio * n_samples as f64 / 2.0).round() as usize
    }

    /// Validates the configuration against a population of `n_samples`.
    ///
    /// Pairs are taken as ranks `(2k, 2k + 1)`, so the pairing must fit in
    /// the ranked population: `2 * pair_count <= n_samples`.
    pub fn validate(&self, n_samples: usize) -> Result<()> {
        if !self.ratio.is_finite() || !(0.0..=1.0).contains(&self.ratio) {
            return Err(EvolveError::InvalidRatio(self.ratio));
        }
        let pairs = self.pair_count(n_samples);
        if pairs * 2 > n_samples {
            return Err(EvolveError::PairingOutOfRange {
                pairs,
                samples: n_samples,
            });
        }
        if pairs > 0 && self.n_gene == 0 {
            return Err(EvolveError::EmptyChromosome);
        }
        Ok(())
    }
}
