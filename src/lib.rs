//! Elitist genetic algorithm engine.
//!
//! Evolves a fixed-size population of user-defined candidates toward higher
//! fitness:
//!
//! - **Candidate contract** ([`ga::Gene`], [`ga::Chromosome`]): what a
//!   candidate solution must provide — a fitness score, in-place mutation,
//!   and positional gene access.
//! - **Population engine** ([`ga::Population`]): ranks candidates, pairs the
//!   best ones, recombines each pair with single-point crossover keeping the
//!   fitter child, mutates everyone, and truncates back to the original size.
//! - **Reference candidate** ([`numeric_sum::NumericSum`]): integers whose
//!   sum should reach a target.
//!
//! # Example
//!
//! ```
//! use u_evolve::ga::{Chromosome, Population, PopulationConfig};
//! use u_evolve::numeric_sum::NumericSum;
//! use u_evolve::random::create_rng;
//!
//! let mut rng = create_rng(42);
//! let samples = NumericSum::random_population(25, 10, 500, &mut rng);
//! let config = PopulationConfig::default().with_seed(42);
//!
//! let mut population = Population::with_config(samples, &config).unwrap();
//! population.run();
//!
//! assert_eq!(population.len(), 25);
//! let best = population.best().unwrap();
//! assert!(best.evaluate() <= 0.0);
//! ```

pub mod error;
pub mod ga;
pub mod numeric_sum;
pub mod random;

pub use error::{EvolveError, Result};
