//! Elitist genetic algorithm engine.
//!
//! A generic, domain-agnostic GA built on trait-based abstractions. Users
//! describe their candidate solutions by implementing [`Chromosome`] (and
//! [`Gene`] for its parts); [`Population`] runs the evolutionary loop.
//!
//! # Core Traits
//!
//! - [`Gene`]: The smallest mutable unit of a candidate
//! - [`Chromosome`]: An ordered sequence of genes with a fitness score
//!   (higher is better)
//!
//! # Key Types
//!
//! - [`PopulationConfig`]: Gene count, iterations, reproduction ratio, seed
//! - [`Population`]: Owns the candidates and runs the generational loop
//! - [`GenerationStats`]: Per-generation fitness summary
//!
//! # Submodules
//!
//! - [`selection`]: Descending ranking and elitist rank pairing
//! - [`crossover`]: Single-point prefix crossover keeping the fitter child
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod crossover;
mod population;
pub mod selection;
mod types;

pub use config::PopulationConfig;
pub use population::{GenerationStats, Population};
pub use selection::ParentPair;
pub use types::{Chromosome, Gene};
