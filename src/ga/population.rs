//! Generational loop execution.
//!
//! [`Population`] owns the candidates and runs the evolutionary process:
//! selection → crossover → mutation → truncation, repeated for a fixed
//! number of generations.

use super::config::PopulationConfig;
use super::crossover::single_point;
use super::selection::{elitist_pairs, rank_descending};
use super::types::Chromosome;
use crate::error::{EvolveError, Result};
use crate::random::{create_rng, entropy_rng};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

/// Fitness summary of the population at the end of a generation.
///
/// Generation 0 describes the population as it was handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number (0 = initial population).
    pub generation: usize,

    /// Highest fitness in the population.
    pub best_fitness: f64,

    /// Mean fitness over the population.
    pub mean_fitness: f64,

    /// Lowest fitness in the population.
    pub worst_fitness: f64,
}

impl GenerationStats {
    /// Evaluates every member of `samples` and summarizes the scores.
    ///
    /// An empty population yields `NaN` for all three fitness fields.
    pub fn measure<C: Chromosome>(generation: usize, samples: &[C]) -> Self {
        let scores: Vec<f64> = samples.iter().map(|c| c.evaluate()).collect();
        Self::from_scores(generation, &scores)
    }

    /// Summarizes already computed scores.
    ///
    /// `NaN` scores are skipped by best and worst but poison the mean.
    pub fn from_scores(generation: usize, scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self {
                generation,
                best_fitness: f64::NAN,
                mean_fitness: f64::NAN,
                worst_fitness: f64::NAN,
            };
        }

        let best_fitness = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst_fitness = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let mean_fitness = scores.iter().sum::<f64>() / scores.len() as f64;

        Self {
            generation,
            best_fitness,
            mean_fitness,
            worst_fitness,
        }
    }
}

/// A fixed-size population evolved by elitist pairing, single-point
/// crossover, universal mutation, and truncation.
///
/// # Usage
///
/// ```ignore
/// let samples = NumericSum::random_population(25, 10, 500, &mut rng);
/// let mut population = Population::create(10, samples, 100, 0.5)?;
/// population.run();
/// let best = population.best().expect("non-empty population");
/// println!("best score: {}", best.evaluate());
/// ```
///
/// # Generation
///
/// 1. Rank all members by descending fitness.
/// 2. Pair ranks `(0, 1), (2, 3), …` for `round(ratio * n_samples / 2)`
///    pairs.
/// 3. Recombine each pair at a random cutoff and append the fitter child.
/// 4. Mutate every member, offspring included, exactly once.
/// 5. Rank again and keep the best `n_samples`.
///
/// The loop never stops early: `run` always executes `n_iterations`
/// generations.
pub struct Population<C: Chromosome, R: Rng = StdRng> {
    samples: Vec<C>,
    config: PopulationConfig,
    n_samples: usize,
    n_pairs: usize,
    generation: usize,
    history: Vec<GenerationStats>,
    rng: R,
}

impl<C: Chromosome> Population<C> {
    /// Builds a population from `samples`.
    ///
    /// Every sample must carry exactly `n_gene` genes. The population size
    /// `n_samples = samples.len()` is restored after every generation.
    ///
    /// # Errors
    ///
    /// - [`EvolveError::GeneLengthMismatch`] if any sample has a different
    ///   gene count. No population is built.
    /// - [`EvolveError::InvalidRatio`] if `ratio` is not within `[0, 1]`.
    /// - [`EvolveError::PairingOutOfRange`] if the ratio asks for more parent
    ///   pairs than `n_samples` can supply.
    /// - [`EvolveError::EmptyChromosome`] if `n_gene` is zero while pairs
    ///   would be formed.
    pub fn create(
        n_gene: usize,
        samples: Vec<C>,
        n_iterations: usize,
        ratio: f64,
    ) -> Result<Self> {
        let config = PopulationConfig {
            n_gene,
            n_iterations,
            ratio,
            seed: None,
        };
        Self::with_config(samples, &config)
    }

    /// Builds a population from `samples` using a full configuration.
    ///
    /// When `config.seed` is set, the run is reproducible for the same
    /// samples. See [`create`](Self::create) for the error cases.
    pub fn with_config(samples: Vec<C>, config: &PopulationConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        Self::with_rng(samples, config, rng)
    }
}

impl<C: Chromosome, R: Rng> Population<C, R> {
    /// Builds a population that draws randomness from `rng`.
    ///
    /// `config.seed` is ignored. See [`create`](Population::create) for the
    /// error cases.
    pub fn with_rng(samples: Vec<C>, config: &PopulationConfig, rng: R) -> Result<Self> {
        if let Some((index, sample)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| s.len() != config.n_gene)
        {
            return Err(EvolveError::GeneLengthMismatch {
                index,
                expected: config.n_gene,
                actual: sample.len(),
            });
        }

        let n_samples = samples.len();
        config.validate(n_samples)?;

        let initial = GenerationStats::measure(0, &samples);
        Ok(Self {
            n_pairs: config.pair_count(n_samples),
            samples,
            config: config.clone(),
            n_samples,
            generation: 0,
            history: vec![initial],
            rng,
        })
    }

    /// Runs `n_iterations` generations in place.
    ///
    /// Calling `run` again continues from the current population for
    /// another `n_iterations` generations.
    pub fn run(&mut self) {
        info!(
            n_samples = self.n_samples,
            n_gene = self.config.n_gene,
            n_pairs = self.n_pairs,
            n_iterations = self.config.n_iterations,
            "starting evolution"
        );

        for _ in 0..self.config.n_iterations {
            self.evolve_generation();
        }

        info!(
            generation = self.generation,
            best_fitness = ?self.best_fitness(),
            "evolution finished"
        );
    }

    /// One full selection → crossover → mutation → truncation cycle.
    fn evolve_generation(&mut self) {
        // Selection
        rank_descending(&mut self.samples);
        let pairs = elitist_pairs(self.n_pairs);

        // Crossover: pairs index the ranked prefix, children go to the back.
        for pair in &pairs {
            let child = single_point(
                &self.samples[pair.first],
                &self.samples[pair.second],
                self.config.n_gene,
                &mut self.rng,
            );
            self.samples.push(child);
        }

        // Mutation
        for sample in &mut self.samples {
            sample.mutate(&mut self.rng);
        }

        // Truncation
        let mut scores = rank_descending(&mut self.samples);
        self.samples.truncate(self.n_samples);
        scores.truncate(self.n_samples);

        self.generation += 1;
        let stats = GenerationStats::from_scores(self.generation, &scores);
        debug!(
            generation = stats.generation,
            best = stats.best_fitness,
            mean = stats.mean_fitness,
            worst = stats.worst_fitness,
            offspring = pairs.len(),
            "generation complete"
        );
        self.history.push(stats);
    }

    /// Returns the sample at 0-based `rank` (0 = best).
    ///
    /// Re-ranks the whole population on every call, since mutation makes any
    /// earlier ranking stale. Returns `None` if `rank >= len()`.
    pub fn get_sample(&mut self, rank: usize) -> Option<&C> {
        rank_descending(&mut self.samples);
        self.samples.get(rank)
    }

    /// Returns the best sample. Equivalent to `get_sample(0)`.
    pub fn best(&mut self) -> Option<&C> {
        self.get_sample(0)
    }

    /// Highest fitness currently in the population, without re-ranking.
    pub fn best_fitness(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|c| c.evaluate())
            .reduce(f64::max)
    }

    /// The samples in their current order.
    ///
    /// The order is the ranking from the last sort, which mutation may have
    /// invalidated. Use [`get_sample`](Self::get_sample) for ranked access.
    pub fn samples(&self) -> &[C] {
        &self.samples
    }

    /// Consumes the population and returns its samples.
    pub fn into_samples(self) -> Vec<C> {
        self.samples
    }

    /// Current number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the population holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Gene count shared by every sample.
    pub fn n_gene(&self) -> usize {
        self.config.n_gene
    }

    /// Target population size restored after every generation.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Generations executed per call to [`run`](Self::run).
    pub fn n_iterations(&self) -> usize {
        self.config.n_iterations
    }

    /// Reproduction ratio.
    pub fn ratio(&self) -> f64 {
        self.config.ratio
    }

    /// Parent pairs formed per generation.
    pub fn n_pairs(&self) -> usize {
        self.n_pairs
    }

    /// Generations executed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Fitness summary per generation, starting with generation 0.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Gene;
    use crate::numeric_sum::NumericSum;

    // ---- Additive problem: fitness is the plain sum of the genes ----

    #[derive(Clone, Debug, PartialEq)]
    struct Unit(i64);

    impl Gene for Unit {
        fn mutate<R: Rng>(&mut self, rng: &mut R) {
            self.0 += rng.random_range(0..3);
        }
    }

    /// Mutation never lowers fitness when `climb` is set and does nothing
    /// otherwise.
    #[derive(Clone, Debug, PartialEq)]
    struct Additive {
        genes: Vec<Unit>,
        climb: bool,
    }

    impl Chromosome for Additive {
        type Gene = Unit;

        fn evaluate(&self) -> f64 {
            self.genes.iter().map(|g| g.0).sum::<i64>() as f64
        }

        fn mutate<R: Rng>(&mut self, rng: &mut R) {
            if self.climb {
                let i = rng.random_range(0..self.genes.len());
                self.genes[i].mutate(rng);
            }
        }

        fn genes(&self) -> &[Unit] {
            &self.genes
        }

        fn genes_mut(&mut self) -> &mut [Unit] {
            &mut self.genes
        }
    }

    fn additive(values: &[i64], climb: bool) -> Additive {
        Additive {
            genes: values.iter().map(|&v| Unit(v)).collect(),
            climb,
        }
    }

    fn spread(n: usize, n_gene: usize, climb: bool) -> Vec<Additive> {
        (0..n)
            .map(|i| additive(&vec![(i as i64 * 7) % 11 - 5; n_gene], climb))
            .collect()
    }

    fn seeded(
        samples: Vec<Additive>,
        n_gene: usize,
        ratio: f64,
        iters: usize,
    ) -> Population<Additive> {
        let config = PopulationConfig::default()
            .with_n_gene(n_gene)
            .with_ratio(ratio)
            .with_n_iterations(iters)
            .with_seed(42);
        Population::with_config(samples, &config).expect("valid population")
    }

    // ---- Construction ----

    #[test]
    fn test_create_rejects_gene_length_mismatch() {
        let samples = vec![
            additive(&[1, 2, 3], false),
            additive(&[1, 2], false),
            additive(&[1], false),
        ];
        let err = Population::create(3, samples, 10, 0.5).err();
        assert_eq!(
            err,
            Some(EvolveError::GeneLengthMismatch {
                index: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_create_records_sizes() {
        let population = Population::create(4, spread(10, 4, false), 3, 0.5).unwrap();
        assert_eq!(population.n_samples(), 10);
        assert_eq!(population.len(), 10);
        assert_eq!(population.n_gene(), 4);
        assert_eq!(population.n_iterations(), 3);
        assert_eq!(population.n_pairs(), 3); // round(2.5)
        assert_eq!(population.generation(), 0);
        assert_eq!(population.history().len(), 1);
        assert_eq!(population.history()[0].generation, 0);
    }

    #[test]
    fn test_create_rejects_pairing_beyond_population() {
        let err = Population::create(2, spread(5, 2, false), 1, 1.0).err();
        assert_eq!(
            err,
            Some(EvolveError::PairingOutOfRange {
                pairs: 3,
                samples: 5
            })
        );
    }

    #[test]
    fn test_create_rejects_ratio_out_of_range() {
        let err = Population::create(2, spread(5, 2, false), 1, -0.1).err();
        assert_eq!(err, Some(EvolveError::InvalidRatio(-0.1)));
    }

    #[test]
    fn test_create_empty_population() {
        let mut population: Population<Additive> =
            Population::create(3, Vec::new(), 5, 0.5).unwrap();
        population.run();
        assert!(population.is_empty());
        assert!(population.best().is_none());
        assert!(population.best_fitness().is_none());
        assert_eq!(population.generation(), 5);
    }

    // ---- Run ----

    #[test]
    fn test_run_executes_all_iterations() {
        let mut population = seeded(spread(12, 3, true), 3, 0.5, 17);
        population.run();
        assert_eq!(population.generation(), 17);
        assert_eq!(population.history().len(), 18);

        population.run();
        assert_eq!(population.generation(), 34);
    }

    #[test]
    fn test_size_and_gene_length_invariants() {
        let mut population = seeded(spread(9, 4, true), 4, 0.8, 1);
        for _ in 0..25 {
            population.run();
            assert_eq!(population.len(), 9);
            assert!(population.samples().iter().all(|s| s.len() == 4));
        }
    }

    #[test]
    fn test_best_fitness_never_decreases_with_climbing_mutation() {
        let mut population = seeded(spread(20, 5, true), 5, 0.5, 60);
        population.run();
        for window in population.history().windows(2) {
            assert!(
                window[1].best_fitness >= window[0].best_fitness,
                "best fitness regressed: {} -> {}",
                window[0].best_fitness,
                window[1].best_fitness
            );
        }
    }

    #[test]
    fn test_truncation_keeps_strongest_without_mutation() {
        // Additive fitness: the fitter child of a pair scores at least the
        // parents' mean, so the weakest survivor can only improve.
        let mut population = seeded(spread(10, 3, false), 3, 1.0, 1);
        let before = population.history()[0];
        population.run();
        let after = population.history()[1];
        assert!(after.worst_fitness >= before.worst_fitness);
        assert!(after.best_fitness >= before.best_fitness);
        assert!(after.mean_fitness >= before.mean_fitness);
    }

    #[test]
    fn test_zero_ratio_without_mutation_is_identity() {
        let mut population = seeded(spread(6, 2, false), 2, 0.0, 10);
        let before: Vec<Additive> = {
            let mut s = population.samples().to_vec();
            rank_descending(&mut s);
            s
        };
        population.run();
        let after: Vec<Additive> = (0..6)
            .map(|r| population.get_sample(r).unwrap().clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_zero_ratio_with_mutation_only_mutates() {
        // No offspring: each survivor is an original member that climbed.
        let samples = spread(6, 2, true);
        let mut population = seeded(samples.clone(), 2, 0.0, 10);
        population.run();
        assert_eq!(population.len(), 6);

        let sorted_sums = |pop: &[Additive]| {
            let mut sums: Vec<f64> = pop.iter().map(|c| c.evaluate()).collect();
            sums.sort_by(|a, b| a.partial_cmp(b).unwrap());
            sums
        };
        let before = sorted_sums(&samples[..]);
        let after = sorted_sums(population.samples());

        // Climbing never lowers a member, so the sorted scores dominate.
        assert!(before.iter().zip(&after).all(|(b, a)| a >= b));
        assert!(after.iter().sum::<f64>() > before.iter().sum::<f64>());
    }

    // ---- Mutation bookkeeping ----

    #[derive(Clone, Debug)]
    struct Counted {
        genes: Vec<Unit>,
        mutations: usize,
    }

    impl Chromosome for Counted {
        type Gene = Unit;

        fn evaluate(&self) -> f64 {
            self.genes.iter().map(|g| g.0).sum::<i64>() as f64
        }

        fn mutate<R: Rng>(&mut self, _rng: &mut R) {
            self.mutations += 1;
        }

        fn genes(&self) -> &[Unit] {
            &self.genes
        }

        fn genes_mut(&mut self) -> &mut [Unit] {
            &mut self.genes
        }
    }

    #[test]
    fn test_every_member_mutated_once_per_generation() {
        // Offspring clone a parent's counter before the mutation pass, so
        // after `g` generations every survivor has been mutated `g` times.
        for generations in [1usize, 2, 5] {
            let samples: Vec<Counted> = (0..8)
                .map(|i| Counted {
                    genes: vec![Unit(i), Unit(7 - i), Unit(i * i)],
                    mutations: 0,
                })
                .collect();
            let config = PopulationConfig::default()
                .with_n_gene(3)
                .with_ratio(1.0)
                .with_n_iterations(generations)
                .with_seed(5);
            let mut population = Population::with_config(samples, &config).unwrap();
            population.run();

            let counts: Vec<usize> = population.samples().iter().map(|c| c.mutations).collect();
            assert_eq!(counts, vec![generations; 8], "mutate counts: {counts:?}");
        }
    }

    #[test]
    fn test_history_matches_measured_population() {
        let mut population = seeded(spread(10, 3, true), 3, 0.6, 4);
        population.run();
        let last = *population.history().last().unwrap();
        assert_eq!(last, GenerationStats::measure(4, population.samples()));
    }

    #[test]
    fn test_stats_from_scores() {
        let stats = GenerationStats::from_scores(3, &[4.0, -2.0, 1.0]);
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.best_fitness, 4.0);
        assert_eq!(stats.worst_fitness, -2.0);
        assert!((stats.mean_fitness - 1.0).abs() < 1e-12);
        assert!(GenerationStats::from_scores(0, &[]).best_fitness.is_nan());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut a = seeded(spread(15, 4, true), 4, 0.6, 30);
        let mut b = seeded(spread(15, 4, true), 4, 0.6, 30);
        a.run();
        b.run();
        assert_eq!(a.best().cloned(), b.best().cloned());
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_injected_rng() {
        let config = PopulationConfig::default().with_n_gene(3).with_n_iterations(5);
        let mut population =
            Population::with_rng(spread(8, 3, true), &config, create_rng(9)).unwrap();
        population.run();
        assert_eq!(population.len(), 8);
    }

    // ---- Ranked access ----

    #[test]
    fn test_get_sample_ranks_descending() {
        let samples = vec![
            additive(&[1, 1], false),
            additive(&[5, 5], false),
            additive(&[-2, 0], false),
            additive(&[3, 0], false),
        ];
        let mut population = Population::create(2, samples, 0, 0.5).unwrap();
        assert_eq!(population.get_sample(0), Some(&additive(&[5, 5], false)));
        assert_eq!(population.get_sample(1), Some(&additive(&[3, 0], false)));
        assert_eq!(population.get_sample(3), Some(&additive(&[-2, 0], false)));
        assert_eq!(population.get_sample(4), None);
        assert_eq!(population.best_fitness(), Some(10.0));
    }

    // ---- Reference scenario ----

    #[test]
    fn test_numeric_sum_converges() {
        let mut rng = create_rng(2024);
        let samples = NumericSum::random_population(25, 10, 500, &mut rng);
        let config = PopulationConfig::default().with_seed(7);
        let mut population = Population::with_config(samples, &config).unwrap();

        let initial = population.best().map(|s| s.evaluate()).unwrap();
        population.run();
        let best = population.best().unwrap().clone();

        assert_eq!(best.len(), 10);
        assert!(
            best.evaluate() >= initial,
            "best fitness regressed from {initial} to {}",
            best.evaluate()
        );
        assert!(
            best.evaluate() > -100.0,
            "expected sum near 500 after 100 generations, got {}",
            best.sum()
        );
    }
}
