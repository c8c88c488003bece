//! Evolves 25 ten-gene integer vectors toward a sum of 500.
//!
//! ```text
//! RUST_LOG=u_evolve=debug cargo run --example numeric_sum
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use u_evolve::ga::{Chromosome, Population};
use u_evolve::numeric_sum::NumericSum;
use u_evolve::random::entropy_rng;

const N_SAMPLES: usize = 25;
const N_GENE: usize = 10;
const TARGET: i64 = 500;
const N_ITERATIONS: usize = 100;
const RATIO: f64 = 0.5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = entropy_rng();
    let samples = NumericSum::random_population(N_SAMPLES, N_GENE, TARGET, &mut rng);

    let mut population = Population::create(N_GENE, samples, N_ITERATIONS, RATIO)?;
    if let Some(best) = population.best() {
        info!(fitness = best.evaluate(), sum = best.sum(), "initial best");
    }

    population.run();

    let best = population.best().ok_or("population is empty")?;
    println!("The best sample is: {best}");
    println!("The score of that sample is: {}", best.evaluate());
    Ok(())
}
