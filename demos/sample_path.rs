//! Samples a closed square at golden-ratio steps and prints the points.
//!
//! Run with `cargo run --example sample_path`.

use polysample::geometry::{PathSampler, SamplerOptions};
use polysample::math::GOLDEN_RATIO;
use polysample::operations::SampleSteps;
use polysample::PolysampleError;

const SEPARATOR: &str = ", ";

fn main() -> Result<(), PolysampleError> {
    // Default: WARN for everything, INFO for polysample.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polysample=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polysample=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
    let sampler = PathSampler::from_xy(square, SamplerOptions::new().with_wrap(true))?;

    for sample in SampleSteps::new(0..=9, GOLDEN_RATIO).execute(&sampler)? {
        // Six decimals is micrometre precision in a metre-based CRS.
        println!(
            "{}{SEPARATOR}{:+.6}{SEPARATOR}{:+.6}",
            sample.counter, sample.point.x, sample.point.y
        );
    }

    Ok(())
}
