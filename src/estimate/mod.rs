//! Estimation engine: ranked quotes and recommended coverage

mod engine;
mod coverage;

pub use engine::{EstimationEngine, Estimate, Quote};
pub use coverage::{recommended_coverage, DEFAULT_COVERAGE, COVERAGE_INCREMENT};
