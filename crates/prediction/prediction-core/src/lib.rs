//! Synthetic cyclone prediction generation
//!
//! Randomized implementation of the `PredictionSource` contract. Every call
//! produces a fresh seven-day forecast sequence jittered around a base
//! coordinate; nothing persists between calls.

mod generator;

pub use generator::{SyntheticGenerator, FORECAST_DAYS};

// Re-export the contract so consumers only need this crate
pub use prediction_spi::{PredictionRecord, PredictionSource, Result};
