//! Contract module containing trait definitions for prediction sources

mod prediction_source;

pub use prediction_source::PredictionSource;
