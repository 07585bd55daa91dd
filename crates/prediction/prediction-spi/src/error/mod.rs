//! Error module containing error types and result aliases

mod prediction_error;

pub use prediction_error::PredictionError;

use std::error::Error;

/// Result type for prediction operations
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;
