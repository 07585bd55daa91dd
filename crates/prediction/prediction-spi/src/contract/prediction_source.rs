//! Prediction source contract

use crate::error::Result;
use crate::model::PredictionRecord;

/// Common trait for cyclone prediction sources.
///
/// The HTTP layer depends only on this seam, so a real forecasting model can
/// replace the synthetic generator without changing the response schema or
/// the ordering guarantees.
pub trait PredictionSource: Send + Sync {
    /// Produce the seven-day forecast sequence centered on an optional
    /// base coordinate.
    ///
    /// Records are ordered by increasing predicted time. When either
    /// coordinate is `None`, the source picks its own base.
    fn predictions(&self, lat: Option<f64>, lng: Option<f64>) -> Result<Vec<PredictionRecord>>;
}
