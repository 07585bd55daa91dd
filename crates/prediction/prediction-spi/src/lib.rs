//! Prediction Service Provider Interface
//!
//! Defines the contract, error types, and data model for cyclone prediction
//! sources.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::PredictionSource;
pub use error::{PredictionError, Result};
pub use model::{
    CompassDirection, CycloneStatus, GeoPoint, Intensity, PredictionEnvelope, PredictionRecord,
};
