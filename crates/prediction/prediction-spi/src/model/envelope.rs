//! Response envelope model

use serde::{Deserialize, Serialize};

use super::PredictionRecord;

/// Top-level response object carrying a status tag and the forecast payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionEnvelope {
    /// Status tag, `"success"` on the happy path
    pub status: String,
    /// Ordered forecast records
    pub data: Vec<PredictionRecord>,
}

impl PredictionEnvelope {
    /// Wrap a record sequence in a success envelope.
    pub fn success(data: Vec<PredictionRecord>) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}
