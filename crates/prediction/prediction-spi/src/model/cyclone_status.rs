//! Cyclone lifecycle status labels

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of lifecycle status labels for a forecast record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycloneStatus {
    Forming,
    Intensifying,
    Weakening,
    Dissipating,
}

impl CycloneStatus {
    /// All statuses.
    pub const ALL: [CycloneStatus; 4] = [
        CycloneStatus::Forming,
        CycloneStatus::Intensifying,
        CycloneStatus::Weakening,
        CycloneStatus::Dissipating,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            CycloneStatus::Forming => "Forming",
            CycloneStatus::Intensifying => "Intensifying",
            CycloneStatus::Weakening => "Weakening",
            CycloneStatus::Dissipating => "Dissipating",
        }
    }
}

impl fmt::Display for CycloneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
