//! Forecast record model

use serde::{Deserialize, Serialize};

use super::{CycloneStatus, GeoPoint, Intensity};

/// One synthetic cyclone forecast entry, 1 to 7 days ahead.
///
/// Immutable once created; the formatted string fields carry the exact wire
/// formats expected by the mapping front-end (e.g. `"23.45°N, 78.12°E"`,
/// `"120 km/h"`, `"Moving Northeast at 15 km/h"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    /// Sequence label, `"Cyclone A"` through `"Cyclone G"`
    pub name: String,
    /// Formatted position, 2 decimal places: `"{lat}°N, {lng}°E"`
    pub location: String,
    /// Intensity category
    pub intensity: Intensity,
    /// Formatted wind speed: `"{n} km/h"`, n in [40,200]
    pub wind_speed: String,
    /// Formatted movement: `"Moving {direction} at {v} km/h"`, v in [5,25]
    pub path: String,
    /// ISO-8601 UTC timestamp with a trailing `Z`
    pub predicted_time: String,
    /// Lifecycle status
    pub status: CycloneStatus,
    /// Unformatted coordinates for map placement
    pub coordinates: GeoPoint,
    /// Confidence score in [0.7, 0.95)
    pub confidence: f64,
}
