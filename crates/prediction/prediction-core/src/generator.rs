//! Randomized forecast sequence generator

use std::ops::Range;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use prediction_spi::{
    CompassDirection, CycloneStatus, GeoPoint, Intensity, PredictionRecord, PredictionSource,
    Result,
};

/// Number of daily records per forecast sequence.
pub const FORECAST_DAYS: usize = 7;

/// Default basin sampled when no coordinate hint is given (5°N–25°N, 60°E–100°E).
const BASE_LAT_RANGE: Range<f64> = 5.0..25.0;
const BASE_LNG_RANGE: Range<f64> = 60.0..100.0;

/// Per-record offset around the base coordinate, in degrees.
const JITTER_RANGE: Range<f64> = -2.0..2.0;

/// ISO-8601 with microsecond precision and a literal `Z` suffix.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Synthetic `PredictionSource` driven by an explicitly injected RNG.
///
/// The RNG sits behind a mutex so one generator can serve concurrent
/// requests from shared state; no ordering guarantee is made between
/// concurrent calls.
pub struct SyntheticGenerator<R: Rng = StdRng> {
    rng: Mutex<R>,
}

impl SyntheticGenerator<StdRng> {
    /// Generator seeded from OS entropy, for production use.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SyntheticGenerator<R> {
    /// Wrap an explicit RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: Rng + Send> PredictionSource for SyntheticGenerator<R> {
    fn predictions(&self, lat: Option<f64>, lng: Option<f64>) -> Result<Vec<PredictionRecord>> {
        let mut rng = self.rng.lock();

        // Mixed presence falls through to a random base; the supplied half
        // is discarded. Kept for compatibility with the original behavior.
        let (base_lat, base_lng) = match (lat, lng) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => (
                rng.gen_range(BASE_LAT_RANGE),
                rng.gen_range(BASE_LNG_RANGE),
            ),
        };

        // One origin per call keeps the seven timestamps strictly increasing.
        let origin = Utc::now();

        let mut records = Vec::with_capacity(FORECAST_DAYS);
        for day in 1..=FORECAST_DAYS {
            records.push(make_record(&mut *rng, base_lat, base_lng, origin, day));
        }
        Ok(records)
    }
}

fn make_record<R: Rng>(
    rng: &mut R,
    base_lat: f64,
    base_lng: f64,
    origin: DateTime<Utc>,
    day: usize,
) -> PredictionRecord {
    let lat = base_lat + rng.gen_range(JITTER_RANGE);
    let lng = base_lng + rng.gen_range(JITTER_RANGE);

    let intensity = Intensity::ALL[rng.gen_range(0..Intensity::ALL.len())];
    let wind_speed = rng.gen_range(40..=200);
    let direction = CompassDirection::ALL[rng.gen_range(0..CompassDirection::ALL.len())];
    let path_speed = rng.gen_range(5..=25);
    let status = CycloneStatus::ALL[rng.gen_range(0..CycloneStatus::ALL.len())];
    let confidence = rng.gen_range(0.7..0.95);

    let predicted = origin + Duration::days(day as i64);

    PredictionRecord {
        name: format!("Cyclone {}", (b'A' + (day as u8 - 1)) as char),
        location: format!("{:.2}°N, {:.2}°E", lat, lng),
        intensity,
        wind_speed: format!("{} km/h", wind_speed),
        path: format!("Moving {} at {} km/h", direction, path_speed),
        predicted_time: predicted.format(TIME_FORMAT).to_string(),
        status,
        coordinates: GeoPoint::new(lat, lng),
        confidence,
    }
}
