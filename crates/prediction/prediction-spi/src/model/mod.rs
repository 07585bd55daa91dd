//! Model module containing the cyclone forecast data types

mod compass_direction;
mod cyclone_status;
mod envelope;
mod geo_point;
mod intensity;
mod prediction_record;

pub use compass_direction::CompassDirection;
pub use cyclone_status::CycloneStatus;
pub use envelope::PredictionEnvelope;
pub use geo_point::GeoPoint;
pub use intensity::Intensity;
pub use prediction_record::PredictionRecord;
