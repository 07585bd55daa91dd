//! API route handlers

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use prediction_spi::PredictionEnvelope;

use crate::AppState;

/// Optional coordinate hint for the forecast base.
#[derive(Debug, Deserialize)]
pub struct PredictionQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Error wire shape: a single detail string.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// GET /api/predictions - seven-day synthetic forecast around an optional
/// coordinate. Any generation failure becomes a 500 carrying the failure's
/// message; no partial record lists are returned.
pub async fn predictions(
    State(state): State<AppState>,
    Query(query): Query<PredictionQuery>,
) -> Result<Json<PredictionEnvelope>, (StatusCode, Json<ErrorDetail>)> {
    match state.source.predictions(query.lat, query.lng) {
        Ok(records) => Ok(Json(PredictionEnvelope::success(records))),
        Err(err) => {
            tracing::error!("prediction generation failed: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail {
                    detail: err.to_string(),
                }),
            ))
        }
    }
}

/// Liveness probe - is the server running?
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
