//! # cyclone-server
//!
//! HTTP API serving synthetic cyclone predictions for the mapping front-end.
//! The router is built here so integration tests can drive it without a
//! listening socket.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use prediction_spi::PredictionSource;

pub mod config;
pub mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Prediction source behind the stable contract; the synthetic
    /// generator today, swappable for a real model later.
    pub source: Arc<dyn PredictionSource>,
}

/// Build the application router around a prediction source.
pub fn app(state: AppState, cors: &config::CorsConfig) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/predictions", get(routes::predictions))
        .layer(TraceLayer::new_for_http())
        .layer(cors.layer())
        .with_state(state)
}
