//! cyclone-server binary entry point

use std::sync::Arc;

use cyclone_server::config::ServerConfig;
use cyclone_server::{app, AppState};
use prediction_core::SyntheticGenerator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cyclone_server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    if config.cors.is_permissive() {
        tracing::warn!("CORS is wide open; set CORS_ALLOWED_ORIGINS before deploying");
    }

    let state = AppState {
        source: Arc::new(SyntheticGenerator::from_entropy()),
    };
    let app = app(state, &config.cors);

    let addr = config.addr();
    tracing::info!(
        "cyclone-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
