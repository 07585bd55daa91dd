//! Server configuration from the environment

use std::env;
use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Cross-origin configuration.
///
/// The default allows any origin, method, and header. That is a
/// development-mode setting only; production deployments should set
/// `CORS_ALLOWED_ORIGINS` to an explicit comma-separated allow-list.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    /// Read `CORS_ALLOWED_ORIGINS`; unset or empty means permissive.
    pub fn from_env() -> Self {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(origins) if !origins.trim().is_empty() => Self {
                allowed_origins: origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .collect(),
            },
            _ => Self::default(),
        }
    }

    /// Whether any origin is accepted.
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    /// Build the tower-http CORS layer for this configuration.
    pub fn layer(&self) -> CorsLayer {
        if self.is_permissive() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = self
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET])
                .allow_headers(Any)
        }
    }
}

/// Listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, and the CORS allow-list from the environment.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a valid number");
        Self {
            host,
            port,
            cors: CorsConfig::from_env(),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid HOST:PORT configuration")
    }
}
