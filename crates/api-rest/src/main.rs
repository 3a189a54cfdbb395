//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, with its own logging directive.
//!
//! ## Intended use
//! Useful for development and debugging of the REST layer. The workspace's main
//! `stroke-risk-run` binary runs the same server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::RestConfig;

/// Main entry point for the stroke risk REST API server
///
/// # Environment Variables
/// - `RISK_REST_ADDR`: Server address (default: "0.0.0.0:8000")
/// - `ALLOWED_ORIGINS`: Comma-separated CORS origins (default: permissive)
/// - `SESSION_TTL_HOURS`: Anonymous session lifetime (default: 24)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env()?;
    api_rest::serve(cfg).await
}
