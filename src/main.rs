use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::RestConfig;

/// Main entry point for the stroke risk service
///
/// Starts the REST server, which serves both the JSON API under `/api` and the
/// Swagger UI, and runs until Ctrl+C.
///
/// # Environment Variables
/// - `RISK_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `ALLOWED_ORIGINS`: Comma-separated CORS origins (default: any origin)
/// - `SESSION_TTL_HOURS`: Advertised anonymous session lifetime (default: 24)
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, startup or the server itself fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stroke_risk_run=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env()?;
    tracing::info!(
        session_ttl_hours = cfg.session_ttl_hours(),
        allowed_origins = cfg.allowed_origins().len(),
        "loaded configuration"
    );

    api_rest::serve(cfg).await
}
