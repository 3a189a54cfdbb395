//! # API REST
//!
//! REST API implementation for the stroke risk service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON envelopes, CORS, request logging, panic recovery)
//!
//! Uses `api-shared` for wire types and `stroke-risk-core` for all scoring and content.

#![warn(rust_2018_idioms)]

pub mod config;
mod handlers;

use std::any::Any;
use std::time::Instant;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{dto, ApiError, ApiResponse};
use stroke_risk_core::RiskService;

pub use config::{ConfigError, RestConfig};

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    risk_service: RiskService,
    session_ttl_hours: u32,
}

impl AppState {
    pub fn new(cfg: &RestConfig) -> Self {
        Self {
            risk_service: RiskService::new(),
            session_ttl_hours: cfg.session_ttl_hours(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::health,
        handlers::calculate_risk,
        handlers::educational_content,
        handlers::create_anonymous_session,
        handlers::risk_factors,
    ),
    components(schemas(
        stroke_risk_core::RiskInput,
        stroke_risk_core::Gender,
        stroke_risk_core::Lifestyle,
        stroke_risk_core::SmokingStatus,
        stroke_risk_core::SymptomFrequency,
        stroke_risk_core::RiskCategory,
        stroke_risk_core::RiskComponents,
        stroke_risk_core::Recommendations,
        stroke_risk_core::ActionItem,
        stroke_risk_core::EducationalContent,
        stroke_risk_core::SymptomItem,
        stroke_risk_core::SymptomType,
        stroke_risk_core::EmergencyContact,
        stroke_risk_core::EmergencyLevel,
        stroke_risk_core::RiskFactorInfo,
        dto::ApiError,
        dto::FieldError,
        dto::RiskResultRes,
        dto::AnonymousSessionRes,
        dto::RiskFactorsRes,
        dto::HealthRes,
        dto::ServiceInfoRes,
        dto::CalculateRiskEnvelope,
        dto::EducationalContentEnvelope,
        dto::AnonymousSessionEnvelope,
        dto::RiskFactorsEnvelope,
    )),
    tags((name = "api", description = "Six-month stroke risk estimation"))
)]
pub struct ApiDoc;

/// Builds the full REST application for `cfg`.
///
/// Routes:
/// - `GET /`, `GET /health`
/// - `POST /api/calculate-risk`
/// - `GET /api/educational-content`
/// - `POST /api/anonymous-session`
/// - `GET /api/risk-factors`
/// - `GET /swagger-ui`, `GET /api-docs/openapi.json`
pub fn app(cfg: &RestConfig) -> Router {
    let api = Router::new()
        .route("/calculate-risk", post(handlers::calculate_risk))
        .route("/educational-content", get(handlers::educational_content))
        .route("/anonymous-session", post(handlers::create_anonymous_session))
        .route("/risk-factors", get(handlers::risk_factors));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(log_requests))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cfg.cors_layer())
        .with_state(AppState::new(cfg))
}

/// Binds `cfg.addr()` and serves the application until Ctrl+C.
///
/// # Errors
/// Returns an error if:
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(cfg: RestConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    tracing::info!("++ Starting stroke risk REST API on {}", cfg.addr());

    axum::serve(listener, app(&cfg))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Stroke risk REST API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
    }
}

/// Logs method, path, status and duration of every request.
async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "request"
    );
    response
}

/// Converts a handler panic into a logged `INTERNAL_ERROR` envelope.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::err(ApiError::internal())),
    )
        .into_response()
}
