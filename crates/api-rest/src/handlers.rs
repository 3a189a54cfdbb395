//! Route handlers.
//!
//! Handlers translate between the wire envelopes and `stroke-risk-core`. They hold no business
//! logic of their own.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use api_shared::{
    dto::{
        AnonymousSessionEnvelope, CalculateRiskEnvelope, EducationalContentEnvelope,
        RiskFactorsEnvelope,
    },
    AnonymousSessionRes, ApiError, ApiResponse, HealthRes, HealthService, RiskFactorsRes,
    RiskResultRes, ServiceInfoRes, DISCLAIMER, VALIDATION_ERROR,
};
use risk_uuid::{CalculationId, SessionId};
use stroke_risk_core::{
    constants::TIMEFRAME_MONTHS, recommend, RiskInput, SymptomType,
};

use crate::AppState;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfoRes)
    )
)]
/// Service information endpoint
///
/// Returns the service name, version, status and where to find the API docs.
pub(crate) async fn root() -> Json<ServiceInfoRes> {
    Json(ServiceInfoRes {
        service: "Stroke Risk API".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        status: "operational".into(),
        docs: "/swagger-ui".into(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// This endpoint is used for monitoring and load balancer health checks.
pub(crate) async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/calculate-risk",
    tag = "api",
    request_body = RiskInput,
    responses(
        (status = 200, description = "Risk calculated, or input rejected with a validation error envelope", body = CalculateRiskEnvelope),
        (status = 400, description = "Body is not valid JSON", body = CalculateRiskEnvelope),
        (status = 422, description = "Body does not match the input schema", body = CalculateRiskEnvelope),
        (status = 500, description = "Internal server error", body = CalculateRiskEnvelope)
    )
)]
/// Calculate the six-month stroke risk
///
/// Validates the answers, scores them, attaches recommendations and request metadata.
///
/// # Returns
/// * `200` with `success: true` and the risk result
/// * `200` with `success: false` and `VALIDATION_ERROR` details if a field is out of range
/// * The rejection's status (400, 415 or 422) with `VALIDATION_ERROR` if the body cannot be
///   parsed
pub(crate) async fn calculate_risk(
    State(state): State<AppState>,
    payload: Result<Json<RiskInput>, JsonRejection>,
) -> (StatusCode, Json<CalculateRiskEnvelope>) {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("Rejected calculate-risk body: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(ApiResponse::err(ApiError::new(
                    VALIDATION_ERROR,
                    rejection.body_text(),
                ))),
            );
        }
    };

    let outcome = match state.risk_service.assess_checked(&input) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::info!("Risk input failed validation: {}", e);
            return (StatusCode::OK, Json(ApiResponse::err(ApiError::validation(&e))));
        }
    };

    let recommendations = recommend(outcome.risk_category, &input);

    let result = RiskResultRes {
        risk_category: outcome.risk_category,
        risk_percentage: outcome.reported_percentage(),
        risk_description: outcome.risk_description,
        timeframe_months: TIMEFRAME_MONTHS,
        bmi: input.bmi(),
        components: outcome.components,
        recommendations,
        disclaimer: DISCLAIMER.into(),
        calculation_id: CalculationId::new(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(ApiResponse::ok(result)))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct EducationQuery {
    /// Restrict the symptom lists to one group.
    category: Option<SymptomType>,
}

#[utoipa::path(
    get,
    path = "/api/educational-content",
    tag = "api",
    params(EducationQuery),
    responses(
        (status = 200, description = "Stroke symptoms and emergency contacts", body = EducationalContentEnvelope),
        (status = 400, description = "Unknown category", body = EducationalContentEnvelope)
    )
)]
/// Educational content about stroke symptoms
///
/// With `category=typical` or `category=atypical` the other symptom list is empty. Emergency
/// contacts are always included.
pub(crate) async fn educational_content(
    query: Result<Query<EducationQuery>, QueryRejection>,
) -> (StatusCode, Json<EducationalContentEnvelope>) {
    match query {
        Ok(Query(query)) => (
            StatusCode::OK,
            Json(ApiResponse::ok(stroke_risk_core::educational_content(
                query.category,
            ))),
        ),
        Err(rejection) => {
            tracing::warn!("Rejected educational-content query: {}", rejection.body_text());
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::err(ApiError::new(
                    VALIDATION_ERROR,
                    rejection.body_text(),
                ))),
            )
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/anonymous-session",
    tag = "api",
    request_body = Object,
    responses(
        (status = 200, description = "Anonymous session created", body = AnonymousSessionEnvelope),
        (status = 400, description = "Body is not a JSON object", body = AnonymousSessionEnvelope)
    )
)]
/// Create an anonymous session
///
/// Accepts any JSON object describing the device. Nothing is stored: the session is an
/// identifier with an advertised expiry.
pub(crate) async fn create_anonymous_session(
    State(state): State<AppState>,
    device_info: Result<Json<serde_json::Map<String, serde_json::Value>>, JsonRejection>,
) -> (StatusCode, Json<AnonymousSessionEnvelope>) {
    let Json(device_info) = match device_info {
        Ok(device_info) => device_info,
        Err(rejection) => {
            tracing::warn!("Rejected anonymous-session body: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(ApiResponse::err(ApiError::new(
                    VALIDATION_ERROR,
                    rejection.body_text(),
                ))),
            );
        }
    };

    let session_id = SessionId::new();
    let ttl_hours = state.session_ttl_hours;
    let expires_at = chrono::Utc::now().timestamp() + i64::from(ttl_hours) * 3600;

    tracing::debug!(
        session_id = %session_id,
        device_fields = device_info.len(),
        "created anonymous session"
    );

    (
        StatusCode::OK,
        Json(ApiResponse::ok(AnonymousSessionRes {
            session_id,
            expires_at,
            data_retention_hours: ttl_hours,
            message: format!("Session created. Data will be deleted after {ttl_hours} hours."),
        })),
    )
}

#[utoipa::path(
    get,
    path = "/api/risk-factors",
    tag = "api",
    responses(
        (status = 200, description = "Modifiable stroke risk factors", body = RiskFactorsEnvelope)
    )
)]
/// Guide to the modifiable stroke risk factors
pub(crate) async fn risk_factors() -> Json<RiskFactorsEnvelope> {
    Json(ApiResponse::ok(RiskFactorsRes {
        factors: stroke_risk_core::risk_factors(),
    }))
}
