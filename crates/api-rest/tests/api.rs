use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use api_rest::{app, RestConfig};
use risk_uuid::{CalculationId, SessionId};

fn router() -> Router {
    app(&RestConfig::default())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = router().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
}

async fn post_json(uri: &str, body: String) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request"),
    )
    .await
}

fn lowest_risk_body() -> Value {
    json!({
        "age": 40,
        "gender": "female",
        "height_cm": 165,
        "weight_kg": 60,
        "family_history": false,
        "lifestyle": "active",
        "smoking": "never",
        "high_bp": false,
        "diabetes": false,
        "palpitations": "never",
        "shortness_of_breath": "never",
        "dizziness": "never",
        "atrial_fibrillation": false
    })
}

fn highest_risk_body() -> Value {
    json!({
        "age": 62,
        "gender": "male",
        "height_cm": 175,
        "weight_kg": 95,
        "family_history": true,
        "lifestyle": "inactive",
        "smoking": "current",
        "high_bp": true,
        "diabetes": true,
        "palpitations": "often",
        "shortness_of_breath": "rarely",
        "dizziness": "often",
        "atrial_fibrillation": true,
        "ldl_cholesterol": 3.5
    })
}

#[tokio::test]
async fn calculate_risk_reports_floor_for_lowest_profile() {
    let (status, body) = post_json("/api/calculate-risk", lowest_risk_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body.get("error").is_none());

    let data = &body["data"];
    assert_eq!(data["risk_category"], "low");
    assert_eq!(data["risk_percentage"], 0.1);
    assert_eq!(data["risk_description"], "Low risk");
    assert_eq!(data["timeframe_months"], 6);
    assert_eq!(data["bmi"], 22.0);
    assert_eq!(data["components"]["base_ten_year"], 0.0);
    assert_eq!(data["components"]["acute_adjustment"], 1.0);
    assert_eq!(data["components"]["chronic_correction"], 1.0);
    assert!(data["disclaimer"].as_str().is_some_and(|d| d.contains("112")));

    let id = data["calculation_id"].as_str().expect("calculation id");
    assert!(CalculationId::parse(id).is_ok(), "unexpected id {id}");
    let timestamp = data["timestamp"].as_str().expect("timestamp");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn calculate_risk_reports_ceiling_for_highest_profile() {
    let (status, body) = post_json("/api/calculate-risk", highest_risk_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["risk_category"], "high");
    assert_eq!(data["risk_percentage"], 15.0);
    assert_eq!(data["components"]["base_ten_year"], 20.0);
    assert_eq!(data["bmi"], 31.0);

    let actions = data["recommendations"]["actions"]
        .as_array()
        .expect("actions");
    assert_eq!(actions[0]["title"], "Medical assessment");
    assert_eq!(actions[0]["priority"], 1);
    assert_eq!(actions.len(), 8);
}

#[tokio::test]
async fn calculate_risk_classifies_before_rounding() {
    let mut input = lowest_risk_body();
    input["age"] = json!(50);
    input["gender"] = json!("male");
    input["diabetes"] = json!(true);
    input["smoking"] = json!("former");
    input["lifestyle"] = json!("sedentary");

    let (status, body) = post_json("/api/calculate-risk", input.to_string()).await;

    // 0.975% is displayed as 1.0 but stays in the low tier.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["risk_percentage"], 1.0);
    assert_eq!(body["data"]["risk_category"], "low");
    assert_eq!(body["data"]["risk_description"], "Low risk");
}

#[tokio::test]
async fn calculate_risk_ids_differ_between_calls() {
    let (_, first) = post_json("/api/calculate-risk", lowest_risk_body().to_string()).await;
    let (_, second) = post_json("/api/calculate-risk", lowest_risk_body().to_string()).await;
    assert_ne!(first["data"]["calculation_id"], second["data"]["calculation_id"]);
}

#[tokio::test]
async fn calculate_risk_lists_every_range_violation() {
    let mut input = lowest_risk_body();
    input["age"] = json!(70);
    input["height_cm"] = json!(90);

    let (status, body) = post_json("/api/calculate-risk", input.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let fields: Vec<_> = body["error"]["details"]
        .as_array()
        .expect("details")
        .iter()
        .map(|d| d["field"].as_str().unwrap_or_default().to_owned())
        .collect();
    assert_eq!(fields, vec!["age", "height_cm"]);
}

#[tokio::test]
async fn calculate_risk_rejects_unknown_enum_value() {
    let mut input = lowest_risk_body();
    input["smoking"] = json!("sometimes");

    let (status, body) = post_json("/api/calculate-risk", input.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn calculate_risk_rejects_malformed_json() {
    let (status, body) = post_json("/api/calculate-risk", "{not json".to_owned()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn calculate_risk_requires_json_content_type() {
    let (status, body) = send(
        Request::builder()
            .method(Method::POST)
            .uri("/api/calculate-risk")
            .body(Body::from(lowest_risk_body().to_string()))
            .expect("request"),
    )
    .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn educational_content_returns_everything_unfiltered() {
    let (status, body) = get("/api/educational-content").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["typical_symptoms"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["data"]["atypical_symptoms"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["data"]["emergency_contacts"][0]["number"], "103");
}

#[tokio::test]
async fn educational_content_filters_by_category() {
    let (status, body) = get("/api/educational-content?category=atypical").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["typical_symptoms"], json!([]));
    assert_eq!(body["data"]["atypical_symptoms"][0]["code"], "ATYP_1");
    assert_eq!(body["data"]["emergency_contacts"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn educational_content_rejects_unknown_category() {
    let (status, body) = get("/api/educational-content?category=rare").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn anonymous_session_uses_configured_retention() {
    let before = chrono::Utc::now().timestamp();
    let (status, body) = post_json(
        "/api/anonymous-session",
        json!({ "platform": "web", "language": "en" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    let session_id = data["session_id"].as_str().expect("session id");
    assert!(SessionId::parse(session_id).is_ok(), "unexpected id {session_id}");
    assert_eq!(data["data_retention_hours"], 24);

    let expires_at = data["expires_at"].as_i64().expect("expires_at");
    assert!(expires_at >= before + 24 * 3600);
    assert!(expires_at <= chrono::Utc::now().timestamp() + 24 * 3600);
}

#[tokio::test]
async fn anonymous_session_honours_custom_ttl() {
    let cfg = RestConfig::from_env_values(None, None, Some("2".to_owned())).expect("config");
    let response = app(&cfg)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/anonymous-session")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .expect("request"),
        )
        .await
        .expect("router is infallible");
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["data"]["data_retention_hours"], 2);
}

#[tokio::test]
async fn anonymous_session_rejects_non_object_body() {
    let (status, body) = post_json("/api/anonymous-session", "[1, 2]".to_owned()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn risk_factors_lists_modifiable_factors() {
    let (status, body) = get("/api/risk-factors").await;

    assert_eq!(status, StatusCode::OK);
    let factors = body["data"]["factors"].as_array().expect("factors");
    assert_eq!(factors.len(), 5);
    assert_eq!(factors[0]["name"], "Blood pressure");
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "stroke-risk-api");
}

#[tokio::test]
async fn root_describes_the_service() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "operational");
    assert_eq!(body["docs"], "/swagger-ui");
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let (status, body) = get("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/calculate-risk").is_some());
    assert!(body["paths"].get("/api/educational-content").is_some());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router is infallible");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
