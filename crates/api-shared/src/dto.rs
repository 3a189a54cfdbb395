//! Wire types shared by the stroke risk APIs.
//!
//! Every `/api/*` endpoint answers with an [`ApiResponse`] envelope:
//! `{ "success": bool, "data": ..., "error": { "code", "message", "details" } }`.
//! `data` and `error` are omitted when absent.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use risk_uuid::{CalculationId, SessionId};
use stroke_risk_core::{
    AssessmentError, EducationalContent, Recommendations, RiskCategory, RiskComponents,
    RiskFactorInfo,
};

/// Fixed disclaimer attached to every risk result.
pub const DISCLAIMER: &str = "This tool does not make a diagnosis and does not replace a \
consultation with a doctor. If you notice any suspicious symptoms, call 103 or 112 immediately!";

/// Error code for rejected input.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Error code for unexpected server-side failures.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// One rejected input field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ApiError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_owned(),
            message: message.into(),
            details: None,
        }
    }

    /// Validation error envelope body listing every violation in `err`.
    pub fn validation(err: &AssessmentError) -> Self {
        let details = err
            .violations()
            .iter()
            .map(|v| FieldError {
                field: v.field().to_owned(),
                message: v.to_string(),
            })
            .collect::<Vec<_>>();

        Self {
            code: VALIDATION_ERROR.to_owned(),
            message: "Input validation failed".to_owned(),
            details: if details.is_empty() {
                None
            } else {
                Some(details)
            },
        }
    }

    pub fn internal() -> Self {
        Self::new(INTERNAL_ERROR, "Internal server error")
    }
}

/// Standard response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[aliases(
    CalculateRiskEnvelope = ApiResponse<RiskResultRes>,
    EducationalContentEnvelope = ApiResponse<EducationalContent>,
    AnonymousSessionEnvelope = ApiResponse<AnonymousSessionRes>,
    RiskFactorsEnvelope = ApiResponse<RiskFactorsRes>
)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Published result of one risk calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskResultRes {
    pub risk_category: RiskCategory,
    /// Six-month risk percentage, 0.1 to 15.0, rounded to one decimal for display. The category
    /// is derived from the unrounded value.
    pub risk_percentage: f64,
    pub risk_description: String,
    pub timeframe_months: u32,
    pub bmi: f64,
    pub components: RiskComponents,
    pub recommendations: Recommendations,
    pub disclaimer: String,
    #[schema(value_type = String, example = "calc_550e8400e29b")]
    pub calculation_id: CalculationId,
    /// RFC 3339 timestamp of the calculation.
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnonymousSessionRes {
    #[schema(value_type = String, example = "anon_550e8400e29b41d4")]
    pub session_id: SessionId,
    /// Unix timestamp (seconds) at which the session lapses.
    pub expires_at: i64,
    pub data_retention_hours: u32,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskFactorsRes {
    pub factors: Vec<RiskFactorInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoRes {
    pub service: String,
    pub version: String,
    pub status: String,
    pub docs: String,
}
