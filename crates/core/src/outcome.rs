//! The assessment result record.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::input::round_to_tenth;
use crate::{AssessmentError, AssessmentResult};

/// Risk tier, a pure function of the clamped six-month percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Moderate => "moderate",
            RiskCategory::High => "high",
        }
    }

    /// Human-readable tier label.
    pub fn description(self) -> &'static str {
        match self {
            RiskCategory::Low => "Low risk",
            RiskCategory::Moderate => "Moderate risk",
            RiskCategory::High => "High risk",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = AssessmentError;

    fn from_str(s: &str) -> AssessmentResult<Self> {
        match s {
            "low" => Ok(RiskCategory::Low),
            "moderate" => Ok(RiskCategory::Moderate),
            "high" => Ok(RiskCategory::High),
            _ => Err(AssessmentError::UnknownVariant {
                kind: "risk category",
                value: s.to_owned(),
            }),
        }
    }
}

/// Raw outputs of the three sub-models, kept for auditability only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskComponents {
    /// 10-year baseline percentage.
    pub base_ten_year: f64,
    /// Acute multiplicative adjustment.
    pub acute_adjustment: f64,
    /// Chronic multiplicative correction.
    pub chronic_correction: f64,
}

/// Result of one engine invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskOutcome {
    /// Six-month risk percentage, always within 0.1 to 15.0. Not rounded.
    pub risk_percentage: f64,
    pub risk_category: RiskCategory,
    pub risk_description: String,
    pub components: RiskComponents,
}

impl RiskOutcome {
    /// The percentage as displayed: rounded half away from zero to one decimal.
    ///
    /// Only for presentation. The category is always derived from `risk_percentage`.
    pub fn reported_percentage(&self) -> f64 {
        round_to_tenth(self.risk_percentage)
    }
}
