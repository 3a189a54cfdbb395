//! The assessment input record and its enumerations.
//!
//! A [`RiskInput`] is built once per assessment, checked by
//! [`validate_risk_input`](crate::validation::validate_risk_input) and then read by the scoring
//! models. It has no update path. BMI is never stored: [`RiskInput::bmi`] recomputes it from
//! height and weight on every call so the two can never drift apart.
//!
//! All enumerations travel as lowercase strings (`"male"`, `"often"`, ...) both in JSON and
//! through [`FromStr`].

use crate::{AssessmentError, AssessmentResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AssessmentError;

    fn from_str(s: &str) -> AssessmentResult<Self> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(unknown("gender", s)),
        }
    }
}

/// Habitual physical activity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Lifestyle {
    Active,
    Sedentary,
    Inactive,
}

impl Lifestyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Lifestyle::Active => "active",
            Lifestyle::Sedentary => "sedentary",
            Lifestyle::Inactive => "inactive",
        }
    }
}

impl FromStr for Lifestyle {
    type Err = AssessmentError;

    fn from_str(s: &str) -> AssessmentResult<Self> {
        match s {
            "active" => Ok(Lifestyle::Active),
            "sedentary" => Ok(Lifestyle::Sedentary),
            "inactive" => Ok(Lifestyle::Inactive),
            _ => Err(unknown("lifestyle", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    Current,
    Former,
    Never,
}

impl SmokingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SmokingStatus::Current => "current",
            SmokingStatus::Former => "former",
            SmokingStatus::Never => "never",
        }
    }
}

impl FromStr for SmokingStatus {
    type Err = AssessmentError;

    fn from_str(s: &str) -> AssessmentResult<Self> {
        match s {
            "current" => Ok(SmokingStatus::Current),
            "former" => Ok(SmokingStatus::Former),
            "never" => Ok(SmokingStatus::Never),
            _ => Err(unknown("smoking status", s)),
        }
    }
}

/// How often a symptom is experienced.
///
/// Symptom frequency is a short-horizon signal only; it is not diagnostic of stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SymptomFrequency {
    Often,
    Rarely,
    Never,
}

impl SymptomFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            SymptomFrequency::Often => "often",
            SymptomFrequency::Rarely => "rarely",
            SymptomFrequency::Never => "never",
        }
    }
}

impl FromStr for SymptomFrequency {
    type Err = AssessmentError;

    fn from_str(s: &str) -> AssessmentResult<Self> {
        match s {
            "often" => Ok(SymptomFrequency::Often),
            "rarely" => Ok(SymptomFrequency::Rarely),
            "never" => Ok(SymptomFrequency::Never),
            _ => Err(unknown("symptom frequency", s)),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_str!(Gender, Lifestyle, SmokingStatus, SymptomFrequency);

fn unknown(kind: &'static str, value: &str) -> AssessmentError {
    AssessmentError::UnknownVariant {
        kind,
        value: value.to_owned(),
    }
}

/// Clinical and lifestyle answers for one assessment.
///
/// Ranges are guaranteed by the validation collaborator before the engine sees the record:
/// age 35 to 65, height 100 to 250 cm, weight 30 to 300 kg, LDL 0 to 10 mmol/L when known.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskInput {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Stroke in a close relative.
    pub family_history: bool,
    pub lifestyle: Lifestyle,
    pub smoking: SmokingStatus,
    pub high_bp: bool,
    pub diabetes: bool,
    pub palpitations: SymptomFrequency,
    pub shortness_of_breath: SymptomFrequency,
    pub dizziness: SymptomFrequency,
    pub atrial_fibrillation: bool,
    /// LDL cholesterol in mmol/L, `None` when unknown.
    #[serde(default)]
    pub ldl_cholesterol: Option<f64>,
}

impl RiskInput {
    /// Body-mass index derived from height and weight, rounded to one decimal.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        round_to_tenth(self.weight_kg / (height_m * height_m))
    }

    /// Number of tracked symptoms reported as occurring often (0 to 3).
    pub fn frequent_symptom_count(&self) -> usize {
        [self.palpitations, self.dizziness, self.shortness_of_breath]
            .into_iter()
            .filter(|s| *s == SymptomFrequency::Often)
            .count()
    }
}

/// Rounds half away from zero to one decimal place.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
