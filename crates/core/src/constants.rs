//! Constants used throughout the stroke risk core crate.
//!
//! Every weight, threshold and bound the engine applies lives here so that the scoring modules
//! read as pure structure. All values are static; there is no calibration step.

// ----------------------------------------------------------------------------
// Baseline (10-year) point score
// ----------------------------------------------------------------------------

/// Points for age 45 to 54.
pub const AGE_POINTS_45: f64 = 2.0;

/// Points for age 55 to 64.
pub const AGE_POINTS_55: f64 = 4.0;

/// Points for age 65 and over.
pub const AGE_POINTS_65: f64 = 6.0;

/// Points for male gender.
pub const MALE_POINTS: f64 = 1.0;

/// Points for high blood pressure.
pub const HIGH_BP_POINTS: f64 = 2.0;

/// Points for diabetes.
pub const DIABETES_POINTS: f64 = 2.0;

/// Points for current smokers.
pub const CURRENT_SMOKER_POINTS: f64 = 3.0;

/// Points for former smokers.
pub const FORMER_SMOKER_POINTS: f64 = 1.0;

/// Percentage contributed by each baseline point.
pub const PERCENT_PER_POINT: f64 = 2.5;

/// Upper cap on the 10-year baseline percentage.
pub const BASELINE_CAP: f64 = 20.0;

// ----------------------------------------------------------------------------
// Horizon conversion
// ----------------------------------------------------------------------------

/// Number of years covered by the baseline.
pub const BASELINE_YEARS: f64 = 10.0;

/// Share of a year covered by the short horizon.
pub const SHORT_HORIZON_YEARS: f64 = 0.5;

/// Length of the short horizon in months, reported alongside every result.
pub const TIMEFRAME_MONTHS: u32 = 6;

// ----------------------------------------------------------------------------
// Acute adjustment
// ----------------------------------------------------------------------------

/// Age from which the acute age factor applies.
pub const ACUTE_AGE_THRESHOLD: u32 = 60;

pub const ACUTE_AGE_FACTOR: f64 = 1.3;
pub const ACUTE_HIGH_BP_FACTOR: f64 = 1.5;

/// Factor when two or more symptoms occur often.
pub const SYMPTOMS_MANY_FACTOR: f64 = 1.8;

/// Factor when exactly one symptom occurs often.
pub const SYMPTOMS_ONE_FACTOR: f64 = 1.3;

// ----------------------------------------------------------------------------
// Chronic correction
// ----------------------------------------------------------------------------

pub const SEDENTARY_FACTOR: f64 = 1.3;
pub const INACTIVE_FACTOR: f64 = 1.5;
pub const FAMILY_HISTORY_FACTOR: f64 = 1.4;
pub const ATRIAL_FIBRILLATION_FACTOR: f64 = 2.0;

/// LDL cholesterol (mmol/L) above which the cholesterol factor applies.
pub const LDL_THRESHOLD: f64 = 3.0;
pub const HIGH_LDL_FACTOR: f64 = 1.3;

/// BMI above which a record counts as obese.
pub const BMI_OBESE_THRESHOLD: f64 = 30.0;
pub const BMI_OBESE_FACTOR: f64 = 1.4;

/// BMI above which a record counts as overweight.
pub const BMI_OVERWEIGHT_THRESHOLD: f64 = 25.0;
pub const BMI_OVERWEIGHT_FACTOR: f64 = 1.2;

// ----------------------------------------------------------------------------
// Composition and classification
// ----------------------------------------------------------------------------

/// Smallest reportable six-month risk percentage. Zero risk is never reported.
pub const RISK_FLOOR: f64 = 0.1;

/// Largest reportable six-month risk percentage.
pub const RISK_CEILING: f64 = 15.0;

/// Percentages strictly below this are low risk.
pub const LOW_RISK_BELOW: f64 = 1.0;

/// Percentages up to and including this (and not low) are moderate risk.
pub const MODERATE_RISK_UP_TO: f64 = 3.0;

// ----------------------------------------------------------------------------
// Accepted input ranges (inclusive), enforced by the validation collaborator
// ----------------------------------------------------------------------------

pub const AGE_MIN: u32 = 35;
pub const AGE_MAX: u32 = 65;
pub const HEIGHT_CM_MIN: f64 = 100.0;
pub const HEIGHT_CM_MAX: f64 = 250.0;
pub const WEIGHT_KG_MIN: f64 = 30.0;
pub const WEIGHT_KG_MAX: f64 = 300.0;
pub const LDL_MIN: f64 = 0.0;
pub const LDL_MAX: f64 = 10.0;
