//! Combines the sub-model outputs into a bounded, classified outcome.

use crate::constants::{LOW_RISK_BELOW, MODERATE_RISK_UP_TO, RISK_CEILING, RISK_FLOOR};
use crate::scoring::to_six_month;
use crate::{RiskCategory, RiskComponents, RiskOutcome};

/// Tier for a clamped six-month percentage: below 1.0 is low, 1.0 to 3.0 inclusive is moderate, above
/// 3.0 is high.
pub fn classify(risk_percentage: f64) -> RiskCategory {
    if risk_percentage < LOW_RISK_BELOW {
        RiskCategory::Low
    } else if risk_percentage <= MODERATE_RISK_UP_TO {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    }
}

/// Clamps a six-month percentage into the reportable range.
///
/// The floor keeps the model from ever asserting zero risk; the ceiling bounds how far the
/// stacked factors can push the result.
pub fn clamp_percentage(adjusted: f64) -> f64 {
    adjusted.max(RISK_FLOOR).min(RISK_CEILING)
}

/// Clamps the adjusted six-month value and classifies it.
///
/// The percentage is kept at full precision; rounding happens only when it is displayed, see
/// [`RiskOutcome::reported_percentage`].
pub fn compose(base_ten_year: f64, adjustment: f64, correction: f64) -> RiskOutcome {
    let adjusted = to_six_month(base_ten_year) * adjustment * correction;
    let risk_percentage = clamp_percentage(adjusted);
    let risk_category = classify(risk_percentage);

    RiskOutcome {
        risk_percentage,
        risk_category,
        risk_description: risk_category.description().to_owned(),
        components: RiskComponents {
            base_ten_year,
            acute_adjustment: adjustment,
            chronic_correction: correction,
        },
    }
}
