//! Risk assessment service.

use crate::{scoring, validation::validate_risk_input, AssessmentResult, RiskInput, RiskOutcome};

/// Pure risk assessment operations - no API concerns.
///
/// The service holds no state. It can be cloned freely, shared across threads and constructed
/// per request; every call is independent and has no effect beyond its return value.
#[derive(Clone, Copy, Debug, Default)]
pub struct RiskService;

impl RiskService {
    /// Creates a new instance of RiskService.
    pub fn new() -> Self {
        Self
    }

    /// Scores an input that has already passed validation.
    ///
    /// The engine is total over validated input and cannot fail. Passing an unvalidated record
    /// is a caller error; the result is then unspecified but still clamped to the reportable
    /// range.
    pub fn assess(&self, input: &RiskInput) -> RiskOutcome {
        let outcome = scoring::score(input);
        tracing::debug!(
            base_ten_year = outcome.components.base_ten_year,
            acute_adjustment = outcome.components.acute_adjustment,
            chronic_correction = outcome.components.chronic_correction,
            risk_percentage = outcome.risk_percentage,
            risk_category = %outcome.risk_category,
            "assessed stroke risk"
        );
        outcome
    }

    /// Validates `input` and then scores it.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidInput`](crate::AssessmentError::InvalidInput) listing
    /// every range violation if `input` is not acceptable.
    pub fn assess_checked(&self, input: &RiskInput) -> AssessmentResult<RiskOutcome> {
        validate_risk_input(input)?;
        Ok(self.assess(input))
    }
}
