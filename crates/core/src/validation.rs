//! Input validation.
//!
//! The scoring engine trusts its input. Every record coming from outside the core (HTTP body,
//! CLI file) must pass [`validate_risk_input`] first; the engine itself never re-checks ranges.

use crate::constants::{
    AGE_MAX, AGE_MIN, HEIGHT_CM_MAX, HEIGHT_CM_MIN, LDL_MAX, LDL_MIN, WEIGHT_KG_MAX,
    WEIGHT_KG_MIN,
};
use crate::{AssessmentError, AssessmentResult, RiskInput, ValidationError};

/// Validates that `input` lies within the accepted ranges.
///
/// All bounds are inclusive:
/// - `age`: 35 to 65
/// - `height_cm`: 100 to 250
/// - `weight_kg`: 30 to 300
/// - `ldl_cholesterol`: 0 to 10 when present
///
/// Non-finite floats are rejected outright.
///
/// # Errors
///
/// Returns [`AssessmentError::InvalidInput`] carrying every violation found, in field order.
pub fn validate_risk_input(input: &RiskInput) -> AssessmentResult<()> {
    let mut violations = Vec::new();

    if !(AGE_MIN..=AGE_MAX).contains(&input.age) {
        violations.push(ValidationError::OutOfRange {
            field: "age",
            min: AGE_MIN.into(),
            max: AGE_MAX.into(),
            value: input.age.into(),
        });
    }

    check_range(
        &mut violations,
        "height_cm",
        input.height_cm,
        HEIGHT_CM_MIN,
        HEIGHT_CM_MAX,
    );
    check_range(
        &mut violations,
        "weight_kg",
        input.weight_kg,
        WEIGHT_KG_MIN,
        WEIGHT_KG_MAX,
    );

    if let Some(ldl) = input.ldl_cholesterol {
        check_range(&mut violations, "ldl_cholesterol", ldl, LDL_MIN, LDL_MAX);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AssessmentError::InvalidInput(violations))
    }
}

fn check_range(
    violations: &mut Vec<ValidationError>,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() {
        violations.push(ValidationError::NotFinite { field });
    } else if !(min..=max).contains(&value) {
        violations.push(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::fixtures::{baseline_input, high_risk_input};

    #[test]
    fn test_accepts_valid_inputs() {
        assert!(validate_risk_input(&baseline_input()).is_ok());
        assert!(validate_risk_input(&high_risk_input()).is_ok());
    }

    #[test]
    fn test_accepts_inclusive_bounds() {
        let mut input = baseline_input();
        input.age = 35;
        input.height_cm = 100.0;
        input.weight_kg = 300.0;
        input.ldl_cholesterol = Some(0.0);
        assert!(validate_risk_input(&input).is_ok());

        input.age = 65;
        input.height_cm = 250.0;
        input.weight_kg = 30.0;
        input.ldl_cholesterol = Some(10.0);
        assert!(validate_risk_input(&input).is_ok());
    }

    #[test]
    fn test_rejects_age_out_of_range() {
        let mut input = baseline_input();
        input.age = 34;
        let err = validate_risk_input(&input).expect_err("should reject age 34");
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field(), "age");
        assert!(err.to_string().contains("age must be between 35 and 65, got 34"));

        input.age = 66;
        assert!(validate_risk_input(&input).is_err());
    }

    #[test]
    fn test_rejects_ldl_out_of_range() {
        let mut input = baseline_input();
        input.ldl_cholesterol = Some(10.5);
        let err = validate_risk_input(&input).expect_err("should reject ldl");
        assert_eq!(err.violations()[0].field(), "ldl_cholesterol");
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut input = baseline_input();
        input.weight_kg = f64::NAN;
        let err = validate_risk_input(&input).expect_err("should reject NaN");
        assert_eq!(
            err.violations(),
            &[ValidationError::NotFinite { field: "weight_kg" }]
        );
    }

    #[test]
    fn test_collects_every_violation() {
        let mut input = baseline_input();
        input.age = 80;
        input.height_cm = 90.0;
        input.weight_kg = 400.0;
        input.ldl_cholesterol = Some(-1.0);
        let err = validate_risk_input(&input).expect_err("should reject");
        let fields: Vec<_> = err.violations().iter().map(ValidationError::field).collect();
        assert_eq!(
            fields,
            vec!["age", "height_cm", "weight_kg", "ldl_cholesterol"]
        );
    }
}
