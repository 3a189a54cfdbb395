//! Long-term correction.
//!
//! Multiplicative factor from activity level, family history, atrial fibrillation, LDL
//! cholesterol and BMI. Unknown LDL contributes nothing: absence is treated as neutral, not as a
//! penalty.

use crate::bracket::{factor, Bracket};
use crate::constants::{
    ATRIAL_FIBRILLATION_FACTOR, BMI_OBESE_FACTOR, BMI_OBESE_THRESHOLD, BMI_OVERWEIGHT_FACTOR,
    BMI_OVERWEIGHT_THRESHOLD, FAMILY_HISTORY_FACTOR, HIGH_LDL_FACTOR, INACTIVE_FACTOR,
    LDL_THRESHOLD, SEDENTARY_FACTOR,
};
use crate::{Lifestyle, RiskInput};

const LIFESTYLE: &[Bracket<Lifestyle>] = &[
    Bracket::new(|l: &Lifestyle| *l == Lifestyle::Sedentary, SEDENTARY_FACTOR),
    Bracket::new(|l: &Lifestyle| *l == Lifestyle::Inactive, INACTIVE_FACTOR),
];

const LDL: &[Bracket<Option<f64>>] = &[Bracket::new(
    |ldl: &Option<f64>| matches!(ldl, Some(value) if *value > LDL_THRESHOLD),
    HIGH_LDL_FACTOR,
)];

const BMI_BANDS: &[Bracket<f64>] = &[
    Bracket::new(|bmi: &f64| *bmi > BMI_OBESE_THRESHOLD, BMI_OBESE_FACTOR),
    Bracket::new(|bmi: &f64| *bmi > BMI_OVERWEIGHT_THRESHOLD, BMI_OVERWEIGHT_FACTOR),
];

pub fn compute_correction(input: &RiskInput) -> f64 {
    let mut correction = factor(LIFESTYLE, &input.lifestyle);

    if input.family_history {
        correction *= FAMILY_HISTORY_FACTOR;
    }
    if input.atrial_fibrillation {
        correction *= ATRIAL_FIBRILLATION_FACTOR;
    }

    correction * factor(LDL, &input.ldl_cholesterol) * factor(BMI_BANDS, &input.bmi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::fixtures::{baseline_input, high_risk_input};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_neutral_input_has_unit_correction() {
        assert_eq!(compute_correction(&baseline_input()), 1.0);
    }

    #[test]
    fn test_lifestyle_tiers() {
        let mut input = baseline_input();
        input.lifestyle = Lifestyle::Sedentary;
        assert!(approx(compute_correction(&input), 1.3));
        input.lifestyle = Lifestyle::Inactive;
        assert!(approx(compute_correction(&input), 1.5));
    }

    #[test]
    fn test_ldl_threshold_is_exclusive() {
        let mut input = baseline_input();
        input.ldl_cholesterol = Some(3.0);
        assert_eq!(compute_correction(&input), 1.0);
        input.ldl_cholesterol = Some(3.1);
        assert!(approx(compute_correction(&input), 1.3));
    }

    #[test]
    fn test_unknown_ldl_is_neutral() {
        let mut input = high_risk_input();
        let known = compute_correction(&input);
        input.ldl_cholesterol = None;
        let unknown = compute_correction(&input);
        assert!(approx(known / unknown, 1.3));
    }

    #[test]
    fn test_bmi_bands() {
        let mut input = baseline_input();
        input.height_cm = 200.0;

        // 100 kg at 2 m is exactly 25.0: not overweight.
        input.weight_kg = 100.0;
        assert_eq!(compute_correction(&input), 1.0);

        input.weight_kg = 104.0; // 26.0
        assert!(approx(compute_correction(&input), 1.2));

        input.weight_kg = 120.0; // exactly 30.0: overweight, not obese
        assert!(approx(compute_correction(&input), 1.2));

        input.weight_kg = 124.0; // 31.0
        assert!(approx(compute_correction(&input), 1.4));
    }

    #[test]
    fn test_all_chronic_factors_multiply() {
        // 1.5 (inactive) * 1.4 (family) * 2.0 (af) * 1.3 (ldl) * 1.4 (bmi 31.0)
        assert!(approx(compute_correction(&high_risk_input()), 7.644));
    }
}
