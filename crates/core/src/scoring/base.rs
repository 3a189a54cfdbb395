//! Long-horizon (10-year) baseline.
//!
//! An additive point score over age, gender, blood pressure, diabetes and smoking, mapped onto a
//! capped percentage. This is a simplified stand-in for a full actuarial table.

use crate::bracket::{points, Bracket};
use crate::constants::{
    AGE_POINTS_45, AGE_POINTS_55, AGE_POINTS_65, BASELINE_CAP, CURRENT_SMOKER_POINTS,
    DIABETES_POINTS, FORMER_SMOKER_POINTS, HIGH_BP_POINTS, MALE_POINTS, PERCENT_PER_POINT,
};
use crate::{Gender, RiskInput, SmokingStatus};

const AGE_BANDS: &[Bracket<u32>] = &[
    Bracket::new(|age: &u32| *age >= 65, AGE_POINTS_65),
    Bracket::new(|age: &u32| *age >= 55, AGE_POINTS_55),
    Bracket::new(|age: &u32| *age >= 45, AGE_POINTS_45),
];

const SMOKING: &[Bracket<SmokingStatus>] = &[
    Bracket::new(|s: &SmokingStatus| *s == SmokingStatus::Current, CURRENT_SMOKER_POINTS),
    Bracket::new(|s: &SmokingStatus| *s == SmokingStatus::Former, FORMER_SMOKER_POINTS),
];

/// Total baseline points for `input`.
pub fn baseline_points(input: &RiskInput) -> f64 {
    let mut score = points(AGE_BANDS, &input.age);

    if input.gender == Gender::Male {
        score += MALE_POINTS;
    }
    if input.high_bp {
        score += HIGH_BP_POINTS;
    }
    if input.diabetes {
        score += DIABETES_POINTS;
    }

    score + points(SMOKING, &input.smoking)
}

/// 10-year baseline percentage, capped at [`BASELINE_CAP`].
pub fn compute_base(input: &RiskInput) -> f64 {
    (baseline_points(input) * PERCENT_PER_POINT).min(BASELINE_CAP)
}
