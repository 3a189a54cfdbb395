//! Short-term adjustment.
//!
//! Multiplicative factor from the age threshold, blood pressure and how many tracked symptoms
//! (palpitations, dizziness, shortness of breath) occur often. The symptom tally is a single
//! tiered factor: three frequent symptoms earn the same factor as two.

use crate::bracket::{factor, Bracket};
use crate::constants::{
    ACUTE_AGE_FACTOR, ACUTE_AGE_THRESHOLD, ACUTE_HIGH_BP_FACTOR, SYMPTOMS_MANY_FACTOR,
    SYMPTOMS_ONE_FACTOR,
};
use crate::RiskInput;

const SYMPTOM_TALLY: &[Bracket<usize>] = &[
    Bracket::new(|count: &usize| *count >= 2, SYMPTOMS_MANY_FACTOR),
    Bracket::new(|count: &usize| *count == 1, SYMPTOMS_ONE_FACTOR),
];

pub fn compute_adjustment(input: &RiskInput) -> f64 {
    let mut adjustment = 1.0;

    if input.age >= ACUTE_AGE_THRESHOLD {
        adjustment *= ACUTE_AGE_FACTOR;
    }
    if input.high_bp {
        adjustment *= ACUTE_HIGH_BP_FACTOR;
    }

    adjustment * factor(SYMPTOM_TALLY, &input.frequent_symptom_count())
}
