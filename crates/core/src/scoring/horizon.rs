//! Rescales the 10-year baseline onto the six-month horizon.

use crate::constants::{BASELINE_YEARS, SHORT_HORIZON_YEARS};

/// Six-month share of a 10-year percentage: a per-year rate halved.
///
/// No clamping happens here; the composer clamps once at the end.
pub fn to_six_month(ten_year_probability: f64) -> f64 {
    (ten_year_probability / BASELINE_YEARS) * SHORT_HORIZON_YEARS
}
