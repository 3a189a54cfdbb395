//! The scoring pipeline.
//!
//! ```text
//! RiskInput -> base (10-year) -> horizon (6-month) --+
//!           -> acute adjustment -----------------------+--> composer -> RiskOutcome
//!           -> chronic correction ---------------------+
//! ```
//!
//! Every stage is a pure function of its arguments. The acute and chronic models are independent
//! of each other and of the baseline.

pub mod acute;
pub mod base;
pub mod chronic;
pub mod composer;
pub mod horizon;

pub use acute::compute_adjustment;
pub use base::compute_base;
pub use chronic::compute_correction;
pub use composer::{classify, compose};
pub use horizon::to_six_month;

use crate::{RiskInput, RiskOutcome};

/// Runs the full pipeline over one validated input.
pub fn score(input: &RiskInput) -> RiskOutcome {
    compose(
        compute_base(input),
        compute_adjustment(input),
        compute_correction(input),
    )
}
