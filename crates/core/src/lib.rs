//! # Stroke Risk Core
//!
//! Core business logic for the six-month stroke risk estimator.
//!
//! This crate contains the deterministic scoring engine and its content collaborators:
//! - A 10-year baseline point score rescaled to six months
//! - Acute and chronic multiplicative factors
//! - Clamping to a reportable range and classification into a risk tier
//! - Input validation, recommendations and static educational content
//!
//! The engine is pure: no I/O, no shared state, no failure path for validated input. It is safe
//! to call from any number of threads at once.
//!
//! This is not a validated clinical instrument. All weights are static constants.
//!
//! **No API concerns**: HTTP servers, identifiers, disclaimers and envelopes belong in
//! `api-shared` and `api-rest`.

pub mod bracket;
pub mod constants;
pub mod education;
pub mod error;
pub mod input;
pub mod outcome;
pub mod recommendations;
pub mod scoring;
pub mod service;
pub mod validation;

pub use education::{
    educational_content, risk_factors, EducationalContent, EmergencyContact, EmergencyLevel,
    RiskFactorInfo, SymptomItem, SymptomType,
};
pub use error::{AssessmentError, AssessmentResult, ValidationError};
pub use input::{Gender, Lifestyle, RiskInput, SmokingStatus, SymptomFrequency};
pub use outcome::{RiskCategory, RiskComponents, RiskOutcome};
pub use recommendations::{recommend, ActionItem, Recommendations};
pub use service::RiskService;
pub use validation::validate_risk_input;
