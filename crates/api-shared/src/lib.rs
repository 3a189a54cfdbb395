//! # API Shared
//!
//! Shared wire types and services for the stroke risk APIs.
//!
//! Contains:
//! - Response envelopes and DTOs (`dto` module) with serde and OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Engine types (`RiskInput`, `RiskCategory`, ...) are re-used directly from
//! `stroke-risk-core`, which derives their schemas under its `openapi` feature.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
