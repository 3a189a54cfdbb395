//! Opaque request-scoped identifiers.
//!
//! Results and anonymous sessions are tagged with short prefixed identifiers derived from a fresh
//! version 4 UUID:
//!
//! | Type | Form | Example |
//! |---|---|---|
//! | [`CalculationId`] | `calc_` + 12 lowercase hex | `calc_550e8400e29b` |
//! | [`SessionId`] | `anon_` + 16 lowercase hex | `anon_550e8400e29b41d4` |
//!
//! Identifiers are metadata only. They are never used by the scoring engine and are not stored.
//!
//! Externally supplied identifiers must already be canonical: [`CalculationId::parse`] and
//! [`SessionId::parse`] reject a wrong prefix, wrong length, uppercase or non-hex characters.

mod service;

// Re-export public types
pub use service::{Calculation, CalculationId, IdKind, PrefixedId, Session, SessionId, Uuid};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type IdResult<T> = Result<T, IdError>;
