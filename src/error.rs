//! Error types
//!
//! Input validation failures are detected before any scoring runs. The same
//! input always fails the same way, so nothing here is retryable.

use thiserror::Error;

/// Failure returned by the CEI entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CeiError {
    /// Unit selector is not one of `metric`, `imperial`, `standard`
    #[error("invalid unit system '{0}' (expected metric, imperial or standard)")]
    InvalidUnit(String),

    /// A required sample field is absent or not numeric
    #[error("missing or non-numeric field '{0}'")]
    MissingField(&'static str),
}

/// Failure validating a scoring profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("table '{0}' has no breakpoints")]
    EmptyTable(&'static str),

    #[error("table '{0}' bounds must be finite and strictly ascending")]
    UnsortedTable(&'static str),

    #[error("parameters of '{0}' must be finite")]
    NonFinite(&'static str),
}
