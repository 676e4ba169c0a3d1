//! # Error Hierarchy
//!
//! Structured error types for the foundation crate, built with `thiserror`.
//! Each subsystem crate defines its own error enum on top of these; the
//! variants here cover identifier validation and canonicalization, the two
//! concerns owned by `dmk-core`.

use thiserror::Error;

/// Errors during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Amounts and scores must be strings or integers.
    #[error("float values are not permitted in canonical representations; use string or integer: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed during canonicalization.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Validation errors for domain primitive newtypes.
///
/// Each identifier type enforces format constraints at construction time.
/// These errors carry the invalid input so operators can diagnose
/// misconfiguration without guesswork.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Credential identifier is empty or whitespace-only.
    #[error("invalid credential ID: must be non-empty")]
    InvalidCredentialId,

    /// Verification program identifier is empty or whitespace-only.
    #[error("invalid program ID: must be non-empty")]
    InvalidProgramId,

    /// Marketplace address is empty or whitespace-only.
    #[error("invalid address: must be non-empty")]
    InvalidAddress,
}
