//! # Credential Error Types
//!
//! Structured errors for store operations and disclosure transforms. Each
//! variant carries the failing credential id so callers can render a precise
//! message without re-deriving context.

use thiserror::Error;

use dmk_core::{CanonicalizationError, CredentialId};

/// Errors from credential store operations.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// A credential with this id has already been issued. Ids are globally
    /// unique and immutable; re-issuance is always a caller bug.
    #[error("credential {0} already exists")]
    DuplicateId(CredentialId),

    /// No credential with this id is known to the store.
    #[error("credential {0} not found")]
    NotFound(CredentialId),
}

/// Errors from the disclosure transformer.
#[derive(Error, Debug)]
pub enum DisclosureError {
    /// The credential has no claims — there is nothing to disclose or to
    /// commit to.
    #[error("credential {0} has an empty claim set")]
    EmptyCredential(CredentialId),

    /// Claim values could not be canonicalized for commitment computation
    /// (e.g. a float-valued claim).
    #[error("claim canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}
