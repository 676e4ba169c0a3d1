//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the engine. Each
//! identifier is a distinct type — you cannot pass a [`ProgramId`] where a
//! [`CredentialId`] is expected.
//!
//! ## Validation
//!
//! All three identifiers are externally supplied strings (issuer-assigned
//! credential ids, configured program ids, wallet addresses) and are
//! validated to be non-empty at construction time. No further format
//! restrictions are imposed: issuers and chains vary in their id schemes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A globally unique credential identifier, assigned by the issuer at
/// issuance time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CredentialId(String);

impl CredentialId {
    /// Create a credential identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCredentialId`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidCredentialId);
        }
        Ok(Self(s))
    }

    /// Generate a fresh credential identifier in the issuer's
    /// `cred_<uuid>` convention.
    pub fn generate() -> Self {
        Self(format!("cred_{}", Uuid::new_v4()))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CredentialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A verification program identifier (e.g. `premium-buyer`).
///
/// Programs are immutable configuration; their ids are the lookup keys of
/// the program registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(String);

impl ProgramId {
    /// Create a program identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidProgramId`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidProgramId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A marketplace participant address.
///
/// Typically a hex wallet address, but the engine also accepts the
/// leaderboard's local sentinel `"you"` — addresses are opaque dedup keys
/// here, not chain-validated values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Create an address, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidAddress);
        }
        Ok(Self(s))
    }

    /// The local-user sentinel used by the leaderboard merge.
    pub fn local() -> Self {
        Self("you".to_string())
    }

    /// Access the address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
