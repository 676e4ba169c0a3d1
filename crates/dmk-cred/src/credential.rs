//! # Credential Structure
//!
//! Defines the issued [`Credential`] record. The envelope is rigid; the
//! claims map is intentionally extensible — issuers attach whatever claim
//! keys their credential type defines (`trustScore`, `age`, `verified`, …).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dmk_core::{CredentialId, Timestamp};

/// An issued credential about a marketplace participant or dataset.
///
/// `id` is globally unique and immutable once issued. `claims` keys are
/// unique; a `BTreeMap` keeps iteration deterministic for commitment
/// computation. The `revoked` flag is one-way: once set it never clears,
/// and a revoked credential never satisfies a verification rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// The credential identifier, assigned at issuance.
    pub id: CredentialId,
    /// The credential type (e.g. `"trust-score"`, `"human-verification"`).
    #[serde(rename = "type")]
    pub credential_type: String,
    /// The DID or name of the issuer.
    pub issuer: String,
    /// When the credential was issued (UTC).
    pub issued_at: Timestamp,
    /// The claim set — intentionally extensible.
    #[serde(default)]
    pub claims: BTreeMap<String, serde_json::Value>,
    /// Whether the credential has been revoked.
    #[serde(default)]
    pub revoked: bool,
}

impl Credential {
    /// Create an active credential with the given claims.
    pub fn new(
        id: CredentialId,
        credential_type: impl Into<String>,
        issuer: impl Into<String>,
        issued_at: Timestamp,
        claims: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id,
            credential_type: credential_type.into(),
            issuer: issuer.into(),
            issued_at,
            claims,
            revoked: false,
        }
    }

    /// Look up a claim value by key.
    pub fn claim(&self, key: &str) -> Option<&serde_json::Value> {
        self.claims.get(key)
    }
}

/// The record of a credential's revocation.
///
/// Written once, under the store entry's write lock; a repeated revocation
/// returns this record unchanged (first reason/actor/time win).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationRecord {
    /// Why the credential was revoked.
    pub reason: String,
    /// Who revoked it (operator id or service name).
    pub revoked_by: String,
    /// When the revocation committed (UTC).
    pub revoked_at: Timestamp,
}
