//! # Credential Store
//!
//! The storage seam for issued credentials and their revocation state.
//! Callers depend on the [`CredentialStore`] trait; the shipped
//! [`InMemoryCredentialStore`] is a `DashMap` whose entry lock makes
//! revocation linearizable with subsequent reads — there is no caching
//! staleness window between `revoke` and the next `get` or rule evaluation.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use dmk_core::{CredentialId, Timestamp};

use crate::credential::{Credential, RevocationRecord};
use crate::error::CredentialError;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// The receipt returned by a revocation request.
///
/// Idempotent on repeat: revoking an already-revoked credential returns the
/// original record's timestamp, not a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevocationReceipt {
    /// The revoked credential.
    pub credential_id: CredentialId,
    /// Always true — revocation is one-way.
    pub revoked: bool,
    /// When the revocation first committed.
    pub revoked_at: Timestamp,
}

/// The standing of a credential as reported by a revocation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialStanding {
    /// The credential has been revoked.
    #[serde(rename = "REVOKED")]
    Revoked,
    /// The credential is active (or unknown, under the fail-open policy).
    #[serde(rename = "ACTIVE")]
    Active,
}

/// The response shape of a revocation check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevocationStatus {
    /// The credential that was checked.
    pub credential_id: CredentialId,
    /// Whether the credential is considered revoked.
    pub is_revoked: bool,
    /// The standing string (`"REVOKED"` / `"ACTIVE"`).
    pub status: CredentialStanding,
}

// ---------------------------------------------------------------------------
// Store trait
// ---------------------------------------------------------------------------

/// How a revocation check treats a credential id the store has never seen.
///
/// The marketplace default is fail-open: an unknown id is "not yet seen
/// here", not "revoked". High-value verification programs can construct
/// their store fail-closed instead, treating unknown ids as untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCredentialPolicy {
    /// Unknown ids report as active.
    #[default]
    FailOpen,
    /// Unknown ids report as revoked.
    FailClosed,
}

/// Storage contract for issued credentials.
///
/// Implementations must make `revoke` observable to any subsequent `get`
/// or `is_revoked` for the same id (no stale reads after the revocation
/// commits).
pub trait CredentialStore: Send + Sync {
    /// Insert a newly issued credential.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::DuplicateId`] if the id already exists.
    fn put(&self, credential: Credential) -> Result<(), CredentialError>;

    /// Fetch a credential by id, including current revocation state.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::NotFound`] if the id is unknown.
    fn get(&self, id: &CredentialId) -> Result<Credential, CredentialError>;

    /// Revoke a credential, recording reason and actor.
    ///
    /// Idempotent: revoking twice is not an error and returns the receipt
    /// of the first revocation.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::NotFound`] if the id is unknown.
    fn revoke(
        &self,
        id: &CredentialId,
        reason: &str,
        revoked_by: &str,
    ) -> Result<RevocationReceipt, CredentialError>;

    /// Whether the credential is considered revoked.
    ///
    /// Unknown ids answer according to the store's
    /// [`UnknownCredentialPolicy`] — `false` under the default fail-open
    /// policy. Callers gating high-value access should be aware of this.
    fn is_revoked(&self, id: &CredentialId) -> bool;

    /// The revocation-check response shape for a credential id.
    fn revocation_status(&self, id: &CredentialId) -> RevocationStatus {
        let revoked = self.is_revoked(id);
        RevocationStatus {
            credential_id: id.clone(),
            is_revoked: revoked,
            status: if revoked {
                CredentialStanding::Revoked
            } else {
                CredentialStanding::Active
            },
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory implementation
// ---------------------------------------------------------------------------

/// A stored credential together with its revocation record, if any.
#[derive(Debug, Clone)]
struct StoredCredential {
    credential: Credential,
    revocation: Option<RevocationRecord>,
}

/// In-memory credential store backed by `DashMap`.
///
/// Thread-safe; mutations run under the entry's write lock, so a committed
/// revocation is visible to every subsequent read of the same id.
pub struct InMemoryCredentialStore {
    records: DashMap<CredentialId, StoredCredential>,
    unknown_policy: UnknownCredentialPolicy,
}

impl InMemoryCredentialStore {
    /// Create an empty store with the default fail-open unknown-id policy.
    pub fn new() -> Self {
        Self::with_policy(UnknownCredentialPolicy::FailOpen)
    }

    /// Create an empty store with an explicit unknown-id policy.
    pub fn with_policy(unknown_policy: UnknownCredentialPolicy) -> Self {
        Self {
            records: DashMap::new(),
            unknown_policy,
        }
    }

    /// Number of credentials in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no credentials.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCredentialStore")
            .field("records", &self.records.len())
            .field("unknown_policy", &self.unknown_policy)
            .finish()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn put(&self, credential: Credential) -> Result<(), CredentialError> {
        match self.records.entry(credential.id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(CredentialError::DuplicateId(credential.id))
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(StoredCredential {
                    credential,
                    revocation: None,
                });
                Ok(())
            }
        }
    }

    fn get(&self, id: &CredentialId) -> Result<Credential, CredentialError> {
        self.records
            .get(id)
            .map(|r| r.credential.clone())
            .ok_or_else(|| CredentialError::NotFound(id.clone()))
    }

    fn revoke(
        &self,
        id: &CredentialId,
        reason: &str,
        revoked_by: &str,
    ) -> Result<RevocationReceipt, CredentialError> {
        let mut entry = self
            .records
            .get_mut(id)
            .ok_or_else(|| CredentialError::NotFound(id.clone()))?;

        let stored = entry.value_mut();
        let record = match &stored.revocation {
            // Already revoked — success path, first record wins.
            Some(existing) => existing.clone(),
            None => {
                let record = RevocationRecord {
                    reason: reason.to_string(),
                    revoked_by: revoked_by.to_string(),
                    revoked_at: Timestamp::now(),
                };
                stored.credential.revoked = true;
                stored.revocation = Some(record.clone());
                tracing::info!(
                    credential_id = %id,
                    revoked_by,
                    reason,
                    "credential revoked"
                );
                record
            }
        };

        Ok(RevocationReceipt {
            credential_id: id.clone(),
            revoked: true,
            revoked_at: record.revoked_at,
        })
    }

    fn is_revoked(&self, id: &CredentialId) -> bool {
        match self.records.get(id) {
            Some(r) => r.credential.revoked,
            None => matches!(self.unknown_policy, UnknownCredentialPolicy::FailClosed),
        }
    }
}
