//! # Selective Disclosure
//!
//! Splits a credential's claim set into revealed and hidden halves and
//! produces a commitment proof binding both to the original claim set. A
//! verifier can confirm that revealed values are consistent with the
//! commitment without learning the hidden ones.
//!
//! The commitment here is a structural hash commitment, not a cryptographic
//! proof system — soundness is delegated to the `dmk-proof` backend
//! contract. [`verify_partial`] is a fail-closed structural check only.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use dmk_core::{sha256_digest, CanonicalBytes, ContentDigest, CredentialId};

use crate::credential::Credential;
use crate::error::DisclosureError;

/// Domain separator for full-claim-set commitments.
const COMMITMENT_DOMAIN: &str = "dmk:disclosure:commitment:v1";
/// Domain separator for per-field commitments.
const FIELD_DOMAIN: &str = "dmk:disclosure:field:v1";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A commitment to one revealed field's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCommitment {
    /// The revealed claim key.
    pub field: String,
    /// Digest binding the key and its value.
    pub digest: ContentDigest,
}

/// The proof element of a partial credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureProof {
    /// Commitment over the full original claim set (sorted key-value pairs).
    pub commitment: ContentDigest,
    /// One commitment per revealed field.
    pub revealed: Vec<FieldCommitment>,
    /// Number of hidden fields, bound into the structure check.
    pub hidden_count: usize,
}

/// A partially disclosed credential.
///
/// Invariants: `revealed_claims` keys and `hidden_fields` are disjoint, and
/// their union equals the original credential's claim key set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialCredential {
    /// The source credential's id.
    pub id: CredentialId,
    /// The source credential's type.
    #[serde(rename = "type")]
    pub credential_type: String,
    /// Claims disclosed to the verifier.
    pub revealed_claims: BTreeMap<String, serde_json::Value>,
    /// Claim keys that exist but are withheld.
    pub hidden_fields: BTreeSet<String>,
    /// Commitment binding revealed and hidden claims to the original set.
    pub commitment_proof: DisclosureProof,
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Derive a partial credential revealing only `fields_to_reveal`.
///
/// Every claim key is placed in `revealed_claims` if named in
/// `fields_to_reveal`, else in `hidden_fields`. Requested fields the
/// credential does not carry are ignored. The commitment always covers the
/// full original claim set.
///
/// # Errors
///
/// Returns [`DisclosureError::EmptyCredential`] if the claim set is empty,
/// or a canonicalization error for float-valued claims.
pub fn disclose(
    credential: &Credential,
    fields_to_reveal: &BTreeSet<String>,
) -> Result<PartialCredential, DisclosureError> {
    if credential.claims.is_empty() {
        return Err(DisclosureError::EmptyCredential(credential.id.clone()));
    }

    let mut revealed_claims = BTreeMap::new();
    let mut hidden_fields = BTreeSet::new();
    for (key, value) in &credential.claims {
        if fields_to_reveal.contains(key) {
            revealed_claims.insert(key.clone(), value.clone());
        } else {
            hidden_fields.insert(key.clone());
        }
    }

    let commitment = commit_claims(&credential.claims)?;
    let revealed = revealed_claims
        .iter()
        .map(|(field, value)| {
            Ok(FieldCommitment {
                field: field.clone(),
                digest: commit_field(field, value)?,
            })
        })
        .collect::<Result<Vec<_>, DisclosureError>>()?;

    tracing::debug!(
        credential_id = %credential.id,
        revealed = revealed_claims.len(),
        hidden = hidden_fields.len(),
        "selective disclosure derived"
    );

    let hidden_count = hidden_fields.len();
    Ok(PartialCredential {
        id: credential.id.clone(),
        credential_type: credential.credential_type.clone(),
        revealed_claims,
        hidden_fields,
        commitment_proof: DisclosureProof {
            commitment,
            revealed,
            hidden_count,
        },
    })
}

/// Structural verification of a partial credential. Fails closed.
///
/// Returns `false` when `revealed_claims` is empty, when the revealed and
/// hidden sets overlap, when `hidden_count` disagrees with the hidden set,
/// or when any revealed field's commitment fails to recompute. This is a
/// structural check only — cryptographic soundness is the proof backend's
/// contract.
pub fn verify_partial(partial: &PartialCredential) -> bool {
    if partial.revealed_claims.is_empty() {
        return false;
    }
    if partial
        .revealed_claims
        .keys()
        .any(|k| partial.hidden_fields.contains(k))
    {
        return false;
    }
    if partial.commitment_proof.hidden_count != partial.hidden_fields.len() {
        return false;
    }
    if partial.commitment_proof.revealed.len() != partial.revealed_claims.len() {
        return false;
    }
    for fc in &partial.commitment_proof.revealed {
        let value = match partial.revealed_claims.get(&fc.field) {
            Some(v) => v,
            None => return false,
        };
        match commit_field(&fc.field, value) {
            Ok(digest) if digest == fc.digest => {}
            _ => return false,
        }
    }
    true
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Seller preview: reveal trust and verification flags, hide personal info.
pub fn seller_preview(credential: &Credential) -> Result<PartialCredential, DisclosureError> {
    disclose(
        credential,
        &preset_fields(&["verified", "humanhood", "trustScore", "memberSince"]),
    )
}

/// Dataset preview: reveal aggregate counts, categories, and consent; hide
/// granular timestamps and URLs.
pub fn dataset_preview(credential: &Credential) -> Result<PartialCredential, DisclosureError> {
    disclose(
        credential,
        &preset_fields(&[
            "siteCount",
            "categories",
            "timeRange",
            "verified",
            "consentGiven",
        ]),
    )
}

fn preset_fields(fields: &[&str]) -> BTreeSet<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Commitments
// ---------------------------------------------------------------------------

fn commit_claims(
    claims: &BTreeMap<String, serde_json::Value>,
) -> Result<ContentDigest, DisclosureError> {
    let bytes = CanonicalBytes::new(&(COMMITMENT_DOMAIN, claims))?;
    Ok(sha256_digest(&bytes))
}

fn commit_field(field: &str, value: &serde_json::Value) -> Result<ContentDigest, DisclosureError> {
    let bytes = CanonicalBytes::new(&(FIELD_DOMAIN, field, value))?;
    Ok(sha256_digest(&bytes))
}
