//! # Proof Backend (Sealed)
//!
//! The capability interface for proof generation and verification. All
//! backends implement [`ProofBackend`]; the trait is sealed so only
//! implementations authorized within this crate can exist.
//!
//! The shipped [`PredicateBackend`] evaluates predicates directly and
//! commits to them with deterministic SHA-256 digests. A real proof-system
//! adapter implements the same trait; callers are unaffected by the swap.

use thiserror::Error;

use dmk_core::{sha256_digest, CanonicalBytes};

use crate::types::{OpaqueProofBytes, Proof, ProofType, PublicInputs};

/// Domain separator bound into every proof digest.
const PROOF_DOMAIN: &str = "dmk:proof:v1";

/// Error during proof generation.
#[derive(Error, Debug)]
pub enum ProofError {
    /// The proof request is invalid or incomplete.
    #[error("invalid proof inputs: {0}")]
    InvalidInputs(String),
}

/// Error during proof verification.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The proof is structurally malformed (bad encoding, wrong length).
    #[error("malformed proof: {0}")]
    MalformedProof(String),
}

/// Private module that seals the [`ProofBackend`] trait.
mod private {
    /// Sealing marker trait. Not accessible outside `dmk-proof`.
    pub trait Sealed {}
}

/// Sealed trait defining the proof backend capability.
///
/// Requires `Send + Sync` so a single backend can serve concurrent
/// verification requests.
pub trait ProofBackend: private::Sealed + Send + Sync {
    /// Attest that a private numeric `value` lies in `[min, max]`
    /// (upper bound optional).
    ///
    /// The returned proof's public inputs expose only the bounds and the
    /// predicate result, never `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ProofError::InvalidInputs`] for an empty claim name or an
    /// inverted range.
    fn range_proof(
        &self,
        claim: &str,
        value: i64,
        min: i64,
        max: Option<i64>,
    ) -> Result<Proof, ProofError>;

    /// Attest that a private categorical `value` belongs to `allowed_set`.
    ///
    /// The returned proof's public inputs expose only the set and the
    /// predicate result, never `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ProofError::InvalidInputs`] for an empty claim name or an
    /// empty allowed set.
    fn membership_proof(
        &self,
        claim: &str,
        value: &str,
        allowed_set: &[String],
    ) -> Result<Proof, ProofError>;

    /// Verify a proof against its public inputs.
    ///
    /// Returns `Ok(true)` if the proof binds to its public inputs and the
    /// predicate holds, `Ok(false)` if the proof is well-formed but invalid
    /// (tampered inputs or unmet predicate).
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::MalformedProof`] if the proof bytes are
    /// structurally invalid.
    fn verify(&self, proof: &Proof) -> Result<bool, VerifyError>;
}

/// Deterministic predicate backend.
///
/// Evaluates the predicate over the private value at proof time and commits
/// to `(claim, public_inputs)` with SHA-256. Proofs are reproducible and
/// tamper-evident, but transparent — this backend provides no
/// zero-knowledge guarantees and exists for development, testing, and
/// deployments that accept trusted evaluation.
#[derive(Debug, Default)]
pub struct PredicateBackend;

impl PredicateBackend {
    /// Create a predicate backend.
    pub fn new() -> Self {
        Self
    }

    fn commitment(
        claim: &str,
        inputs: &PublicInputs,
    ) -> Result<OpaqueProofBytes, ProofError> {
        let bytes = CanonicalBytes::new(&(PROOF_DOMAIN, claim, inputs))
            .map_err(|e| ProofError::InvalidInputs(e.to_string()))?;
        Ok(OpaqueProofBytes::new(sha256_digest(&bytes).to_hex()))
    }
}

impl private::Sealed for PredicateBackend {}

impl ProofBackend for PredicateBackend {
    fn range_proof(
        &self,
        claim: &str,
        value: i64,
        min: i64,
        max: Option<i64>,
    ) -> Result<Proof, ProofError> {
        if claim.trim().is_empty() {
            return Err(ProofError::InvalidInputs("empty claim name".into()));
        }
        if let Some(upper) = max {
            if upper < min {
                return Err(ProofError::InvalidInputs(format!(
                    "inverted range: [{min}, {upper}]"
                )));
            }
        }

        let meets_requirement = value >= min && max.map_or(true, |upper| value <= upper);
        let public_inputs = PublicInputs::Range {
            min,
            max,
            meets_requirement,
        };
        let opaque_proof = Self::commitment(claim, &public_inputs)?;
        Ok(Proof {
            proof_type: ProofType::Range,
            claim: claim.to_string(),
            public_inputs,
            opaque_proof,
        })
    }

    fn membership_proof(
        &self,
        claim: &str,
        value: &str,
        allowed_set: &[String],
    ) -> Result<Proof, ProofError> {
        if claim.trim().is_empty() {
            return Err(ProofError::InvalidInputs("empty claim name".into()));
        }
        if allowed_set.is_empty() {
            return Err(ProofError::InvalidInputs("empty allowed set".into()));
        }

        let is_member = allowed_set.iter().any(|s| s == value);
        let public_inputs = PublicInputs::Membership {
            allowed_set: allowed_set.to_vec(),
            is_member,
        };
        let opaque_proof = Self::commitment(claim, &public_inputs)?;
        Ok(Proof {
            proof_type: ProofType::Membership,
            claim: claim.to_string(),
            public_inputs,
            opaque_proof,
        })
    }

    fn verify(&self, proof: &Proof) -> Result<bool, VerifyError> {
        let hex = proof.opaque_proof.as_hex();
        if hex.len() != 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(VerifyError::MalformedProof(format!(
                "expected 64 hex chars, got {} chars",
                hex.len()
            )));
        }

        let expected = Self::commitment(&proof.claim, &proof.public_inputs)
            .map_err(|e| VerifyError::MalformedProof(e.to_string()))?;
        if expected.as_hex() != hex {
            // Well-formed but does not bind to these public inputs.
            return Ok(false);
        }

        Ok(proof.public_inputs.holds())
    }
}
