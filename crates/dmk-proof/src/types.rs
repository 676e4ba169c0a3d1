//! # Proof Types
//!
//! The proof artifact and its public-input shapes.
//!
//! ## Privacy Invariant
//!
//! [`PublicInputs`] carries only the predicate's boolean result and the
//! bounds/set it was evaluated against — never the private value. The
//! opaque proof bytes are a private-field newtype so callers cannot build
//! logic on their contents.

use serde::{Deserialize, Serialize};

/// The kind of attestation a proof makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofType {
    /// The private value lies within a numeric range.
    Range,
    /// The private value belongs to a categorical set.
    Membership,
}

/// The public inputs of a proof — everything a verifier may learn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublicInputs {
    /// Range predicate: `value ∈ [min, max]` (upper bound optional).
    Range {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
        /// Whether the private value satisfied the predicate.
        meets_requirement: bool,
    },
    /// Membership predicate: `value ∈ allowed_set`.
    Membership {
        /// The allowed categorical values.
        allowed_set: Vec<String>,
        /// Whether the private value satisfied the predicate.
        is_member: bool,
    },
}

impl PublicInputs {
    /// The predicate's boolean result.
    pub fn holds(&self) -> bool {
        match self {
            Self::Range {
                meets_requirement, ..
            } => *meets_requirement,
            Self::Membership { is_member, .. } => *is_member,
        }
    }
}

/// Opaque proof bytes, hex-encoded.
///
/// The field is private: callers verify through the backend and read
/// [`PublicInputs`]; they never branch on proof bytes. This keeps the
/// backend swappable for a real proof system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueProofBytes(String);

impl OpaqueProofBytes {
    /// Wrap hex-encoded proof bytes. Crate-internal: only backends mint
    /// proof bytes.
    pub(crate) fn new(hex: String) -> Self {
        Self(hex)
    }

    /// Borrow the hex encoding — for backends and serialization only.
    pub(crate) fn as_hex(&self) -> &str {
        &self.0
    }
}

/// An attestation over a single claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proof {
    /// Range or membership.
    pub proof_type: ProofType,
    /// The claim key this proof speaks about (e.g. `"siteCount"`).
    pub claim: String,
    /// The predicate result and bounds/set. Never the private value.
    pub public_inputs: PublicInputs,
    /// Backend-specific proof bytes. Opaque to callers.
    pub opaque_proof: OpaqueProofBytes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_inputs_serialize_without_value_field() {
        let inputs = PublicInputs::Range {
            min: 1,
            max: None,
            meets_requirement: true,
        };
        let json = serde_json::to_string(&inputs).unwrap();
        assert!(json.contains("meets_requirement"));
        assert!(!json.contains("value"));
        assert!(!json.contains("max"));
    }

    #[test]
    fn membership_inputs_expose_set_and_result_only() {
        let inputs = PublicInputs::Membership {
            allowed_set: vec!["tech".into(), "news".into()],
            is_member: true,
        };
        let json = serde_json::to_value(&inputs).unwrap();
        assert_eq!(json["is_member"], serde_json::json!(true));
        assert!(json.get("value").is_none());
    }

    #[test]
    fn holds_reads_the_predicate_result() {
        assert!(PublicInputs::Range {
            min: 0,
            max: Some(10),
            meets_requirement: true
        }
        .holds());
        assert!(!PublicInputs::Membership {
            allowed_set: vec![],
            is_member: false
        }
        .holds());
    }

    #[test]
    fn proof_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ProofType::Membership).unwrap(),
            "\"membership\""
        );
    }
}
