#![deny(missing_docs)]

//! # dmk-proof — Range & Membership Attestations
//!
//! Produces and verifies attestations over numeric and categorical claims
//! without exposing the underlying values. The [`ProofBackend`] trait is the
//! capability seam: callers hold a backend and never inspect proof bytes,
//! only [`PublicInputs`], so a genuine SNARK/STARK verifier can be swapped
//! in without changing call sites.
//!
//! ## Sealed Trait
//!
//! `ProofBackend` is **sealed**: only implementations defined within this
//! crate can exist. This prevents unauthorized proof backends from being
//! injected into verification paths.
//!
//! ## Shipped Backend
//!
//! [`PredicateBackend`] evaluates the predicate directly over the private
//! value and commits to the result with a deterministic SHA-256 digest.
//! Transparent and reproducible — no zero-knowledge guarantees.

pub mod backend;
pub mod quality;
pub mod types;

pub use backend::{PredicateBackend, ProofBackend, ProofError, VerifyError};
pub use quality::{dataset_quality_proof, DatasetQualityProof, DatasetSummary, DATASET_CATEGORIES};
pub use types::{OpaqueProofBytes, Proof, ProofType, PublicInputs};
