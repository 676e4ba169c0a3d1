//! # Dataset Quality Proof
//!
//! A composite attestation that a farmed dataset is non-trivial and
//! categorized, without revealing its contents: a range proof over the
//! resource/site count (at least 1) and a membership proof over the
//! primary category.

use serde::{Deserialize, Serialize};

use crate::backend::{ProofBackend, ProofError};
use crate::types::Proof;

/// Categories a dataset's primary category may take.
pub const DATASET_CATEGORIES: &[&str] = &[
    "tech",
    "finance",
    "ecommerce",
    "news",
    "social",
    "entertainment",
    "browsing",
    "tracked-session",
    "user-activity",
];

/// The aggregate facts the quality proof speaks about. Produced by the
/// data-collection layer; this crate only consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of resources/sites captured in the dataset.
    pub resource_count: u64,
    /// The dataset's primary category.
    pub primary_category: String,
}

/// A composite quality attestation over a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetQualityProof {
    /// Range proof: the dataset contains at least one resource.
    pub site_count_proof: Proof,
    /// Membership proof: the primary category is a known category.
    pub category_proof: Proof,
    /// Whether both underlying predicates verified.
    pub verified: bool,
}

/// Build the composite quality proof for a dataset.
///
/// `verified` is true iff both the range and the membership proof verify.
///
/// # Errors
///
/// Returns [`ProofError`] if either underlying proof cannot be generated.
pub fn dataset_quality_proof<B: ProofBackend>(
    backend: &B,
    dataset: &DatasetSummary,
) -> Result<DatasetQualityProof, ProofError> {
    let count = i64::try_from(dataset.resource_count)
        .map_err(|_| ProofError::InvalidInputs("resource count exceeds i64".into()))?;
    let site_count_proof = backend.range_proof("siteCount", count, 1, None)?;

    let allowed: Vec<String> = DATASET_CATEGORIES.iter().map(|s| s.to_string()).collect();
    let category_proof =
        backend.membership_proof("primaryCategory", &dataset.primary_category, &allowed)?;

    let verified = matches!(backend.verify(&site_count_proof), Ok(true))
        && matches!(backend.verify(&category_proof), Ok(true));

    Ok(DatasetQualityProof {
        site_count_proof,
        category_proof,
        verified,
    })
}
