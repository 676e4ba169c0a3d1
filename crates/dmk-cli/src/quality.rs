//! `dmk quality-proof` — build a composite dataset quality proof.

use std::path::PathBuf;

use clap::Args;

use dmk_proof::{dataset_quality_proof, DatasetSummary, PredicateBackend};

use crate::{print_json, read_json};

/// Arguments for `dmk quality-proof`.
#[derive(Args, Debug)]
pub struct QualityArgs {
    /// Path to a DatasetSummary JSON file.
    #[arg(long)]
    pub summary: PathBuf,
}

/// Build and print the quality proof.
///
/// Exit code 0 when the proof verifies, 2 when either leg fails.
pub fn run_quality(args: &QualityArgs) -> anyhow::Result<u8> {
    let summary: DatasetSummary = read_json(&args.summary)?;
    let backend = PredicateBackend::new();
    let proof = dataset_quality_proof(&backend, &summary)?;
    let verified = proof.verified;
    print_json(&proof)?;
    Ok(if verified { 0 } else { 2 })
}
