//! `dmk points` — score a dataset's metrics.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use dmk_progression::{compute_data_points, DataMetrics};

use crate::{print_json, read_json};

/// Arguments for `dmk points`.
#[derive(Args, Debug)]
pub struct PointsArgs {
    /// Path to a DataMetrics JSON file.
    #[arg(long)]
    pub metrics: PathBuf,
}

/// Compute and print the point score for a metrics file.
pub fn run_points(args: &PointsArgs) -> anyhow::Result<u8> {
    let metrics: DataMetrics = read_json(&args.metrics)?;
    let data_points = compute_data_points(&metrics);
    print_json(&json!({ "data_points": data_points }))?;
    Ok(0)
}
