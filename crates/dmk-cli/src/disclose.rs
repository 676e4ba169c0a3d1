//! `dmk disclose` — derive a partial credential.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use dmk_cred::{dataset_preview, disclose, seller_preview, Credential};

use crate::{print_json, read_json};

/// The built-in disclosure presets.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Preset {
    /// Reveal trust/verification flags only.
    Seller,
    /// Reveal aggregate counts, categories, and consent.
    Dataset,
}

/// Arguments for `dmk disclose`.
#[derive(Args, Debug)]
pub struct DiscloseArgs {
    /// Path to the full credential JSON file.
    #[arg(long)]
    pub credential: PathBuf,

    /// Comma-separated claim keys to reveal.
    #[arg(long, value_delimiter = ',', conflicts_with = "preset")]
    pub reveal: Vec<String>,

    /// Use a built-in preset instead of an explicit field list.
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,
}

/// Derive and print the partial credential.
pub fn run_disclose(args: &DiscloseArgs) -> anyhow::Result<u8> {
    let credential: Credential = read_json(&args.credential)?;

    let partial = match args.preset {
        Some(Preset::Seller) => seller_preview(&credential)?,
        Some(Preset::Dataset) => dataset_preview(&credential)?,
        None => {
            let fields: BTreeSet<String> = args.reveal.iter().cloned().collect();
            disclose(&credential, &fields)?
        }
    };

    print_json(&partial)?;
    Ok(0)
}
