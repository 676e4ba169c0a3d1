//! `dmk verify` — evaluate a verification program against credentials.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use dmk_core::ProgramId;
use dmk_cred::{Credential, CredentialStore, InMemoryCredentialStore};
use dmk_policy::{ProgramRegistry, RuleEngine};

use crate::{print_json, read_json};

/// Arguments for `dmk verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Verification program id (e.g. premium-buyer).
    #[arg(long)]
    pub program: String,

    /// Path to a JSON array of presented credentials.
    #[arg(long)]
    pub credentials: PathBuf,

    /// Optional path to a JSON array of revoked credential ids.
    #[arg(long)]
    pub revoked: Option<PathBuf>,
}

/// Run the verification and print the report.
///
/// Exit code 0 when access is granted, 2 when denied.
pub fn run_verify(args: &VerifyArgs) -> anyhow::Result<u8> {
    let program_id = ProgramId::new(args.program.clone())?;
    let presented: Vec<Credential> = read_json(&args.credentials)?;

    let store = Arc::new(InMemoryCredentialStore::new());
    for credential in &presented {
        // Duplicate presented ids are tolerated; first copy wins.
        let _ = store.put(credential.clone());
    }
    if let Some(path) = &args.revoked {
        let ids: Vec<String> = read_json(path)?;
        for id in ids {
            let id = dmk_core::CredentialId::new(id)?;
            if let Err(e) = store.revoke(&id, "revoked via CLI input", "dmk") {
                tracing::warn!(credential_id = %id, error = %e, "could not revoke");
            }
        }
    }

    let engine = RuleEngine::new(ProgramRegistry::builtin(), store);
    let report = engine.evaluate(&program_id, &presented)?;
    let granted = report.granted_access;
    print_json(&report)?;

    Ok(if granted { 0 } else { 2 })
}
