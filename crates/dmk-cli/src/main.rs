//! # dmk CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity maps onto the tracing `EnvFilter`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dmk_cli::disclose::{run_disclose, DiscloseArgs};
use dmk_cli::points::{run_points, PointsArgs};
use dmk_cli::quality::{run_quality, QualityArgs};
use dmk_cli::verify::{run_verify, VerifyArgs};

/// DataMark engine CLI.
///
/// Evaluates verification programs, scores dataset metrics, derives
/// selective disclosures, and builds dataset quality proofs — all over
/// JSON files, printing JSON to stdout.
#[derive(Parser, Debug)]
#[command(name = "dmk", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a verification program against presented credentials.
    Verify(VerifyArgs),

    /// Score a dataset's metrics.
    Points(PointsArgs),

    /// Derive a partial credential via selective disclosure.
    Disclose(DiscloseArgs),

    /// Build the composite dataset quality proof.
    #[command(name = "quality-proof")]
    Quality(QualityArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Verify(args) => run_verify(&args),
        Commands::Points(args) => run_points(&args),
        Commands::Disclose(args) => run_disclose(&args),
        Commands::Quality(args) => run_quality(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_verify() {
        let cli = Cli::try_parse_from([
            "dmk",
            "verify",
            "--program",
            "premium-buyer",
            "--credentials",
            "creds.json",
        ])
        .unwrap();
        if let Commands::Verify(args) = cli.command {
            assert_eq!(args.program, "premium-buyer");
            assert_eq!(args.credentials, PathBuf::from("creds.json"));
            assert!(args.revoked.is_none());
        } else {
            panic!("expected verify");
        }
    }

    #[test]
    fn cli_parse_verify_with_revoked_list() {
        let cli = Cli::try_parse_from([
            "dmk",
            "verify",
            "--program",
            "premium-buyer",
            "--credentials",
            "creds.json",
            "--revoked",
            "revoked.json",
        ])
        .unwrap();
        if let Commands::Verify(args) = cli.command {
            assert_eq!(args.revoked, Some(PathBuf::from("revoked.json")));
        } else {
            panic!("expected verify");
        }
    }

    #[test]
    fn cli_parse_points() {
        let cli = Cli::try_parse_from(["dmk", "points", "--metrics", "m.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Points(_)));
    }

    #[test]
    fn cli_parse_disclose_with_fields() {
        let cli = Cli::try_parse_from([
            "dmk",
            "disclose",
            "--credential",
            "cred.json",
            "--reveal",
            "verified,trustScore",
        ])
        .unwrap();
        if let Commands::Disclose(args) = cli.command {
            assert_eq!(args.reveal, vec!["verified", "trustScore"]);
        } else {
            panic!("expected disclose");
        }
    }

    #[test]
    fn cli_parse_disclose_preset() {
        let cli = Cli::try_parse_from([
            "dmk",
            "disclose",
            "--credential",
            "cred.json",
            "--preset",
            "seller",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Disclose(_)));
    }

    #[test]
    fn cli_rejects_reveal_and_preset_together() {
        let result = Cli::try_parse_from([
            "dmk",
            "disclose",
            "--credential",
            "cred.json",
            "--reveal",
            "a",
            "--preset",
            "seller",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_quality_proof() {
        let cli =
            Cli::try_parse_from(["dmk", "quality-proof", "--summary", "s.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Quality(_)));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli = Cli::try_parse_from(["dmk", "-vv", "points", "--metrics", "m.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["dmk"]).is_err());
    }
}
