//! # dmk-cli — CLI for the DataMark Engine
//!
//! Exposes the engine's request/response surface over JSON files, one
//! subcommand per operation:
//!
//! - `dmk verify` — evaluate a verification program against presented
//!   credentials.
//! - `dmk points` — score a dataset's metrics.
//! - `dmk disclose` — derive a partial credential.
//! - `dmk quality-proof` — build the composite dataset quality proof.
//!
//! All subcommands read JSON from files and print JSON to stdout, so the
//! CLI doubles as a transport-agnostic exercise of the engine's exposed
//! shapes.

pub mod disclose;
pub mod points;
pub mod quality;
pub mod verify;

use std::path::Path;

use anyhow::Context;

/// Read and deserialize a JSON file.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Serialize a value as pretty JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_json_reports_missing_file() {
        let err = read_json::<serde_json::Value>(Path::new("/no/such/file.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/file.json"));
    }

    #[test]
    fn read_json_parses_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.json");
        std::fs::write(&path, r#"{"a": 1}"#).unwrap();
        let v: serde_json::Value = read_json(&path).unwrap();
        assert_eq!(v["a"], 1);
    }

    #[test]
    fn read_json_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = read_json::<serde_json::Value>(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }
}
