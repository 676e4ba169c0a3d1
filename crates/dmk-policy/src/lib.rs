#![deny(missing_docs)]

//! # dmk-policy — Verification Rule Engine
//!
//! Evaluates a named verification program's ordered rule list against a bag
//! of presented credentials, producing a per-rule diagnostic report and an
//! overall access decision.
//!
//! ## Architecture
//!
//! - [`RuleKind`]: the closed set of rule kinds, each carrying its own
//!   parameters. Adding a kind is a compile error until every evaluation
//!   path is updated — matches on `RuleKind` are exhaustive.
//! - [`VerificationProgram`] / [`ProgramRegistry`]: immutable configuration,
//!   loaded once, looked up by id.
//! - [`RuleEngine`]: stateless evaluator. Purely a function of (program
//!   configuration, store contents, input credentials) at call time — safely
//!   concurrent, trivially testable.
//!
//! A revoked credential never satisfies any rule: the engine consults both
//! the credential's own flag and the injected [`CredentialStore`], so a
//! revocation committed after issuance is honored with no staleness window.
//!
//! [`CredentialStore`]: dmk_cred::CredentialStore

pub mod engine;
pub mod error;
pub mod program;
pub mod rule;

pub use engine::{ComplianceStatus, RuleEngine, RuleOutcome, VerificationReport};
pub use error::PolicyError;
pub use program::{ProgramRegistry, VerificationProgram};
pub use rule::{RuleKind, VerificationRule};
