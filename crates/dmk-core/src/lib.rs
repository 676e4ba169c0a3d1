#![deny(missing_docs)]

//! # dmk-core — Foundational Types for the DataMark Engine
//!
//! This crate defines the foundational types that every other crate in the
//! workspace depends on. It has no internal crate dependencies — only `serde`,
//! `serde_json`, `thiserror`, `chrono`, `uuid`, and `sha2` from the external
//! ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`ProgramId`] where a [`CredentialId`]
//!    is expected.
//!
//! 2. **[`CanonicalBytes`] is the sole path to digest computation.** Every
//!    commitment and opaque proof in the workspace flows through
//!    `CanonicalBytes::new()`, which sorts object keys, normalizes datetimes,
//!    and rejects floats.
//!
//! 3. **Integer money.** Prices and balances are [`TokenAmount`] values in
//!    milli-token units. No `f64` ever reaches a scoring formula or a digest.
//!
//! 4. **Structured errors with `thiserror`.** No `Box<dyn Error>`, no
//!    `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;
pub mod units;

// Re-export primary types at crate root for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest, DigestAlgorithm};
pub use error::{CanonicalizationError, ValidationError};
pub use identity::{Address, CredentialId, ProgramId};
pub use temporal::Timestamp;
pub use units::TokenAmount;
