#![deny(missing_docs)]

//! # dmk-cred — Credential Store & Selective Disclosure
//!
//! Owns issued credential records and their revocation lifecycle, and
//! derives partial disclosures from a credential's claims.
//!
//! ## Architecture
//!
//! - [`Credential`]: the issued record — id, type, issuer, claims map,
//!   one-way `revoked` flag.
//! - [`CredentialStore`]: the injected storage seam. The rule engine and
//!   revocation endpoints talk to this trait, never to a concrete map, so
//!   the backing implementation is swappable without touching callers.
//! - [`InMemoryCredentialStore`]: the shipped implementation, a `DashMap`
//!   keyed by credential id. Revocation runs under the entry's write lock,
//!   so it is linearizable with subsequent `get` calls.
//! - [`disclosure`]: splits a claim set into revealed/hidden halves and
//!   binds both to a commitment over the full original claim set.

pub mod credential;
pub mod disclosure;
pub mod error;
pub mod store;

pub use credential::{Credential, RevocationRecord};
pub use disclosure::{
    dataset_preview, disclose, seller_preview, verify_partial, DisclosureProof, FieldCommitment,
    PartialCredential,
};
pub use error::{CredentialError, DisclosureError};
pub use store::{
    CredentialStore, CredentialStanding, InMemoryCredentialStore, RevocationReceipt,
    RevocationStatus, UnknownCredentialPolicy,
};
