//! # Token Amounts
//!
//! Integer money for the engine. Listing prices, sale prices, and balance
//! thresholds are [`TokenAmount`] values in milli-token units (one token =
//! 1000 milli). Floats never enter a scoring formula or a digest path.

use serde::{Deserialize, Serialize};

/// Milli-token units per whole token.
pub const MILLI_PER_TOKEN: u64 = 1000;

/// An amount of marketplace tokens, stored in milli-token units.
///
/// `TokenAmount::from_milli(100)` is 0.1 tokens. Arithmetic on amounts is
/// plain integer arithmetic; rendering as a decimal string is a
/// presentation concern handled by `Display`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TokenAmount(u64);

impl TokenAmount {
    /// An amount of zero tokens.
    pub const ZERO: TokenAmount = TokenAmount(0);

    /// Create an amount from milli-token units.
    pub fn from_milli(milli: u64) -> Self {
        Self(milli)
    }

    /// Create an amount from whole tokens.
    pub fn from_whole(tokens: u64) -> Self {
        Self(tokens * MILLI_PER_TOKEN)
    }

    /// The amount in milli-token units.
    pub fn as_milli(&self) -> u64 {
        self.0
    }

    /// The whole-token part of the amount (truncating).
    pub fn whole_tokens(&self) -> u64 {
        self.0 / MILLI_PER_TOKEN
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:03}",
            self.0 / MILLI_PER_TOKEN,
            self.0 % MILLI_PER_TOKEN
        )
    }
}
