//! # Verification Rules
//!
//! The closed set of rule kinds and the per-rule satisfaction predicate.
//!
//! Each kind names the credential type it expects and, where parameterized,
//! the claim threshold the credential must meet. Threshold kinds require
//! the claim to be present: a bare `age-verification` credential does not
//! satisfy an age check with a minimum — the attested value is the point.

use serde::{Deserialize, Serialize};

use dmk_cred::Credential;

/// The closed set of verification rule kinds.
///
/// Every `match` on this enum is exhaustive; introducing a new kind is a
/// compile error until all evaluation paths handle it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RuleKind {
    /// Subject is at least `min_age` years old.
    AgeCheck {
        /// Minimum age in years.
        min_age: u32,
    },
    /// Subject has passed a proof-of-humanity check.
    HumanityCheck,
    /// Subject's trust score meets a floor.
    TrustScoreThreshold {
        /// Minimum acceptable trust score.
        min_score: i64,
    },
    /// Subject has completed KYC.
    KycStatus,
    /// Subject's attested balance meets a floor, in whole tokens.
    BalanceThreshold {
        /// Minimum balance in whole tokens.
        min_balance: u64,
    },
    /// Subject is an accredited investor.
    AccreditedInvestor,
}

impl RuleKind {
    /// The kebab-case name of this kind, used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AgeCheck { .. } => "age-check",
            Self::HumanityCheck => "humanity-check",
            Self::TrustScoreThreshold { .. } => "trust-score-threshold",
            Self::KycStatus => "kyc-status",
            Self::BalanceThreshold { .. } => "balance-threshold",
            Self::AccreditedInvestor => "accredited-investor",
        }
    }

    /// The credential type this kind expects to be presented.
    pub fn credential_type(&self) -> &'static str {
        match self {
            Self::AgeCheck { .. } => "age-verification",
            Self::HumanityCheck => "human-verification",
            Self::TrustScoreThreshold { .. } => "trust-score",
            Self::KycStatus => "kyc-status",
            Self::BalanceThreshold { .. } => "balance-attestation",
            Self::AccreditedInvestor => "accredited-investor",
        }
    }

    /// Whether a single (non-revoked) credential satisfies this rule.
    ///
    /// The credential's type must match [`credential_type`], and threshold
    /// kinds additionally require the parameterized claim to be present and
    /// meet the bound. Revocation is the engine's concern — callers filter
    /// revoked credentials before asking.
    ///
    /// [`credential_type`]: RuleKind::credential_type
    pub fn satisfied_by(&self, credential: &Credential) -> bool {
        if credential.credential_type != self.credential_type() {
            return false;
        }
        match self {
            Self::AgeCheck { min_age } => credential
                .claim("age")
                .and_then(|v| v.as_u64())
                .is_some_and(|age| age >= u64::from(*min_age)),
            Self::TrustScoreThreshold { min_score } => credential
                .claim("trustScore")
                .and_then(|v| v.as_i64())
                .is_some_and(|score| score >= *min_score),
            Self::BalanceThreshold { min_balance } => credential
                .claim("balance")
                .and_then(|v| v.as_u64())
                .is_some_and(|balance| balance >= *min_balance),
            Self::HumanityCheck | Self::KycStatus | Self::AccreditedInvestor => true,
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single rule within a verification program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRule {
    /// The rule kind with its parameters.
    #[serde(flatten)]
    pub kind: RuleKind,
    /// Whether an unmet rule fails the program. Advisory rules
    /// (`required = false`) are reported but never deny access.
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl VerificationRule {
    /// A required rule of the given kind.
    pub fn required(kind: RuleKind) -> Self {
        Self {
            kind,
            required: true,
        }
    }

    /// An advisory rule of the given kind.
    pub fn advisory(kind: RuleKind) -> Self {
        Self {
            kind,
            required: false,
        }
    }
}
