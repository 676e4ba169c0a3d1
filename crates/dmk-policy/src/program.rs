//! # Verification Programs
//!
//! Named, ordered rule lists that gate marketplace access. Programs are
//! immutable configuration: the registry is built once and only read
//! afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use dmk_core::ProgramId;

use crate::rule::{RuleKind, VerificationRule};

/// A named verification program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationProgram {
    /// The program's lookup id (e.g. `premium-buyer`).
    pub id: ProgramId,
    /// The human-facing program name.
    pub name: String,
    /// The ordered rule list. Order is significant for the report.
    pub rules: Vec<VerificationRule>,
}

/// An immutable collection of verification programs, looked up by id.
#[derive(Debug, Clone, Default)]
pub struct ProgramRegistry {
    programs: HashMap<ProgramId, VerificationProgram>,
}

impl ProgramRegistry {
    /// Build a registry from explicit programs. A later program with a
    /// duplicate id replaces the earlier one.
    pub fn from_programs(programs: impl IntoIterator<Item = VerificationProgram>) -> Self {
        let programs = programs
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect::<HashMap<_, _>>();
        Self { programs }
    }

    /// The marketplace's built-in programs.
    ///
    /// These mirror the dashboard-configured defaults: premium buyer
    /// access, the verified-seller badge, and institutional access for
    /// high-value datasets.
    pub fn builtin() -> Self {
        let premium_buyer = VerificationProgram {
            id: ProgramId::new("premium-buyer").expect("static id"),
            name: "Premium Buyer Access".to_string(),
            rules: vec![
                VerificationRule::required(RuleKind::AgeCheck { min_age: 18 }),
                VerificationRule::required(RuleKind::HumanityCheck),
                VerificationRule::required(RuleKind::TrustScoreThreshold { min_score: 75 }),
            ],
        };
        let verified_seller = VerificationProgram {
            id: ProgramId::new("verified-seller").expect("static id"),
            name: "Verified Seller Badge".to_string(),
            rules: vec![
                VerificationRule::required(RuleKind::HumanityCheck),
                VerificationRule::advisory(RuleKind::KycStatus),
                VerificationRule::required(RuleKind::TrustScoreThreshold { min_score: 60 }),
            ],
        };
        let institutional_buyer = VerificationProgram {
            id: ProgramId::new("institutional-buyer").expect("static id"),
            name: "Institutional Access".to_string(),
            rules: vec![
                VerificationRule::required(RuleKind::KycStatus),
                VerificationRule::required(RuleKind::AccreditedInvestor),
                VerificationRule::required(RuleKind::BalanceThreshold { min_balance: 100 }),
            ],
        };
        Self::from_programs([premium_buyer, verified_seller, institutional_buyer])
    }

    /// Look up a program by id.
    pub fn get(&self, id: &ProgramId) -> Option<&VerificationProgram> {
        self.programs.get(id)
    }

    /// Number of registered programs.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
