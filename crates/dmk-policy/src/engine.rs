//! # Rule Engine
//!
//! Stateless evaluation of a verification program against presented
//! credentials. Every rule is evaluated — no short-circuit — so the caller
//! always receives the full diagnostic list; the overall decision is the
//! conjunction of the required rules only.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use dmk_core::ProgramId;
use dmk_cred::{Credential, CredentialStore};

use crate::error::PolicyError;
use crate::program::ProgramRegistry;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// The overall status of a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    /// All required rules were satisfied.
    Compliant,
    /// At least one required rule was unmet.
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

/// The outcome of evaluating a single rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// The rule kind's name (e.g. `"age-check"`).
    pub rule: String,
    /// Whether this rule passed (advisory rules pass even when unmet).
    pub passed: bool,
    /// Human-facing diagnostic for this rule.
    pub message: String,
}

/// The full result of a verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// The evaluated program's id.
    pub program_id: ProgramId,
    /// The evaluated program's name.
    pub program_name: String,
    /// Compliant / Non-Compliant.
    pub status: ComplianceStatus,
    /// Per-rule outcomes in program order.
    pub results: Vec<RuleOutcome>,
    /// Whether access is granted.
    pub granted_access: bool,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Stateless verification engine over an immutable program registry and an
/// injected credential store.
///
/// Holds only shared read-only state; `evaluate` is safe to call
/// concurrently from any number of request handlers.
pub struct RuleEngine {
    registry: ProgramRegistry,
    store: Arc<dyn CredentialStore>,
}

impl RuleEngine {
    /// Create an engine over a registry and a credential store.
    pub fn new(registry: ProgramRegistry, store: Arc<dyn CredentialStore>) -> Self {
        Self { registry, store }
    }

    /// Evaluate a program against presented credentials.
    ///
    /// A credential is usable iff its own `revoked` flag is clear and the
    /// store does not report it revoked — a revocation committed at any
    /// point before this call is honored. Presented credentials unknown to
    /// the store are treated per the store's unknown-id policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::UnknownProgram`] if `program_id` is not
    /// registered.
    pub fn evaluate(
        &self,
        program_id: &ProgramId,
        presented: &[Credential],
    ) -> Result<VerificationReport, PolicyError> {
        let program = self
            .registry
            .get(program_id)
            .ok_or_else(|| PolicyError::UnknownProgram(program_id.clone()))?;

        let usable: Vec<&Credential> = presented
            .iter()
            .filter(|c| !c.revoked && !self.store.is_revoked(&c.id))
            .collect();

        let results: Vec<RuleOutcome> = program
            .rules
            .iter()
            .map(|rule| {
                let satisfied = usable.iter().any(|c| rule.kind.satisfied_by(c));
                let expected = rule.kind.credential_type();
                let (passed, message) = if satisfied {
                    (true, format!("Verified: {expected}"))
                } else if rule.required {
                    (false, format!("Missing required: {expected}"))
                } else {
                    (true, format!("Optional: {expected} not presented"))
                };
                RuleOutcome {
                    rule: rule.kind.name().to_string(),
                    passed,
                    message,
                }
            })
            .collect();

        // Advisory rules always pass, so the conjunction over all outcomes
        // equals the conjunction over required rules.
        let granted_access = results.iter().all(|r| r.passed);
        let status = if granted_access {
            ComplianceStatus::Compliant
        } else {
            ComplianceStatus::NonCompliant
        };

        tracing::debug!(
            program_id = %program_id,
            granted = granted_access,
            presented = presented.len(),
            usable = usable.len(),
            "verification program evaluated"
        );

        Ok(VerificationReport {
            program_id: program_id.clone(),
            program_name: program.name.clone(),
            status,
            results,
            granted_access,
        })
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("programs", &self.registry.len())
            .finish()
    }
}
