//! Driving Ports (API - Inbound)
//!
//! The full call surface of the registry. Any transport binding (RPC,
//! HTTP, contract call) wraps this trait.

use crate::domain::{Identity, Threat, ThreatId, Verdict};
use crate::error::RegistryResult;
use serde::{Deserialize, Serialize};

/// Threat report as received from a caller.
///
/// Every field is optional so that an absent field in a decoded payload
/// surfaces as a 400 from the registry rather than a decode failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportThreatRequest {
    pub reporter: Option<String>,
    pub target: Option<String>,
    pub description: Option<String>,
    pub severity: Option<i64>,
}

impl ReportThreatRequest {
    /// Request with every field present.
    pub fn new(
        reporter: impl Into<String>,
        target: impl Into<String>,
        description: impl Into<String>,
        severity: i64,
    ) -> Self {
        Self {
            reporter: Some(reporter.into()),
            target: Some(target.into()),
            description: Some(description.into()),
            severity: Some(severity),
        }
    }
}

/// Primary Threat Registry API
///
/// Every operation is atomic: it either fails without touching state or
/// applies all of its effects.
pub trait ThreatRegistryApi: Send + Sync {
    /// File a new pending threat and return its id.
    ///
    /// # Errors
    /// * 400 if reporter, target or description is missing or empty, or
    ///   severity is missing
    fn report_threat(&self, request: ReportThreatRequest) -> RegistryResult<ThreatId>;

    /// Snapshot of a threat.
    ///
    /// # Errors
    /// * 404 if the id was never allocated
    fn get_threat(&self, id: ThreatId) -> RegistryResult<Threat>;

    /// Settle a pending threat.
    ///
    /// # Errors
    /// * 403 if `validator` is not in the validator set
    /// * 404 if the threat does not exist
    /// * 409 if the threat is no longer pending
    fn validate_threat(
        &self,
        validator: &Identity,
        id: ThreatId,
        verdict: Verdict,
    ) -> RegistryResult<bool>;

    /// Grant the validator role. Admin only, idempotent.
    fn add_validator(&self, caller: &Identity, validator: Identity) -> RegistryResult<bool>;

    /// Revoke the validator role. Admin only, idempotent.
    fn remove_validator(&self, caller: &Identity, validator: &Identity) -> RegistryResult<bool>;

    /// Hand the admin role to `new_admin`. Admin only.
    fn transfer_admin(&self, caller: &Identity, new_admin: Identity) -> RegistryResult<bool>;

    /// Current admin identity.
    fn admin(&self) -> Identity;

    /// True if `identity` may adjudicate.
    fn is_validator(&self, identity: &Identity) -> bool;

    /// Sorted snapshot of the validator set.
    fn validators(&self) -> Vec<Identity>;

    /// Number of validated reports filed by `reporter`.
    fn reputation_of(&self, reporter: &Identity) -> u64;

    /// Number of rejected reports filed by `reporter`.
    fn slash_count_of(&self, reporter: &Identity) -> u64;

    /// Number of threats ever reported.
    fn threat_count(&self) -> usize;
}
