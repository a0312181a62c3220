//! # Domain Entities
//!
//! The threat record and its lifecycle.

use super::value_objects::{Identity, ThreatId, ThreatStatus, Verdict};
use super::DEFAULT_REPORT_STAKE;
use crate::error::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

/// A reported security threat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    /// Unique sequential identifier.
    pub id: ThreatId,
    /// Identity that filed the report.
    pub reporter: Identity,
    /// Identity the threat concerns.
    pub target: Identity,
    /// Free-form description, never empty.
    pub description: String,
    /// Reporter-assigned severity. Range is not constrained.
    pub severity: i64,
    /// Current lifecycle status.
    pub status: ThreatStatus,
    /// Stake recorded at report time. Always [`DEFAULT_REPORT_STAKE`].
    pub stake: u64,
}

/// Validated inputs for a new threat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreatParams {
    /// Reporter identity.
    pub reporter: Identity,
    /// Target identity.
    pub target: Identity,
    /// Description.
    pub description: String,
    /// Severity.
    pub severity: i64,
}

impl Threat {
    /// Create a pending threat carrying the fixed report stake.
    pub fn new(id: ThreatId, params: ThreatParams) -> Self {
        Self {
            id,
            reporter: params.reporter,
            target: params.target,
            description: params.description,
            severity: params.severity,
            status: ThreatStatus::Pending,
            stake: DEFAULT_REPORT_STAKE,
        }
    }

    /// Fail with a conflict unless the threat is still pending.
    pub fn ensure_pending(&self) -> RegistryResult<()> {
        if !self.status.is_pending() {
            return Err(RegistryError::AlreadyAdjudicated {
                id: self.id,
                status: self.status,
            });
        }
        Ok(())
    }

    /// Apply a verdict, moving out of pending exactly once.
    pub fn adjudicate(&mut self, verdict: Verdict) -> RegistryResult<ThreatStatus> {
        let next = verdict.resulting_status();
        if !self.status.can_transition_to(next) {
            return Err(RegistryError::AlreadyAdjudicated {
                id: self.id,
                status: self.status,
            });
        }
        self.status = next;
        Ok(next)
    }
}
