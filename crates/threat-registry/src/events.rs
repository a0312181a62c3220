//! Outgoing events for the Threat Registry
//!
//! One event is published per successful mutation, after the state change
//! is committed. Failed calls publish nothing.

use crate::domain::{Identity, ThreatId, ThreatStatus};
use serde::{Deserialize, Serialize};

/// Registry event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A new threat entered the pending state
    ThreatReported {
        id: ThreatId,
        reporter: Identity,
        target: Identity,
        severity: i64,
    },
    /// A validator settled a pending threat
    ThreatAdjudicated {
        id: ThreatId,
        validator: Identity,
        reporter: Identity,
        status: ThreatStatus,
        /// Reporter's reputation (validated) or slash count (rejected) after the update
        reporter_count: u64,
    },
    /// Admin granted the validator role
    ValidatorAdded {
        validator: Identity,
        /// False when the identity was already a validator
        changed: bool,
    },
    /// Admin revoked the validator role
    ValidatorRemoved {
        validator: Identity,
        /// False when the identity was not a validator
        changed: bool,
    },
    /// Admin handed the role to a new identity
    AdminTransferred {
        previous: Identity,
        new_admin: Identity,
    },
}

impl RegistryEvent {
    /// Short event name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ThreatReported { .. } => "threat_reported",
            Self::ThreatAdjudicated { .. } => "threat_adjudicated",
            Self::ValidatorAdded { .. } => "validator_added",
            Self::ValidatorRemoved { .. } => "validator_removed",
            Self::AdminTransferred { .. } => "admin_transferred",
        }
    }
}
