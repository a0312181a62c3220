//! # Domain Value Objects
//!
//! Immutable value types for the Threat Registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, pre-authenticated caller identity (e.g. a wallet address).
///
/// No format is imposed; the registry only compares identities for equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wrap a raw identity string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty identity.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Identity {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for Identity {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sequential threat identifier. The first allocated id is 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreatId(u64);

impl ThreatId {
    /// First id handed out by a fresh registry.
    pub const FIRST: ThreatId = ThreatId(1);

    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id allocated after this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ThreatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a threat.
///
/// ```text
/// [PENDING] ──valid──→ [VALIDATED]
///     │
///     └────invalid───→ [REJECTED]
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatStatus {
    /// Reported, awaiting a validator verdict.
    #[default]
    Pending,
    /// Confirmed by a validator.
    Validated,
    /// Rejected by a validator.
    Rejected,
}

impl ThreatStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: ThreatStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Validated) | (Self::Pending, Self::Rejected)
        )
    }

    /// True while awaiting adjudication.
    pub fn is_pending(&self) -> bool {
        *self == Self::Pending
    }

    /// Lowercase name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Validated => "validated",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ThreatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validator's decision on a pending threat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The report is genuine; the reporter earns reputation.
    Valid,
    /// The report is bogus; the reporter is slashed.
    Invalid,
}

impl Verdict {
    /// Status a pending threat moves to under this verdict.
    pub fn resulting_status(self) -> ThreatStatus {
        match self {
            Verdict::Valid => ThreatStatus::Validated,
            Verdict::Invalid => ThreatStatus::Rejected,
        }
    }
}

impl From<bool> for Verdict {
    fn from(verdict: bool) -> Self {
        if verdict {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }
}
