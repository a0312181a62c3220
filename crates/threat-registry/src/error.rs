//! Error types for the Threat Registry
//!
//! Every failure carries a stable numeric code (400/403/404/409) that
//! transport bindings surface verbatim to the caller.

use crate::domain::{Identity, ThreatId, ThreatStatus};
use thiserror::Error;

/// Closed classification of registry failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Missing or empty required input (400).
    Validation,
    /// Caller lacks the required role (403).
    Authorization,
    /// Referenced threat does not exist (404).
    NotFound,
    /// Action invalid in the current state (409).
    Conflict,
}

impl ErrorCode {
    /// Numeric wire code.
    pub fn as_u16(self) -> u16 {
        match self {
            ErrorCode::Validation => 400,
            ErrorCode::Authorization => 403,
            ErrorCode::NotFound => 404,
            ErrorCode::Conflict => 409,
        }
    }
}

/// Role required to perform a gated action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The single registry administrator.
    Admin,
    /// A member of the validator set.
    Validator,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Validator => write!(f, "validator"),
        }
    }
}

/// Threat Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required report field was missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Caller does not hold the role the action requires
    #[error("Unauthorized: {caller} is not {role}")]
    Unauthorized { caller: Identity, role: Role },

    /// No threat with this id was ever reported
    #[error("Threat not found: {id}")]
    ThreatNotFound { id: ThreatId },

    /// Threat has already left the pending state
    #[error("Threat {id} already adjudicated: {status}")]
    AlreadyAdjudicated { id: ThreatId, status: ThreatStatus },
}

impl RegistryError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorCode {
        match self {
            RegistryError::MissingField { .. } => ErrorCode::Validation,
            RegistryError::Unauthorized { .. } => ErrorCode::Authorization,
            RegistryError::ThreatNotFound { .. } => ErrorCode::NotFound,
            RegistryError::AlreadyAdjudicated { .. } => ErrorCode::Conflict,
        }
    }

    /// Numeric wire code.
    pub fn code(&self) -> u16 {
        self.kind().as_u16()
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
