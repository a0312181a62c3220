//! # Domain Invariants
//!
//! Business rules for the Threat Registry. All checks are pure and run
//! before any state is touched.

use super::value_objects::{Identity, ThreatId};
use crate::error::{RegistryError, RegistryResult, Role};
use std::collections::HashSet;

/// Invariant: required report text is present. Returns the text.
///
/// Only emptiness is rejected; whitespace and format are not inspected.
pub fn invariant_required_text(
    field: &'static str,
    value: Option<String>,
) -> RegistryResult<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(RegistryError::MissingField { field }),
    }
}

/// Invariant: only the current admin manages roles.
pub fn invariant_admin_only(caller: &Identity, admin: &Identity) -> RegistryResult<()> {
    if caller != admin {
        return Err(RegistryError::Unauthorized {
            caller: caller.clone(),
            role: Role::Admin,
        });
    }
    Ok(())
}

/// Invariant: only validator set members adjudicate.
pub fn invariant_validator_only(
    caller: &Identity,
    validators: &HashSet<Identity>,
) -> RegistryResult<()> {
    if !validators.contains(caller) {
        return Err(RegistryError::Unauthorized {
            caller: caller.clone(),
            role: Role::Validator,
        });
    }
    Ok(())
}

/// Invariant: ids are allocated strictly sequentially from 1.
pub fn invariant_sequential_id(previous: Option<ThreatId>, allocated: ThreatId) -> bool {
    match previous {
        None => allocated == ThreatId::FIRST,
        Some(prev) => allocated.value() == prev.value() + 1,
    }
}
