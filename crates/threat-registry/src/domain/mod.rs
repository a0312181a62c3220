//! # Domain Module
//!
//! Core domain types for the Threat Registry.

pub mod entities;
pub mod invariants;
pub mod ledger;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use ledger::CounterLedger;
pub use value_objects::*;

/// Stake recorded on every reported threat.
pub const DEFAULT_REPORT_STAKE: u64 = 100;
