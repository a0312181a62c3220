//! # Counter Ledger
//!
//! Per-identity monotonic counters backing the reputation and slash books.
//! Entries are created lazily at zero on first increment and never decrease.

use super::value_objects::Identity;
use std::collections::HashMap;

/// Identity → count mapping with get-or-insert-zero increments.
#[derive(Clone, Debug, Default)]
pub struct CounterLedger {
    counts: HashMap<Identity, u64>,
}

impl CounterLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for `identity`, returning the new value.
    pub fn increment(&mut self, identity: &Identity) -> u64 {
        let count = self.counts.entry(identity.clone()).or_insert(0);
        *count += 1;
        *count
    }

    /// Current count, zero for identities never incremented.
    pub fn get(&self, identity: &Identity) -> u64 {
        self.counts.get(identity).copied().unwrap_or(0)
    }
}
