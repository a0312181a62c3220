//! Driven Ports (SPI - Outbound Dependencies)

use crate::events::RegistryEvent;

/// Destination for registry events.
///
/// Called after the state change is committed and the registry lock is
/// released, so publishing cannot fail the operation that produced the
/// event and a sink may query the registry. Events from concurrent callers
/// can arrive in a different order than their commits.
pub trait RegistryEventSink: Send + Sync {
    /// Deliver one event.
    fn publish(&self, event: RegistryEvent);
}
