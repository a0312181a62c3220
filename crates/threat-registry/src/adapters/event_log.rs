//! Event Sink Adapters
//!
//! Implements `RegistryEventSink` for in-process inspection and for
//! structured logging.

use crate::events::RegistryEvent;
use crate::ports::outbound::RegistryEventSink;
use parking_lot::RwLock;
use tracing::{info, warn};

/// In-memory event log.
///
/// Records every published event in order, for tests and audit views.
#[derive(Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<RegistryEvent>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.read().clone()
    }

    /// Number of events recorded.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Remove and return all recorded events.
    pub fn drain(&self) -> Vec<RegistryEvent> {
        std::mem::take(&mut *self.events.write())
    }
}

impl RegistryEventSink for InMemoryEventLog {
    fn publish(&self, event: RegistryEvent) {
        self.events.write().push(event);
    }
}

/// Logs each event as a JSON line through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEventSink;

impl RegistryEventSink for TracingEventSink {
    fn publish(&self, event: RegistryEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => info!(event = event.name(), "[threat-registry] {}", json),
            Err(e) => warn!(event = event.name(), "[threat-registry] Event encoding failed: {}", e),
        }
    }
}
