//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits.

mod event_log;

pub use event_log::{InMemoryEventLog, TracingEventSink};
