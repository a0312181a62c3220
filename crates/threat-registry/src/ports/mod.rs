//! Ports layer (Hexagonal Architecture)

pub mod inbound;
pub mod outbound;

pub use inbound::{ReportThreatRequest, ThreatRegistryApi};
pub use outbound::RegistryEventSink;
