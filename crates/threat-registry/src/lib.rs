//! # Threat Registry
//!
//! Role-gated registry for reporting and adjudicating security threats.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Anyone may report a threat; it enters the registry as `pending`
//! - Validators settle each pending threat exactly once
//! - Validated reports earn the reporter reputation, rejected reports slash it
//! - A single admin manages the validator set and may hand over the role
//!
//! ## Threat Lifecycle
//!
//! ```text
//! report_threat ──→ [PENDING] ──validate(valid)───→ [VALIDATED]  reputation += 1
//!                       │
//!                       └──────validate(invalid)──→ [REJECTED]   slashed += 1
//! ```
//!
//! ## Access Control
//!
//! | Operation | Required role | Failure |
//! |-----------|---------------|---------|
//! | report_threat | none | 400 |
//! | get_threat | none | 404 |
//! | validate_threat | validator | 403, 404, 409 |
//! | add_validator | admin | 403 |
//! | remove_validator | admin | 403 |
//! | transfer_admin | admin | 403 |
//!
//! ## Module Structure
//!
//! ```text
//! threat-registry/
//! ├── domain/          # Threat, ThreatStatus, Identity, CounterLedger, invariants
//! ├── ports/           # ThreatRegistryApi + RegistryEventSink
//! ├── adapters/        # In-memory event log, tracing event sink
//! ├── events.rs        # Outgoing registry events
//! ├── config.rs        # Bootstrap configuration
//! └── service.rs       # ThreatRegistryService
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use threat_registry::{
//!     Identity, RegistryConfig, ReportThreatRequest, ThreatRegistryApi,
//!     ThreatRegistryService, ThreatStatus, TracingEventSink, Verdict,
//! };
//!
//! let admin = Identity::from("admin");
//! let registry = ThreatRegistryService::new(
//!     RegistryConfig::new(admin.clone()),
//!     Arc::new(TracingEventSink),
//! );
//!
//! let id = registry
//!     .report_threat(ReportThreatRequest::new("R", "T", "SQLi", 3))
//!     .unwrap();
//! registry.add_validator(&admin, Identity::from("V")).unwrap();
//! registry.validate_threat(&Identity::from("V"), id, Verdict::Valid).unwrap();
//!
//! assert_eq!(registry.get_threat(id).unwrap().status, ThreatStatus::Validated);
//! assert_eq!(registry.reputation_of(&Identity::from("R")), 1);
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryEventLog, TracingEventSink};
pub use config::{ConfigError, RegistryConfig};
pub use domain::{
    CounterLedger, Identity, Threat, ThreatId, ThreatParams, ThreatStatus, Verdict,
    DEFAULT_REPORT_STAKE,
};
pub use error::{ErrorCode, RegistryError, RegistryResult, Role};
pub use events::RegistryEvent;
pub use ports::{RegistryEventSink, ReportThreatRequest, ThreatRegistryApi};
pub use service::ThreatRegistryService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
