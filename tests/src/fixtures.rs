//! Shared test fixtures.

use std::sync::{Arc, Once};
use threat_registry::{
    Identity, InMemoryEventLog, RegistryConfig, ReportThreatRequest, ThreatId,
    ThreatRegistryApi, ThreatRegistryService,
};
use tracing_subscriber::EnvFilter;

pub const ADMIN: &str = "ST1ADMIN0000000000000000000000000000000000";
pub const NEW_ADMIN: &str = "ST1NEWADMIN0000000000000000000000000000000";
pub const NOT_ADMIN: &str = "ST1NOTADMIN00000000000000000000000000000000";
pub const REPORTER: &str = "ST1REPORTER00000000000000000000000000000000";
pub const TARGET: &str = "ST1TARGET0000000000000000000000000000000000";
pub const VALIDATOR: &str = "ST1VALIDATOR0000000000000000000000000000000";
pub const NOT_VALIDATOR: &str = "ST1NOTVALIDATOR0000000000000000000000000000";

pub type TestRegistry = ThreatRegistryService<InMemoryEventLog>;

static TRACING: Once = Once::new();

/// Install a test subscriber once per process. Honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

pub fn identity(raw: &str) -> Identity {
    Identity::from(raw)
}

/// Fresh registry with [`ADMIN`] as bootstrap admin.
pub fn registry() -> (Arc<TestRegistry>, Arc<InMemoryEventLog>) {
    init_tracing();
    let log = Arc::new(InMemoryEventLog::new());
    let registry = ThreatRegistryService::try_new(RegistryConfig::new(ADMIN), Arc::clone(&log))
        .expect("non-empty bootstrap admin");
    (Arc::new(registry), log)
}

/// Fresh registry with [`VALIDATOR`] already in the validator set.
pub fn registry_with_validator() -> (Arc<TestRegistry>, Arc<InMemoryEventLog>) {
    let (registry, log) = registry();
    registry
        .add_validator(&identity(ADMIN), identity(VALIDATOR))
        .expect("admin adds validator");
    (registry, log)
}

/// Report a well-formed threat from [`REPORTER`] against [`TARGET`].
pub fn report(registry: &TestRegistry, description: &str, severity: i64) -> ThreatId {
    registry
        .report_threat(ReportThreatRequest::new(
            REPORTER,
            TARGET,
            description,
            severity,
        ))
        .expect("well-formed report")
}
