//! Threat Registry Service - Core business logic
//!
//! All state lives behind one lock. Every operation runs its checks and
//! mutations under a single guard, so adjudication's check-then-set and id
//! allocation cannot race. Events are published after the guard is
//! released, so sinks may read the registry back.

use crate::config::{ConfigError, RegistryConfig};
use crate::domain::{
    invariant_admin_only, invariant_required_text, invariant_sequential_id,
    invariant_validator_only, CounterLedger, Identity, Threat, ThreatId, ThreatParams,
    Verdict,
};
use crate::error::{RegistryError, RegistryResult};
use crate::events::RegistryEvent;
use crate::ports::inbound::{ReportThreatRequest, ThreatRegistryApi};
use crate::ports::outbound::RegistryEventSink;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Internal registry state
struct RegistryState {
    /// Threats by id, never removed
    threats: HashMap<ThreatId, Threat>,
    /// Validated-report counts per reporter
    reputation: CounterLedger,
    /// Rejected-report counts per reporter
    slashed: CounterLedger,
    /// Identities allowed to adjudicate
    validators: HashSet<Identity>,
    /// Current admin
    admin: Identity,
    /// Next id to allocate
    next_threat_id: ThreatId,
}

impl RegistryState {
    fn new(admin: Identity) -> Self {
        Self {
            threats: HashMap::new(),
            reputation: CounterLedger::new(),
            slashed: CounterLedger::new(),
            validators: HashSet::new(),
            admin,
            next_threat_id: ThreatId::FIRST,
        }
    }

    /// Most recently allocated id, if any.
    fn last_allocated(&self) -> Option<ThreatId> {
        match self.next_threat_id.value() {
            1 => None,
            next => Some(ThreatId::new(next - 1)),
        }
    }

    fn allocate_id(&mut self) -> ThreatId {
        let id = self.next_threat_id;
        self.next_threat_id = id.next();
        id
    }
}

/// Threat Registry service implementation
pub struct ThreatRegistryService<E>
where
    E: RegistryEventSink,
{
    config: RegistryConfig,
    state: Arc<RwLock<RegistryState>>,
    events: Arc<E>,
}

impl<E> ThreatRegistryService<E>
where
    E: RegistryEventSink,
{
    /// Create a registry bootstrapped with `config.initial_admin`.
    ///
    /// The config is taken as-is; use [`Self::try_new`] to reject an empty
    /// bootstrap admin.
    pub fn new(config: RegistryConfig, events: Arc<E>) -> Self {
        info!(
            admin = %config.initial_admin,
            "[threat-registry] Registry initialized"
        );
        let state = RegistryState::new(config.initial_admin.clone());
        Self {
            config,
            state: Arc::new(RwLock::new(state)),
            events,
        }
    }

    /// Create a registry after validating `config`.
    pub fn try_new(config: RegistryConfig, events: Arc<E>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, events))
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Event sink this registry publishes to.
    pub fn event_sink(&self) -> Arc<E> {
        Arc::clone(&self.events)
    }

    fn params_from_request(request: ReportThreatRequest) -> RegistryResult<ThreatParams> {
        let reporter = invariant_required_text("reporter", request.reporter)?;
        let target = invariant_required_text("target", request.target)?;
        let description = invariant_required_text("description", request.description)?;
        let severity = request
            .severity
            .ok_or(RegistryError::MissingField { field: "severity" })?;

        Ok(ThreatParams {
            reporter: Identity::from(reporter),
            target: Identity::from(target),
            description,
            severity,
        })
    }

    fn check_admin(state: &RegistryState, caller: &Identity) -> RegistryResult<()> {
        invariant_admin_only(caller, &state.admin).inspect_err(|_| {
            warn!(caller = %caller, "[threat-registry] Rejected admin action from non-admin");
        })
    }
}

impl<E> ThreatRegistryApi for ThreatRegistryService<E>
where
    E: RegistryEventSink,
{
    fn report_threat(&self, request: ReportThreatRequest) -> RegistryResult<ThreatId> {
        let params = Self::params_from_request(request).inspect_err(|e| {
            debug!("[threat-registry] Report rejected: {}", e);
        })?;

        let mut state = self.state.write();
        let previous = state.last_allocated();
        let id = state.allocate_id();
        debug_assert!(invariant_sequential_id(previous, id));

        let threat = Threat::new(id, params);
        let event = RegistryEvent::ThreatReported {
            id,
            reporter: threat.reporter.clone(),
            target: threat.target.clone(),
            severity: threat.severity,
        };
        info!(
            threat_id = %id,
            reporter = %threat.reporter,
            severity = threat.severity,
            "[threat-registry] Threat reported"
        );
        state.threats.insert(id, threat);
        drop(state);

        self.events.publish(event);
        Ok(id)
    }

    fn get_threat(&self, id: ThreatId) -> RegistryResult<Threat> {
        debug!(threat_id = %id, "[threat-registry] Threat lookup");
        self.state
            .read()
            .threats
            .get(&id)
            .cloned()
            .ok_or(RegistryError::ThreatNotFound { id })
    }

    fn validate_threat(
        &self,
        validator: &Identity,
        id: ThreatId,
        verdict: Verdict,
    ) -> RegistryResult<bool> {
        let mut state = self.state.write();

        invariant_validator_only(validator, &state.validators).inspect_err(|_| {
            warn!(
                caller = %validator,
                threat_id = %id,
                "[threat-registry] Rejected adjudication from non-validator"
            );
        })?;

        let threat = state
            .threats
            .get_mut(&id)
            .ok_or(RegistryError::ThreatNotFound { id })?;

        threat.ensure_pending().inspect_err(|_| {
            warn!(
                threat_id = %id,
                "[threat-registry] Threat already adjudicated"
            );
        })?;

        let status = threat.adjudicate(verdict)?;
        let reporter = threat.reporter.clone();

        let reporter_count = match verdict {
            Verdict::Valid => state.reputation.increment(&reporter),
            Verdict::Invalid => state.slashed.increment(&reporter),
        };
        drop(state);

        info!(
            threat_id = %id,
            validator = %validator,
            reporter = %reporter,
            status = %status,
            "[threat-registry] Threat adjudicated"
        );

        self.events.publish(RegistryEvent::ThreatAdjudicated {
            id,
            validator: validator.clone(),
            reporter,
            status,
            reporter_count,
        });
        Ok(true)
    }

    fn add_validator(&self, caller: &Identity, validator: Identity) -> RegistryResult<bool> {
        let mut state = self.state.write();
        Self::check_admin(&state, caller)?;

        let changed = state.validators.insert(validator.clone());
        drop(state);
        info!(
            validator = %validator,
            changed,
            "[threat-registry] Validator added"
        );

        self.events
            .publish(RegistryEvent::ValidatorAdded { validator, changed });
        Ok(true)
    }

    fn remove_validator(&self, caller: &Identity, validator: &Identity) -> RegistryResult<bool> {
        let mut state = self.state.write();
        Self::check_admin(&state, caller)?;

        let changed = state.validators.remove(validator);
        drop(state);
        info!(
            validator = %validator,
            changed,
            "[threat-registry] Validator removed"
        );

        self.events.publish(RegistryEvent::ValidatorRemoved {
            validator: validator.clone(),
            changed,
        });
        Ok(true)
    }

    fn transfer_admin(&self, caller: &Identity, new_admin: Identity) -> RegistryResult<bool> {
        let mut state = self.state.write();
        Self::check_admin(&state, caller)?;

        let previous = std::mem::replace(&mut state.admin, new_admin.clone());
        drop(state);
        info!(
            previous = %previous,
            new_admin = %new_admin,
            "[threat-registry] Admin transferred"
        );

        self.events
            .publish(RegistryEvent::AdminTransferred { previous, new_admin });
        Ok(true)
    }

    fn admin(&self) -> Identity {
        self.state.read().admin.clone()
    }

    fn is_validator(&self, identity: &Identity) -> bool {
        self.state.read().validators.contains(identity)
    }

    fn validators(&self) -> Vec<Identity> {
        let mut validators: Vec<Identity> =
            self.state.read().validators.iter().cloned().collect();
        validators.sort();
        validators
    }

    fn reputation_of(&self, reporter: &Identity) -> u64 {
        self.state.read().reputation.get(reporter)
    }

    fn slash_count_of(&self, reporter: &Identity) -> u64 {
        self.state.read().slashed.get(reporter)
    }

    fn threat_count(&self) -> usize {
        self.state.read().threats.len()
    }
}
