//! # Concurrent Access
//!
//! Adjudication is a check-then-set and id allocation is a read-increment;
//! both must stay correct when callers race on a shared registry.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use threat_registry::{ReportThreatRequest, ThreatRegistryApi, ThreatStatus, Verdict};
    use tracing::info;

    const TASKS: usize = 32;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reports_get_unique_ids() {
        let (registry, _) = registry();

        let handles: Vec<_> = (0..TASKS)
            .map(|i| {
                let registry = Arc::clone(&registry);
                tokio::task::spawn_blocking(move || {
                    registry
                        .report_threat(ReportThreatRequest::new(
                            REPORTER,
                            TARGET,
                            format!("concurrent #{i}"),
                            i as i64,
                        ))
                        .unwrap()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().value());
        }

        let expected: HashSet<u64> = (1..=TASKS as u64).collect();
        assert_eq!(ids, expected);
        assert_eq!(registry.threat_count(), TASKS);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_racing_validators_settle_once() {
        let (registry, log) = registry();
        let admin = identity(ADMIN);
        let validators: Vec<_> = (0..TASKS).map(|i| identity(&format!("V{i}"))).collect();
        for validator in &validators {
            registry.add_validator(&admin, validator.clone()).unwrap();
        }
        let threat_id = report(&registry, "Contended finding", 5);
        log.drain();

        let handles: Vec<_> = validators
            .into_iter()
            .enumerate()
            .map(|(i, validator)| {
                let registry = Arc::clone(&registry);
                let verdict = Verdict::from(i % 2 == 0);
                tokio::task::spawn_blocking(move || {
                    registry.validate_threat(&validator, threat_id, verdict)
                })
            })
            .collect();

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(true) => successes += 1,
                Err(e) if e.code() == 409 => conflicts += 1,
                other => panic!("Unexpected adjudication outcome: {:?}", other),
            }
        }
        info!(successes, conflicts, "race settled");

        assert_eq!(successes, 1);
        assert_eq!(conflicts, TASKS - 1);

        let status = registry.get_threat(threat_id).unwrap().status;
        assert_ne!(status, ThreatStatus::Pending);

        let reporter = identity(REPORTER);
        assert_eq!(
            registry.reputation_of(&reporter) + registry.slash_count_of(&reporter),
            1
        );
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_independent_registries_do_not_share_state() {
        let (first, _) = registry_with_validator();
        let (second, _) = registry();

        let threat_id = report(&first, "only in first", 1);
        first
            .validate_threat(&identity(VALIDATOR), threat_id, Verdict::Valid)
            .unwrap();

        assert_eq!(second.threat_count(), 0);
        assert!(second.get_threat(threat_id).is_err());
        assert!(!second.is_validator(&identity(VALIDATOR)));
        assert_eq!(second.reputation_of(&identity(REPORTER)), 0);
        assert_eq!(report(&second, "first in second", 1), threat_id);
    }
}
