// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-device service visibility overrides.
//
// Admins can hide a service on this device without touching the backend.
// The hidden set is persisted in the kv store as a sorted JSON array of
// identifiers and every change is announced on the event bus so mounted
// views re-reconcile.
//
// Identifier forms accepted in the persisted set:
//   - backend catalog id           (stable, preferred)
//   - normalized service name      (stable, for services not yet on the backend)
//   - `<category_id>_<index>`      (legacy positional form written by old
//                                   builds; honoured on read, never written)

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use shinefiling_core::error::Result;
use shinefiling_store::events::{AppEvent, EventBus};
use shinefiling_store::kv::KvStore;

/// KV key holding the inactive-service identifier set.
pub const INACTIVE_SERVICES_KEY: &str = "shinefiling_inactive_services";

/// Manages the persisted set of locally hidden services.
#[derive(Clone)]
pub struct ServiceManager {
    store: Arc<dyn KvStore>,
    events: EventBus,
}

impl ServiceManager {
    pub fn new(store: Arc<dyn KvStore>, events: EventBus) -> Self {
        Self { store, events }
    }

    /// The persisted inactive-identifier set.
    ///
    /// A missing, unreadable, or corrupt value is logged and treated as
    /// empty, so every service stays visible rather than the storefront
    /// going dark.
    pub fn inactive_services(&self) -> HashSet<String> {
        let raw = match self.store.get(INACTIVE_SERVICES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return HashSet::new(),
            Err(e) => {
                warn!(error = %e, "could not read service overrides");
                return HashSet::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                warn!(error = %e, "service overrides are corrupt, treating as empty");
                HashSet::new()
            }
        }
    }

    /// Flip an identifier's membership in the inactive set and persist.
    ///
    /// Returns `true` when the service is now locally hidden. The set is
    /// written back as a sorted array so equal sets always produce equal
    /// bytes. Listeners are notified after a successful write.
    #[instrument(skip(self))]
    pub fn toggle_service_status(&self, id: &str) -> Result<bool> {
        let mut inactive = self.inactive_services();
        let now_inactive = if inactive.remove(id) {
            false
        } else {
            inactive.insert(id.to_owned());
            true
        };

        let mut ids: Vec<&String> = inactive.iter().collect();
        ids.sort();
        let json = serde_json::to_string(&ids)?;
        self.store.put(INACTIVE_SERVICES_KEY, &json)?;

        info!(id, now_inactive, "service override toggled");
        self.events.emit(AppEvent::ServiceStatusChanged);
        Ok(now_inactive)
    }

    /// Whether `id` is free of a local hide override.
    pub fn is_service_active(&self, id: &str) -> bool {
        !self.inactive_services().contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shinefiling_store::kv::MemoryStore;

    fn manager() -> (ServiceManager, Arc<dyn KvStore>, EventBus) {
        let kv: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let events = EventBus::new();
        (
            ServiceManager::new(Arc::clone(&kv), events.clone()),
            kv,
            events,
        )
    }

    #[test]
    fn empty_store_means_everything_active() {
        let (mgr, _, _) = manager();
        assert!(mgr.inactive_services().is_empty());
        assert!(mgr.is_service_active("64a1"));
    }

    #[test]
    fn toggle_hides_then_shows() {
        let (mgr, _, _) = manager();
        assert!(mgr.toggle_service_status("64a1").expect("toggle on"));
        assert!(!mgr.is_service_active("64a1"));
        assert!(!mgr.toggle_service_status("64a1").expect("toggle off"));
        assert!(mgr.is_service_active("64a1"));
    }

    #[test]
    fn double_toggle_restores_persisted_bytes() {
        let (mgr, kv, _) = manager();
        mgr.toggle_service_status("gstregistration").expect("seed");
        let before = kv
            .get(INACTIVE_SERVICES_KEY)
            .expect("get")
            .expect("present");

        mgr.toggle_service_status("64a1").expect("toggle on");
        mgr.toggle_service_status("64a1").expect("toggle off");

        let after = kv
            .get(INACTIVE_SERVICES_KEY)
            .expect("get")
            .expect("present");
        assert_eq!(before, after);
    }

    #[test]
    fn persisted_form_is_a_sorted_array() {
        let (mgr, kv, _) = manager();
        mgr.toggle_service_status("zz").expect("toggle");
        mgr.toggle_service_status("aa").expect("toggle");
        let raw = kv
            .get(INACTIVE_SERVICES_KEY)
            .expect("get")
            .expect("present");
        assert_eq!(raw, r#"["aa","zz"]"#);
    }

    #[test]
    fn corrupt_overrides_are_treated_as_empty() {
        let (mgr, kv, _) = manager();
        kv.put(INACTIVE_SERVICES_KEY, "{oops").expect("seed corrupt");
        assert!(mgr.inactive_services().is_empty());
        assert!(mgr.is_service_active("anything"));
    }

    #[test]
    fn legacy_positional_ids_survive_a_round_trip() {
        let (mgr, kv, _) = manager();
        kv.put(INACTIVE_SERVICES_KEY, r#"["business_reg_0"]"#)
            .expect("seed legacy store");

        // Hiding another service must not drop the legacy entry.
        mgr.toggle_service_status("64a1").expect("toggle");
        let set = mgr.inactive_services();
        assert!(set.contains("business_reg_0"));
        assert!(set.contains("64a1"));
    }

    #[test]
    fn every_toggle_notifies_listeners() {
        let (mgr, _, events) = manager();
        let mut rx = events.subscribe();
        mgr.toggle_service_status("64a1").expect("toggle on");
        mgr.toggle_service_status("64a1").expect("toggle off");
        assert_eq!(rx.try_recv(), Ok(AppEvent::ServiceStatusChanged));
        assert_eq!(rx.try_recv(), Ok(AppEvent::ServiceStatusChanged));
        assert!(rx.try_recv().is_err());
    }
}
