// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Persisted session: the signed-in user and the UI theme.
//
// Both live in the kv store as JSON under well-known keys. A corrupt value
// is logged and treated as absent; it must never take the app down.

use std::sync::Arc;

use tracing::{info, warn};

use shinefiling_core::error::Result;
use shinefiling_core::types::{SessionUser, Theme};

use crate::events::{AppEvent, EventBus};
use crate::kv::KvStore;

/// KV key holding the signed-in user as JSON.
pub const USER_KEY: &str = "user";
/// KV key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Session persistence over the kv store.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KvStore>,
    events: EventBus,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KvStore>, events: EventBus) -> Self {
        Self { store, events }
    }

    /// The persisted user, or `None` when signed out or the value is
    /// unreadable.
    pub fn current_user(&self) -> Option<SessionUser> {
        let raw = match self.store.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "could not read persisted session");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "persisted session is corrupt, treating as signed out");
                None
            }
        }
    }

    /// Persist the user after a successful sign-in and notify listeners.
    pub fn save_user(&self, user: &SessionUser) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.store.put(USER_KEY, &json)?;
        info!(email = %user.email, "session persisted");
        self.events.emit(AppEvent::UserUpdated);
        Ok(())
    }

    /// Drop the persisted user (sign-out) and notify listeners.
    pub fn clear_user(&self) -> Result<()> {
        self.store.remove(USER_KEY)?;
        info!("session cleared");
        self.events.emit(AppEvent::UserUpdated);
        Ok(())
    }

    /// The persisted theme, defaulting to light.
    pub fn theme(&self) -> Theme {
        let raw = match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Theme::default(),
            Err(e) => {
                warn!(error = %e, "could not read persisted theme");
                return Theme::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(theme) => theme,
            Err(e) => {
                warn!(error = %e, "persisted theme is corrupt, using default");
                Theme::default()
            }
        }
    }

    /// Persist the theme.
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        let json = serde_json::to_string(&theme)?;
        self.store.put(THEME_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn store() -> (SessionStore, Arc<dyn KvStore>, EventBus) {
        let kv: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let events = EventBus::new();
        (
            SessionStore::new(Arc::clone(&kv), events.clone()),
            kv,
            events,
        )
    }

    fn test_user() -> SessionUser {
        SessionUser {
            id: Some("u-100".into()),
            email: "asha@example.in".into(),
            full_name: "Asha Rao".into(),
            phone: Some("+91 98700 00000".into()),
            role: shinefiling_core::types::UserRole::Customer,
        }
    }

    #[test]
    fn save_then_read_round_trips() {
        let (session, _, _) = store();
        session.save_user(&test_user()).expect("save");
        let user = session.current_user().expect("user present");
        assert_eq!(user.email, "asha@example.in");
    }

    #[test]
    fn missing_user_is_signed_out() {
        let (session, _, _) = store();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn corrupt_user_is_treated_as_signed_out() {
        let (session, kv, _) = store();
        kv.put(USER_KEY, "{not json").expect("seed corrupt value");
        assert!(session.current_user().is_none());
    }

    #[test]
    fn clear_user_signs_out() {
        let (session, _, _) = store();
        session.save_user(&test_user()).expect("save");
        session.clear_user().expect("clear");
        assert!(session.current_user().is_none());
    }

    #[test]
    fn session_changes_notify_listeners() {
        let (session, _, events) = store();
        let mut rx = events.subscribe();
        session.save_user(&test_user()).expect("save");
        assert_eq!(rx.try_recv(), Ok(AppEvent::UserUpdated));
        session.clear_user().expect("clear");
        assert_eq!(rx.try_recv(), Ok(AppEvent::UserUpdated));
    }

    #[test]
    fn theme_defaults_to_light() {
        let (session, _, _) = store();
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn theme_round_trips() {
        let (session, _, _) = store();
        session.set_theme(Theme::Dark).expect("set");
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn corrupt_theme_falls_back_to_default() {
        let (session, kv, _) = store();
        kv.put(THEME_KEY, "??").expect("seed corrupt value");
        assert_eq!(session.theme(), Theme::Light);
    }
}
