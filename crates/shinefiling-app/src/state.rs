// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state: reactive signals for the Dioxus UI.

use shinefiling_core::types::{SessionUser, Theme};

use crate::services::app_services::AppServices;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The signed-in user, if any.
    pub user: Option<SessionUser>,
    /// UI colour theme, persisted per device.
    pub theme: Theme,
    /// Whether the sign-in / sign-up modal is showing.
    pub auth_open: bool,
    /// Status message for user feedback.
    pub status_message: Option<String>,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        Self {
            user: svc.current_user(),
            theme: svc.theme(),
            auth_open: false,
            status_message: None,
        }
    }

    /// Whether the current session belongs to an admin.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role.is_admin())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            theme: Theme::Light,
            auth_open: false,
            status_message: None,
        }
    }
}
