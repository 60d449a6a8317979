// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the ShineFiling REST backend, without a trailing slash.
    pub api_base_url: String,
    /// Per-request timeout for backend calls, in seconds.
    pub request_timeout_secs: u64,
    /// How often mounted views poll for new notifications, in seconds.
    pub notification_poll_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.shinefiling.com/api/v1".into(),
            request_timeout_secs: 30,
            notification_poll_secs: 10,
        }
    }
}
