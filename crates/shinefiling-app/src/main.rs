// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ShineFiling business compliance filing, desktop client.
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod components;
mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::admin::Admin;
use pages::apply::Apply;
use pages::dashboard::Dashboard;
use pages::documents::Documents;
use pages::home::Home;
use pages::payments::Payments;
use pages::service_detail::ServiceDetail;
use pages::settings::Settings;

use components::auth_modal::AuthModal;
use components::navbar::Navbar;
use services::app_services::AppServices;
use shinefiling_core::types::Theme;
use state::AppState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("ShineFiling client starting");

    dioxus::launch(app);
}

/// Top-level route enum.
///
/// `/services/apply` is declared before `/services/:slug` so the word
/// "apply" never parses as a slug.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/services/apply?:name")]
    Apply { name: String },
    #[route("/services/:slug")]
    ServiceDetail { slug: String },
    #[route("/dashboard")]
    Dashboard {},
    #[route("/documents")]
    Documents {},
    #[route("/payments")]
    Payments {},
    #[route("/admin")]
    Admin {},
    #[route("/settings")]
    Settings {},
}

/// Root component.
fn app() -> Element {
    // Initialise backend services (SQLite store, HTTP client, config)
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!("backend services initialised");
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "persistent storage failed, using in-memory fallback");
            AppServices::fallback().expect("even fallback init failed")
        }
    });

    // Provide services and state as context for all pages
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(AppState::new(&svc)));

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent shell: navbar above the routed page, auth modal on top.
#[component]
fn Shell() -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme = state.read().theme;
    let bg = shell_bg(theme);
    let fg = shell_fg(theme);

    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: {bg}; color: {fg};",

            Navbar {}

            // Page content
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px 24px;",
                Outlet::<Route> {}
            }

            if state.read().auth_open {
                AuthModal {}
            }
        }
    }
}

fn shell_bg(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "#f7f8fa",
        Theme::Dark => "#16181d",
    }
}

fn shell_fg(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "#1f2430",
        Theme::Dark => "#e8eaf0",
    }
}
