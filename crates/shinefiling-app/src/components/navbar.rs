// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Top navigation bar: services mega-menu, notification bell, theme toggle
// and the sign-in / sign-out controls.

use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use shinefiling_core::types::Theme;
use shinefiling_store::AppEvent;

use crate::Route;
use crate::components::{accent_hex, service_target};
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Navbar() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let mut menu_open = use_signal(|| false);
    let mut catalog_tick = use_signal(|| 0u32);
    let mut session_tick = use_signal(|| 0u32);

    // Nudge the menu and the bell whenever another part of the app changes
    // what they show.
    let svc_events = svc.clone();
    let _listener = use_resource(move || {
        let svc = svc_events.clone();
        async move {
            let mut rx = svc.subscribe();
            loop {
                match rx.recv().await {
                    Ok(AppEvent::ServiceStatusChanged) => *catalog_tick.write() += 1,
                    Ok(AppEvent::UserUpdated) | Ok(AppEvent::NotificationsChanged) => {
                        *session_tick.write() += 1
                    }
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    let svc_menu = svc.clone();
    let menu = use_resource(move || {
        let svc = svc_menu.clone();
        async move {
            let _tick = *catalog_tick.read();
            svc.storefront().await
        }
    });

    let svc_bell = svc.clone();
    let unread = use_resource(move || {
        let svc = svc_bell.clone();
        async move {
            let _tick = *session_tick.read();
            match svc.notifications().await {
                Ok(list) => list.iter().filter(|n| !n.read).count(),
                Err(_) => 0,
            }
        }
    });

    rsx! {
        nav { style: "display: flex; align-items: center; gap: 16px; padding: 10px 24px; background: #0f2a43; color: white; position: relative;",
            Link {
                to: Route::Home {},
                style: "font-size: 20px; font-weight: 700; color: white; text-decoration: none;",
                "ShineFiling"
            }

            // Services mega-menu
            div { style: "position: relative;",
                button {
                    style: "padding: 6px 12px; border-radius: 8px; border: none; background: rgba(255, 255, 255, 0.12); color: white; font-size: 14px; cursor: pointer;",
                    onclick: move |_| {
                        let open = *menu_open.read();
                        menu_open.set(!open);
                    },
                    "Services \u{25BE}"
                }
                if *menu_open.read() {
                    div { style: "position: absolute; top: 44px; left: 0; width: 720px; max-height: 70vh; overflow-y: auto; background: white; color: #1f2430; border: 1px solid #d8dce3; border-radius: 12px; padding: 16px; box-shadow: 0 8px 24px rgba(15, 42, 67, 0.18); z-index: 40;",
                        if let Some(ref groups) = *menu.read() {
                            div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;",
                                for group in groups.iter() {
                                    {
                                        let accent = accent_hex(&group.color);
                                        rsx! {
                                            div {
                                                h3 { style: "font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em; color: {accent}; margin: 0 0 6px;",
                                                    "{group.label}"
                                                }
                                                for service in group.services.iter() {
                                                    Link {
                                                        to: service_target(&service.name),
                                                        style: "display: block; padding: 3px 0; font-size: 14px; color: #1f2430; text-decoration: none;",
                                                        onclick: move |_| menu_open.set(false),
                                                        "{service.name}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        } else {
                            p { style: "color: #888;", "Loading services..." }
                        }
                    }
                }
            }

            Link { to: Route::Dashboard {}, style: "color: #c9d4e0; font-size: 14px; text-decoration: none;", "Dashboard" }
            Link { to: Route::Documents {}, style: "color: #c9d4e0; font-size: 14px; text-decoration: none;", "Documents" }
            Link { to: Route::Payments {}, style: "color: #c9d4e0; font-size: 14px; text-decoration: none;", "Payments" }
            if state.read().is_admin() {
                Link { to: Route::Admin {}, style: "color: #ffd166; font-size: 14px; text-decoration: none;", "Admin" }
            }
            Link { to: Route::Settings {}, style: "color: #c9d4e0; font-size: 14px; text-decoration: none;", "Settings" }

            div { style: "flex: 1;" }

            // Unread-notification bell, only meaningful with a session
            if state.read().user.is_some() {
                {
                    let count = (*unread.read()).unwrap_or(0);
                    rsx! {
                        Link {
                            to: Route::Dashboard {},
                            style: "position: relative; color: white; text-decoration: none; font-size: 18px;",
                            "\u{1F514}"
                            if count > 0 {
                                span { style: "position: absolute; top: -6px; right: -10px; background: #e11d48; color: white; border-radius: 999px; font-size: 11px; padding: 1px 6px;",
                                    "{count}"
                                }
                            }
                        }
                    }
                }
            }

            button {
                style: "padding: 6px 12px; border-radius: 8px; border: none; background: rgba(255, 255, 255, 0.12); color: white; font-size: 13px; cursor: pointer;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let next = state.read().theme.toggled();
                        if let Err(e) = svc.set_theme(next) {
                            tracing::warn!(error = %e, "theme change not persisted");
                        }
                        state.write().theme = next;
                    }
                },
                if state.read().theme == Theme::Dark { "Light mode" } else { "Dark mode" }
            }

            if let Some(ref user) = state.read().user {
                span { style: "font-size: 14px; color: #c9d4e0;", "{user.full_name}" }
                button {
                    style: "padding: 6px 12px; border-radius: 8px; border: 1px solid rgba(255, 255, 255, 0.35); background: transparent; color: white; font-size: 13px; cursor: pointer;",
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            if let Err(e) = svc.sign_out() {
                                tracing::error!(error = %e, "sign out failed");
                            }
                            state.write().user = None;
                        }
                    },
                    "Sign out"
                }
            } else {
                button {
                    style: "padding: 6px 14px; border-radius: 8px; border: none; background: #ffd166; color: #0f2a43; font-weight: 600; font-size: 13px; cursor: pointer;",
                    onclick: move |_| state.write().auth_open = true,
                    "Sign in"
                }
            }
        }
    }
}
