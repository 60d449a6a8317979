// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page: theme, backend connection, notification cadence.

use dioxus::prelude::*;

use shinefiling_core::types::Theme;

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut draft = use_signal({
        let svc = svc.clone();
        move || svc.config()
    });
    let mut save_msg = use_signal(|| Option::<String>::None);

    let data_dir = svc.data_dir().display().to_string();

    rsx! {
        div { style: "max-width: 560px;",
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Appearance" }
                SettingRow {
                    label: "Dark theme",
                    checked: state.read().theme == Theme::Dark,
                    on_toggle: {
                        let svc = svc.clone();
                        move |on: bool| {
                            let next = if on { Theme::Dark } else { Theme::Light };
                            if let Err(e) = svc.set_theme(next) {
                                tracing::warn!(error = %e, "theme change not persisted");
                            }
                            state.write().theme = next;
                        }
                    },
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Backend" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0; gap: 16px;",
                    span { "API base URL" }
                    input {
                        r#type: "text",
                        style: "flex: 1; max-width: 300px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: "{draft.read().api_base_url}",
                        onchange: move |evt| {
                            draft.write().api_base_url = evt.value().trim().to_string();
                        },
                    }
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Request timeout (seconds)" }
                    input {
                        r#type: "number",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{draft.read().request_timeout_secs}",
                        onchange: move |evt| {
                            if let Ok(secs) = evt.value().parse::<u64>()
                                && secs > 0
                            {
                                draft.write().request_timeout_secs = secs;
                            }
                        },
                    }
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Notification refresh (seconds)" }
                    input {
                        r#type: "number",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{draft.read().notification_poll_secs}",
                        onchange: move |evt| {
                            if let Ok(secs) = evt.value().parse::<u64>()
                                && secs > 0
                            {
                                draft.write().notification_poll_secs = secs;
                            }
                        },
                    }
                }
                p { style: "color: #888; font-size: 13px;",
                    "Connection changes apply from the next launch."
                }
            }

            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #0f2a43; color: white; font-size: 16px; margin-top: 8px; cursor: pointer;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = draft.read().clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                save_msg.set(Some("Settings saved.".into()));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                save_msg.set(Some(format!("Save failed: {e}")));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            if let Some(ref msg) = *save_msg.read() {
                p { style: "color: #1d7a39; font-size: 14px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "ShineFiling v0.1.0"
                    br {}
                    "Business registration, tax and legal filings for Indian founders"
                    br {}
                    "PMPL-1.0-or-later"
                }
                p { style: "color: #888; font-size: 13px;", "Local data: {data_dir}" }
            }
        }
    }
}

#[component]
fn SettingRow(label: &'static str, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt| {
                    on_toggle.call(evt.checked());
                },
            }
        }
    }
}
