// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Admin catalog console: every known service (listed or not), remote
// price/status edits, per-device visibility toggles, and new listings.
//
// Edits rely on the event bus for refresh: a successful change broadcasts
// ServiceStatusChanged and the table re-merges.

use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use shinefiling_catalog::{ServiceOrigin, categories};
use shinefiling_core::human_errors::humanize_error;
use shinefiling_core::types::{NewServiceProduct, format_inr};
use shinefiling_store::AppEvent;

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Admin() -> Element {
    let state = use_context::<Signal<AppState>>();

    rsx! {
        div {
            if state.read().is_admin() {
                AdminConsole {}
            } else {
                div { style: "text-align: center; padding: 64px 24px;",
                    h1 { "Catalog console" }
                    p { style: "color: #666;", "This area is for ShineFiling staff. Sign in with a staff account to manage the catalog." }
                }
            }
        }
    }
}

#[component]
fn AdminConsole() -> Element {
    let svc = use_context::<AppServices>();

    let mut catalog_tick = use_signal(|| 0u32);
    let mut admin_error = use_signal(|| Option::<String>::None);
    let mut price_edit = use_signal(|| Option::<(String, String)>::None);

    let svc_events = svc.clone();
    let _listener = use_resource(move || {
        let svc = svc_events.clone();
        async move {
            let mut rx = svc.subscribe();
            loop {
                match rx.recv().await {
                    Ok(AppEvent::ServiceStatusChanged) => *catalog_tick.write() += 1,
                    Ok(_) => {}
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    let svc_catalog = svc.clone();
    let catalog = use_resource(move || {
        let svc = svc_catalog.clone();
        async move {
            let _tick = *catalog_tick.read();
            svc.admin_catalog().await
        }
    });

    rsx! {
        div {
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { style: "margin: 0;", "Catalog console" }
                button {
                    style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 13px; cursor: pointer;",
                    onclick: move |_| {
                        *catalog_tick.write() += 1;
                    },
                    "Refresh"
                }
            }
            p { style: "color: #666; font-size: 14px; margin: 8px 0 16px;",
                "Every service we advertise, whether or not the backend lists it yet. Hiding a service here only affects this device."
            }

            if let Some(ref msg) = *admin_error.read() {
                p { style: "padding: 12px; border-radius: 10px; background: #fdecec; color: #b3261e; font-size: 14px;",
                    "{msg}"
                }
            }

            {match &*catalog.read() {
                None => rsx! {
                    p { style: "color: #888;", "Loading the catalog..." }
                },
                Some(Err(e)) => {
                    let friendly = humanize_error(e);
                    rsx! {
                        p { style: "padding: 12px; border-radius: 10px; background: #fdecec; color: #b3261e; font-size: 14px;",
                            "{friendly.message} {friendly.suggestion}"
                        }
                    }
                }
                Some(Ok(services)) => rsx! {
                    for service in services.iter() {
                        {
                            let (origin_label, origin_bg, origin_fg) = match service.origin {
                                ServiceOrigin::Catalog => ("Listed", "#e8f1fd", "#1565c0"),
                                ServiceOrigin::Taxonomy => ("Not listed", "#f4f4f5", "#71717a"),
                            };
                            let price_label = match service.price {
                                Some(price) => format_inr(price),
                                None => "not priced".to_string(),
                            };
                            let remote_id = service.remote_id.clone();
                            let override_id = service.override_id().to_string();
                            let status = service.status;
                            let editing = price_edit
                                .read()
                                .as_ref()
                                .is_some_and(|(id, _)| Some(id) == remote_id.as_ref());
                            let edit_value = price_edit
                                .read()
                                .as_ref()
                                .map(|(_, value)| value.clone())
                                .unwrap_or_default();
                            rsx! {
                                div { style: "display: flex; justify-content: space-between; align-items: center; gap: 12px; padding: 12px 14px; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 10px; background: white; flex-wrap: wrap;",
                                    div { style: "min-width: 220px;",
                                        strong { style: "color: #1f2430;", "{service.name}" }
                                        p { style: "color: #888; font-size: 13px; margin: 2px 0 0;",
                                            "{service.category_label}"
                                        }
                                    }
                                    div { style: "display: flex; align-items: center; gap: 8px; flex-wrap: wrap;",
                                        span { style: "padding: 4px 10px; border-radius: 999px; background: {origin_bg}; color: {origin_fg}; font-size: 12px;",
                                            "{origin_label}"
                                        }
                                        if service.locally_disabled {
                                            span { style: "padding: 4px 10px; border-radius: 999px; background: #fdf3e7; color: #b26a00; font-size: 12px;",
                                                "Hidden here"
                                            }
                                        }
                                        if let Some(ref id) = remote_id {
                                            if status.is_active() {
                                                span { style: "padding: 4px 10px; border-radius: 999px; background: #e7f6ec; color: #1d7a39; font-size: 12px;", "Active" }
                                            } else {
                                                span { style: "padding: 4px 10px; border-radius: 999px; background: #fdecec; color: #b3261e; font-size: 12px;", "Inactive" }
                                            }

                                            if editing {
                                                input {
                                                    r#type: "number",
                                                    style: "width: 90px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 6px; text-align: right;",
                                                    value: "{edit_value}",
                                                    oninput: move |evt| {
                                                        if let Some((_, value)) = price_edit.write().as_mut() {
                                                            *value = evt.value().to_string();
                                                        }
                                                    },
                                                }
                                                button {
                                                    style: "padding: 4px 10px; border-radius: 6px; border: none; background: #0f2a43; color: white; font-size: 12px; cursor: pointer;",
                                                    onclick: {
                                                        let svc = svc.clone();
                                                        let id = id.clone();
                                                        move |_| {
                                                            let entered = price_edit
                                                                .read()
                                                                .as_ref()
                                                                .map(|(_, v)| v.clone())
                                                                .unwrap_or_default();
                                                            let Ok(price) = entered.trim().parse::<u32>() else {
                                                                admin_error.set(Some(
                                                                    "Prices are whole rupees, e.g. 2999.".into(),
                                                                ));
                                                                return;
                                                            };
                                                            let svc = svc.clone();
                                                            let id = id.clone();
                                                            admin_error.set(None);
                                                            price_edit.set(None);
                                                            spawn(async move {
                                                                if let Err(e) = svc.set_remote_price(&id, price).await {
                                                                    let friendly = humanize_error(&e);
                                                                    admin_error.set(Some(format!(
                                                                        "{} {}",
                                                                        friendly.message, friendly.suggestion
                                                                    )));
                                                                }
                                                            });
                                                        }
                                                    },
                                                    "Save"
                                                }
                                                button {
                                                    style: "padding: 4px 10px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 12px; cursor: pointer;",
                                                    onclick: move |_| price_edit.set(None),
                                                    "Cancel"
                                                }
                                            } else {
                                                strong { style: "color: #1f2430; font-size: 14px;", "{price_label}" }
                                                button {
                                                    style: "padding: 4px 10px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 12px; cursor: pointer;",
                                                    onclick: {
                                                        let id = id.clone();
                                                        let current = service.price.map(|p| p.to_string()).unwrap_or_default();
                                                        move |_| price_edit.set(Some((id.clone(), current.clone())))
                                                    },
                                                    "Edit price"
                                                }
                                                button {
                                                    style: "padding: 4px 10px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 12px; cursor: pointer;",
                                                    onclick: {
                                                        let svc = svc.clone();
                                                        let id = id.clone();
                                                        move |_| {
                                                            let svc = svc.clone();
                                                            let id = id.clone();
                                                            let next = status.toggled();
                                                            spawn(async move {
                                                                if let Err(e) = svc.set_remote_status(&id, next).await {
                                                                    let friendly = humanize_error(&e);
                                                                    admin_error.set(Some(format!(
                                                                        "{} {}",
                                                                        friendly.message, friendly.suggestion
                                                                    )));
                                                                }
                                                            });
                                                        }
                                                    },
                                                    if status.is_active() { "Deactivate" } else { "Activate" }
                                                }
                                            }
                                        } else {
                                            strong { style: "color: #888; font-size: 14px;", "{price_label}" }
                                        }

                                        button {
                                            style: "padding: 4px 10px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 12px; cursor: pointer;",
                                            onclick: {
                                                let svc = svc.clone();
                                                move |_| {
                                                    match svc.toggle_local(&override_id) {
                                                        Ok(hidden) => {
                                                            tracing::info!(id = %override_id, hidden, "local visibility toggled")
                                                        }
                                                        Err(e) => {
                                                            let friendly = humanize_error(&e);
                                                            admin_error.set(Some(format!(
                                                                "{} {}",
                                                                friendly.message, friendly.suggestion
                                                            )));
                                                        }
                                                    }
                                                }
                                            },
                                            if service.locally_disabled { "Show here" } else { "Hide here" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}

            NewListingForm {}
        }
    }
}

#[component]
fn NewListingForm() -> Element {
    let svc = use_context::<AppServices>();

    let mut name = use_signal(String::new);
    let mut category_id = use_signal(|| "business_reg".to_string());
    let mut price = use_signal(String::new);
    let mut sla = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut message = use_signal(|| Option::<String>::None);

    rsx! {
        section { style: "margin: 28px 0; padding: 16px; border: 1px solid #e0e0e0; border-radius: 12px; background: white; max-width: 480px;",
            h3 { style: "margin: 0 0 12px;", "List a new service" }
            input {
                r#type: "text",
                placeholder: "Service name",
                value: "{name}",
                style: "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px;",
                oninput: move |evt| name.set(evt.value().to_string()),
            }
            select {
                style: "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px; background: white;",
                value: "{category_id}",
                onchange: move |evt| category_id.set(evt.value().to_string()),
                for meta in categories() {
                    option { value: meta.id, "{meta.label}" }
                }
            }
            input {
                r#type: "number",
                placeholder: "Price in rupees, e.g. 2999",
                value: "{price}",
                style: "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px;",
                oninput: move |evt| price.set(evt.value().to_string()),
            }
            input {
                r#type: "text",
                placeholder: "Turnaround, e.g. 3-5 working days (optional)",
                value: "{sla}",
                style: "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px;",
                oninput: move |evt| sla.set(evt.value().to_string()),
            }
            textarea {
                placeholder: "Short description (optional)",
                value: "{description}",
                style: "width: 100%; min-height: 70px; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px; resize: vertical;",
                oninput: move |evt| description.set(evt.value().to_string()),
            }
            button {
                style: "width: 100%; padding: 12px; border-radius: 10px; border: none; background: #0f2a43; color: white; font-size: 15px; font-weight: 600; cursor: pointer;",
                disabled: *busy.read()
                    || name.read().trim().is_empty()
                    || price.read().trim().parse::<u32>().is_err(),
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let Ok(parsed_price) = price.read().trim().parse::<u32>() else {
                            return;
                        };
                        let trimmed_sla = sla.read().trim().to_string();
                        let trimmed_description = description.read().trim().to_string();
                        let product = NewServiceProduct {
                            name: name.read().trim().to_string(),
                            category_id: category_id.read().clone(),
                            price: parsed_price,
                            sla: if trimmed_sla.is_empty() { None } else { Some(trimmed_sla) },
                            docs_required: Vec::new(),
                            description: if trimmed_description.is_empty() {
                                None
                            } else {
                                Some(trimmed_description)
                            },
                        };
                        let svc = svc.clone();
                        busy.set(true);
                        message.set(None);
                        spawn(async move {
                            match svc.create_product(&product).await {
                                Ok(created) => {
                                    message.set(Some(format!("{} is now listed.", created.name)));
                                    name.set(String::new());
                                    price.set(String::new());
                                    sla.set(String::new());
                                    description.set(String::new());
                                }
                                Err(e) => {
                                    let friendly = humanize_error(&e);
                                    message.set(Some(format!(
                                        "{} {}",
                                        friendly.message, friendly.suggestion
                                    )));
                                }
                            }
                            busy.set(false);
                        });
                    }
                },
                if *busy.read() { "Listing..." } else { "List service" }
            }
            if let Some(ref msg) = *message.read() {
                p { style: "margin: 12px 0 0; color: #555; font-size: 14px;", "{msg}" }
            }
        }
    }
}
