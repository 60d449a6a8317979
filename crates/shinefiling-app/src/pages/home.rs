// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Storefront: every visible service, bucketed by category.

use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use shinefiling_core::types::format_inr;
use shinefiling_store::AppEvent;

use crate::components::{accent_hex, service_target};
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let mut catalog_tick = use_signal(|| 0u32);

    // Re-run reconciliation whenever an override or admin edit lands.
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
    let groups = use_resource(move || {
        let svc = svc_catalog.clone();
        async move {
            let _tick = *catalog_tick.read();
            svc.storefront().await
        }
    });

    rsx! {
        div {
            // Hero
            section { style: "background: linear-gradient(135deg, #0f2a43, #14427a); color: white; border-radius: 16px; padding: 40px 32px; margin-bottom: 24px;",
                h1 { style: "margin: 0 0 8px; font-size: 30px;", "Compliance filings without the queue" }
                p { style: "margin: 0 0 16px; color: #c9d4e0; font-size: 16px; max-width: 560px;",
                    "Company registration, GST, trademarks, licenses and legal drafting, handled end to end by our filing agents."
                }
                if state.read().user.is_none() {
                    button {
                        style: "padding: 12px 24px; border-radius: 10px; border: none; background: #ffd166; color: #0f2a43; font-size: 15px; font-weight: 600; cursor: pointer;",
                        onclick: move |_| state.write().auth_open = true,
                        "Get started"
                    }
                }
            }

            if let Some(ref groups) = *groups.read() {
                if groups.is_empty() {
                    p { style: "color: #888;", "No services are available right now." }
                }
                for group in groups.iter() {
                    {
                        let accent = accent_hex(&group.color);
                        rsx! {
                            section { style: "margin: 28px 0;",
                                h2 { style: "font-size: 20px; border-left: 4px solid {accent}; padding-left: 10px; margin: 0 0 12px;",
                                    "{group.label}"
                                }
                                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 12px;",
                                    for service in group.services.iter() {
                                        {
                                            let price_line = match service.price {
                                                Some(price) => format_inr(price),
                                                None => "Price on request".to_string(),
                                            };
                                            rsx! {
                                                Link {
                                                    to: service_target(&service.name),
                                                    style: "display: block; padding: 14px 16px; border: 1px solid #e0e0e0; border-top: 3px solid {accent}; border-radius: 12px; background: white; color: #1f2430; text-decoration: none;",
                                                    strong { style: "display: block; font-size: 15px; margin-bottom: 4px;", "{service.name}" }
                                                    span { style: "color: #666; font-size: 14px;", "{price_line}" }
                                                    if let Some(ref sla) = service.sla {
                                                        span { style: "display: block; color: #888; font-size: 12px; margin-top: 4px;", "{sla}" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                p { style: "color: #888;", "Loading the service catalog..." }
            }
        }
    }
}
