// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dedicated page for one service, looked up by its route slug.

use dioxus::prelude::*;

use shinefiling_core::types::format_inr;

use crate::Route;
use crate::components::{accent_hex, filing_form::FilingForm};
use crate::services::app_services::AppServices;

#[component]
pub fn ServiceDetail(slug: String) -> Element {
    let svc = use_context::<AppServices>();

    // The resource only tracks signals, not props, so mirror the slug into
    // one; the mega-menu can navigate between two detail pages directly.
    let mut slug_dep = use_signal(|| slug.clone());
    if *slug_dep.read() != slug {
        slug_dep.set(slug.clone());
    }

    let svc_lookup = svc.clone();
    let service = use_resource(move || {
        let svc = svc_lookup.clone();
        async move {
            let slug = slug_dep.read().clone();
            svc.service_by_slug(&slug).await
        }
    });

    rsx! {
        div { style: "max-width: 760px; margin: 0 auto;",
            Link { to: Route::Home {}, style: "color: #666; font-size: 14px; text-decoration: none;",
                "\u{2190} All services"
            }

            {match &*service.read() {
                None => rsx! {
                    p { style: "color: #888; margin-top: 24px;", "Loading..." }
                },
                Some(None) => rsx! {
                    div { style: "margin-top: 24px; padding: 24px; border: 1px solid #e0e0e0; border-radius: 12px; text-align: center;",
                        h2 { "We couldn't find that service" }
                        p { style: "color: #666;",
                            "It may have been renamed or taken off the catalog. Browse the full list instead."
                        }
                        Link { to: Route::Home {}, style: "color: #0f2a43; font-weight: 600;", "Back to services" }
                    }
                },
                Some(Some(found)) => {
                    let accent = accent_hex(&found.color);
                    let price_line = match found.price {
                        Some(price) => format_inr(price),
                        None => "Price on request".to_string(),
                    };
                    rsx! {
                        div { style: "margin-top: 16px;",
                            span { style: "display: inline-block; padding: 3px 10px; border-radius: 999px; background: {accent}; color: white; font-size: 12px;",
                                "{found.category_label}"
                            }
                            h1 { style: "margin: 12px 0 4px;", "{found.name}" }
                            p { style: "font-size: 18px; color: #1f2430; margin: 0 0 4px;", "{price_line}" }
                            if let Some(ref sla) = found.sla {
                                p { style: "color: #666; font-size: 14px; margin: 0;", "Typical turnaround: {sla}" }
                            }
                            if let Some(ref description) = found.description {
                                p { style: "color: #444; font-size: 15px; margin: 16px 0; line-height: 1.5;", "{description}" }
                            }
                            if !found.docs_required.is_empty() {
                                h3 { style: "margin: 20px 0 8px;", "Documents you'll need" }
                                ul { style: "color: #444; font-size: 14px; padding-left: 20px; margin: 0 0 16px;",
                                    for doc in found.docs_required.iter() {
                                        li { style: "margin: 4px 0;", "{doc}" }
                                    }
                                }
                            }
                            div { style: "margin-top: 24px;",
                                FilingForm { service_name: found.name.clone() }
                            }
                        }
                    }
                }
            }}
        }
    }
}
