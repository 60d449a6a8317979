// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filing request form, shared by the service detail page and the generic
// application page. Prefills contact details from the signed-in user.

use dioxus::prelude::*;

use shinefiling_core::human_errors::humanize_error;
use shinefiling_core::types::ServiceRequest;

use crate::Route;
use crate::services::app_services::AppServices;
use crate::state::AppState;

const FIELD_STYLE: &str = "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px;";

#[component]
pub fn FilingForm(service_name: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let (name0, email0, phone0) = match state.read().user {
        Some(ref user) => (
            user.full_name.clone(),
            user.email.clone(),
            user.phone.clone().unwrap_or_default(),
        ),
        None => Default::default(),
    };
    let mut full_name = use_signal(move || name0);
    let mut email = use_signal(move || email0);
    let mut phone = use_signal(move || phone0);
    let mut notes = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut submitted = use_signal(|| Option::<String>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);

    rsx! {
        div { style: "max-width: 480px;",
            if let Some(ref id) = *submitted.read() {
                div { style: "padding: 16px; border-radius: 12px; background: #e7f6ec; color: #1d7a39;",
                    strong { "Application received." }
                    p { style: "margin: 8px 0; font-size: 14px;",
                        "Your reference is {id}. Our agents will reach out shortly; track progress on your dashboard."
                    }
                    Link { to: Route::Dashboard {}, style: "color: #1d7a39; font-weight: 600;", "Go to dashboard" }
                }
            } else {
                h3 { style: "margin: 0 0 12px;", "Tell us where to reach you" }
                input {
                    r#type: "text",
                    placeholder: "Full name",
                    value: "{full_name}",
                    style: FIELD_STYLE,
                    oninput: move |evt| full_name.set(evt.value().to_string()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email address",
                    value: "{email}",
                    style: FIELD_STYLE,
                    oninput: move |evt| email.set(evt.value().to_string()),
                }
                input {
                    r#type: "tel",
                    placeholder: "Phone (optional)",
                    value: "{phone}",
                    style: FIELD_STYLE,
                    oninput: move |evt| phone.set(evt.value().to_string()),
                }
                textarea {
                    placeholder: "Anything we should know? (optional)",
                    value: "{notes}",
                    style: "width: 100%; min-height: 80px; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px; resize: vertical;",
                    oninput: move |evt| notes.set(evt.value().to_string()),
                }
                button {
                    style: "width: 100%; padding: 14px; border-radius: 10px; border: none; background: #0f2a43; color: white; font-size: 16px; font-weight: 600; cursor: pointer;",
                    disabled: *busy.read()
                        || service_name.trim().is_empty()
                        || full_name.read().trim().is_empty()
                        || email.read().trim().is_empty(),
                    onclick: {
                        let svc = svc.clone();
                        let service_name = service_name.clone();
                        move |_| {
                            let svc = svc.clone();
                            let trimmed_notes = notes.read().trim().to_string();
                            let request = ServiceRequest {
                                service_name: service_name.clone(),
                                full_name: full_name.read().trim().to_string(),
                                email: email.read().trim().to_string(),
                                phone: phone.read().trim().to_string(),
                                notes: if trimmed_notes.is_empty() {
                                    None
                                } else {
                                    Some(trimmed_notes)
                                },
                            };
                            busy.set(true);
                            error_msg.set(None);
                            spawn(async move {
                                match svc.submit_filing(&request).await {
                                    Ok(id) => submitted.set(Some(id)),
                                    Err(e) => {
                                        let friendly = humanize_error(&e);
                                        error_msg.set(Some(format!(
                                            "{} {}",
                                            friendly.message, friendly.suggestion
                                        )));
                                    }
                                }
                                busy.set(false);
                            });
                        }
                    },
                    if *busy.read() { "Submitting..." } else { "Submit application" }
                }
                if let Some(ref msg) = *error_msg.read() {
                    p { style: "margin-top: 12px; padding: 12px; border-radius: 10px; background: #fdecec; color: #b3261e; font-size: 14px;",
                        "{msg}"
                    }
                }
            }
        }
    }
}
