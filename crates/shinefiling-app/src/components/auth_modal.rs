// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sign-in / sign-up modal.
//
// The step machine lives in shinefiling_core::auth; this component only
// renders the current step and feeds backend results into it. Closing the
// modal unmounts the component, so every field starts clean next time.

use dioxus::prelude::*;

use shinefiling_core::auth::{AuthAdvance, AuthFlow, AuthMode, AuthStep};
use shinefiling_core::error::ShineError;
use shinefiling_core::human_errors::humanize_error;
use shinefiling_core::types::{Credentials, OtpVerification, SignupData};

use crate::services::app_services::AppServices;
use crate::state::AppState;

const FIELD_STYLE: &str = "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px;";

#[component]
pub fn AuthModal() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let mut flow = use_signal(|| AuthFlow::new(AuthMode::Login));
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut otp = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let current = flow.read().clone();
    let login_tab = current.mode == AuthMode::Login;

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(15, 42, 67, 0.55); display: flex; align-items: center; justify-content: center; z-index: 100;",
            div { style: "width: 420px; max-width: 92vw; background: white; color: #1f2430; border-radius: 16px; padding: 24px; position: relative; box-shadow: 0 16px 48px rgba(15, 42, 67, 0.3);",
                button {
                    style: "position: absolute; top: 12px; right: 12px; border: none; background: none; font-size: 18px; color: #888; cursor: pointer;",
                    onclick: move |_| state.write().auth_open = false,
                    "\u{2715}"
                }

                // Mode tabs
                div { style: "display: flex; gap: 8px; margin-bottom: 16px;",
                    button {
                        style: tab_style(login_tab),
                        onclick: move |_| flow.write().switch_mode(AuthMode::Login),
                        "Sign in"
                    }
                    button {
                        style: tab_style(!login_tab),
                        onclick: move |_| flow.write().switch_mode(AuthMode::Signup),
                        "Create account"
                    }
                }

                if let Some(ref banner) = current.banner {
                    p { style: "padding: 10px 12px; border-radius: 10px; background: #e7f6ec; color: #1d7a39; font-size: 14px; margin: 0 0 12px;",
                        "{banner}"
                    }
                }
                if let Some(ref error) = current.error {
                    p { style: "padding: 10px 12px; border-radius: 10px; background: #fdecec; color: #b3261e; font-size: 14px; margin: 0 0 12px;",
                        "{error}"
                    }
                }

                {match current.step {
                    AuthStep::Details => rsx! {
                        if !login_tab {
                            input {
                                r#type: "text",
                                placeholder: "Full name",
                                value: "{full_name}",
                                style: FIELD_STYLE,
                                oninput: move |evt| full_name.set(evt.value().to_string()),
                            }
                            input {
                                r#type: "tel",
                                placeholder: "Phone",
                                value: "{phone}",
                                style: FIELD_STYLE,
                                oninput: move |evt| phone.set(evt.value().to_string()),
                            }
                        }
                        input {
                            r#type: "email",
                            placeholder: "Email address",
                            value: "{email}",
                            style: FIELD_STYLE,
                            oninput: move |evt| email.set(evt.value().to_string()),
                        }
                        input {
                            r#type: "password",
                            placeholder: "Password",
                            value: "{password}",
                            style: FIELD_STYLE,
                            oninput: move |evt| password.set(evt.value().to_string()),
                        }
                        button {
                            style: "width: 100%; padding: 14px; border-radius: 10px; border: none; background: #0f2a43; color: white; font-size: 16px; font-weight: 600; cursor: pointer;",
                            disabled: *busy.read()
                                || email.read().trim().is_empty()
                                || password.read().is_empty()
                                || (!login_tab && full_name.read().trim().is_empty()),
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    let svc = svc.clone();
                                    let mode = flow.read().mode;
                                    let email_v = email.read().trim().to_string();
                                    let password_v = password.read().to_string();
                                    let full_name_v = full_name.read().trim().to_string();
                                    let phone_v = phone.read().trim().to_string();
                                    busy.set(true);
                                    spawn(async move {
                                        match mode {
                                            AuthMode::Login => {
                                                let credentials = Credentials {
                                                    email: email_v,
                                                    password: password_v,
                                                };
                                                match svc.sign_in(&credentials).await {
                                                    Ok(user) => {
                                                        state.write().user = Some(user);
                                                        let advance = flow.write().details_accepted();
                                                        if advance == AuthAdvance::Close {
                                                            state.write().auth_open = false;
                                                        }
                                                    }
                                                    Err(e) => flow.write().details_rejected(auth_error_text(&e)),
                                                }
                                            }
                                            AuthMode::Signup => {
                                                let signup = SignupData {
                                                    full_name: full_name_v,
                                                    email: email_v,
                                                    phone: phone_v,
                                                    password: password_v,
                                                };
                                                match svc.sign_up(&signup).await {
                                                    Ok(()) => {
                                                        flow.write().details_accepted();
                                                    }
                                                    Err(e) => flow.write().details_rejected(auth_error_text(&e)),
                                                }
                                            }
                                        }
                                        busy.set(false);
                                    });
                                }
                            },
                            if *busy.read() {
                                "Please wait..."
                            } else if login_tab {
                                "Sign in"
                            } else {
                                "Create account"
                            }
                        }
                    },
                    AuthStep::Otp => rsx! {
                        p { style: "color: #666; font-size: 14px; margin: 0 0 12px;",
                            "We emailed a verification code to {email}. Enter it below to finish creating your account."
                        }
                        input {
                            r#type: "text",
                            placeholder: "Verification code",
                            value: "{otp}",
                            style: FIELD_STYLE,
                            oninput: move |evt| otp.set(evt.value().to_string()),
                        }
                        button {
                            style: "width: 100%; padding: 14px; border-radius: 10px; border: none; background: #0f2a43; color: white; font-size: 16px; font-weight: 600; cursor: pointer;",
                            disabled: *busy.read() || otp.read().trim().is_empty(),
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    let svc = svc.clone();
                                    let verification = OtpVerification {
                                        email: email.read().trim().to_string(),
                                        otp: otp.read().trim().to_string(),
                                    };
                                    busy.set(true);
                                    spawn(async move {
                                        match svc.confirm_otp(&verification).await {
                                            Ok(()) => {
                                                flow.write().otp_verified();
                                                password.set(String::new());
                                                otp.set(String::new());
                                            }
                                            Err(e) => flow.write().otp_rejected(auth_error_text(&e)),
                                        }
                                        busy.set(false);
                                    });
                                }
                            },
                            if *busy.read() { "Checking..." } else { "Verify code" }
                        }
                    },
                }}
            }
        }
    }
}

fn tab_style(active: bool) -> String {
    let (bg, fg, border) = if active {
        ("#0f2a43", "white", "#0f2a43")
    } else {
        ("white", "#1f2430", "#ccc")
    };
    format!(
        "flex: 1; padding: 10px; border-radius: 10px; border: 1px solid {border}; background: {bg}; color: {fg}; font-size: 14px; cursor: pointer;"
    )
}

/// Raw backend rejection text where the flow gives us one, the plain-English
/// mapping for everything else.
fn auth_error_text(err: &ShineError) -> String {
    match err {
        ShineError::AuthRejected(message) | ShineError::OtpRejected(message) => message.clone(),
        other => humanize_error(other).message,
    }
}
