// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Payment history for the signed-in account.

use dioxus::prelude::*;

use shinefiling_core::human_errors::humanize_error;
use shinefiling_core::types::{PaymentStatus, format_inr};

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Payments() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div {
            if state.read().user.is_some() {
                PaymentsContent {}
            } else {
                div { style: "text-align: center; padding: 64px 24px;",
                    h1 { "Payments" }
                    p { style: "color: #666;", "Sign in to see your payment history and receipts." }
                    button {
                        style: "padding: 12px 24px; border-radius: 10px; border: none; background: #0f2a43; color: white; font-size: 15px; font-weight: 600; cursor: pointer;",
                        onclick: move |_| state.write().auth_open = true,
                        "Sign in"
                    }
                }
            }
        }
    }
}

#[component]
fn PaymentsContent() -> Element {
    let svc = use_context::<AppServices>();

    let mut payments_tick = use_signal(|| 0u32);

    let svc_payments = svc.clone();
    let payments = use_resource(move || {
        let svc = svc_payments.clone();
        async move {
            let _tick = *payments_tick.read();
            svc.payments().await
        }
    });

    rsx! {
        div {
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { style: "margin: 0;", "Payments" }
                button {
                    style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 13px; cursor: pointer;",
                    onclick: move |_| {
                        *payments_tick.write() += 1;
                    },
                    "Refresh"
                }
            }

            {match &*payments.read() {
                None => rsx! {
                    p { style: "color: #888; margin-top: 16px;", "Loading your payments..." }
                },
                Some(Err(e)) => {
                    let friendly = humanize_error(e);
                    rsx! {
                        p { style: "margin-top: 16px; padding: 12px; border-radius: 10px; background: #fdecec; color: #b3261e; font-size: 14px;",
                            "{friendly.message} {friendly.suggestion}"
                        }
                    }
                }
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { style: "color: #888; margin-top: 16px;",
                        "No payments yet. Fees appear here once you pay for a filing."
                    }
                },
                Some(Ok(list)) => rsx! {
                    for payment in list.iter() {
                        {
                            let when = payment.created_at.format("%d %b %Y").to_string();
                            let reference = payment.reference.as_deref().unwrap_or("pending").to_string();
                            let amount = if payment.currency == "INR" {
                                format_inr(payment.amount)
                            } else {
                                format!("{} {}", payment.currency, payment.amount)
                            };
                            let bg = payment_bg(payment.status);
                            let fg = payment_fg(payment.status);
                            rsx! {
                                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 14px; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 10px; background: white;",
                                    div {
                                        strong { style: "color: #1f2430;", "{payment.service_name}" }
                                        p { style: "color: #888; font-size: 13px; margin: 2px 0 0;",
                                            "{when} \u{b7} Ref {reference}"
                                        }
                                    }
                                    div { style: "display: flex; align-items: center; gap: 12px;",
                                        strong { style: "color: #1f2430; font-size: 15px;", "{amount}" }
                                        span { style: "padding: 4px 10px; border-radius: 999px; background: {bg}; color: {fg}; font-size: 12px;",
                                            {payment.status.label()}
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

fn payment_bg(s: PaymentStatus) -> &'static str {
    match s {
        PaymentStatus::Created => "#fdf3e7",
        PaymentStatus::Captured => "#e7f6ec",
        PaymentStatus::Failed => "#fdecec",
        PaymentStatus::Refunded => "#e8f1fd",
    }
}

fn payment_fg(s: PaymentStatus) -> &'static str {
    match s {
        PaymentStatus::Created => "#b26a00",
        PaymentStatus::Captured => "#1d7a39",
        PaymentStatus::Failed => "#b3261e",
        PaymentStatus::Refunded => "#1565c0",
    }
}
