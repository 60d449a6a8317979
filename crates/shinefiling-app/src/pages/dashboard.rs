// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dashboard: filed applications plus the notification feed.
//
// The notification poll lives inside DashboardContent, so it starts when a
// signed-in user opens the page and stops the moment the view unmounts.

use dioxus::prelude::*;

use shinefiling_core::human_errors::humanize_error;
use shinefiling_core::types::{ApplicationStatus, Notification};

use crate::Route;
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Dashboard() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div {
            if state.read().user.is_some() {
                DashboardContent {}
            } else {
                div { style: "text-align: center; padding: 64px 24px;",
                    h1 { "Your dashboard" }
                    p { style: "color: #666;", "Sign in to track your applications and notifications." }
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
fn DashboardContent() -> Element {
    let svc = use_context::<AppServices>();

    let mut apps_tick = use_signal(|| 0u32);
    let mut notes = use_signal(Vec::<Notification>::new);
    let mut notes_stale = use_signal(|| false);

    let svc_apps = svc.clone();
    let applications = use_resource(move || {
        let svc = svc_apps.clone();
        async move {
            let _tick = *apps_tick.read();
            svc.applications().await
        }
    });

    // Poll the notification feed while the page is open.
    let svc_poll = svc.clone();
    let _poller = use_resource(move || {
        let svc = svc_poll.clone();
        async move {
            loop {
                match svc.notifications().await {
                    Ok(list) => {
                        notes.set(list);
                        notes_stale.set(false);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "notification fetch failed");
                        notes_stale.set(true);
                    }
                }
                let secs = svc.config().notification_poll_secs;
                tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
            }
        }
    });

    rsx! {
        div {
            h1 { "Dashboard" }

            section { style: "margin: 16px 0;",
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    h2 { style: "margin: 0;", "Your applications" }
                    button {
                        style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 13px; cursor: pointer;",
                        onclick: move |_| {
                            *apps_tick.write() += 1;
                        },
                        "Refresh"
                    }
                }

                {match &*applications.read() {
                    None => rsx! {
                        p { style: "color: #888;", "Loading your applications..." }
                    },
                    Some(Err(e)) => {
                        let friendly = humanize_error(e);
                        rsx! {
                            p { style: "margin-top: 12px; padding: 12px; border-radius: 10px; background: #fdecec; color: #b3261e; font-size: 14px;",
                                "{friendly.message} {friendly.suggestion}"
                            }
                        }
                    }
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        div { style: "margin-top: 12px; padding: 24px; border: 1px dashed #ccc; border-radius: 12px; text-align: center; color: #666;",
                            p { style: "margin: 0 0 8px;", "You haven't filed anything yet." }
                            Link { to: Route::Home {}, style: "color: #0f2a43; font-weight: 600;", "Browse services" }
                        }
                    },
                    Some(Ok(list)) => rsx! {
                        for application in list.iter() {
                            {
                                let submitted = application.submitted_at.format("%d %b %Y").to_string();
                                let bg = status_bg(application.status);
                                let fg = status_fg(application.status);
                                rsx! {
                                    div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 14px; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 10px; background: white;",
                                        div {
                                            strong { style: "color: #1f2430;", "{application.service_name}" }
                                            p { style: "color: #888; font-size: 13px; margin: 2px 0 0;",
                                                "Submitted {submitted} \u{b7} Ref {application.id}"
                                            }
                                            if let Some(ref note) = application.notes {
                                                p { style: "color: #b26a00; font-size: 13px; margin: 4px 0 0;", "{note}" }
                                            }
                                        }
                                        span { style: "padding: 4px 10px; border-radius: 999px; background: {bg}; color: {fg}; font-size: 12px; white-space: nowrap;",
                                            {application.status.label()}
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}
            }

            section { style: "margin: 28px 0;",
                h2 { style: "margin: 0 0 8px;", "Notifications" }
                if *notes_stale.read() {
                    p { style: "color: #b26a00; font-size: 13px;", "Couldn't refresh just now; retrying." }
                }
                if notes.read().is_empty() {
                    p { style: "color: #888;", "Nothing here yet. We'll let you know when an application moves." }
                }
                for notification in notes.read().iter() {
                    {
                        let id = notification.id.clone();
                        let when = notification.created_at.format("%d %b %Y, %H:%M").to_string();
                        let weight = if notification.read { "normal" } else { "600" };
                        let bg = if notification.read { "white" } else { "#f2f7fd" };
                        rsx! {
                            div { style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 12px; padding: 12px 14px; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 10px; background: {bg};",
                                div {
                                    p { style: "margin: 0; font-weight: {weight}; color: #1f2430;", "{notification.title}" }
                                    p { style: "margin: 4px 0 0; color: #555; font-size: 14px;", "{notification.message}" }
                                    span { style: "color: #999; font-size: 12px;", "{when}" }
                                }
                                if !notification.read {
                                    button {
                                        style: "padding: 4px 10px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 12px; white-space: nowrap; cursor: pointer;",
                                        onclick: {
                                            let svc = svc.clone();
                                            move |_| {
                                                let svc = svc.clone();
                                                let id = id.clone();
                                                spawn(async move {
                                                    match svc.mark_notification_read(&id).await {
                                                        Ok(()) => {
                                                            if let Some(n) = notes
                                                                .write()
                                                                .iter_mut()
                                                                .find(|n| n.id == id)
                                                            {
                                                                n.read = true;
                                                            }
                                                        }
                                                        Err(e) => {
                                                            tracing::warn!(error = %e, "mark read failed")
                                                        }
                                                    }
                                                });
                                            }
                                        },
                                        "Mark read"
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

fn status_bg(s: ApplicationStatus) -> &'static str {
    match s {
        ApplicationStatus::Submitted => "#eef2f7",
        ApplicationStatus::InReview => "#e8f1fd",
        ApplicationStatus::ActionRequired => "#fdf3e7",
        ApplicationStatus::Completed => "#e7f6ec",
        ApplicationStatus::Rejected => "#fdecec",
    }
}

fn status_fg(s: ApplicationStatus) -> &'static str {
    match s {
        ApplicationStatus::Submitted => "#5b6776",
        ApplicationStatus::InReview => "#1565c0",
        ApplicationStatus::ActionRequired => "#b26a00",
        ApplicationStatus::Completed => "#1d7a39",
        ApplicationStatus::Rejected => "#b3261e",
    }
}
