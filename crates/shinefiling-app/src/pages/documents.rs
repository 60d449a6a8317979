// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document vault: upload identity and incorporation papers once, reuse
// them across filings.

use dioxus::prelude::*;

use shinefiling_core::human_errors::humanize_error;

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Documents() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div {
            if state.read().user.is_some() {
                VaultContent {}
            } else {
                div { style: "text-align: center; padding: 64px 24px;",
                    h1 { "Document vault" }
                    p { style: "color: #666;", "Sign in to keep your PAN, Aadhaar and incorporation papers in one place." }
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
fn VaultContent() -> Element {
    let svc = use_context::<AppServices>();

    let mut docs_tick = use_signal(|| 0u32);
    let mut doc_name = use_signal(String::new);
    let mut category = use_signal(|| "identity".to_string());
    let mut picked = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut busy = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let svc_docs = svc.clone();
    let documents = use_resource(move || {
        let svc = svc_docs.clone();
        async move {
            let _tick = *docs_tick.read();
            svc.documents().await
        }
    });

    let picked_line = match &*picked.read() {
        Some((file_name, bytes)) => {
            format!("{file_name} ({})", format_size(bytes.len() as u64))
        }
        None => "No file chosen yet".to_string(),
    };

    rsx! {
        div {
            h1 { "Document vault" }

            section { style: "margin: 16px 0; padding: 16px; border: 1px solid #e0e0e0; border-radius: 12px; background: white; max-width: 480px;",
                h3 { style: "margin: 0 0 12px;", "Add a document" }
                input {
                    r#type: "text",
                    placeholder: "Name, e.g. PAN card",
                    value: "{doc_name}",
                    style: "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px;",
                    oninput: move |evt| doc_name.set(evt.value().to_string()),
                }
                select {
                    style: "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px; background: white;",
                    value: "{category}",
                    onchange: move |evt| category.set(evt.value().to_string()),
                    option { value: "identity", "Identity" }
                    option { value: "address", "Address proof" }
                    option { value: "incorporation", "Incorporation" }
                    option { value: "tax", "Tax" }
                    option { value: "other", "Other" }
                }
                div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 12px;",
                    button {
                        style: "padding: 10px 16px; border-radius: 10px; border: 1px solid #0f2a43; color: #0f2a43; background: white; font-size: 14px; cursor: pointer;",
                        onclick: move |_| {
                            #[cfg(not(any(target_os = "ios", target_os = "android")))]
                            {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("Documents", &["pdf", "jpg", "jpeg", "png"])
                                    .pick_file()
                                {
                                    let name = path
                                        .file_name()
                                        .map(|n| n.to_string_lossy().to_string())
                                        .unwrap_or_else(|| "unknown".into());
                                    match std::fs::read(&path) {
                                        Ok(bytes) => {
                                            tracing::info!(file = %name, bytes = bytes.len(), "file loaded");
                                            if doc_name.read().trim().is_empty() {
                                                let stem = path
                                                    .file_stem()
                                                    .map(|s| s.to_string_lossy().to_string())
                                                    .unwrap_or_default();
                                                doc_name.set(stem);
                                            }
                                            picked.set(Some((name, bytes)));
                                            error_msg.set(None);
                                        }
                                        Err(e) => {
                                            tracing::error!(error = %e, "could not read file");
                                            error_msg.set(Some(format!("Could not read that file: {e}")));
                                        }
                                    }
                                }
                            }
                        },
                        "Choose file"
                    }
                    span { style: "color: #666; font-size: 13px;", "{picked_line}" }
                }
                button {
                    style: "width: 100%; padding: 12px; border-radius: 10px; border: none; background: #0f2a43; color: white; font-size: 15px; font-weight: 600; cursor: pointer;",
                    disabled: *busy.read()
                        || doc_name.read().trim().is_empty()
                        || picked.read().is_none(),
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let Some((file_name, bytes)) = picked.read().clone() else {
                                return;
                            };
                            let svc = svc.clone();
                            let name = doc_name.read().trim().to_string();
                            let chosen_category = category.read().clone();
                            busy.set(true);
                            error_msg.set(None);
                            spawn(async move {
                                match svc
                                    .upload_document(name, chosen_category, file_name, bytes)
                                    .await
                                {
                                    Ok(stored) => {
                                        tracing::info!(id = %stored.id, "document stored");
                                        doc_name.set(String::new());
                                        picked.set(None);
                                        *docs_tick.write() += 1;
                                    }
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
                    if *busy.read() { "Uploading..." } else { "Upload" }
                }
                if let Some(ref msg) = *error_msg.read() {
                    p { style: "margin: 12px 0 0; padding: 12px; border-radius: 10px; background: #fdecec; color: #b3261e; font-size: 14px;",
                        "{msg}"
                    }
                }
            }

            {match &*documents.read() {
                None => rsx! {
                    p { style: "color: #888;", "Loading your vault..." }
                },
                Some(Err(e)) => {
                    let friendly = humanize_error(e);
                    rsx! {
                        p { style: "padding: 12px; border-radius: 10px; background: #fdecec; color: #b3261e; font-size: 14px;",
                            "{friendly.message} {friendly.suggestion}"
                        }
                    }
                }
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { style: "color: #888;", "Your vault is empty. Upload your first document above." }
                },
                Some(Ok(list)) => rsx! {
                    for document in list.iter() {
                        {
                            let when = document.uploaded_at.format("%d %b %Y").to_string();
                            let size = format_size(document.size_bytes);
                            let sha_short = document
                                .sha256
                                .get(..12)
                                .unwrap_or(&document.sha256)
                                .to_string();
                            rsx! {
                                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 14px; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 10px; background: white;",
                                    div {
                                        strong { style: "color: #1f2430;", "{document.name}" }
                                        p { style: "color: #888; font-size: 13px; margin: 2px 0 0;",
                                            "{document.file_name} \u{b7} {size} \u{b7} sha256 {sha_short}\u{2026} \u{b7} {when}"
                                        }
                                    }
                                    span { style: "padding: 4px 10px; border-radius: 999px; background: #eef2f7; color: #5b6776; font-size: 12px;",
                                        "{document.category}"
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

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.0} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
