// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Generic application form for services without a dedicated page. The
// service name arrives in the query string and stays editable.

use dioxus::prelude::*;

use crate::Route;
use crate::components::filing_form::FilingForm;

#[component]
pub fn Apply(name: String) -> Element {
    // The component stays mounted across apply-route navigations, so the
    // field tracks the query name and resets whenever it changes.
    let mut field = use_signal({
        let name = name.clone();
        move || NameField::new(name)
    });
    if !field.read().tracks(&name) {
        field.set(NameField::new(name.clone()));
    }
    let current = field.read().value().to_string();

    rsx! {
        div { style: "max-width: 760px; margin: 0 auto;",
            Link { to: Route::Home {}, style: "color: #666; font-size: 14px; text-decoration: none;",
                "\u{2190} All services"
            }

            if current.is_empty() {
                h1 { style: "margin: 16px 0 4px;", "Start an application" }
            } else {
                h1 { style: "margin: 16px 0 4px;", "Apply for {current}" }
            }
            p { style: "color: #666; font-size: 15px; margin: 0 0 20px;",
                "This service doesn't have a dedicated page yet. Leave your details and our agents will call you with the next steps and a quote."
            }

            div { style: "max-width: 480px; margin-bottom: 4px;",
                label { style: "display: block; font-size: 14px; font-weight: 600; margin-bottom: 6px;",
                    "Service"
                }
                input {
                    r#type: "text",
                    placeholder: "Which service do you need?",
                    value: "{current}",
                    style: "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 10px; box-sizing: border-box; margin-bottom: 12px;",
                    oninput: move |evt| field.write().edit(evt.value().to_string()),
                }
            }

            FilingForm { service_name: current.clone() }
        }
    }
}

/// Editable service-name field: the route's query name shows until the
/// user types, and a navigation to a different query name discards the
/// edit.
struct NameField {
    route_name: String,
    edited: Option<String>,
}

impl NameField {
    fn new(route_name: String) -> Self {
        Self {
            route_name,
            edited: None,
        }
    }

    fn tracks(&self, route_name: &str) -> bool {
        self.route_name == route_name
    }

    fn edit(&mut self, value: String) {
        self.edited = Some(value);
    }

    fn value(&self) -> &str {
        self.edited.as_deref().unwrap_or(&self.route_name)
    }
}

#[cfg(test)]
mod tests {
    use super::NameField;

    #[test]
    fn route_name_shows_until_the_user_types() {
        let mut field = NameField::new("GST Registration".into());
        assert_eq!(field.value(), "GST Registration");

        field.edit("GST Registration for my NGO".into());
        assert_eq!(field.value(), "GST Registration for my NGO");
    }

    #[test]
    fn a_different_route_name_discards_the_edit() {
        let mut field = NameField::new("GST Registration".into());
        field.edit("Something else entirely".into());

        assert!(field.tracks("GST Registration"));
        assert!(!field.tracks("Trademark Search"));

        field = NameField::new("Trademark Search".into());
        assert_eq!(field.value(), "Trademark Search");
    }
}
