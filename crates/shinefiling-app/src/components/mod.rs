// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

pub mod auth_modal;
pub mod filing_form;
pub mod navbar;

use shinefiling_catalog::resolve_slug;

use crate::Route;

/// Typed route for a service name. Names without a dedicated detail page
/// land on the generic application form instead.
pub fn service_target(name: &str) -> Route {
    match resolve_slug(name) {
        Some(slug) => Route::ServiceDetail {
            slug: slug.to_string(),
        },
        None => Route::Apply {
            name: name.to_string(),
        },
    }
}

/// Hex colour for a category accent name from the service taxonomy.
pub fn accent_hex(name: &str) -> &'static str {
    match name {
        "sky" => "#0284c7",
        "emerald" => "#059669",
        "amber" => "#d97706",
        "violet" => "#7c3aed",
        "rose" => "#e11d48",
        "indigo" => "#4f46e5",
        "teal" => "#0d9488",
        "orange" => "#ea580c",
        _ => "#475569",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_services_route_to_their_detail_page() {
        match service_target("GST Registration") {
            Route::ServiceDetail { slug } => assert_eq!(slug, "gst-registration"),
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn unknown_services_route_to_the_application_form() {
        match service_target("Bespoke Offshore Structuring") {
            Route::Apply { name } => assert_eq!(name, "Bespoke Offshore Structuring"),
            other => panic!("unexpected route: {other:?}"),
        }
    }
}
