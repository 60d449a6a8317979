// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ShineFiling service catalog: the compiled-in taxonomy, slug routing,
// local visibility overrides, and reconciliation against the backend.

pub mod overrides;
pub mod reconcile;
pub mod slug;
pub mod taxonomy;

pub use overrides::{INACTIVE_SERVICES_KEY, ServiceManager};
pub use reconcile::{
    CategoryGroup, ReconciledService, ServiceOrigin, group_by_category, merge_catalog, reconcile,
};
pub use slug::{normalize_name, resolve_slug, service_route};
pub use taxonomy::{CategoryMeta, ServiceDefinition, categories, category_meta, definitions};
