// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Catalog reconciliation.
//
// Three sources describe what ShineFiling sells: the compiled-in taxonomy,
// the backend catalog, and the device's local hide overrides. This module
// merges them into one keyed view. The merge is pure (same inputs, same
// output) and never mutates its arguments, so callers can re-run it on
// every change notification.
//
// Precedence on a name match: backend data wins for id, price, status,
// SLA, document list, description, and display name. The icon only moves
// when the backend actually set one, and category label and colour stay
// with the taxonomy.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use shinefiling_core::types::{CatalogEntry, ServiceStatus};

use crate::slug::normalize_name;
use crate::taxonomy::{FALLBACK_CATEGORY, ServiceDefinition, categories, category_meta};

/// Where a reconciled service came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOrigin {
    /// Only the compiled-in taxonomy knows it (a "ghost": advertised, not
    /// yet listed on the backend).
    Taxonomy,
    /// Present in the backend catalog (possibly also in the taxonomy).
    Catalog,
}

/// One service after merging taxonomy, backend, and overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledService {
    /// Normalized display name; the de-duplication key.
    pub key: String,
    pub name: String,
    pub category_id: String,
    pub category_label: String,
    pub icon: String,
    pub color: String,
    pub origin: ServiceOrigin,
    /// Backend id, when the service is listed there.
    pub remote_id: Option<String>,
    /// Price in whole rupees. Ghosts have no price until the backend
    /// lists them.
    pub price: Option<u32>,
    pub status: ServiceStatus,
    pub sla: Option<String>,
    pub docs_required: Vec<String>,
    pub description: Option<String>,
    /// Hidden on this device by an admin override.
    pub locally_disabled: bool,
}

impl ReconciledService {
    /// Identifier to write when toggling a local override: the backend id
    /// when known, otherwise the normalized name. Never the legacy
    /// positional form.
    pub fn override_id(&self) -> &str {
        self.remote_id.as_deref().unwrap_or(&self.key)
    }

    /// Whether customers should see this service.
    pub fn is_visible(&self) -> bool {
        self.status.is_active() && !self.locally_disabled
    }
}

/// Legacy override id for a taxonomy slot: `<category_id>_<index>` with the
/// index counted per category in taxonomy order. Old builds wrote these
/// into the override store.
fn legacy_override_id(category_id: &str, index: usize) -> String {
    format!("{category_id}_{index}")
}

/// Merge the three sources into a map keyed by normalized name.
///
/// Includes every service, hidden or not; the admin view needs the full
/// picture. Use [`reconcile`] for the customer-facing subset.
pub fn merge_catalog(
    definitions: &[ServiceDefinition],
    remote: &[CatalogEntry],
    inactive: &HashSet<String>,
) -> BTreeMap<String, ReconciledService> {
    let mut merged: BTreeMap<String, ReconciledService> = BTreeMap::new();

    // Seed with the taxonomy. Track each definition's position within its
    // category to honour legacy positional override ids.
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for def in definitions {
        let index = positions.entry(def.category.id).or_insert(0);
        let legacy_id = legacy_override_id(def.category.id, *index);
        *index += 1;

        let key = normalize_name(def.name);
        let locally_disabled = inactive.contains(&key) || inactive.contains(&legacy_id);

        merged.insert(
            key.clone(),
            ReconciledService {
                key,
                name: def.name.to_owned(),
                category_id: def.category.id.to_owned(),
                category_label: def.category.label.to_owned(),
                icon: def.category.icon.to_owned(),
                color: def.category.color.to_owned(),
                origin: ServiceOrigin::Taxonomy,
                remote_id: None,
                price: None,
                status: ServiceStatus::Active,
                sla: None,
                docs_required: Vec::new(),
                description: None,
                locally_disabled,
            },
        );
    }

    // Overlay the backend catalog. A later remote entry with the same
    // normalized name wins over an earlier one.
    for entry in remote {
        let key = normalize_name(&entry.name);
        match merged.get_mut(&key) {
            Some(existing) => {
                existing.name = entry.name.clone();
                existing.origin = ServiceOrigin::Catalog;
                existing.remote_id = Some(entry.id.clone());
                existing.price = Some(entry.price);
                existing.status = entry.status;
                existing.sla = entry.sla.clone();
                existing.docs_required = entry.docs_required.clone();
                existing.description = entry.description.clone();
                if let Some(icon) = &entry.icon {
                    existing.icon = icon.clone();
                }
                existing.locally_disabled =
                    existing.locally_disabled || inactive.contains(&entry.id);
            }
            None => {
                let meta = match category_meta(&entry.category_id) {
                    Some(meta) => meta,
                    None => {
                        debug!(
                            category_id = %entry.category_id,
                            name = %entry.name,
                            "unknown backend category, grouping under fallback"
                        );
                        FALLBACK_CATEGORY
                    }
                };
                let locally_disabled =
                    inactive.contains(&entry.id) || inactive.contains(&key);

                merged.insert(
                    key.clone(),
                    ReconciledService {
                        key,
                        name: entry.name.clone(),
                        category_id: meta.id.to_owned(),
                        category_label: meta.label.to_owned(),
                        icon: entry
                            .icon
                            .clone()
                            .unwrap_or_else(|| meta.icon.to_owned()),
                        color: meta.color.to_owned(),
                        origin: ServiceOrigin::Catalog,
                        remote_id: Some(entry.id.clone()),
                        price: Some(entry.price),
                        status: entry.status,
                        sla: entry.sla.clone(),
                        docs_required: entry.docs_required.clone(),
                        description: entry.description.clone(),
                        locally_disabled,
                    },
                );
            }
        }
    }

    merged
}

/// The customer-facing view: merged catalog restricted to visible services.
pub fn reconcile(
    definitions: &[ServiceDefinition],
    remote: &[CatalogEntry],
    inactive: &HashSet<String>,
) -> BTreeMap<String, ReconciledService> {
    let mut merged = merge_catalog(definitions, remote, inactive);
    merged.retain(|_, service| service.is_visible());
    merged
}

/// Services bucketed by category for the storefront and mega-menu.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub services: Vec<ReconciledService>,
}

/// Bucket a reconciled map by category, in taxonomy display order with the
/// fallback category last. Within a group, services keep the map's
/// normalized-name ordering. Empty categories are omitted.
pub fn group_by_category(services: &BTreeMap<String, ReconciledService>) -> Vec<CategoryGroup> {
    let mut buckets: HashMap<&str, Vec<&ReconciledService>> = HashMap::new();
    for service in services.values() {
        buckets
            .entry(service.category_id.as_str())
            .or_default()
            .push(service);
    }

    let mut groups = Vec::new();
    for meta in categories().chain(std::iter::once(FALLBACK_CATEGORY)) {
        if let Some(in_category) = buckets.remove(meta.id) {
            groups.push(CategoryGroup {
                id: meta.id.to_owned(),
                label: meta.label.to_owned(),
                icon: meta.icon.to_owned(),
                color: meta.color.to_owned(),
                services: in_category.into_iter().cloned().collect(),
            });
        }
    }
    groups
}
