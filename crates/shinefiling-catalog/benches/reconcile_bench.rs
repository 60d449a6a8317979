// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for name normalization, slug lookup, and catalog
// reconciliation in the shinefiling-catalog crate.
//
// Reconciliation re-runs on every change notification in every mounted
// view, so it has to stay comfortably in the sub-millisecond range even
// with a catalog several times larger than today's.

use std::collections::HashSet;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use shinefiling_catalog::{merge_catalog, normalize_name, reconcile, resolve_slug};
use shinefiling_catalog::taxonomy::definitions;
use shinefiling_core::types::{CatalogEntry, ServiceStatus};

// ---------------------------------------------------------------------------
// Helpers: synthetic backend catalogs of various shapes
// ---------------------------------------------------------------------------

/// A backend catalog that lists every taxonomy service plus `extra` entries
/// the taxonomy has never heard of.
fn synthetic_catalog(extra: usize) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = definitions()
        .iter()
        .enumerate()
        .map(|(i, def)| CatalogEntry {
            id: format!("svc{i:04}"),
            name: def.name.to_owned(),
            category_id: def.category.id.to_owned(),
            price: 999 + (i as u32) * 10,
            status: if i % 7 == 0 {
                ServiceStatus::Inactive
            } else {
                ServiceStatus::Active
            },
            sla: Some("7-10 working days".into()),
            docs_required: vec!["PAN card".into(), "Aadhaar card".into()],
            description: Some("Handled end to end by a dedicated agent.".into()),
            icon: None,
        })
        .collect();

    for i in 0..extra {
        entries.push(CatalogEntry {
            id: format!("extra{i:04}"),
            name: format!("Sector Specific Clearance {i}"),
            category_id: "licenses".into(),
            price: 4999,
            status: ServiceStatus::Active,
            sla: None,
            docs_required: Vec::new(),
            description: None,
            icon: None,
        });
    }

    entries
}

/// An override set hiding a spread of services by the three id forms the
/// store can contain.
fn synthetic_overrides() -> HashSet<String> {
    let mut inactive = HashSet::new();
    inactive.insert("svc0003".to_owned());
    inactive.insert("nidhicompanyregistration".to_owned());
    inactive.insert("business_reg_0".to_owned());
    inactive.insert("extra0001".to_owned());
    inactive
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark normalizing a typical display name.
fn bench_normalize_name(c: &mut Criterion) {
    c.bench_function("normalize_name", |b| {
        b.iter(|| {
            let key = normalize_name(black_box("Private Limited Company Registration"));
            black_box(key);
        });
    });
}

/// Benchmark a slug lookup, the hot path of every service link render.
fn bench_resolve_slug(c: &mut Criterion) {
    c.bench_function("resolve_slug (hit)", |b| {
        b.iter(|| {
            let slug = resolve_slug(black_box("GST Registration"));
            black_box(slug);
        });
    });

    c.bench_function("resolve_slug (miss)", |b| {
        b.iter(|| {
            let slug = resolve_slug(black_box("Sector Specific Clearance 42"));
            black_box(slug);
        });
    });
}

/// Benchmark a full reconciliation at today's catalog size and at several
/// times that.
fn bench_reconcile(c: &mut Criterion) {
    let defs = definitions();
    let overrides = synthetic_overrides();

    let todays = synthetic_catalog(20);
    c.bench_function("reconcile (taxonomy + 100 remote)", |b| {
        b.iter(|| {
            let merged = reconcile(black_box(&defs), black_box(&todays), black_box(&overrides));
            black_box(merged);
        });
    });

    let grown = synthetic_catalog(400);
    c.bench_function("reconcile (taxonomy + ~500 remote)", |b| {
        b.iter(|| {
            let merged = reconcile(black_box(&defs), black_box(&grown), black_box(&overrides));
            black_box(merged);
        });
    });

    c.bench_function("merge_catalog (admin view)", |b| {
        b.iter(|| {
            let merged =
                merge_catalog(black_box(&defs), black_box(&todays), black_box(&overrides));
            black_box(merged);
        });
    });
}

criterion_group!(
    benches,
    bench_normalize_name,
    bench_resolve_slug,
    bench_reconcile,
);
criterion_main!(benches);
