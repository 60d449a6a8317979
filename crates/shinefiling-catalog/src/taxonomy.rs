// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The compiled-in service taxonomy.
//
// This is the client's offline knowledge of what ShineFiling sells: every
// category and service name the marketing pages mention, in display order.
// The backend catalog overlays live data (prices, availability) on top of
// it at reconciliation time; when the backend is unreachable the taxonomy
// alone still renders a complete storefront.

/// Static metadata for a service category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub id: &'static str,
    pub label: &'static str,
    /// Icon name from the app's icon set.
    pub icon: &'static str,
    /// Colour token used for category accents.
    pub color: &'static str,
}

/// Category used for remote entries whose category id is not in the taxonomy.
pub const FALLBACK_CATEGORY: CategoryMeta = CategoryMeta {
    id: "other",
    label: "Other Services",
    icon: "folder",
    color: "slate",
};

/// A service as declared in the compiled-in taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefinition {
    pub category: CategoryMeta,
    pub name: &'static str,
}

/// Master table: categories in display order, each with its services in
/// display order. Positions matter: they back the legacy override ids
/// (`<category_id>_<index>`) still present in stores written by old builds.
const TAXONOMY: &[(CategoryMeta, &[&str])] = &[
    (
        CategoryMeta {
            id: "business_reg",
            label: "Business Registration",
            icon: "building-2",
            color: "sky",
        },
        &[
            "Private Limited Company Registration",
            "Limited Liability Partnership Registration",
            "One Person Company Registration",
            "Partnership Firm Registration",
            "Sole Proprietorship Registration",
            "Section 8 Company Registration",
            "Nidhi Company Registration",
            "Producer Company Registration",
            "Public Limited Company Registration",
            "Indian Subsidiary Registration",
            "Startup India Registration",
        ],
    ),
    (
        CategoryMeta {
            id: "tax_compliance",
            label: "Tax & Compliance",
            icon: "receipt",
            color: "emerald",
        },
        &[
            "GST Registration",
            "GST Return Filing",
            "GST Annual Return",
            "GST LUT Filing",
            "GST Cancellation",
            "GST Notice Reply",
            "Income Tax Return Filing",
            "Income Tax Notice Reply",
            "TDS Return Filing",
            "Advance Tax Payment",
            "Professional Tax Registration",
            "Tax Audit",
        ],
    ),
    (
        CategoryMeta {
            id: "licenses",
            label: "Licenses & Registrations",
            icon: "badge-check",
            color: "amber",
        },
        &[
            "FSSAI Registration",
            "FSSAI State License",
            "FSSAI Central License",
            "FSSAI License Renewal",
            "Import Export Code Registration",
            "Trade License",
            "Shop and Establishment Registration",
            "Udyam Registration",
            "Drug License",
            "PSARA License",
            "Factory License",
        ],
    ),
    (
        CategoryMeta {
            id: "intellectual_property",
            label: "Intellectual Property",
            icon: "lightbulb",
            color: "violet",
        },
        &[
            "Trademark Registration",
            "Trademark Objection Reply",
            "Trademark Opposition",
            "Trademark Renewal",
            "Trademark Assignment",
            "Copyright Registration",
            "Provisional Patent Application",
            "Patent Registration",
            "Design Registration",
        ],
    ),
    (
        CategoryMeta {
            id: "legal_drafting",
            label: "Legal Drafting",
            icon: "scale",
            color: "rose",
        },
        &[
            "Legal Notice Drafting",
            "Rent Agreement Drafting",
            "Partnership Deed Drafting",
            "Founders Agreement Drafting",
            "Shareholders Agreement Drafting",
            "Non Disclosure Agreement Drafting",
            "Employment Agreement Drafting",
            "Service Agreement Drafting",
            "Franchise Agreement Drafting",
            "Will Drafting",
        ],
    ),
    (
        CategoryMeta {
            id: "roc_compliance",
            label: "ROC & Annual Filings",
            icon: "calendar-check",
            color: "indigo",
        },
        &[
            "Private Limited Annual Compliance",
            "LLP Annual Filing",
            "Director Appointment",
            "Director Resignation",
            "Director KYC Filing",
            "Registered Office Change",
            "Authorised Capital Increase",
            "Share Transfer Filing",
            "Company Name Change",
            "MOA Amendment",
            "Company Strike Off",
            "LLP Closure",
        ],
    ),
    (
        CategoryMeta {
            id: "payroll",
            label: "Payroll & Labour",
            icon: "users",
            color: "teal",
        },
        &[
            "Provident Fund Registration",
            "ESI Registration",
            "Payroll Processing",
            "PF Return Filing",
            "ESI Return Filing",
            "Labour Welfare Fund Registration",
            "Gratuity Advisory",
            "Contract Labour License",
        ],
    ),
    (
        CategoryMeta {
            id: "certifications",
            label: "Certificates & Documents",
            icon: "stamp",
            color: "orange",
        },
        &[
            "Digital Signature Certificate",
            "ISO Certification",
            "Net Worth Certificate",
            "Turnover Certificate",
            "Lower Deduction Certificate",
            "Commencement of Business Certificate",
            "Share Valuation Certificate",
            "Solvency Certificate",
        ],
    ),
];

/// Categories in display order.
pub fn categories() -> impl Iterator<Item = CategoryMeta> {
    TAXONOMY.iter().map(|(meta, _)| *meta)
}

/// Every service in the taxonomy, in category-then-position order.
pub fn definitions() -> Vec<ServiceDefinition> {
    TAXONOMY
        .iter()
        .flat_map(|(meta, names)| {
            names.iter().map(|name| ServiceDefinition {
                category: *meta,
                name,
            })
        })
        .collect()
}

/// Look up a category by id. `None` for ids the taxonomy doesn't know.
pub fn category_meta(id: &str) -> Option<CategoryMeta> {
    categories().find(|meta| meta.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::normalize_name;

    #[test]
    fn taxonomy_is_nonempty_and_ordered() {
        let cats: Vec<_> = categories().collect();
        assert_eq!(cats.len(), 8);
        assert_eq!(cats[0].id, "business_reg");
        assert_eq!(cats.last().map(|c| c.id), Some("certifications"));
    }

    #[test]
    fn every_category_has_services() {
        for (meta, services) in TAXONOMY {
            assert!(
                !services.is_empty(),
                "category {} has no services",
                meta.id
            );
        }
    }

    #[test]
    fn definitions_carry_their_category() {
        let defs = definitions();
        assert!(defs.len() > 70);
        let gst = defs
            .iter()
            .find(|d| d.name == "GST Registration")
            .expect("GST Registration in taxonomy");
        assert_eq!(gst.category.id, "tax_compliance");
        assert_eq!(gst.category.label, "Tax & Compliance");
    }

    #[test]
    fn service_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for def in definitions() {
            assert!(seen.insert(def.name), "duplicate service name {}", def.name);
        }
    }

    #[test]
    fn service_names_stay_unique_after_normalization() {
        // Reconciliation keys entries by normalized name, so two
        // definitions must never collapse onto one key.
        let mut seen = std::collections::HashSet::new();
        for def in definitions() {
            assert!(
                seen.insert(normalize_name(def.name)),
                "{} collides with another service after normalization",
                def.name
            );
        }
    }

    #[test]
    fn category_lookup_by_id() {
        assert_eq!(
            category_meta("legal_drafting").map(|m| m.label),
            Some("Legal Drafting")
        );
        assert!(category_meta("minerals").is_none());
    }
}
