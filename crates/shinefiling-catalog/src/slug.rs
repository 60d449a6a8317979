// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service name → URL slug resolution.
//
// Display names are unreliable join keys: the backend, the taxonomy, and
// old marketing copy disagree on spacing, casing, and punctuation. All
// lookups therefore go through `normalize_name`, which reduces a name to
// lowercase alphanumerics. The table below maps normalized names to the
// slug of the service's dedicated page; names the table doesn't know fall
// back to the generic application form.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Reduce a display name to its canonical lookup key: lowercase, with
/// everything except ASCII letters and digits stripped.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Normalized name → slug. Keys MUST already be in `normalize_name` form
/// (the test module enforces this). Canonical entries first, grouped like
/// the taxonomy; alias entries for historical and backend spellings at the
/// end.
const SLUG_TABLE: &[(&str, &str)] = &[
    // -- Business registration --
    ("privatelimitedcompanyregistration", "private-limited-company"),
    ("limitedliabilitypartnershipregistration", "llp-registration"),
    ("onepersoncompanyregistration", "one-person-company"),
    ("partnershipfirmregistration", "partnership-firm"),
    ("soleproprietorshipregistration", "sole-proprietorship"),
    ("section8companyregistration", "section-8-company"),
    ("nidhicompanyregistration", "nidhi-company"),
    ("producercompanyregistration", "producer-company"),
    ("publiclimitedcompanyregistration", "public-limited-company"),
    ("indiansubsidiaryregistration", "indian-subsidiary"),
    ("startupindiaregistration", "startup-india-registration"),
    // -- Tax & compliance --
    ("gstregistration", "gst-registration"),
    ("gstreturnfiling", "gst-return-filing"),
    ("gstannualreturn", "gst-annual-return"),
    ("gstlutfiling", "gst-lut-filing"),
    ("gstcancellation", "gst-cancellation"),
    ("gstnoticereply", "gst-notice-reply"),
    ("incometaxreturnfiling", "income-tax-return-filing"),
    ("incometaxnoticereply", "income-tax-notice-reply"),
    ("tdsreturnfiling", "tds-return-filing"),
    ("advancetaxpayment", "advance-tax-payment"),
    ("professionaltaxregistration", "professional-tax-registration"),
    ("taxaudit", "tax-audit"),
    // -- Licenses & registrations --
    ("fssairegistration", "fssai-registration"),
    ("fssaistatelicense", "fssai-state-license"),
    ("fssaicentrallicense", "fssai-central-license"),
    ("fssailicenserenewal", "fssai-license-renewal"),
    ("importexportcoderegistration", "import-export-code"),
    ("tradelicense", "trade-license"),
    ("shopandestablishmentregistration", "shop-and-establishment"),
    ("udyamregistration", "udyam-registration"),
    ("druglicense", "drug-license"),
    ("psaralicense", "psara-license"),
    ("factorylicense", "factory-license"),
    // -- Intellectual property --
    ("trademarkregistration", "trademark-registration"),
    ("trademarkobjectionreply", "trademark-objection"),
    ("trademarkopposition", "trademark-opposition"),
    ("trademarkrenewal", "trademark-renewal"),
    ("trademarkassignment", "trademark-assignment"),
    ("copyrightregistration", "copyright-registration"),
    ("provisionalpatentapplication", "provisional-patent"),
    ("patentregistration", "patent-registration"),
    ("designregistration", "design-registration"),
    // -- Legal drafting --
    ("legalnoticedrafting", "legal-notice"),
    ("rentagreementdrafting", "rent-agreement"),
    ("partnershipdeeddrafting", "partnership-deed"),
    ("foundersagreementdrafting", "founders-agreement"),
    ("shareholdersagreementdrafting", "shareholders-agreement"),
    ("nondisclosureagreementdrafting", "nda-drafting"),
    ("employmentagreementdrafting", "employment-agreement"),
    ("serviceagreementdrafting", "service-agreement"),
    ("franchiseagreementdrafting", "franchise-agreement"),
    ("willdrafting", "will-drafting"),
    // -- ROC & annual filings --
    ("privatelimitedannualcompliance", "private-limited-annual-compliance"),
    ("llpannualfiling", "llp-annual-filing"),
    ("directorappointment", "director-appointment"),
    ("directorresignation", "director-resignation"),
    ("directorkycfiling", "director-kyc-filing"),
    ("registeredofficechange", "registered-office-change"),
    ("authorisedcapitalincrease", "authorised-capital-increase"),
    ("sharetransferfiling", "share-transfer"),
    ("companynamechange", "company-name-change"),
    ("moaamendment", "moa-amendment"),
    ("companystrikeoff", "company-strike-off"),
    ("llpclosure", "llp-closure"),
    // -- Payroll & labour --
    ("providentfundregistration", "provident-fund-registration"),
    ("esiregistration", "esi-registration"),
    ("payrollprocessing", "payroll-processing"),
    ("pfreturnfiling", "pf-return-filing"),
    ("esireturnfiling", "esi-return-filing"),
    ("labourwelfarefundregistration", "labour-welfare-fund"),
    ("gratuityadvisory", "gratuity-advisory"),
    ("contractlabourlicense", "contract-labour-license"),
    // -- Certificates & documents --
    ("digitalsignaturecertificate", "digital-signature-certificate"),
    ("isocertification", "iso-certification"),
    ("networthcertificate", "net-worth-certificate"),
    ("turnovercertificate", "turnover-certificate"),
    ("lowerdeductioncertificate", "lower-deduction-certificate"),
    ("commencementofbusinesscertificate", "commencement-of-business"),
    ("sharevaluationcertificate", "share-valuation-certificate"),
    ("solvencycertificate", "solvency-certificate"),
    // -- Aliases: historical names, backend spellings, marketing variants --
    ("companyregistration", "private-limited-company"),
    ("companyincorporation", "private-limited-company"),
    ("pvtltdcompanyregistration", "private-limited-company"),
    ("pvtltdregistration", "private-limited-company"),
    ("privatelimitedcompany", "private-limited-company"),
    ("privatelimitedregistration", "private-limited-company"),
    ("llpregistration", "llp-registration"),
    ("limitedliabilitypartnership", "llp-registration"),
    ("opcregistration", "one-person-company"),
    ("onepersoncompany", "one-person-company"),
    ("proprietorshipregistration", "sole-proprietorship"),
    ("section8company", "section-8-company"),
    ("startupindia", "startup-india-registration"),
    ("gst", "gst-registration"),
    ("newgstregistration", "gst-registration"),
    ("gstregistrationonline", "gst-registration"),
    ("gstfiling", "gst-return-filing"),
    ("gstreturns", "gst-return-filing"),
    ("gstmonthlyfiling", "gst-return-filing"),
    ("gstannualfiling", "gst-annual-return"),
    ("lutfiling", "gst-lut-filing"),
    ("gstsurrender", "gst-cancellation"),
    ("itrfiling", "income-tax-return-filing"),
    ("incometaxfiling", "income-tax-return-filing"),
    ("itr", "income-tax-return-filing"),
    ("tdsfiling", "tds-return-filing"),
    ("taxauditreport", "tax-audit"),
    ("fssai", "fssai-registration"),
    ("foodlicense", "fssai-registration"),
    ("foodlicenseregistration", "fssai-registration"),
    ("fssailicense", "fssai-registration"),
    ("iecregistration", "import-export-code"),
    ("importexportcode", "import-export-code"),
    ("iec", "import-export-code"),
    ("shopactlicense", "shop-and-establishment"),
    ("shopestablishmentlicense", "shop-and-establishment"),
    ("msmeregistration", "udyam-registration"),
    ("udyamaadhar", "udyam-registration"),
    ("trademark", "trademark-registration"),
    ("brandregistration", "trademark-registration"),
    ("tmregistration", "trademark-registration"),
    ("copyrightfiling", "copyright-registration"),
    ("patentfiling", "patent-registration"),
    ("nda", "nda-drafting"),
    ("nondisclosureagreement", "nda-drafting"),
    ("legalnotice", "legal-notice"),
    ("rentagreement", "rent-agreement"),
    ("annualcompliance", "private-limited-annual-compliance"),
    ("roccompliance", "private-limited-annual-compliance"),
    ("companyannualfiling", "private-limited-annual-compliance"),
    ("dinekyc", "director-kyc-filing"),
    ("directorkyc", "director-kyc-filing"),
    ("capitalincrease", "authorised-capital-increase"),
    ("strikeoff", "company-strike-off"),
    ("closecompany", "company-strike-off"),
    ("closellp", "llp-closure"),
    ("pfregistration", "provident-fund-registration"),
    ("epfregistration", "provident-fund-registration"),
    ("esic", "esi-registration"),
    ("esicregistration", "esi-registration"),
    ("payrolloutsourcing", "payroll-processing"),
    ("dsc", "digital-signature-certificate"),
    ("digitalsignature", "digital-signature-certificate"),
    ("iso", "iso-certification"),
    ("isocertificate", "iso-certification"),
    ("networthcertification", "net-worth-certificate"),
    ("turnovercertification", "turnover-certificate"),
];

static SLUG_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SLUG_TABLE.iter().copied().collect());

/// Slug for a service's dedicated page, or `None` when the name has no
/// dedicated page.
pub fn resolve_slug(name: &str) -> Option<&'static str> {
    SLUG_MAP.get(normalize_name(name).as_str()).copied()
}

/// In-app route for a service: its dedicated page when the slug table
/// knows the name, otherwise the generic application form with the name
/// carried in the query string.
pub fn service_route(name: &str) -> String {
    match resolve_slug(name) {
        Some(slug) => format!("/services/{slug}"),
        None => format!("/services/apply?name={}", urlencoding::encode(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::definitions;
    use std::collections::HashSet;

    #[test]
    fn normalize_strips_case_and_punctuation() {
        assert_eq!(normalize_name("GST Registration"), "gstregistration");
        assert_eq!(normalize_name("  G.S.T. Registration!! "), "gstregistration");
        assert_eq!(normalize_name("Section 8 Company Registration"), "section8companyregistration");
        assert_eq!(normalize_name("—"), "");
    }

    #[test]
    fn every_taxonomy_service_has_a_slug() {
        for def in definitions() {
            assert!(
                resolve_slug(def.name).is_some(),
                "no slug for taxonomy service {:?}",
                def.name
            );
        }
    }

    #[test]
    fn table_keys_are_already_normalized() {
        for (key, _) in SLUG_TABLE {
            assert_eq!(
                normalize_name(key),
                *key,
                "table key {key:?} is not in normalized form"
            );
        }
    }

    #[test]
    fn table_has_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (key, _) in SLUG_TABLE {
            assert!(seen.insert(key), "duplicate table key {key:?}");
        }
    }

    #[test]
    fn aliases_land_on_the_canonical_slug() {
        assert_eq!(
            resolve_slug("Company Registration"),
            resolve_slug("Private Limited Company Registration")
        );
        assert_eq!(resolve_slug("MSME Registration"), Some("udyam-registration"));
        assert_eq!(resolve_slug("Food License"), Some("fssai-registration"));
        assert_eq!(resolve_slug("DSC"), Some("digital-signature-certificate"));
    }

    #[test]
    fn unknown_name_has_no_slug() {
        assert_eq!(resolve_slug("Moon Mining Permit"), None);
    }

    #[test]
    fn known_name_routes_to_dedicated_page() {
        assert_eq!(
            service_route("GST Registration"),
            "/services/gst-registration"
        );
    }

    #[test]
    fn unknown_name_routes_to_generic_form_urlencoded() {
        let route = service_route("Mandi License & Permit");
        assert_eq!(
            route,
            "/services/apply?name=Mandi%20License%20%26%20Permit"
        );
    }
}
