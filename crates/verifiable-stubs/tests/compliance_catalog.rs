use std::sync::Arc;

use serde_json::json;
use verifiable_stubs::compliance::screening::{
    EntityComplianceRequest, FraudDetectRequest, SanctionsScreenRequest,
};
use verifiable_stubs::compliance::{ExternalComplianceService, PageRequest, RegulationFilter};
use verifiable_stubs::store::{
    InMemoryFraudPatternRepository, InMemoryRegulationRepository, InMemorySanctionsRepository,
};

type Catalog = ExternalComplianceService<
    InMemoryRegulationRepository,
    InMemorySanctionsRepository,
    InMemoryFraudPatternRepository,
>;

fn seeded() -> Catalog {
    let catalog = ExternalComplianceService::new(
        Arc::new(InMemoryRegulationRepository::default()),
        Arc::new(InMemorySanctionsRepository::default()),
        Arc::new(InMemoryFraudPatternRepository::default()),
    );
    let summary = catalog.seed_reference_data().expect("reference data loads");
    assert_eq!(summary.regulations, 7);
    catalog
}

#[test]
fn seeded_catalogue_lists_active_regulations_in_id_order() {
    let catalog = seeded();
    let listing = catalog
        .list_regulations(&RegulationFilter::active(), PageRequest::default())
        .expect("listing succeeds");

    assert_eq!(listing.total, 7);
    let ids: Vec<&str> = listing
        .regulations
        .iter()
        .map(|summary| summary.regulation_id.as_str())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn hipaa_entity_with_complete_documents_is_compliant() {
    let catalog = seeded();
    let document = json!({
        "phi_protection": "encrypted at rest",
        "access_control": "role based",
        "audit_logs": "retained 6 years"
    });
    let request = EntityComplianceRequest {
        entity_name: "Northwind Clinic".to_string(),
        entity_type: "company".to_string(),
        entity_country: "US".to_string(),
        industry: Some("healthcare".to_string()),
        categories: vec!["HIPAA".to_string(), "kyc".to_string()],
        document_data: document.as_object().cloned(),
    };

    let report = catalog.verify_entity(&request).expect("verification runs");
    assert_eq!(report.compliance_score, 100);
    assert_eq!(report.compliance_status, "compliant");
    assert_eq!(report.passed_checks.len(), 4);
}

#[test]
fn screening_reports_watchlist_hit_and_pep_status() {
    let catalog = seeded();
    let request = SanctionsScreenRequest {
        entity_name: "AL-QAEDA".to_string(),
        entity_type: "organization".to_string(),
        entity_country: None,
        check_pep: true,
        check_adverse_media: false,
        sanctions_lists: Some(vec!["ofac_sdn".to_string()]),
    };

    let report = catalog.screen_sanctions(&request).expect("screening runs");
    assert_eq!(report.screening_status, "potential_match");
    assert_eq!(report.matches[0].matched_name, "AL-QA'IDA");
    assert_eq!(report.matches[0].match_score, 70);
    let pep = report.pep_check.expect("pep check requested");
    assert!(!pep.is_pep);
}

#[test]
fn fraud_detection_ignores_documents_without_pattern_fields() {
    let catalog = seeded();
    let request = FraudDetectRequest {
        entity_name: "Contoso".to_string(),
        entity_type: "company".to_string(),
        document_data: json!({ "registration": "C-100" }).as_object().cloned(),
    };

    let assessment = catalog.detect_fraud(&request).expect("detection runs");
    assert_eq!(assessment.risk_score, 15);
    assert_eq!(assessment.risk_level, "low");
    assert!(assessment.patterns_detected.is_empty());
}
