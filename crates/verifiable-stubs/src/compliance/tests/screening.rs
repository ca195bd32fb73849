use chrono::Utc;
use serde_json::json;

use super::common::*;
use crate::compliance::screening::{
    assess_financial_health, detect_forgery, detect_fraud, verify_entity, DocumentForgeryRequest,
    EntityComplianceRequest, FinancialVerifyRequest, FraudDetectRequest, MatchType, Severity,
    SanctionsMatch,
};
use crate::compliance::{SanctionsEntry, SanctionsEntryInput, SanctionsList};

fn entity(categories: &[&str], document_data: Option<serde_json::Value>) -> EntityComplianceRequest {
    EntityComplianceRequest {
        entity_name: "Acme Corp".to_string(),
        entity_type: "company".to_string(),
        entity_country: "US".to_string(),
        industry: None,
        categories: categories.iter().map(|c| c.to_string()).collect(),
        document_data: document_data.map(document),
    }
}

#[test]
fn no_checks_scores_full_marks() {
    let report = verify_entity(&entity(&["iso"], None), &[], fixed_time());

    assert_eq!(report.compliance_score, 100);
    assert_eq!(report.compliance_status, "compliant");
    assert_eq!(report.risk_level, "low");
    assert_eq!(report.regulations_checked, vec!["iso"]);
}

#[test]
fn kyc_and_aml_defaults_pass() {
    let report = verify_entity(&entity(&["KYC", "aml"], None), &[], fixed_time());

    assert_eq!(
        report.passed_checks,
        vec![
            "KYC identity verification",
            "AML screening passed",
            "Business registration valid"
        ]
    );
    assert_eq!(report.compliance_score, 100);
}

#[test]
fn missing_ceo_certification_is_a_high_violation() {
    let report = verify_entity(&entity(&["sox"], None), &[], fixed_time());

    assert_eq!(report.compliance_score, 0);
    assert_eq!(report.compliance_status, "non_compliant");
    assert_eq!(report.risk_level, "high");
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].severity, Severity::High);
    assert_eq!(report.violations[0].article.as_deref(), Some("Section 302"));
    assert_eq!(report.missing_requirements, vec!["CEO certification document"]);
    assert_eq!(report.recommendations, vec!["Submit CEO/CFO certification"]);

    let certified = verify_entity(
        &entity(&["sox"], Some(json!({ "ceo_certification": "signed" }))),
        &[],
        fixed_time(),
    );
    assert_eq!(certified.passed_checks, vec!["SOX Section 302 compliance verified"]);
    assert!(certified.violations.is_empty());
}

#[test]
fn regulation_required_fields_count_towards_score() {
    let regulations = vec![regulation(
        "REG-GDPR",
        "GDPR",
        &["data_subject_consent", "purpose_limitation", "data_minimization"],
    )];
    let report = verify_entity(
        &entity(
            &["gdpr", "kyc"],
            Some(json!({ "data_subject_consent": true, "purpose_limitation": true })),
        ),
        &regulations,
        fixed_time(),
    );

    assert_eq!(
        report.passed_checks,
        vec![
            "GDPR: data_subject_consent verified",
            "GDPR: purpose_limitation verified",
            "KYC identity verification"
        ]
    );
    assert_eq!(report.missing_requirements, vec!["data_minimization"]);
    assert_eq!(
        report.recommendations,
        vec!["Provide data_minimization for GDPR compliance"]
    );
    assert_eq!(report.compliance_score, 75);
    assert_eq!(report.compliance_status, "partial");
    assert_eq!(report.risk_level, "medium");
}

#[test]
fn inactive_or_unrequested_regulations_are_ignored() {
    let mut inactive = regulation("REG-HIPAA", "HIPAA", &["phi_protection"]);
    inactive.details.is_active = false;
    let unrelated = regulation("REG-PCI", "PCI-DSS", &["tokenization"]);

    let report = verify_entity(&entity(&["hipaa"], None), &[inactive, unrelated], fixed_time());
    assert_eq!(report.compliance_score, 100);
    assert!(report.missing_requirements.is_empty());
}

fn listed(name: &str, aliases: &[&str]) -> SanctionsEntry {
    SanctionsEntry::new(
        SanctionsList::OfacSdn,
        SanctionsEntryInput {
            entry_id: "SDN-1".to_string(),
            name: name.to_string(),
            aliases: Some(aliases.iter().map(|a| a.to_string()).collect()),
            entity_type: "company".to_string(),
            country: "IR".to_string(),
            program: Some("IRAN".to_string()),
            listing_date: None,
            reason: None,
            additional_info: None,
            is_active: true,
        },
        Utc::now(),
    )
}

#[test]
fn sanctions_match_scores_exact_partial_and_alias_hits() {
    let entry = listed("ACME EVIL CORP", &["E.V.I.L. HOLDINGS"]);

    let exact = SanctionsMatch::score("ofac_sdn", "acme evil corp", &entry);
    assert_eq!((exact.match_score, exact.match_type), (100, MatchType::Exact));

    let partial = SanctionsMatch::score("ofac_sdn", "Evil", &entry);
    assert_eq!((partial.match_score, partial.match_type), (85, MatchType::Partial));

    let alias = SanctionsMatch::score("ofac_sdn", "E.V.I.L. HOLDINGS", &entry);
    assert_eq!((alias.match_score, alias.match_type), (70, MatchType::Fuzzy));
    assert_eq!(alias.sanctions_details.program.as_deref(), Some("IRAN"));
}

#[test]
fn financial_sections_follow_flags() {
    let request = FinancialVerifyRequest {
        entity_name: "Acme Corp".to_string(),
        entity_country: "US".to_string(),
        industry: None,
        company_size: None,
        check_credit: true,
        check_financials: false,
        check_bankruptcy: false,
        check_liens: true,
    };
    let report = assess_financial_health(&request, fixed_time());

    assert_eq!(report.financial_health_score, 78);
    assert_eq!(report.credit_details.as_ref().map(|c| c.score), Some(720));
    assert!(report.financial_indicators.is_none());
    assert!(report.bankruptcy_history.is_none());
    assert_eq!(report.liens.as_ref().map(|l| l.active_liens), Some(0));
}

#[test]
fn matched_pattern_adds_its_threshold() {
    let request = FraudDetectRequest {
        entity_name: "Acme Corp".to_string(),
        entity_type: "company".to_string(),
        document_data: Some(document(json!({ "ssn": "123-45-6789" }))),
    };
    let patterns = vec![fraud_pattern("FP-1", "ssn", Some(20))];

    let assessment = detect_fraud(&request, &patterns, fixed_time());
    assert_eq!(assessment.risk_score, 35);
    assert_eq!(assessment.risk_level, "low");
    assert!(!assessment.fraud_detected);
    assert_eq!(assessment.patterns_detected, vec!["Pattern FP-1"]);
    assert!(assessment.address_verification.is_none());
}

#[test]
fn fraud_score_is_capped_and_unthresholded_patterns_weigh_twenty() {
    let request = FraudDetectRequest {
        entity_name: "Acme Corp".to_string(),
        entity_type: "company".to_string(),
        document_data: Some(document(json!({ "address": "1 Main St", "ssn": "x" }))),
    };
    let patterns = vec![
        fraud_pattern("FP-1", "ssn", Some(95)),
        fraud_pattern("FP-2", "address", None),
        fraud_pattern("FP-3", "passport", Some(50)),
    ];

    let assessment = detect_fraud(&request, &patterns, fixed_time());
    assert_eq!(assessment.risk_score, 100);
    assert_eq!(assessment.risk_level, "high");
    assert!(assessment.fraud_detected);
    assert_eq!(assessment.patterns_detected.len(), 2);
    assert!(assessment.address_verification.is_some());
}

#[test]
fn without_document_data_only_base_risk_applies() {
    let request = FraudDetectRequest {
        entity_name: "Acme Corp".to_string(),
        entity_type: "company".to_string(),
        document_data: None,
    };
    let assessment = detect_fraud(&request, &[fraud_pattern("FP-1", "", Some(90))], fixed_time());
    assert_eq!(assessment.risk_score, 15);
    assert!(assessment.patterns_detected.is_empty());
    assert!(assessment.identity_verification.verified);
}

#[test]
fn issue_after_expiry_is_tampering() {
    let request = DocumentForgeryRequest {
        document_type: "business_license".to_string(),
        document_data: document(json!({
            "issue_date": "2024-06-01",
            "expiry_date": "2023-06-01"
        })),
        metadata: None,
    };
    let assessment = detect_forgery(&request, fixed_time());

    assert!(assessment.forgery_detected);
    assert_eq!(assessment.confidence_score, 80);
    assert_eq!(assessment.risk_level, "high");
    assert!(!assessment.authenticity_checks.dates_consistent);
    assert_eq!(
        assessment.tampering_indicators,
        vec!["Issue date is after expiry date"]
    );
}

#[test]
fn consistent_or_partial_dates_pass() {
    for data in [
        json!({ "issue_date": "2022-01-01", "expiry_date": "2030-01-01" }),
        json!({ "issue_date": "2024-06-01" }),
        json!({ "issue_date": "", "expiry_date": "2020-01-01" }),
    ] {
        let request = DocumentForgeryRequest {
            document_type: "passport".to_string(),
            document_data: document(data),
            metadata: Some(document(json!({ "created_date": "a", "modified_date": "b" }))),
        };
        let assessment = detect_forgery(&request, fixed_time());
        assert!(!assessment.forgery_detected);
        assert_eq!(assessment.confidence_score, 95);
        assert_eq!(assessment.risk_level, "low");
    }
}
