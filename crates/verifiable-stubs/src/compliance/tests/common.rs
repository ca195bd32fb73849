use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::compliance::{
    external_compliance_router, framework_check_router, ComplianceRecord,
    ComplianceRecordRepository, ExternalComplianceService, FraudPattern, FraudPatternInput,
    FrameworkCheckService, PatternIndicator, Regulation, RegulationInput,
};
use crate::store::{
    InMemoryComplianceRecordRepository, InMemoryFraudPatternRepository,
    InMemoryRegulationRepository, InMemorySanctionsRepository, RepositoryError,
};

pub(super) type CatalogService = ExternalComplianceService<
    InMemoryRegulationRepository,
    InMemorySanctionsRepository,
    InMemoryFraudPatternRepository,
>;

pub(super) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn catalog_service() -> CatalogService {
    ExternalComplianceService::new(
        Arc::new(InMemoryRegulationRepository::default()),
        Arc::new(InMemorySanctionsRepository::default()),
        Arc::new(InMemoryFraudPatternRepository::default()),
    )
}

pub(super) fn seeded_catalog_service() -> CatalogService {
    let service = catalog_service();
    service.seed_reference_data().expect("reference data loads");
    service
}

pub(super) fn framework_service() -> (
    FrameworkCheckService<InMemoryComplianceRecordRepository>,
    Arc<InMemoryComplianceRecordRepository>,
) {
    let records = Arc::new(InMemoryComplianceRecordRepository::default());
    (FrameworkCheckService::new(records.clone()), records)
}

pub(super) fn framework_router() -> axum::Router {
    let (service, _) = framework_service();
    framework_check_router(Arc::new(service))
}

pub(super) fn failing_framework_router() -> axum::Router {
    framework_check_router(Arc::new(FrameworkCheckService::new(Arc::new(
        UnavailableRecords,
    ))))
}

pub(super) fn catalog_router() -> axum::Router {
    external_compliance_router(Arc::new(catalog_service()))
}

pub(super) fn seeded_catalog_router() -> axum::Router {
    external_compliance_router(Arc::new(seeded_catalog_service()))
}

pub(super) fn regulation(id: &str, code: &str, required_fields: &[&str]) -> Regulation {
    Regulation::new(
        RegulationInput {
            regulation_id: id.to_string(),
            name: format!("{code} regulation"),
            code: code.to_string(),
            category: None,
            jurisdiction: None,
            version: None,
            effective_date: None,
            description: None,
            required_fields: Some(required_fields.iter().map(|f| f.to_string()).collect()),
            key_articles: None,
            compliance_checklist: None,
            penalties: None,
            is_active: true,
            tags: None,
        },
        fixed_time(),
    )
}

pub(super) fn fraud_pattern(id: &str, field: &str, threshold: Option<u32>) -> FraudPattern {
    FraudPattern::new(
        FraudPatternInput {
            pattern_id: id.to_string(),
            name: format!("Pattern {id}"),
            category: "identity_fraud".to_string(),
            description: None,
            indicators: Some(vec![PatternIndicator {
                field: field.to_string(),
                condition: "present".to_string(),
                weight: 1.0,
            }]),
            risk_score_threshold: threshold,
            action: None,
            is_active: true,
        },
        fixed_time(),
    )
}

pub(super) fn document(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

pub(super) fn regulation_payload(id: &str) -> Value {
    json!({
        "regulation_id": id,
        "name": "Anti-Bribery Act",
        "code": "ABA",
        "category": "Anti-Corruption",
        "jurisdiction": "United Kingdom",
        "effective_date": "2011-07-01",
        "required_fields": ["gift_register"],
        "key_articles": [
            { "article_id": "7", "title": "Failure to prevent bribery", "content": "Corporate offence" }
        ]
    })
}

pub(super) struct UnavailableRecords;

impl ComplianceRecordRepository for UnavailableRecords {
    fn insert(&self, _record: ComplianceRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _request_id: &Uuid) -> Result<Option<ComplianceRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn json_request(
    method: &str,
    uri: &str,
    payload: &Value,
) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("serialize"),
        ))
        .expect("request builds")
}

pub(super) fn post_json(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    json_request("POST", uri, payload)
}

pub(super) fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

pub(super) fn delete(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::delete(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}
