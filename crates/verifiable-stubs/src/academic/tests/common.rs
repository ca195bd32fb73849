use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::academic::domain::{
    AcademicRecord, EligibilityRule, MeritRule, StudentId, StudentProfile,
};
use crate::academic::{academic_router, AdmissionService};
use crate::store::InMemoryAcademicRepository;

pub(super) fn record(level: &str, marks: f64, suffix: &str) -> AcademicRecord {
    AcademicRecord {
        level: level.to_string(),
        board: "State Board".to_string(),
        roll_number: format!("ROLL-{suffix}"),
        year_of_passing: "2021".to_string(),
        marks,
        certificate_number: format!("CERT-{suffix}"),
    }
}

pub(super) fn student(id: &str, records: Vec<AcademicRecord>) -> StudentProfile {
    StudentProfile {
        student_id: StudentId(id.to_string()),
        name: "Priya Raman".to_string(),
        dob: "2004-02-29".to_string(),
        academic_records: records,
    }
}

pub(super) fn eligibility_rule(program: &str, min_marks: f64) -> EligibilityRule {
    EligibilityRule {
        program: program.to_string(),
        min_marks,
        age_limit: Some(25),
        category_specific: None,
    }
}

pub(super) fn merit_rule(program: &str, weights: &[(&str, f64)]) -> MeritRule {
    MeritRule {
        program: program.to_string(),
        weightage: weights
            .iter()
            .map(|(key, weight)| (key.to_string(), *weight))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub(super) fn build_service() -> AdmissionService<InMemoryAcademicRepository> {
    AdmissionService::new(Arc::new(InMemoryAcademicRepository::default()))
}

pub(super) fn seeded_service() -> AdmissionService<InMemoryAcademicRepository> {
    let service = build_service();
    service
        .enroll(vec![
            student(
                "STU-1",
                vec![record("10th", 88.0, "1A"), record("12th", 76.5, "1B")],
            ),
            student("STU-2", vec![record("12th", 55.0, "2A")]),
            student("STU-3", Vec::new()),
        ])
        .expect("seed students");
    service
        .add_eligibility_rule(eligibility_rule("MBBS", 60.0))
        .expect("seed eligibility rule");
    service
        .add_merit_rule(merit_rule("MBBS", &[("10th", 0.4), ("12th", 0.6)]))
        .expect("seed merit rule");
    service
}

pub(super) fn seeded_router() -> axum::Router {
    academic_router(Arc::new(seeded_service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

pub(super) fn post_json(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("serialize"),
        ))
        .expect("request builds")
}
