use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::doctors::router::{onboard_handler, GenericVerifyQuery};
use crate::doctors::DoctorVerificationService;
use crate::extract::{JsonBody, QueryParams};

#[tokio::test]
async fn onboard_route_accepts_batches() {
    let (service, _) = build_service();
    let router = crate::doctors::doctor_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/doctors/admin/add")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&vec![profile("100"), profile("101")])
                        .expect("serialize"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Batch processed. 2 doctors added.");
    assert_eq!(payload["doctor_ids"], json!(["DOC-100", "DOC-101"]));
}

#[tokio::test]
async fn onboard_route_rejects_non_list_payloads() {
    let (service, _) = build_service();
    let router = crate::doctors::doctor_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/doctors/admin/add")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&profile("100")).expect("serialize"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(read_json_body(response).await.get("error").is_some());
}

#[tokio::test]
async fn onboard_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(DoctorVerificationService::new(Arc::new(
        UnavailableRepository,
    )));

    let response = onboard_handler::<UnavailableRepository>(
        State(service),
        JsonBody(vec![profile("200")]),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn license_status_route_returns_record() {
    let router = seeded_router(vec![profile("300")]);

    let response = router
        .oneshot(get("/api/v1/doctors/psv/license/status?license_number=LIC-300"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["doctor_id"], "DOC-300");
    assert_eq!(payload["issuer"], "State Medical Board");
}

#[tokio::test]
async fn license_status_route_requires_parameter() {
    let router = seeded_router(vec![profile("301")]);

    let response = router
        .oneshot(get("/api/v1/doctors/psv/license/status"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "license_number parameter required");
}

#[tokio::test]
async fn unknown_certificate_is_not_found() {
    let router = seeded_router(vec![profile("302")]);

    let response = router
        .oneshot(get(
            "/api/v1/doctors/psv/board-cert/info?certificate_number=ABP-999",
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Certificate not found");
}

#[tokio::test]
async fn training_route_reports_unverified_without_program_fields() {
    let router = seeded_router(vec![flagged_profile("303")]);

    let response = router
        .oneshot(get("/api/v1/doctors/psv/training/info?doctor_id=DOC-303"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await, json!({ "verified": false }));
}

#[tokio::test]
async fn degree_route_flattens_degree_fields() {
    let router = seeded_router(vec![profile("304")]);

    let response = router
        .oneshot(get("/api/v1/doctors/psv/degree/info?doctor_id=DOC-304"))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload["degree_name"], "MBBS");
    assert_eq!(payload["registration_number"], "NMU-304");
    assert_eq!(payload["verified"], true);
}

#[tokio::test]
async fn generic_verify_handler_requires_both_parameters() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let missing = crate::doctors::router::generic_verify_handler(
        State(service.clone()),
        QueryParams(GenericVerifyQuery {
            kind: Some("npi".to_string()),
            value: None,
        }),
    )
    .await
    .into_response();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json_body(missing).await["error"],
        "type and value parameters required"
    );

    let router = crate::doctors::doctor_router(service);
    let response = router
        .oneshot(get("/api/v1/doctors/psv/verify?type=npi&value=1234567890"))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload["confidence"], 0.87);
    assert_eq!(payload["type"], "npi");
}
