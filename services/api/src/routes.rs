use crate::infra::{AppState, ServiceStack};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use verifiable_stubs::academic::academic_router;
use verifiable_stubs::compliance::{external_compliance_router, framework_check_router};
use verifiable_stubs::doctors::doctor_router;
use verifiable_stubs::insurance::insurance_router;

pub(crate) fn with_verification_routes(services: ServiceStack) -> Router {
    doctor_router(services.doctors)
        .merge(academic_router(services.academic))
        .merge(insurance_router(services.insurance))
        .merge(framework_check_router(services.frameworks))
        .merge(external_compliance_router(services.catalog))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/health", get(api_health))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn api_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Verifiable Stubs API is running"
    }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
