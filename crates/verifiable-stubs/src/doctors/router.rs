use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{
    BoardCertificationView, DegreeView, DisciplinaryCheckView, DoctorId, DoctorProfile,
    EmploymentView, GenericVerificationView, LicenseStatusView, MalpracticeHistoryView,
    OnboardingSummary, TrainingView,
};
use super::repository::DoctorRepository;
use super::service::{DoctorServiceError, DoctorVerificationService};
use crate::error::ApiError;
use crate::extract::{required, JsonBody, QueryParams};
use crate::store::RepositoryError;

/// Router builder exposing the doctor onboarding and PSV endpoints.
pub fn doctor_router<R>(service: Arc<DoctorVerificationService<R>>) -> Router
where
    R: DoctorRepository + 'static,
{
    Router::new()
        .route("/api/v1/doctors/admin/add", post(onboard_handler::<R>))
        .route(
            "/api/v1/doctors/psv/license/status",
            get(license_status_handler::<R>),
        )
        .route("/api/v1/doctors/psv/degree/info", get(degree_handler::<R>))
        .route(
            "/api/v1/doctors/psv/board-cert/info",
            get(board_certification_handler::<R>),
        )
        .route(
            "/api/v1/doctors/psv/training/info",
            get(training_handler::<R>),
        )
        .route(
            "/api/v1/doctors/psv/employment/info",
            get(employment_handler::<R>),
        )
        .route(
            "/api/v1/doctors/psv/disciplines/check",
            get(disciplines_handler::<R>),
        )
        .route(
            "/api/v1/doctors/psv/malpractice/history",
            get(malpractice_handler::<R>),
        )
        .route("/api/v1/doctors/psv/verify", get(generic_verify_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LicenseQuery {
    pub(crate) license_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DoctorQuery {
    pub(crate) doctor_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CertificateQuery {
    pub(crate) certificate_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenericVerifyQuery {
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
    pub(crate) value: Option<String>,
}

impl From<DoctorServiceError> for ApiError {
    fn from(value: DoctorServiceError) -> Self {
        match value {
            DoctorServiceError::DoctorNotFound
            | DoctorServiceError::LicenseNotFound
            | DoctorServiceError::CertificateNotFound => ApiError::NotFound(value.to_string()),
            DoctorServiceError::Repository(err @ RepositoryError::Conflict(_)) => {
                ApiError::Conflict(err.to_string())
            }
            DoctorServiceError::Repository(other) => ApiError::Internal(other.to_string()),
        }
    }
}

pub(crate) async fn onboard_handler<R>(
    State(service): State<Arc<DoctorVerificationService<R>>>,
    JsonBody(profiles): JsonBody<Vec<DoctorProfile>>,
) -> Result<Json<OnboardingSummary>, ApiError>
where
    R: DoctorRepository + 'static,
{
    Ok(Json(service.onboard(profiles)?))
}

pub(crate) async fn license_status_handler<R>(
    State(service): State<Arc<DoctorVerificationService<R>>>,
    QueryParams(query): QueryParams<LicenseQuery>,
) -> Result<Json<LicenseStatusView>, ApiError>
where
    R: DoctorRepository + 'static,
{
    let license_number = required(query.license_number, "license_number")?;
    Ok(Json(service.license_status(&license_number)?))
}

pub(crate) async fn degree_handler<R>(
    State(service): State<Arc<DoctorVerificationService<R>>>,
    QueryParams(query): QueryParams<DoctorQuery>,
) -> Result<Json<DegreeView>, ApiError>
where
    R: DoctorRepository + 'static,
{
    let doctor_id = DoctorId(required(query.doctor_id, "doctor_id")?);
    Ok(Json(service.degree(&doctor_id)?))
}

pub(crate) async fn board_certification_handler<R>(
    State(service): State<Arc<DoctorVerificationService<R>>>,
    QueryParams(query): QueryParams<CertificateQuery>,
) -> Result<Json<BoardCertificationView>, ApiError>
where
    R: DoctorRepository + 'static,
{
    let certificate_number = required(query.certificate_number, "certificate_number")?;
    Ok(Json(service.board_certification(&certificate_number)?))
}

pub(crate) async fn training_handler<R>(
    State(service): State<Arc<DoctorVerificationService<R>>>,
    QueryParams(query): QueryParams<DoctorQuery>,
) -> Result<Json<TrainingView>, ApiError>
where
    R: DoctorRepository + 'static,
{
    let doctor_id = DoctorId(required(query.doctor_id, "doctor_id")?);
    Ok(Json(service.training(&doctor_id)?))
}

pub(crate) async fn employment_handler<R>(
    State(service): State<Arc<DoctorVerificationService<R>>>,
    QueryParams(query): QueryParams<DoctorQuery>,
) -> Result<Json<EmploymentView>, ApiError>
where
    R: DoctorRepository + 'static,
{
    let doctor_id = DoctorId(required(query.doctor_id, "doctor_id")?);
    Ok(Json(service.employment(&doctor_id)?))
}

pub(crate) async fn disciplines_handler<R>(
    State(service): State<Arc<DoctorVerificationService<R>>>,
    QueryParams(query): QueryParams<LicenseQuery>,
) -> Result<Json<DisciplinaryCheckView>, ApiError>
where
    R: DoctorRepository + 'static,
{
    let license_number = required(query.license_number, "license_number")?;
    Ok(Json(service.disciplinary_actions(&license_number)?))
}

pub(crate) async fn malpractice_handler<R>(
    State(service): State<Arc<DoctorVerificationService<R>>>,
    QueryParams(query): QueryParams<DoctorQuery>,
) -> Result<Json<MalpracticeHistoryView>, ApiError>
where
    R: DoctorRepository + 'static,
{
    let doctor_id = DoctorId(required(query.doctor_id, "doctor_id")?);
    Ok(Json(service.malpractice_history(&doctor_id)?))
}

pub(crate) async fn generic_verify_handler<R>(
    State(service): State<Arc<DoctorVerificationService<R>>>,
    QueryParams(query): QueryParams<GenericVerifyQuery>,
) -> Result<Json<GenericVerificationView>, ApiError>
where
    R: DoctorRepository + 'static,
{
    match (query.kind, query.value) {
        (Some(kind), Some(value)) if !kind.is_empty() && !value.is_empty() => {
            Ok(Json(service.generic_verify(kind, value)))
        }
        _ => Err(ApiError::BadRequest(
            "type and value parameters required".to_string(),
        )),
    }
}
