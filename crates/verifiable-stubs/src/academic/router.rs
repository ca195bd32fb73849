use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{
    CertificateView, EligibilityRule, EnrollmentSummary, MeritRule, RollNumberView,
    RuleAcknowledgement, StudentId, StudentProfile,
};
use super::evaluation::{EligibilityOutcome, MeritOutcome};
use super::repository::AcademicRepository;
use super::service::{AdmissionService, AdmissionServiceError};
use crate::error::ApiError;
use crate::extract::{required, JsonBody, QueryParams};
use crate::store::RepositoryError;

/// Router builder exposing academic seeding, verification and evaluation.
pub fn academic_router<R>(service: Arc<AdmissionService<R>>) -> Router
where
    R: AcademicRepository + 'static,
{
    Router::new()
        .route("/api/v1/academic/admin/students", post(enroll_handler::<R>))
        .route(
            "/api/v1/academic/admin/eligibility-rules",
            post(eligibility_rule_handler::<R>),
        )
        .route(
            "/api/v1/academic/admin/merit-rules",
            post(merit_rule_handler::<R>),
        )
        .route(
            "/api/v1/academic/verify/roll-number",
            get(roll_number_handler::<R>),
        )
        .route(
            "/api/v1/academic/verify/certificate",
            get(certificate_handler::<R>),
        )
        .route(
            "/api/v1/academic/check-eligibility",
            get(eligibility_handler::<R>),
        )
        .route("/api/v1/academic/calculate-merit", get(merit_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RollNumberQuery {
    pub(crate) roll_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CertificateQuery {
    pub(crate) certificate_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProgramQuery {
    pub(crate) student_id: Option<String>,
    pub(crate) program: Option<String>,
}

impl ProgramQuery {
    fn into_parts(self) -> Result<(StudentId, String), ApiError> {
        match (self.student_id, self.program) {
            (Some(student_id), Some(program))
                if !student_id.trim().is_empty() && !program.trim().is_empty() =>
            {
                Ok((StudentId(student_id), program))
            }
            _ => Err(ApiError::BadRequest(
                "student_id and program parameters required".to_string(),
            )),
        }
    }
}

impl From<AdmissionServiceError> for ApiError {
    fn from(value: AdmissionServiceError) -> Self {
        match value {
            AdmissionServiceError::StudentNotFound
            | AdmissionServiceError::ProgramNotFound
            | AdmissionServiceError::MeritRuleNotFound
            | AdmissionServiceError::RollNumberNotFound
            | AdmissionServiceError::CertificateNotFound => ApiError::NotFound(value.to_string()),
            AdmissionServiceError::DuplicateRule => ApiError::BadRequest(value.to_string()),
            AdmissionServiceError::Repository(err @ RepositoryError::Conflict(_)) => {
                ApiError::Conflict(err.to_string())
            }
            AdmissionServiceError::Repository(other) => ApiError::Internal(other.to_string()),
        }
    }
}

pub(crate) async fn enroll_handler<R>(
    State(service): State<Arc<AdmissionService<R>>>,
    JsonBody(profiles): JsonBody<Vec<StudentProfile>>,
) -> Result<Json<EnrollmentSummary>, ApiError>
where
    R: AcademicRepository + 'static,
{
    Ok(Json(service.enroll(profiles)?))
}

pub(crate) async fn eligibility_rule_handler<R>(
    State(service): State<Arc<AdmissionService<R>>>,
    JsonBody(rule): JsonBody<EligibilityRule>,
) -> Result<Json<RuleAcknowledgement>, ApiError>
where
    R: AcademicRepository + 'static,
{
    Ok(Json(service.add_eligibility_rule(rule)?))
}

pub(crate) async fn merit_rule_handler<R>(
    State(service): State<Arc<AdmissionService<R>>>,
    JsonBody(rule): JsonBody<MeritRule>,
) -> Result<Json<RuleAcknowledgement>, ApiError>
where
    R: AcademicRepository + 'static,
{
    Ok(Json(service.add_merit_rule(rule)?))
}

pub(crate) async fn roll_number_handler<R>(
    State(service): State<Arc<AdmissionService<R>>>,
    QueryParams(query): QueryParams<RollNumberQuery>,
) -> Result<Json<RollNumberView>, ApiError>
where
    R: AcademicRepository + 'static,
{
    let roll_number = required(query.roll_number, "roll_number")?;
    Ok(Json(service.verify_roll_number(&roll_number)?))
}

pub(crate) async fn certificate_handler<R>(
    State(service): State<Arc<AdmissionService<R>>>,
    QueryParams(query): QueryParams<CertificateQuery>,
) -> Result<Json<CertificateView>, ApiError>
where
    R: AcademicRepository + 'static,
{
    let certificate_number = required(query.certificate_number, "certificate_number")?;
    Ok(Json(service.verify_certificate(&certificate_number)?))
}

pub(crate) async fn eligibility_handler<R>(
    State(service): State<Arc<AdmissionService<R>>>,
    QueryParams(query): QueryParams<ProgramQuery>,
) -> Result<Json<EligibilityOutcome>, ApiError>
where
    R: AcademicRepository + 'static,
{
    let (student_id, program) = query.into_parts()?;
    Ok(Json(service.check_eligibility(&student_id, &program)?))
}

pub(crate) async fn merit_handler<R>(
    State(service): State<Arc<AdmissionService<R>>>,
    QueryParams(query): QueryParams<ProgramQuery>,
) -> Result<Json<MeritOutcome>, ApiError>
where
    R: AcademicRepository + 'static,
{
    let (student_id, program) = query.into_parts()?;
    Ok(Json(service.calculate_merit(&student_id, &program)?))
}
