use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use super::domain::{
    Acknowledged, ClaimReviewInput, ClaimReviewView, EnrichmentView, MedicalEnrichmentInput,
    MedicalEnrichmentRecord, NotificationDispatchView, NotificationInput, NotificationReceipt,
    PayoutInput, PayoutRequestInput, PayoutRequestRecord, PayoutView, ReviewerRequestInput,
    ReviewerRequestRecord,
};
use super::registry::{
    HospitalVerification, HospitalVerificationRequest, PatientVerification,
    PatientVerificationRequest,
};
use super::repository::InsuranceRepository;
use super::service::{InsuranceClaimService, InsuranceServiceError};
use crate::error::ApiError;
use crate::extract::JsonBody;

/// Router builder exposing the insurance admin and claim stub endpoints.
pub fn insurance_router<R>(service: Arc<InsuranceClaimService<R>>) -> Router
where
    R: InsuranceRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/insurance/admin/medical-enrichment",
            post(enrichment_request_handler::<R>),
        )
        .route(
            "/api/v1/insurance/admin/reviewer-request",
            post(reviewer_request_handler::<R>),
        )
        .route(
            "/api/v1/insurance/admin/payout-request",
            post(payout_request_handler::<R>),
        )
        .route(
            "/api/v1/insurance/admin/notification",
            post(notification_request_handler::<R>),
        )
        .route("/api/v1/insurance/medical/enrich", post(enrich_handler::<R>))
        .route("/api/v1/insurance/claims/review", post(claim_review_handler::<R>))
        .route("/api/v1/insurance/payout/process", post(payout_handler::<R>))
        .route(
            "/api/v1/insurance/notification/send",
            post(notification_send_handler::<R>),
        )
        .route(
            "/api/v1/insurance/hospital/verify",
            post(hospital_handler::<R>),
        )
        .route("/api/v1/insurance/patient/verify", post(patient_handler::<R>))
        .with_state(service)
}

impl From<InsuranceServiceError> for ApiError {
    fn from(value: InsuranceServiceError) -> Self {
        match value {
            InsuranceServiceError::Repository(err) => ApiError::Internal(err.to_string()),
        }
    }
}

type Service<R> = State<Arc<InsuranceClaimService<R>>>;

pub(crate) async fn enrichment_request_handler<R>(
    State(service): Service<R>,
    JsonBody(input): JsonBody<MedicalEnrichmentInput>,
) -> Result<Json<Acknowledged<MedicalEnrichmentRecord>>, ApiError>
where
    R: InsuranceRepository + 'static,
{
    Ok(Json(service.record_enrichment(input)?))
}

pub(crate) async fn reviewer_request_handler<R>(
    State(service): Service<R>,
    JsonBody(input): JsonBody<ReviewerRequestInput>,
) -> Result<Json<Acknowledged<ReviewerRequestRecord>>, ApiError>
where
    R: InsuranceRepository + 'static,
{
    Ok(Json(service.record_reviewer_request(input)?))
}

pub(crate) async fn payout_request_handler<R>(
    State(service): Service<R>,
    JsonBody(input): JsonBody<PayoutRequestInput>,
) -> Result<Json<Acknowledged<PayoutRequestRecord>>, ApiError>
where
    R: InsuranceRepository + 'static,
{
    Ok(Json(service.record_payout_request(input)?))
}

pub(crate) async fn notification_request_handler<R>(
    State(service): Service<R>,
    JsonBody(input): JsonBody<NotificationInput>,
) -> Result<Json<NotificationReceipt>, ApiError>
where
    R: InsuranceRepository + 'static,
{
    Ok(Json(service.record_notification(input)?))
}

pub(crate) async fn enrich_handler<R>(
    State(service): Service<R>,
    JsonBody(input): JsonBody<MedicalEnrichmentInput>,
) -> Json<EnrichmentView>
where
    R: InsuranceRepository + 'static,
{
    Json(service.enrich(input))
}

pub(crate) async fn claim_review_handler<R>(
    State(service): Service<R>,
    JsonBody(input): JsonBody<ClaimReviewInput>,
) -> Json<ClaimReviewView>
where
    R: InsuranceRepository + 'static,
{
    Json(service.review_claim(input))
}

pub(crate) async fn payout_handler<R>(
    State(service): Service<R>,
    JsonBody(input): JsonBody<PayoutInput>,
) -> Json<PayoutView>
where
    R: InsuranceRepository + 'static,
{
    Json(service.process_payout(input))
}

pub(crate) async fn notification_send_handler<R>(
    State(service): Service<R>,
    JsonBody(input): JsonBody<NotificationInput>,
) -> Json<NotificationDispatchView>
where
    R: InsuranceRepository + 'static,
{
    Json(service.send_notification(input))
}

pub(crate) async fn hospital_handler<R>(
    State(service): Service<R>,
    JsonBody(request): JsonBody<HospitalVerificationRequest>,
) -> Json<HospitalVerification>
where
    R: InsuranceRepository + 'static,
{
    Json(service.verify_hospital(request))
}

pub(crate) async fn patient_handler<R>(
    State(service): Service<R>,
    JsonBody(request): JsonBody<PatientVerificationRequest>,
) -> Json<PatientVerification>
where
    R: InsuranceRepository + 'static,
{
    Json(service.verify_patient(request))
}
