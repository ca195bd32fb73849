use std::sync::Arc;

use axum::response::Response;
use serde_json::{Map, Value};

use crate::insurance::domain::{
    MedicalEnrichmentRecord, NotificationInput, NotificationRecord, PayoutRequestInput,
    PayoutRequestRecord, RequestId, ReviewerRequestRecord,
};
use crate::insurance::{insurance_router, IcdMapping, InsuranceClaimService, InsuranceRepository};
use crate::store::{InMemoryInsuranceRepository, RepositoryError};

pub(super) fn build_service() -> (
    InsuranceClaimService<InMemoryInsuranceRepository>,
    Arc<InMemoryInsuranceRepository>,
) {
    let repository = Arc::new(InMemoryInsuranceRepository::default());
    (InsuranceClaimService::new(repository.clone()), repository)
}

pub(super) fn router() -> axum::Router {
    let (service, _) = build_service();
    insurance_router(Arc::new(service))
}

pub(super) fn failing_router() -> axum::Router {
    insurance_router(Arc::new(InsuranceClaimService::new(Arc::new(
        UnavailableRepository,
    ))))
}

pub(super) fn notification() -> NotificationInput {
    NotificationInput {
        recipient_email: "claims@example.org".to_string(),
        subject: "Claim CLM-42 approved".to_string(),
        message: "Your claim has been approved.".to_string(),
    }
}

pub(super) struct UnavailableRepository;

fn offline() -> RepositoryError {
    RepositoryError::Unavailable("database offline".to_string())
}

impl InsuranceRepository for UnavailableRepository {
    fn insert_enrichment(
        &self,
        _diagnosis: String,
        _hospital_name: String,
        _icd_mapping: Option<IcdMapping>,
    ) -> Result<MedicalEnrichmentRecord, RepositoryError> {
        Err(offline())
    }

    fn insert_reviewer_request(
        &self,
        _workflow_state: Map<String, Value>,
    ) -> Result<ReviewerRequestRecord, RepositoryError> {
        Err(offline())
    }

    fn insert_payout_request(
        &self,
        _request: PayoutRequestInput,
    ) -> Result<PayoutRequestRecord, RepositoryError> {
        Err(offline())
    }

    fn insert_notification(
        &self,
        _notification: NotificationInput,
    ) -> Result<NotificationRecord, RepositoryError> {
        Err(offline())
    }

    fn enrichment(
        &self,
        _id: RequestId,
    ) -> Result<Option<MedicalEnrichmentRecord>, RepositoryError> {
        Err(offline())
    }

    fn reviewer_request(
        &self,
        _id: RequestId,
    ) -> Result<Option<ReviewerRequestRecord>, RepositoryError> {
        Err(offline())
    }

    fn payout_request(
        &self,
        _id: RequestId,
    ) -> Result<Option<PayoutRequestRecord>, RepositoryError> {
        Err(offline())
    }

    fn notification(&self, _id: RequestId) -> Result<Option<NotificationRecord>, RepositoryError> {
        Err(offline())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn post_json(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("serialize"),
        ))
        .expect("request builds")
}
