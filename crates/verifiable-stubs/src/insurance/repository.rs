use super::domain::{
    MedicalEnrichmentRecord, NotificationInput, NotificationRecord, PayoutRequestInput,
    PayoutRequestRecord, RequestId, ReviewerRequestRecord,
};
use super::icd::IcdMapping;
use crate::store::RepositoryError;
use serde_json::{Map, Value};

/// Append-only storage for insurance admin requests. Ids are assigned per table.
pub trait InsuranceRepository: Send + Sync {
    fn insert_enrichment(
        &self,
        diagnosis: String,
        hospital_name: String,
        icd_mapping: Option<IcdMapping>,
    ) -> Result<MedicalEnrichmentRecord, RepositoryError>;
    fn insert_reviewer_request(
        &self,
        workflow_state: Map<String, Value>,
    ) -> Result<ReviewerRequestRecord, RepositoryError>;
    fn insert_payout_request(
        &self,
        request: PayoutRequestInput,
    ) -> Result<PayoutRequestRecord, RepositoryError>;
    fn insert_notification(
        &self,
        notification: NotificationInput,
    ) -> Result<NotificationRecord, RepositoryError>;
    fn enrichment(&self, id: RequestId) -> Result<Option<MedicalEnrichmentRecord>, RepositoryError>;
    fn reviewer_request(
        &self,
        id: RequestId,
    ) -> Result<Option<ReviewerRequestRecord>, RepositoryError>;
    fn payout_request(&self, id: RequestId) -> Result<Option<PayoutRequestRecord>, RepositoryError>;
    fn notification(&self, id: RequestId) -> Result<Option<NotificationRecord>, RepositoryError>;
}
