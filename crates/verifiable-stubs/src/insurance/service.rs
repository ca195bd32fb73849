use std::sync::Arc;

use tracing::info;

use super::domain::{
    Acknowledged, ClaimReviewInput, ClaimReviewView, EnrichmentView, MedicalEnrichmentInput,
    MedicalEnrichmentRecord, NotificationDispatchView, NotificationInput, NotificationReceipt,
    PayoutInput, PayoutRequestInput, PayoutRequestRecord, PayoutView, ReviewerRequestInput,
    ReviewerRequestRecord,
};
use super::icd::{map_diagnosis, IcdMapping};
use super::registry::{
    verify_hospital, verify_patient, HospitalVerification, HospitalVerificationRequest,
    PatientVerification, PatientVerificationRequest,
};
use super::repository::InsuranceRepository;
use crate::store::RepositoryError;

const NOTIFICATION_SENT: &str = "Notification sent successfully";

/// Claim enrichment, review and payout stubs over the insurance request tables.
pub struct InsuranceClaimService<R> {
    repository: Arc<R>,
}

impl<R> InsuranceClaimService<R>
where
    R: InsuranceRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn record_enrichment(
        &self,
        input: MedicalEnrichmentInput,
    ) -> Result<Acknowledged<MedicalEnrichmentRecord>, InsuranceServiceError> {
        let icd_mapping = map_diagnosis(&input.diagnosis);
        let record =
            self.repository
                .insert_enrichment(input.diagnosis, input.hospital_name, icd_mapping)?;
        info!(id = record.id, mapped = record.icd_mapping.is_some(), "medical enrichment stored");
        Ok(Acknowledged {
            record,
            message: "Medical enrichment request added",
        })
    }

    pub fn record_reviewer_request(
        &self,
        input: ReviewerRequestInput,
    ) -> Result<Acknowledged<ReviewerRequestRecord>, InsuranceServiceError> {
        let record = self
            .repository
            .insert_reviewer_request(input.workflow_state)?;
        info!(id = record.id, "reviewer request stored");
        Ok(Acknowledged {
            record,
            message: "Reviewer request created",
        })
    }

    pub fn record_payout_request(
        &self,
        input: PayoutRequestInput,
    ) -> Result<Acknowledged<PayoutRequestRecord>, InsuranceServiceError> {
        let record = self.repository.insert_payout_request(input)?;
        info!(id = record.id, "payout request stored");
        Ok(Acknowledged {
            record,
            message: "Payout request created",
        })
    }

    pub fn record_notification(
        &self,
        input: NotificationInput,
    ) -> Result<NotificationReceipt, InsuranceServiceError> {
        let record = self.repository.insert_notification(input)?;
        info!(id = record.id, recipient = %record.recipient_email, "notification recorded");
        Ok(NotificationReceipt {
            record,
            response_message: NOTIFICATION_SENT,
        })
    }

    /// ICD lookup without persistence; unmatched diagnoses report `UNKNOWN`.
    pub fn enrich(&self, input: MedicalEnrichmentInput) -> EnrichmentView {
        let mapping = map_diagnosis(&input.diagnosis).unwrap_or_else(IcdMapping::unknown);
        EnrichmentView {
            diagnosis: input.diagnosis,
            icd_code: mapping.icd_code,
            description: mapping.description,
            hospital_name: input.hospital_name,
            verified: true,
        }
    }

    pub fn review_claim(&self, input: ClaimReviewInput) -> ClaimReviewView {
        ClaimReviewView {
            message: format!("Claim {} review recorded", input.claim_id),
            claim_id: input.claim_id,
            status: input.status,
            reviewed_at: None,
        }
    }

    pub fn process_payout(&self, input: PayoutInput) -> PayoutView {
        PayoutView {
            message: format!(
                "Payout of {:?} processed for claim {}",
                input.payout_amount, input.claim_id
            ),
            claim_id: input.claim_id,
            payout_amount: input.payout_amount,
            status: "processed",
        }
    }

    pub fn send_notification(&self, input: NotificationInput) -> NotificationDispatchView {
        NotificationDispatchView {
            recipient_email: input.recipient_email,
            subject: input.subject,
            status: "sent",
            message: NOTIFICATION_SENT,
        }
    }

    pub fn verify_hospital(&self, request: HospitalVerificationRequest) -> HospitalVerification {
        verify_hospital(request)
    }

    pub fn verify_patient(&self, request: PatientVerificationRequest) -> PatientVerification {
        verify_patient(request)
    }
}

/// Error raised by the insurance claim service.
#[derive(Debug, thiserror::Error)]
pub enum InsuranceServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
