//! Insurance claim stubs: ICD enrichment, reviewer and payout requests,
//! notifications, and hospital/patient identity checks.

pub mod domain;
pub mod icd;
pub mod registry;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    MedicalEnrichmentRecord, NotificationInput, NotificationRecord, PayoutRequestInput,
    PayoutRequestRecord, RequestId, ReviewerRequestRecord,
};
pub use icd::{map_diagnosis, IcdMapping};
pub use repository::InsuranceRepository;
pub use router::insurance_router;
pub use service::{InsuranceClaimService, InsuranceServiceError};
