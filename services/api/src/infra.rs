use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use verifiable_stubs::academic::AdmissionService;
use verifiable_stubs::compliance::{ExternalComplianceService, FrameworkCheckService};
use verifiable_stubs::doctors::DoctorVerificationService;
use verifiable_stubs::insurance::InsuranceClaimService;
use verifiable_stubs::store::{
    InMemoryAcademicRepository, InMemoryComplianceRecordRepository, InMemoryDoctorRepository,
    InMemoryFraudPatternRepository, InMemoryInsuranceRepository, InMemoryRegulationRepository,
    InMemorySanctionsRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type CatalogService = ExternalComplianceService<
    InMemoryRegulationRepository,
    InMemorySanctionsRepository,
    InMemoryFraudPatternRepository,
>;

/// Every domain service, each over its own in-memory store.
#[derive(Clone)]
pub(crate) struct ServiceStack {
    pub(crate) doctors: Arc<DoctorVerificationService<InMemoryDoctorRepository>>,
    pub(crate) academic: Arc<AdmissionService<InMemoryAcademicRepository>>,
    pub(crate) insurance: Arc<InsuranceClaimService<InMemoryInsuranceRepository>>,
    pub(crate) frameworks: Arc<FrameworkCheckService<InMemoryComplianceRecordRepository>>,
    pub(crate) catalog: Arc<CatalogService>,
}

impl ServiceStack {
    pub(crate) fn in_memory() -> Self {
        Self {
            doctors: Arc::new(DoctorVerificationService::new(Arc::new(
                InMemoryDoctorRepository::default(),
            ))),
            academic: Arc::new(AdmissionService::new(Arc::new(
                InMemoryAcademicRepository::default(),
            ))),
            insurance: Arc::new(InsuranceClaimService::new(Arc::new(
                InMemoryInsuranceRepository::default(),
            ))),
            frameworks: Arc::new(FrameworkCheckService::new(Arc::new(
                InMemoryComplianceRecordRepository::default(),
            ))),
            catalog: Arc::new(ExternalComplianceService::new(
                Arc::new(InMemoryRegulationRepository::default()),
                Arc::new(InMemorySanctionsRepository::default()),
                Arc::new(InMemoryFraudPatternRepository::default()),
            )),
        }
    }
}
