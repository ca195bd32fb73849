//! Compliance framework questionnaires, the regulation / sanctions / fraud
//! pattern catalogues, and the screening checks that consult them.

pub mod catalog;
pub mod error;
pub mod frameworks;
pub mod repository;
pub mod router;
pub mod screening;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    FraudPattern, FraudPatternFilter, FraudPatternInput, FraudPatternPatch, KeyArticle, Page,
    PageError, PageRequest, PatternIndicator, Regulation, RegulationFilter, RegulationInput,
    RegulationPatch, RegulationSummary, SanctionsAdditionalInfo, SanctionsEntry,
    SanctionsEntryInput, SanctionsFilter, SanctionsIdentifier, SanctionsList,
};
pub use error::{EnvelopeError, EnvelopeJson, EnvelopeQuery};
pub use frameworks::{CheckReport, CheckType, ComplianceRecord, FrameworkCheck, FrameworkOutcome};
pub use repository::{
    ComplianceRecordRepository, FraudPatternRepository, RegulationRepository, SanctionsRepository,
};
pub use router::{external_compliance_router, framework_check_router};
pub use service::{
    ComplianceServiceError, ExternalComplianceService, FrameworkCheckService,
    FrameworkServiceError, SanctionsCriteria, SeedSummary,
};
