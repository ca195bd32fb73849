use uuid::Uuid;

use super::catalog::{
    FraudPattern, FraudPatternFilter, FraudPatternPatch, Regulation, RegulationFilter,
    RegulationPatch, SanctionsEntry, SanctionsFilter,
};
use super::frameworks::ComplianceRecord;
use crate::store::RepositoryError;

/// Audit log of framework checks keyed by request id.
pub trait ComplianceRecordRepository: Send + Sync {
    fn insert(&self, record: ComplianceRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, request_id: &Uuid) -> Result<Option<ComplianceRecord>, RepositoryError>;
}

/// Regulations keyed by `regulation_id`. Listings come back in id order.
pub trait RegulationRepository: Send + Sync {
    /// Fails with [`RepositoryError::Conflict`] when the id is taken.
    fn insert(&self, regulation: Regulation) -> Result<(), RepositoryError>;
    fn fetch(&self, regulation_id: &str) -> Result<Option<Regulation>, RepositoryError>;
    /// Applies the patch and bumps `updated_at`; unknown ids yield
    /// [`RepositoryError::NotFound`].
    fn update(
        &self,
        regulation_id: &str,
        patch: RegulationPatch,
    ) -> Result<Regulation, RepositoryError>;
    fn delete(&self, regulation_id: &str) -> Result<(), RepositoryError>;
    fn matching(&self, filter: &RegulationFilter) -> Result<Vec<Regulation>, RepositoryError>;
}

/// Sanctions list entries keyed by `entry_id`, unique across all lists.
pub trait SanctionsRepository: Send + Sync {
    fn insert(&self, entry: SanctionsEntry) -> Result<(), RepositoryError>;
    fn matching(&self, filter: &SanctionsFilter) -> Result<Vec<SanctionsEntry>, RepositoryError>;
}

pub trait FraudPatternRepository: Send + Sync {
    fn insert(&self, pattern: FraudPattern) -> Result<(), RepositoryError>;
    fn fetch(&self, pattern_id: &str) -> Result<Option<FraudPattern>, RepositoryError>;
    fn update(
        &self,
        pattern_id: &str,
        patch: FraudPatternPatch,
    ) -> Result<FraudPattern, RepositoryError>;
    fn delete(&self, pattern_id: &str) -> Result<(), RepositoryError>;
    fn matching(&self, filter: &FraudPatternFilter)
        -> Result<Vec<FraudPattern>, RepositoryError>;
}
