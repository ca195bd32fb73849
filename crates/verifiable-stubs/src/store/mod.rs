//! In-memory record store backing every verification domain.
//!
//! Each repository keeps its tables and natural-key indexes behind a single
//! lock, so a write and the index update it implies land together.

mod academic;
mod compliance;
mod doctors;
mod insurance;

use std::sync::PoisonError;

pub use academic::InMemoryAcademicRepository;
pub use compliance::{
    InMemoryComplianceRecordRepository, InMemoryFraudPatternRepository,
    InMemoryRegulationRepository, InMemorySanctionsRepository,
};
pub use doctors::InMemoryDoctorRepository;
pub use insurance::InMemoryInsuranceRepository;

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0} already exists")]
    Conflict(String),
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

pub(crate) fn poisoned<T>(_: PoisonError<T>) -> RepositoryError {
    RepositoryError::Unavailable("store lock poisoned".to_string())
}
