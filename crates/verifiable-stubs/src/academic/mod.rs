//! Student record verification, program eligibility and merit scoring.

pub mod domain;
pub mod evaluation;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AcademicRecord, EligibilityRule, EnrollmentSummary, MeritRule, RecordMatch, StudentId,
    StudentProfile, StudentRecord,
};
pub use evaluation::{EligibilityOutcome, MeritOutcome};
pub use repository::AcademicRepository;
pub use router::academic_router;
pub use service::{AdmissionService, AdmissionServiceError};
