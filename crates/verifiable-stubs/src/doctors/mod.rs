//! Doctor onboarding and primary source verification (PSV) lookups.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    BoardCertification, Degree, DoctorId, DoctorProfile, DoctorRecord, Employment,
    OnboardingSummary, Training,
};
pub use repository::DoctorRepository;
pub use router::doctor_router;
pub use service::{DoctorServiceError, DoctorVerificationService};
