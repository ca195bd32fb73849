use super::domain::{BoardCertification, DoctorId, DoctorProfile, DoctorRecord};
use crate::store::RepositoryError;

/// Storage abstraction so the PSV service can be exercised in isolation.
pub trait DoctorRepository: Send + Sync {
    /// Inserts every profile whose `doctor_id` is new, all or nothing.
    ///
    /// Known ids are skipped and left out of the returned list. A license or
    /// board certificate number that already belongs to another doctor
    /// rejects the whole batch with [`RepositoryError::Conflict`].
    fn insert_batch(&self, profiles: Vec<DoctorProfile>) -> Result<Vec<DoctorId>, RepositoryError>;
    fn fetch(&self, id: &DoctorId) -> Result<Option<DoctorRecord>, RepositoryError>;
    fn find_by_license(&self, license_number: &str)
        -> Result<Option<DoctorRecord>, RepositoryError>;
    fn find_certification(
        &self,
        certificate_number: &str,
    ) -> Result<Option<BoardCertification>, RepositoryError>;
}
