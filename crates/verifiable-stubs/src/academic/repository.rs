use super::domain::{EligibilityRule, MeritRule, RecordMatch, StudentId, StudentProfile, StudentRecord};
use crate::store::RepositoryError;

/// Storage for students, their records and per-program admission rules.
pub trait AcademicRepository: Send + Sync {
    /// Inserts every profile whose `student_id` is new, all or nothing.
    ///
    /// A certificate number already held by another record rejects the whole
    /// batch with [`RepositoryError::Conflict`].
    fn insert_students(
        &self,
        profiles: Vec<StudentProfile>,
    ) -> Result<Vec<StudentId>, RepositoryError>;
    fn fetch_student(&self, id: &StudentId) -> Result<Option<StudentRecord>, RepositoryError>;
    /// Roll numbers are not unique; the earliest stored record wins.
    fn find_by_roll_number(&self, roll_number: &str)
        -> Result<Option<RecordMatch>, RepositoryError>;
    fn find_by_certificate(
        &self,
        certificate_number: &str,
    ) -> Result<Option<RecordMatch>, RepositoryError>;
    fn insert_eligibility_rule(&self, rule: EligibilityRule) -> Result<(), RepositoryError>;
    fn eligibility_rule(&self, program: &str) -> Result<Option<EligibilityRule>, RepositoryError>;
    fn insert_merit_rule(&self, rule: MeritRule) -> Result<(), RepositoryError>;
    fn merit_rule(&self, program: &str) -> Result<Option<MeritRule>, RepositoryError>;
}
