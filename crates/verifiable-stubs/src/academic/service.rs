use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{
    CertificateView, EligibilityRule, EnrollmentSummary, MeritRule, RollNumberView,
    RuleAcknowledgement, StudentId, StudentProfile, StudentRecord,
};
use super::evaluation::{evaluate_eligibility, evaluate_merit, EligibilityOutcome, MeritOutcome};
use super::repository::AcademicRepository;
use crate::store::RepositoryError;

/// Academic record verification plus eligibility and merit evaluation.
pub struct AdmissionService<R> {
    repository: Arc<R>,
}

impl<R> AdmissionService<R>
where
    R: AcademicRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn enroll(
        &self,
        profiles: Vec<StudentProfile>,
    ) -> Result<EnrollmentSummary, AdmissionServiceError> {
        let submitted = profiles.len();
        let added = self.repository.insert_students(profiles).map_err(|err| {
            warn!(error = %err, submitted, "student batch rejected");
            err
        })?;
        info!(submitted, added = added.len(), "student batch processed");
        Ok(EnrollmentSummary::new(added))
    }

    pub fn add_eligibility_rule(
        &self,
        rule: EligibilityRule,
    ) -> Result<RuleAcknowledgement, AdmissionServiceError> {
        let program = rule.program.clone();
        self.repository
            .insert_eligibility_rule(rule)
            .map_err(duplicate_rule)?;
        info!(%program, "eligibility rule added");
        Ok(RuleAcknowledgement {
            message: "Eligibility rule added",
            program,
        })
    }

    pub fn add_merit_rule(
        &self,
        rule: MeritRule,
    ) -> Result<RuleAcknowledgement, AdmissionServiceError> {
        let program = rule.program.clone();
        self.repository
            .insert_merit_rule(rule)
            .map_err(duplicate_rule)?;
        info!(%program, "merit rule added");
        Ok(RuleAcknowledgement {
            message: "Merit rule added",
            program,
        })
    }

    pub fn verify_roll_number(
        &self,
        roll_number: &str,
    ) -> Result<RollNumberView, AdmissionServiceError> {
        let found = self
            .repository
            .find_by_roll_number(roll_number)?
            .ok_or(AdmissionServiceError::RollNumberNotFound)?;
        Ok(RollNumberView {
            student_id: found.student_id,
            roll_number: found.record.roll_number,
            year_of_passing: found.record.year_of_passing,
            marks: found.record.marks,
            verified: true,
        })
    }

    pub fn verify_certificate(
        &self,
        certificate_number: &str,
    ) -> Result<CertificateView, AdmissionServiceError> {
        let found = self
            .repository
            .find_by_certificate(certificate_number)?
            .ok_or(AdmissionServiceError::CertificateNotFound)?;
        Ok(CertificateView {
            certificate_number: found.record.certificate_number,
            student_id: found.student_id,
            level: found.record.level,
            marks: found.record.marks,
            verified: true,
        })
    }

    pub fn check_eligibility(
        &self,
        student_id: &StudentId,
        program: &str,
    ) -> Result<EligibilityOutcome, AdmissionServiceError> {
        let student = self.student(student_id)?;
        let rule = self
            .repository
            .eligibility_rule(program)?
            .ok_or(AdmissionServiceError::ProgramNotFound)?;
        Ok(evaluate_eligibility(&student.profile.academic_records, &rule))
    }

    pub fn calculate_merit(
        &self,
        student_id: &StudentId,
        program: &str,
    ) -> Result<MeritOutcome, AdmissionServiceError> {
        let student = self.student(student_id)?;
        let rule = self
            .repository
            .merit_rule(program)?
            .ok_or(AdmissionServiceError::MeritRuleNotFound)?;
        Ok(evaluate_merit(
            student.profile.student_id,
            &student.profile.academic_records,
            &rule,
        ))
    }

    fn student(&self, student_id: &StudentId) -> Result<StudentRecord, AdmissionServiceError> {
        self.repository
            .fetch_student(student_id)?
            .ok_or(AdmissionServiceError::StudentNotFound)
    }
}

fn duplicate_rule(err: RepositoryError) -> AdmissionServiceError {
    match err {
        RepositoryError::Conflict(_) => AdmissionServiceError::DuplicateRule,
        other => AdmissionServiceError::Repository(other),
    }
}

/// Error raised by the admission service.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionServiceError {
    #[error("Student not found")]
    StudentNotFound,
    #[error("Program not found")]
    ProgramNotFound,
    #[error("Merit rule not found")]
    MeritRuleNotFound,
    #[error("Roll number not found")]
    RollNumberNotFound,
    #[error("Certificate not found")]
    CertificateNotFound,
    #[error("Rule for this program already exists")]
    DuplicateRule,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
