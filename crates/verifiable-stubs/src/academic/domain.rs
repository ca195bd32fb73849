use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for seeded students.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_id: StudentId,
    pub name: String,
    pub dob: String,
    pub academic_records: Vec<AcademicRecord>,
}

/// One examination result; `level` is free text such as "10th" or "Graduation".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicRecord {
    pub level: String,
    pub board: String,
    pub roll_number: String,
    pub year_of_passing: String,
    pub marks: f64,
    pub certificate_number: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub profile: StudentProfile,
}

impl StudentRecord {
    pub fn new(profile: StudentProfile) -> Self {
        Self { profile }
    }
}

/// Academic record resolved through a natural key, with its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMatch {
    pub student_id: StudentId,
    pub record: AcademicRecord,
}

/// Minimum-marks rule for a program.
///
/// `age_limit` and `category_specific` are stored and echoed back but play no
/// part in the eligibility decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityRule {
    pub program: String,
    pub min_marks: f64,
    #[serde(default)]
    pub age_limit: Option<u32>,
    #[serde(default)]
    pub category_specific: Option<BTreeMap<String, f64>>,
}

/// Level keyword to weight mapping used for merit scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeritRule {
    pub program: String,
    pub weightage: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentSummary {
    pub message: String,
    pub student_ids: Vec<StudentId>,
}

impl EnrollmentSummary {
    pub fn new(student_ids: Vec<StudentId>) -> Self {
        Self {
            message: format!("Batch processed. {} students added.", student_ids.len()),
            student_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleAcknowledgement {
    pub message: &'static str,
    pub program: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollNumberView {
    pub student_id: StudentId,
    pub roll_number: String,
    pub year_of_passing: String,
    pub marks: f64,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateView {
    pub certificate_number: String,
    pub student_id: StudentId,
    pub level: String,
    pub marks: f64,
    pub verified: bool,
}
