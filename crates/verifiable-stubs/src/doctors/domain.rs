use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier wrapper for onboarded doctors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoctorId(pub String);

/// Credential bundle submitted through the onboarding seed endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub doctor_id: DoctorId,
    pub name: String,
    pub license_number: String,
    pub license_status: String,
    pub license_expiry: String,
    pub degree: Degree,
    pub board_certifications: Vec<BoardCertification>,
    pub training: Vec<Training>,
    pub employment_history: Vec<Employment>,
    #[serde(default)]
    pub disciplinary_actions: Vec<Value>,
    #[serde(default)]
    pub malpractice_cases: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub degree_name: String,
    pub university: String,
    pub year_of_passing: String,
    pub registration_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCertification {
    pub board_name: String,
    pub certificate_number: String,
    pub valid_till: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    pub program_name: String,
    pub institution: String,
    pub completion_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    pub employer_name: String,
    pub role: String,
    pub years: String,
}

/// Stored doctor as held by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorRecord {
    pub profile: DoctorProfile,
}

impl DoctorRecord {
    pub fn new(profile: DoctorProfile) -> Self {
        Self { profile }
    }
}

/// Result of an onboarding batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingSummary {
    pub message: String,
    pub doctor_ids: Vec<DoctorId>,
}

impl OnboardingSummary {
    pub fn new(doctor_ids: Vec<DoctorId>) -> Self {
        Self {
            message: format!("Batch processed. {} doctors added.", doctor_ids.len()),
            doctor_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseStatusView {
    pub license_number: String,
    pub status: String,
    pub expiry_date: String,
    pub issuer: &'static str,
    pub doctor_id: DoctorId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeView {
    #[serde(flatten)]
    pub degree: Degree,
    pub verified: bool,
    pub source_authority: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardCertificationView {
    #[serde(flatten)]
    pub certification: BoardCertification,
    pub verified: bool,
}

/// Training lookup; only `verified` is reported when nothing is on file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingView {
    #[serde(flatten)]
    pub training: Option<Training>,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmploymentView {
    pub employment_details: Vec<Employment>,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisciplinaryCheckView {
    pub has_disciplinary_action: bool,
    pub records: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MalpracticeHistoryView {
    pub has_malpractice_history: bool,
    pub cases: Vec<Value>,
}

/// Simulated catch-all verification; the confidence never depends on input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericVerificationView {
    pub verified: bool,
    pub confidence: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}
