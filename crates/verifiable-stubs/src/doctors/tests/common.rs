use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::doctors::domain::{
    BoardCertification, Degree, DoctorId, DoctorProfile, DoctorRecord, Employment, Training,
};
use crate::doctors::repository::DoctorRepository;
use crate::doctors::{doctor_router, DoctorVerificationService};
use crate::store::{InMemoryDoctorRepository, RepositoryError};

pub(super) fn profile(suffix: &str) -> DoctorProfile {
    DoctorProfile {
        doctor_id: DoctorId(format!("DOC-{suffix}")),
        name: "Dr. Amara Okafor".to_string(),
        license_number: format!("LIC-{suffix}"),
        license_status: "active".to_string(),
        license_expiry: "2027-12-31".to_string(),
        degree: Degree {
            degree_name: "MBBS".to_string(),
            university: "Northfield Medical University".to_string(),
            year_of_passing: "2011".to_string(),
            registration_number: format!("NMU-{suffix}"),
        },
        board_certifications: vec![BoardCertification {
            board_name: "American Board of Pediatrics".to_string(),
            certificate_number: format!("ABP-{suffix}"),
            valid_till: "2029-03-01".to_string(),
        }],
        training: vec![Training {
            program_name: "Pediatric Residency".to_string(),
            institution: "St. Clare Children's Hospital".to_string(),
            completion_year: "2014".to_string(),
        }],
        employment_history: vec![
            Employment {
                employer_name: "Harbor Pediatrics".to_string(),
                role: "Attending Physician".to_string(),
                years: "2014-2019".to_string(),
            },
            Employment {
                employer_name: "Mercy West".to_string(),
                role: "Department Lead".to_string(),
                years: "2019-present".to_string(),
            },
        ],
        disciplinary_actions: Vec::new(),
        malpractice_cases: Vec::new(),
    }
}

pub(super) fn flagged_profile(suffix: &str) -> DoctorProfile {
    let mut profile = profile(suffix);
    profile.training.clear();
    profile.disciplinary_actions = vec![json!({
        "action": "probation",
        "year": 2020,
    })];
    profile.malpractice_cases = vec![json!({
        "case_id": "MC-881",
        "outcome": "settled",
    })];
    profile
}

pub(super) fn build_service() -> (
    DoctorVerificationService<InMemoryDoctorRepository>,
    Arc<InMemoryDoctorRepository>,
) {
    let repository = Arc::new(InMemoryDoctorRepository::default());
    let service = DoctorVerificationService::new(repository.clone());
    (service, repository)
}

pub(super) fn seeded_router(profiles: Vec<DoctorProfile>) -> axum::Router {
    let (service, _) = build_service();
    service.onboard(profiles).expect("seed batch");
    doctor_router(Arc::new(service))
}

pub(super) struct UnavailableRepository;

impl DoctorRepository for UnavailableRepository {
    fn insert_batch(
        &self,
        _profiles: Vec<DoctorProfile>,
    ) -> Result<Vec<DoctorId>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &DoctorId) -> Result<Option<DoctorRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_license(
        &self,
        _license_number: &str,
    ) -> Result<Option<DoctorRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_certification(
        &self,
        _certificate_number: &str,
    ) -> Result<Option<BoardCertification>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}
