use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use super::{poisoned, RepositoryError};
use crate::doctors::{BoardCertification, DoctorId, DoctorProfile, DoctorRecord, DoctorRepository};

#[derive(Default)]
struct DoctorTables {
    doctors: HashMap<DoctorId, DoctorRecord>,
    by_license: HashMap<String, DoctorId>,
    by_certificate: HashMap<String, BoardCertification>,
}

impl DoctorTables {
    fn check_unique_keys(&self, staged: &[DoctorProfile]) -> Result<(), RepositoryError> {
        let mut licenses = HashSet::new();
        let mut certificates = HashSet::new();

        for profile in staged {
            if self.by_license.contains_key(&profile.license_number)
                || !licenses.insert(profile.license_number.as_str())
            {
                return Err(RepositoryError::Conflict(format!(
                    "license number '{}'",
                    profile.license_number
                )));
            }

            for certification in &profile.board_certifications {
                let number = certification.certificate_number.as_str();
                if self.by_certificate.contains_key(number) || !certificates.insert(number) {
                    return Err(RepositoryError::Conflict(format!(
                        "certificate number '{number}'"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Doctor table with license and board certificate indexes.
#[derive(Default, Clone)]
pub struct InMemoryDoctorRepository {
    tables: Arc<RwLock<DoctorTables>>,
}

impl DoctorRepository for InMemoryDoctorRepository {
    fn insert_batch(&self, profiles: Vec<DoctorProfile>) -> Result<Vec<DoctorId>, RepositoryError> {
        let mut tables = self.tables.write().map_err(poisoned)?;

        let mut seen = HashSet::new();
        let staged: Vec<DoctorProfile> = profiles
            .into_iter()
            .filter(|profile| {
                !tables.doctors.contains_key(&profile.doctor_id)
                    && seen.insert(profile.doctor_id.clone())
            })
            .collect();

        tables.check_unique_keys(&staged)?;

        let mut added = Vec::with_capacity(staged.len());
        for profile in staged {
            let id = profile.doctor_id.clone();
            tables
                .by_license
                .insert(profile.license_number.clone(), id.clone());
            for certification in &profile.board_certifications {
                tables
                    .by_certificate
                    .insert(certification.certificate_number.clone(), certification.clone());
            }
            tables.doctors.insert(id.clone(), DoctorRecord::new(profile));
            added.push(id);
        }

        Ok(added)
    }

    fn fetch(&self, id: &DoctorId) -> Result<Option<DoctorRecord>, RepositoryError> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables.doctors.get(id).cloned())
    }

    fn find_by_license(
        &self,
        license_number: &str,
    ) -> Result<Option<DoctorRecord>, RepositoryError> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables
            .by_license
            .get(license_number)
            .and_then(|id| tables.doctors.get(id))
            .cloned())
    }

    fn find_certification(
        &self,
        certificate_number: &str,
    ) -> Result<Option<BoardCertification>, RepositoryError> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables.by_certificate.get(certificate_number).cloned())
    }
}
