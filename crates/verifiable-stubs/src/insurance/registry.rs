//! Fixed hospital and patient directories used by the identity stubs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HospitalEntry {
    pub hospital_id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientEntry {
    pub patient_id: &'static str,
    pub name: &'static str,
    pub dob: &'static str,
    pub gender: &'static str,
}

const HOSPITALS: [HospitalEntry; 3] = [
    HospitalEntry {
        hospital_id: "HOSP-001",
        name: "City General Hospital",
        city: "Springfield",
    },
    HospitalEntry {
        hospital_id: "HOSP-002",
        name: "St. Mary's Medical Center",
        city: "Riverton",
    },
    HospitalEntry {
        hospital_id: "HOSP-003",
        name: "Lakeside Community Clinic",
        city: "Lakeview",
    },
];

const PATIENTS: [PatientEntry; 3] = [
    PatientEntry {
        patient_id: "PAT-1001",
        name: "John Smith",
        dob: "1980-05-14",
        gender: "M",
    },
    PatientEntry {
        patient_id: "PAT-1002",
        name: "Maria Garcia",
        dob: "1992-11-03",
        gender: "F",
    },
    PatientEntry {
        patient_id: "PAT-1003",
        name: "Wei Chen",
        dob: "1975-01-22",
        gender: "M",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HospitalVerificationRequest {
    pub hospital_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HospitalVerification {
    pub hospital_name: String,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientVerificationRequest {
    pub patient_id: String,
    pub name: String,
    pub dob: String,
    pub gender: String,
}

/// Mismatches never raise errors; they only clear `verified`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientVerification {
    pub patient_id: String,
    pub verified: bool,
    pub mismatched_fields: Vec<&'static str>,
}

pub fn verify_hospital(request: HospitalVerificationRequest) -> HospitalVerification {
    let wanted = request.hospital_name.trim();
    let entry = HOSPITALS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(wanted));

    HospitalVerification {
        verified: entry.is_some(),
        hospital_id: entry.map(|entry| entry.hospital_id),
        city: entry.map(|entry| entry.city),
        hospital_name: request.hospital_name,
    }
}

pub fn verify_patient(request: PatientVerificationRequest) -> PatientVerification {
    let Some(entry) = PATIENTS
        .iter()
        .find(|entry| entry.patient_id == request.patient_id)
    else {
        return PatientVerification {
            patient_id: request.patient_id,
            verified: false,
            mismatched_fields: vec!["patient_id"],
        };
    };

    let mut mismatched_fields = Vec::new();
    if !entry.name.eq_ignore_ascii_case(request.name.trim()) {
        mismatched_fields.push("name");
    }
    if entry.dob != request.dob {
        mismatched_fields.push("dob");
    }
    if entry.gender != request.gender {
        mismatched_fields.push("gender");
    }

    PatientVerification {
        patient_id: request.patient_id,
        verified: mismatched_fields.is_empty(),
        mismatched_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(name: &str, dob: &str, gender: &str) -> PatientVerificationRequest {
        PatientVerificationRequest {
            patient_id: "PAT-1002".to_string(),
            name: name.to_string(),
            dob: dob.to_string(),
            gender: gender.to_string(),
        }
    }

    #[test]
    fn hospital_name_matches_case_insensitively() {
        let result = verify_hospital(HospitalVerificationRequest {
            hospital_name: " city general HOSPITAL ".to_string(),
        });
        assert!(result.verified);
        assert_eq!(result.hospital_id, Some("HOSP-001"));

        let unknown = verify_hospital(HospitalVerificationRequest {
            hospital_name: "Nowhere Infirmary".to_string(),
        });
        assert!(!unknown.verified);
        assert_eq!(unknown.city, None);
    }

    #[test]
    fn patient_name_ignores_case_but_dob_and_gender_are_exact() {
        assert!(verify_patient(patient("maria GARCIA", "1992-11-03", "F")).verified);

        let wrong_gender = verify_patient(patient("Maria Garcia", "1992-11-03", "f"));
        assert!(!wrong_gender.verified);
        assert_eq!(wrong_gender.mismatched_fields, vec!["gender"]);

        let wrong_dob = verify_patient(patient("Maria Garcia", "03/11/1992", "F"));
        assert_eq!(wrong_dob.mismatched_fields, vec!["dob"]);
    }

    #[test]
    fn unknown_patient_is_unverified() {
        let mut request = patient("Maria Garcia", "1992-11-03", "F");
        request.patient_id = "PAT-0000".to_string();
        let result = verify_patient(request);
        assert!(!result.verified);
        assert_eq!(result.mismatched_fields, vec!["patient_id"]);
    }
}
