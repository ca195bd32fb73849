//! Diagnosis to ICD-10 code lookup by keyword.

use serde::{Deserialize, Serialize};

/// Keywords are checked in this order; the first one found in the diagnosis wins.
const ICD_TABLE: [(&str, &str, &str); 3] = [
    ("diabetes", "E11.9", "Type 2 diabetes mellitus"),
    ("hypertension", "I10", "Essential hypertension"),
    ("asthma", "J45.909", "Unspecified asthma"),
];

pub const UNKNOWN_CODE: &str = "UNKNOWN";
pub const UNKNOWN_DESCRIPTION: &str = "Unknown diagnosis";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcdMapping {
    pub icd_code: String,
    pub description: String,
}

impl IcdMapping {
    pub fn unknown() -> Self {
        Self {
            icd_code: UNKNOWN_CODE.to_string(),
            description: UNKNOWN_DESCRIPTION.to_string(),
        }
    }
}

/// Returns `None` when the diagnosis mentions none of the known keywords.
pub fn map_diagnosis(diagnosis: &str) -> Option<IcdMapping> {
    let diagnosis = diagnosis.to_lowercase();
    ICD_TABLE
        .iter()
        .find(|(keyword, _, _)| diagnosis.contains(keyword))
        .map(|(_, code, description)| IcdMapping {
            icd_code: code.to_string(),
            description: description.to_string(),
        })
}
