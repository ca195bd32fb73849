//! Eligibility and merit arithmetic over a student's academic records.

use serde::Serialize;

use super::domain::{AcademicRecord, EligibilityRule, MeritRule, StudentId};

/// Outcome of comparing a student's best marks against a program rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityOutcome {
    pub eligible: bool,
    pub program: String,
    pub student_marks: f64,
    pub required_marks: f64,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeritOutcome {
    pub student_id: StudentId,
    pub program: String,
    pub merit_score: f64,
    /// Ranking across applicants is not computed.
    pub rank: Option<u32>,
}

/// Highest marks across all records, or 0 when there are none.
pub fn best_marks(records: &[AcademicRecord]) -> f64 {
    records
        .iter()
        .map(|record| record.marks)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

pub fn evaluate_eligibility(records: &[AcademicRecord], rule: &EligibilityRule) -> EligibilityOutcome {
    let student_marks = best_marks(records);
    let eligible = student_marks >= rule.min_marks;

    EligibilityOutcome {
        eligible,
        program: rule.program.clone(),
        student_marks,
        required_marks: rule.min_marks,
        message: if eligible {
            "Student is eligible"
        } else {
            "Student does not meet minimum marks"
        },
    }
}

/// Weighted sum of marks, one record per weightage key.
///
/// A key picks the first record whose level contains it, ignoring case.
/// Keys without a matching record add nothing.
pub fn merit_score(records: &[AcademicRecord], rule: &MeritRule) -> f64 {
    rule.weightage
        .iter()
        .filter_map(|(key, weight)| {
            let key = key.to_lowercase();
            records
                .iter()
                .find(|record| record.level.to_lowercase().contains(&key))
                .map(|record| record.marks * weight)
        })
        .sum()
}

pub fn evaluate_merit(
    student_id: StudentId,
    records: &[AcademicRecord],
    rule: &MeritRule,
) -> MeritOutcome {
    MeritOutcome {
        student_id,
        program: rule.program.clone(),
        merit_score: merit_score(records, rule),
        rank: None,
    }
}
