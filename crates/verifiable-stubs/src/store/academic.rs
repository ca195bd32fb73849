use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use super::{poisoned, RepositoryError};
use crate::academic::{
    AcademicRepository, EligibilityRule, MeritRule, RecordMatch, StudentId, StudentProfile,
    StudentRecord,
};

/// Position of an academic record inside its owning student.
type RecordRef = (StudentId, usize);

#[derive(Default)]
struct AcademicTables {
    students: HashMap<StudentId, StudentRecord>,
    by_roll_number: HashMap<String, RecordRef>,
    by_certificate: HashMap<String, RecordRef>,
    eligibility_rules: HashMap<String, EligibilityRule>,
    merit_rules: HashMap<String, MeritRule>,
}

impl AcademicTables {
    fn resolve(&self, reference: Option<&RecordRef>) -> Option<RecordMatch> {
        let (student_id, index) = reference?;
        let student = self.students.get(student_id)?;
        let record = student.profile.academic_records.get(*index)?;
        Some(RecordMatch {
            student_id: student_id.clone(),
            record: record.clone(),
        })
    }
}

/// Student table with roll number and certificate indexes plus rule tables.
#[derive(Default, Clone)]
pub struct InMemoryAcademicRepository {
    tables: Arc<RwLock<AcademicTables>>,
}

impl AcademicRepository for InMemoryAcademicRepository {
    fn insert_students(
        &self,
        profiles: Vec<StudentProfile>,
    ) -> Result<Vec<StudentId>, RepositoryError> {
        let mut tables = self.tables.write().map_err(poisoned)?;

        let mut seen = HashSet::new();
        let staged: Vec<StudentProfile> = profiles
            .into_iter()
            .filter(|profile| {
                !tables.students.contains_key(&profile.student_id)
                    && seen.insert(profile.student_id.clone())
            })
            .collect();

        let mut certificates = HashSet::new();
        for record in staged.iter().flat_map(|profile| &profile.academic_records) {
            let number = record.certificate_number.as_str();
            if tables.by_certificate.contains_key(number) || !certificates.insert(number) {
                return Err(RepositoryError::Conflict(format!(
                    "certificate number '{number}'"
                )));
            }
        }

        let mut added = Vec::with_capacity(staged.len());
        for profile in staged {
            let id = profile.student_id.clone();
            for (index, record) in profile.academic_records.iter().enumerate() {
                tables
                    .by_roll_number
                    .entry(record.roll_number.clone())
                    .or_insert_with(|| (id.clone(), index));
                tables
                    .by_certificate
                    .insert(record.certificate_number.clone(), (id.clone(), index));
            }
            tables.students.insert(id.clone(), StudentRecord::new(profile));
            added.push(id);
        }

        Ok(added)
    }

    fn fetch_student(&self, id: &StudentId) -> Result<Option<StudentRecord>, RepositoryError> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables.students.get(id).cloned())
    }

    fn find_by_roll_number(
        &self,
        roll_number: &str,
    ) -> Result<Option<RecordMatch>, RepositoryError> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables.resolve(tables.by_roll_number.get(roll_number)))
    }

    fn find_by_certificate(
        &self,
        certificate_number: &str,
    ) -> Result<Option<RecordMatch>, RepositoryError> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables.resolve(tables.by_certificate.get(certificate_number)))
    }

    fn insert_eligibility_rule(&self, rule: EligibilityRule) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        match tables.eligibility_rules.entry(rule.program.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict(format!(
                "eligibility rule for '{}'",
                rule.program
            ))),
            Entry::Vacant(slot) => {
                slot.insert(rule);
                Ok(())
            }
        }
    }

    fn eligibility_rule(&self, program: &str) -> Result<Option<EligibilityRule>, RepositoryError> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables.eligibility_rules.get(program).cloned())
    }

    fn insert_merit_rule(&self, rule: MeritRule) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        match tables.merit_rules.entry(rule.program.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict(format!(
                "merit rule for '{}'",
                rule.program
            ))),
            Entry::Vacant(slot) => {
                slot.insert(rule);
                Ok(())
            }
        }
    }

    fn merit_rule(&self, program: &str) -> Result<Option<MeritRule>, RepositoryError> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables.merit_rules.get(program).cloned())
    }
}
