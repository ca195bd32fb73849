use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;
use uuid::Uuid;

use super::{poisoned, RepositoryError};
use crate::compliance::{
    ComplianceRecord, ComplianceRecordRepository, FraudPattern, FraudPatternFilter,
    FraudPatternPatch, FraudPatternRepository, Regulation, RegulationFilter, RegulationPatch,
    RegulationRepository, SanctionsEntry, SanctionsFilter, SanctionsRepository,
};

/// Append-only compliance audit log.
#[derive(Default, Clone)]
pub struct InMemoryComplianceRecordRepository {
    records: Arc<Mutex<HashMap<Uuid, ComplianceRecord>>>,
}

impl ComplianceRecordRepository for InMemoryComplianceRecordRepository {
    fn insert(&self, record: ComplianceRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().map_err(poisoned)?;
        if records.contains_key(&record.request_id) {
            return Err(RepositoryError::Conflict(format!(
                "request id '{}'",
                record.request_id
            )));
        }
        records.insert(record.request_id, record);
        Ok(())
    }

    fn fetch(&self, request_id: &Uuid) -> Result<Option<ComplianceRecord>, RepositoryError> {
        let records = self.records.lock().map_err(poisoned)?;
        Ok(records.get(request_id).cloned())
    }
}

fn insert_unique<T>(
    rows: &mut BTreeMap<String, T>,
    id: String,
    row: T,
) -> Result<(), RepositoryError> {
    if rows.contains_key(&id) {
        return Err(RepositoryError::Conflict(format!("id '{id}'")));
    }
    rows.insert(id, row);
    Ok(())
}

#[derive(Default, Clone)]
pub struct InMemoryRegulationRepository {
    rows: Arc<RwLock<BTreeMap<String, Regulation>>>,
}

impl RegulationRepository for InMemoryRegulationRepository {
    fn insert(&self, regulation: Regulation) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        let id = regulation.details.regulation_id.clone();
        insert_unique(&mut rows, id, regulation)
    }

    fn fetch(&self, regulation_id: &str) -> Result<Option<Regulation>, RepositoryError> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.get(regulation_id).cloned())
    }

    fn update(
        &self,
        regulation_id: &str,
        patch: RegulationPatch,
    ) -> Result<Regulation, RepositoryError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        let regulation = rows
            .get_mut(regulation_id)
            .ok_or(RepositoryError::NotFound)?;
        patch.apply(&mut regulation.details);
        regulation.updated_at = Utc::now();
        Ok(regulation.clone())
    }

    fn delete(&self, regulation_id: &str) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        rows.remove(regulation_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn matching(&self, filter: &RegulationFilter) -> Result<Vec<Regulation>, RepositoryError> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows
            .values()
            .filter(|regulation| filter.matches(regulation))
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub struct InMemorySanctionsRepository {
    rows: Arc<RwLock<BTreeMap<String, SanctionsEntry>>>,
}

impl SanctionsRepository for InMemorySanctionsRepository {
    fn insert(&self, entry: SanctionsEntry) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        let id = entry.details.entry_id.clone();
        insert_unique(&mut rows, id, entry)
    }

    fn matching(&self, filter: &SanctionsFilter) -> Result<Vec<SanctionsEntry>, RepositoryError> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows
            .values()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryFraudPatternRepository {
    rows: Arc<RwLock<BTreeMap<String, FraudPattern>>>,
}

impl FraudPatternRepository for InMemoryFraudPatternRepository {
    fn insert(&self, pattern: FraudPattern) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        let id = pattern.details.pattern_id.clone();
        insert_unique(&mut rows, id, pattern)
    }

    fn fetch(&self, pattern_id: &str) -> Result<Option<FraudPattern>, RepositoryError> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.get(pattern_id).cloned())
    }

    fn update(
        &self,
        pattern_id: &str,
        patch: FraudPatternPatch,
    ) -> Result<FraudPattern, RepositoryError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        let pattern = rows.get_mut(pattern_id).ok_or(RepositoryError::NotFound)?;
        patch.apply(&mut pattern.details);
        pattern.updated_at = Utc::now();
        Ok(pattern.clone())
    }

    fn delete(&self, pattern_id: &str) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        rows.remove(pattern_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn matching(
        &self,
        filter: &FraudPatternFilter,
    ) -> Result<Vec<FraudPattern>, RepositoryError> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows
            .values()
            .filter(|pattern| filter.matches(pattern))
            .cloned()
            .collect())
    }
}
