use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use super::{poisoned, RepositoryError};
use crate::insurance::{
    IcdMapping, InsuranceRepository, MedicalEnrichmentRecord, NotificationInput,
    NotificationRecord, PayoutRequestInput, PayoutRequestRecord, RequestId, ReviewerRequestRecord,
};

/// Append-only table with a serial id column.
struct Table<T> {
    rows: BTreeMap<RequestId, T>,
    next_id: RequestId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn append(&mut self, build: impl FnOnce(RequestId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: RequestId) -> Option<T> {
        self.rows.get(&id).cloned()
    }
}

#[derive(Default)]
struct InsuranceTables {
    enrichments: Table<MedicalEnrichmentRecord>,
    reviewer_requests: Table<ReviewerRequestRecord>,
    payout_requests: Table<PayoutRequestRecord>,
    notifications: Table<NotificationRecord>,
}

#[derive(Default, Clone)]
pub struct InMemoryInsuranceRepository {
    tables: Arc<Mutex<InsuranceTables>>,
}

impl InsuranceRepository for InMemoryInsuranceRepository {
    fn insert_enrichment(
        &self,
        diagnosis: String,
        hospital_name: String,
        icd_mapping: Option<IcdMapping>,
    ) -> Result<MedicalEnrichmentRecord, RepositoryError> {
        let mut tables = self.tables.lock().map_err(poisoned)?;
        Ok(tables.enrichments.append(|id| MedicalEnrichmentRecord {
            id,
            diagnosis,
            hospital_name,
            icd_mapping,
        }))
    }

    fn insert_reviewer_request(
        &self,
        workflow_state: Map<String, Value>,
    ) -> Result<ReviewerRequestRecord, RepositoryError> {
        let mut tables = self.tables.lock().map_err(poisoned)?;
        Ok(tables.reviewer_requests.append(|id| ReviewerRequestRecord {
            id,
            workflow_state,
        }))
    }

    fn insert_payout_request(
        &self,
        request: PayoutRequestInput,
    ) -> Result<PayoutRequestRecord, RepositoryError> {
        let mut tables = self.tables.lock().map_err(poisoned)?;
        Ok(tables.payout_requests.append(|id| PayoutRequestRecord {
            id,
            approved_amount: request.approved_amount,
            deductible: request.deductible,
            policy_limit: request.policy_limit,
        }))
    }

    fn insert_notification(
        &self,
        notification: NotificationInput,
    ) -> Result<NotificationRecord, RepositoryError> {
        let mut tables = self.tables.lock().map_err(poisoned)?;
        Ok(tables.notifications.append(|id| NotificationRecord {
            id,
            recipient_email: notification.recipient_email,
            subject: notification.subject,
            message: notification.message,
            sent: true,
        }))
    }

    fn enrichment(&self, id: RequestId) -> Result<Option<MedicalEnrichmentRecord>, RepositoryError> {
        let tables = self.tables.lock().map_err(poisoned)?;
        Ok(tables.enrichments.get(id))
    }

    fn reviewer_request(
        &self,
        id: RequestId,
    ) -> Result<Option<ReviewerRequestRecord>, RepositoryError> {
        let tables = self.tables.lock().map_err(poisoned)?;
        Ok(tables.reviewer_requests.get(id))
    }

    fn payout_request(&self, id: RequestId) -> Result<Option<PayoutRequestRecord>, RepositoryError> {
        let tables = self.tables.lock().map_err(poisoned)?;
        Ok(tables.payout_requests.get(id))
    }

    fn notification(&self, id: RequestId) -> Result<Option<NotificationRecord>, RepositoryError> {
        let tables = self.tables.lock().map_err(poisoned)?;
        Ok(tables.notifications.get(id))
    }
}
