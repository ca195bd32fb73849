use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::icd::IcdMapping;

/// Sequential identifier assigned per request table.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalEnrichmentInput {
    pub diagnosis: String,
    pub hospital_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewerRequestInput {
    pub workflow_state: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutRequestInput {
    pub approved_amount: f64,
    pub deductible: f64,
    pub policy_limit: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationInput {
    pub recipient_email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicalEnrichmentRecord {
    pub id: RequestId,
    pub diagnosis: String,
    pub hospital_name: String,
    pub icd_mapping: Option<IcdMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewerRequestRecord {
    pub id: RequestId,
    pub workflow_state: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutRequestRecord {
    pub id: RequestId,
    pub approved_amount: f64,
    pub deductible: f64,
    pub policy_limit: f64,
}

/// Notifications are recorded as sent; nothing is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRecord {
    pub id: RequestId,
    pub recipient_email: String,
    pub subject: String,
    pub message: String,
    pub sent: bool,
}

/// Stored request echoed back with a confirmation message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledged<T> {
    #[serde(flatten)]
    pub record: T,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationReceipt {
    #[serde(flatten)]
    pub record: NotificationRecord,
    pub response_message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichmentView {
    pub diagnosis: String,
    pub icd_code: String,
    pub description: String,
    pub hospital_name: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimReviewInput {
    pub claim_id: String,
    #[serde(default = "pending_status")]
    pub status: String,
}

fn pending_status() -> String {
    "pending".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimReviewView {
    pub claim_id: String,
    pub status: String,
    pub message: String,
    pub reviewed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayoutInput {
    pub claim_id: String,
    #[serde(default)]
    pub payout_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutView {
    pub claim_id: String,
    pub payout_amount: f64,
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationDispatchView {
    pub recipient_email: String,
    pub subject: String,
    pub status: &'static str,
    pub message: &'static str,
}
