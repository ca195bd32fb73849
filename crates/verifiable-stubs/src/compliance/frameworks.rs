//! Questionnaire-style framework checks (PEP, GDPR, PCI-DSS, HIPAA,
//! ISO 27001, market conduct). Each check is recorded as a
//! [`ComplianceRecord`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    Pep,
    Gdpr,
    Pci,
    Hipaa,
    Iso27001,
    Market,
}

impl CheckType {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckType::Pep => "pep",
            CheckType::Gdpr => "gdpr",
            CheckType::Pci => "pci",
            CheckType::Hipaa => "hipaa",
            CheckType::Iso27001 => "iso27001",
            CheckType::Market => "market",
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted audit entry for one framework check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceRecord {
    pub request_id: Uuid,
    pub check_type: CheckType,
    pub status: String,
    pub request_payload: Value,
    pub response_payload: Value,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// A framework questionnaire and the rule that scores it.
pub trait FrameworkCheck: Serialize + DeserializeOwned + Send + 'static {
    type Outcome: FrameworkOutcome;

    const CHECK: CheckType;

    fn assess(&self) -> Self::Outcome;
}

pub trait FrameworkOutcome: Serialize + Send + 'static {
    fn status(&self) -> &'static str {
        "completed"
    }
}

/// Response envelope shared by every framework check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport<T> {
    pub request_id: Uuid,
    pub status: &'static str,
    pub checked_at: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PepCheckRequest {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PepOutcome {
    pub is_pep: bool,
    pub pep_category: Option<String>,
    pub risk_level: String,
}

impl FrameworkOutcome for PepOutcome {}

impl FrameworkCheck for PepCheckRequest {
    type Outcome = PepOutcome;
    const CHECK: CheckType = CheckType::Pep;

    fn assess(&self) -> PepOutcome {
        PepOutcome {
            is_pep: false,
            pep_category: None,
            risk_level: "low".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdprCheckRequest {
    pub has_privacy_policy: bool,
    pub consent_mechanism: bool,
    pub data_retention_policy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdprOutcome {
    pub compliance_score: u32,
    pub missing_requirements: Vec<String>,
}

impl FrameworkOutcome for GdprOutcome {
    fn status(&self) -> &'static str {
        if self.compliance_score >= 70 {
            "compliant"
        } else {
            "non_compliant"
        }
    }
}

impl FrameworkCheck for GdprCheckRequest {
    type Outcome = GdprOutcome;
    const CHECK: CheckType = CheckType::Gdpr;

    fn assess(&self) -> GdprOutcome {
        let missing = shortfalls([
            (!self.has_privacy_policy, "privacy_policy"),
            (!self.consent_mechanism, "consent_mechanism"),
            (!self.data_retention_policy, "data_retention_policy"),
        ]);
        let penalty = 30 * missing.len() as u32;
        GdprOutcome {
            compliance_score: 100u32.saturating_sub(penalty),
            missing_requirements: missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PciCheckRequest {
    pub stores_card_data: bool,
    pub encryption_enabled: bool,
    pub access_control: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PciOutcome {
    pub compliant: bool,
    pub issues: Vec<String>,
}

impl FrameworkOutcome for PciOutcome {}

impl FrameworkCheck for PciCheckRequest {
    type Outcome = PciOutcome;
    const CHECK: CheckType = CheckType::Pci;

    fn assess(&self) -> PciOutcome {
        let issues = shortfalls([
            (
                self.stores_card_data && !self.encryption_enabled,
                "Card data stored without encryption",
            ),
            (!self.access_control, "Weak access control"),
        ]);
        PciOutcome {
            compliant: issues.is_empty(),
            issues,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HipaaCheckRequest {
    pub handles_phi: bool,
    pub access_logging: bool,
    pub breach_policy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HipaaOutcome {
    pub compliant: bool,
    pub violations: Vec<String>,
}

impl FrameworkOutcome for HipaaOutcome {}

impl FrameworkCheck for HipaaCheckRequest {
    type Outcome = HipaaOutcome;
    const CHECK: CheckType = CheckType::Hipaa;

    fn assess(&self) -> HipaaOutcome {
        let violations = shortfalls([
            (
                self.handles_phi && !self.access_logging,
                "Missing access logs for PHI",
            ),
            (
                self.handles_phi && !self.breach_policy,
                "No breach notification policy",
            ),
        ]);
        HipaaOutcome {
            compliant: violations.is_empty(),
            violations,
        }
    }
}

/// `access_control_policy` is recorded but does not affect the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iso27001CheckRequest {
    pub risk_assessment_done: bool,
    pub incident_management: bool,
    pub access_control_policy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iso27001Outcome {
    pub maturity_level: String,
    pub gaps: Vec<String>,
}

impl FrameworkOutcome for Iso27001Outcome {}

impl FrameworkCheck for Iso27001CheckRequest {
    type Outcome = Iso27001Outcome;
    const CHECK: CheckType = CheckType::Iso27001;

    fn assess(&self) -> Iso27001Outcome {
        let gaps = shortfalls([
            (!self.risk_assessment_done, "Risk assessment missing"),
            (!self.incident_management, "Incident management missing"),
        ]);
        let maturity_level = if gaps.is_empty() { "high" } else { "medium" };
        Iso27001Outcome {
            maturity_level: maturity_level.to_string(),
            gaps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketCheckRequest {
    pub trade_monitoring: bool,
    pub conflict_policy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOutcome {
    pub compliant: bool,
    pub remarks: Vec<String>,
}

impl FrameworkOutcome for MarketOutcome {}

impl FrameworkCheck for MarketCheckRequest {
    type Outcome = MarketOutcome;
    const CHECK: CheckType = CheckType::Market;

    fn assess(&self) -> MarketOutcome {
        let remarks = shortfalls([
            (!self.trade_monitoring, "Trade monitoring missing"),
            (!self.conflict_policy, "Conflict of interest policy missing"),
        ]);
        MarketOutcome {
            compliant: remarks.is_empty(),
            remarks,
        }
    }
}

fn shortfalls<const N: usize>(checks: [(bool, &str); N]) -> Vec<String> {
    checks
        .into_iter()
        .filter(|(failed, _)| *failed)
        .map(|(_, label)| label.to_string())
        .collect()
}
