use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::catalog::{
    FraudPattern, FraudPatternFilter, FraudPatternInput, FraudPatternList, FraudPatternPatch,
    FraudPatternStored, PageError, PageRequest, Regulation, RegulationFilter, RegulationInput,
    RegulationList, RegulationPatch, RegulationStored, SanctionsEntry, SanctionsEntryInput,
    SanctionsEntryList, SanctionsEntryStored, SanctionsFilter, SanctionsList,
};
use super::frameworks::{CheckReport, ComplianceRecord, FrameworkCheck, FrameworkOutcome};
use super::repository::{
    ComplianceRecordRepository, FraudPatternRepository, RegulationRepository, SanctionsRepository,
};
use super::screening::{
    assess_financial_health, detect_forgery, detect_fraud, verify_entity, AdverseMediaSummary,
    DocumentForgeryRequest, EntityComplianceReport, EntityComplianceRequest,
    FinancialHealthReport, FinancialVerifyRequest, ForgeryAssessment, FraudAssessment,
    FraudDetectRequest, PepStatus, SanctionsMatch, SanctionsScreenReport, SanctionsScreenRequest,
};
use super::seed::{reference_fraud_patterns, reference_regulations, reference_sanctions};
use crate::store::RepositoryError;

/// Runs framework questionnaires and keeps an audit record of each run.
pub struct FrameworkCheckService<R> {
    records: Arc<R>,
}

impl<R> FrameworkCheckService<R>
where
    R: ComplianceRecordRepository + 'static,
{
    pub fn new(records: Arc<R>) -> Self {
        Self { records }
    }

    pub fn run<C>(&self, request: C) -> Result<CheckReport<C::Outcome>, FrameworkServiceError>
    where
        C: FrameworkCheck,
    {
        let outcome = request.assess();
        let checked_at = Utc::now();
        let report = CheckReport {
            request_id: Uuid::new_v4(),
            status: outcome.status(),
            checked_at,
            outcome,
        };

        let record = ComplianceRecord {
            request_id: report.request_id,
            check_type: C::CHECK,
            status: "completed".to_string(),
            request_payload: serde_json::to_value(&request)?,
            response_payload: serde_json::to_value(&report)?,
            notes: None,
            created_at: checked_at,
            completed_at: Some(Utc::now()),
        };
        self.records.insert(record).map_err(|err| {
            warn!(error = %err, check = %C::CHECK, "compliance record not stored");
            err
        })?;

        info!(
            check = %C::CHECK,
            request_id = %report.request_id,
            status = report.status,
            "compliance check recorded"
        );
        Ok(report)
    }

    pub fn record(&self, request_id: &Uuid) -> Result<ComplianceRecord, FrameworkServiceError> {
        self.records
            .fetch(request_id)?
            .ok_or(FrameworkServiceError::RecordNotFound)
    }
}

/// Error raised by framework checks.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkServiceError {
    #[error("Compliance record not found")]
    RecordNotFound,
    #[error("failed to encode compliance payload: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Summary of a reference data load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub regulations: usize,
    pub fraud_patterns: usize,
    pub sanctions_entries: usize,
}

/// Regulation, sanctions and fraud catalogues plus the checks that read them.
pub struct ExternalComplianceService<G, S, F> {
    regulations: Arc<G>,
    sanctions: Arc<S>,
    patterns: Arc<F>,
}

impl<G, S, F> ExternalComplianceService<G, S, F>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    pub fn new(regulations: Arc<G>, sanctions: Arc<S>, patterns: Arc<F>) -> Self {
        Self {
            regulations,
            sanctions,
            patterns,
        }
    }

    pub fn create_regulation(
        &self,
        input: RegulationInput,
    ) -> Result<RegulationStored, ComplianceServiceError> {
        let regulation_id = input.regulation_id.clone();
        self.regulations
            .insert(Regulation::new(input, Utc::now()))
            .map_err(|err| match err {
                RepositoryError::Conflict(_) => {
                    ComplianceServiceError::DuplicateRegulation(regulation_id.clone())
                }
                other => other.into(),
            })?;
        info!(%regulation_id, "regulation stored");
        Ok(RegulationStored {
            success: true,
            regulation_id,
            message: "Regulation stored successfully",
        })
    }

    pub fn list_regulations(
        &self,
        filter: &RegulationFilter,
        page: PageRequest,
    ) -> Result<RegulationList, ComplianceServiceError> {
        let window = page.slice(self.regulations.matching(filter)?);
        Ok(RegulationList {
            success: true,
            total: window.total,
            page: page.page,
            limit: page.limit,
            regulations: window.items.into_iter().map(Into::into).collect(),
        })
    }

    pub fn regulation(&self, regulation_id: &str) -> Result<Regulation, ComplianceServiceError> {
        self.regulations
            .fetch(regulation_id)?
            .ok_or_else(|| ComplianceServiceError::RegulationNotFound(regulation_id.to_string()))
    }

    pub fn update_regulation(
        &self,
        regulation_id: &str,
        patch: RegulationPatch,
    ) -> Result<Regulation, ComplianceServiceError> {
        let updated = self
            .regulations
            .update(regulation_id, patch)
            .map_err(|err| regulation_missing(err, regulation_id))?;
        info!(%regulation_id, "regulation updated");
        Ok(updated)
    }

    pub fn delete_regulation(&self, regulation_id: &str) -> Result<(), ComplianceServiceError> {
        self.regulations
            .delete(regulation_id)
            .map_err(|err| regulation_missing(err, regulation_id))?;
        info!(%regulation_id, "regulation deleted");
        Ok(())
    }

    pub fn verify_entity(
        &self,
        request: &EntityComplianceRequest,
    ) -> Result<EntityComplianceReport, ComplianceServiceError> {
        let active = self.regulations.matching(&RegulationFilter::active())?;
        let report = verify_entity(request, &active, Utc::now());
        info!(
            entity = %request.entity_name,
            score = report.compliance_score,
            status = report.compliance_status,
            "entity compliance verified"
        );
        Ok(report)
    }

    /// Lists that are not recognised are reported as checked but never match.
    pub fn screen_sanctions(
        &self,
        request: &SanctionsScreenRequest,
    ) -> Result<SanctionsScreenReport, ComplianceServiceError> {
        let lists_checked = request.lists();
        let mut matches = Vec::new();
        for list_name in &lists_checked {
            let Some(list_type) = SanctionsList::parse(list_name) else {
                continue;
            };
            let filter = SanctionsFilter {
                search: Some(request.entity_name.clone()),
                is_active: Some(true),
                ..SanctionsFilter::list(list_type)
            };
            for entry in self.sanctions.matching(&filter)? {
                matches.push(SanctionsMatch::score(list_name, &request.entity_name, &entry));
            }
        }

        let mut report = SanctionsScreenReport::new(matches, lists_checked, Utc::now());
        if request.check_pep {
            let query = request.entity_name.to_lowercase();
            let politically_exposed = self
                .sanctions
                .matching(&SanctionsFilter::list(SanctionsList::Pep))?;
            let hit = politically_exposed
                .iter()
                .find(|entry| entry.details.name.to_lowercase().contains(&query));
            report.pep_check = Some(PepStatus::from_entry(hit));
        }
        if request.check_adverse_media {
            report.adverse_media = Some(AdverseMediaSummary {
                found: false,
                articles: Vec::new(),
            });
        }

        info!(
            entity = %request.entity_name,
            matches = report.matches_found,
            status = report.screening_status,
            "sanctions screening completed"
        );
        Ok(report)
    }

    pub fn add_sanctions_entry(
        &self,
        list_type: &str,
        input: SanctionsEntryInput,
    ) -> Result<SanctionsEntryStored, ComplianceServiceError> {
        let list = parse_list(list_type)?;
        let entry_id = input.entry_id.clone();
        self.sanctions
            .insert(SanctionsEntry::new(list, input, Utc::now()))
            .map_err(|err| match err {
                RepositoryError::Conflict(_) => {
                    ComplianceServiceError::DuplicateEntry(entry_id.clone())
                }
                other => other.into(),
            })?;
        info!(%entry_id, list = %list, "sanctions entry added");
        Ok(SanctionsEntryStored {
            success: true,
            entry_id,
            list_type: list,
            message: format!("Entry added to {list} list successfully"),
        })
    }

    pub fn list_sanctions_entries(
        &self,
        list_type: &str,
        criteria: SanctionsCriteria,
        page: PageRequest,
    ) -> Result<SanctionsEntryList, ComplianceServiceError> {
        let filter = SanctionsFilter {
            list_type: parse_list(list_type)?,
            search: criteria.search,
            country: criteria.country,
            program: criteria.program,
            is_active: criteria.is_active,
        };
        let window = page.slice(self.sanctions.matching(&filter)?);
        Ok(SanctionsEntryList {
            success: true,
            total: window.total,
            page: page.page,
            limit: page.limit,
            entries: window.items,
        })
    }

    pub fn verify_financials(&self, request: &FinancialVerifyRequest) -> FinancialHealthReport {
        info!(entity = %request.entity_name, "financial verification simulated");
        assess_financial_health(request, Utc::now())
    }

    pub fn detect_fraud(
        &self,
        request: &FraudDetectRequest,
    ) -> Result<FraudAssessment, ComplianceServiceError> {
        let active = self.patterns.matching(&FraudPatternFilter::active())?;
        let assessment = detect_fraud(request, &active, Utc::now());
        info!(
            entity = %request.entity_name,
            risk_score = assessment.risk_score,
            patterns = assessment.patterns_detected.len(),
            "fraud analysis completed"
        );
        Ok(assessment)
    }

    pub fn detect_forgery(&self, request: &DocumentForgeryRequest) -> ForgeryAssessment {
        let assessment = detect_forgery(request, Utc::now());
        info!(
            document_type = %request.document_type,
            forgery_detected = assessment.forgery_detected,
            "document forgery analysis completed"
        );
        assessment
    }

    pub fn create_fraud_pattern(
        &self,
        input: FraudPatternInput,
    ) -> Result<FraudPatternStored, ComplianceServiceError> {
        check_threshold(input.risk_score_threshold)?;
        let pattern_id = input.pattern_id.clone();
        self.patterns
            .insert(FraudPattern::new(input, Utc::now()))
            .map_err(|err| match err {
                RepositoryError::Conflict(_) => {
                    ComplianceServiceError::DuplicatePattern(pattern_id.clone())
                }
                other => other.into(),
            })?;
        info!(%pattern_id, "fraud pattern stored");
        Ok(FraudPatternStored {
            success: true,
            pattern_id,
            message: "Fraud pattern stored successfully",
        })
    }

    pub fn list_fraud_patterns(
        &self,
        filter: &FraudPatternFilter,
        page: PageRequest,
    ) -> Result<FraudPatternList, ComplianceServiceError> {
        let window = page.slice(self.patterns.matching(filter)?);
        Ok(FraudPatternList {
            success: true,
            total: window.total,
            page: page.page,
            limit: page.limit,
            patterns: window.items,
        })
    }

    pub fn fraud_pattern(&self, pattern_id: &str) -> Result<FraudPattern, ComplianceServiceError> {
        self.patterns
            .fetch(pattern_id)?
            .ok_or_else(|| ComplianceServiceError::PatternNotFound(pattern_id.to_string()))
    }

    pub fn update_fraud_pattern(
        &self,
        pattern_id: &str,
        patch: FraudPatternPatch,
    ) -> Result<FraudPattern, ComplianceServiceError> {
        check_threshold(patch.risk_score_threshold)?;
        let updated = self
            .patterns
            .update(pattern_id, patch)
            .map_err(|err| pattern_missing(err, pattern_id))?;
        info!(%pattern_id, "fraud pattern updated");
        Ok(updated)
    }

    pub fn delete_fraud_pattern(&self, pattern_id: &str) -> Result<(), ComplianceServiceError> {
        self.patterns
            .delete(pattern_id)
            .map_err(|err| pattern_missing(err, pattern_id))?;
        info!(%pattern_id, "fraud pattern deleted");
        Ok(())
    }

    /// Loads the reference catalogues, skipping ids that already exist.
    pub fn seed_reference_data(&self) -> Result<SeedSummary, ComplianceServiceError> {
        let now = Utc::now();
        let mut summary = SeedSummary::default();

        for input in reference_regulations() {
            if inserted(self.regulations.insert(Regulation::new(input, now)))? {
                summary.regulations += 1;
            }
        }
        for input in reference_fraud_patterns() {
            if inserted(self.patterns.insert(FraudPattern::new(input, now)))? {
                summary.fraud_patterns += 1;
            }
        }
        for (list, input) in reference_sanctions() {
            if inserted(self.sanctions.insert(SanctionsEntry::new(list, input, now)))? {
                summary.sanctions_entries += 1;
            }
        }

        info!(
            regulations = summary.regulations,
            fraud_patterns = summary.fraud_patterns,
            sanctions_entries = summary.sanctions_entries,
            "reference compliance data loaded"
        );
        Ok(summary)
    }
}

/// Optional sanctions listing filters; the list itself comes from the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanctionsCriteria {
    pub search: Option<String>,
    pub country: Option<String>,
    pub program: Option<String>,
    pub is_active: Option<bool>,
}

fn inserted(result: Result<(), RepositoryError>) -> Result<bool, RepositoryError> {
    match result {
        Ok(()) => Ok(true),
        Err(RepositoryError::Conflict(_)) => Ok(false),
        Err(other) => Err(other),
    }
}

fn parse_list(list_type: &str) -> Result<SanctionsList, ComplianceServiceError> {
    SanctionsList::parse(list_type)
        .ok_or_else(|| ComplianceServiceError::InvalidListType(list_type.to_string()))
}

fn check_threshold(threshold: Option<u32>) -> Result<(), ComplianceServiceError> {
    match threshold {
        Some(value) if value > 100 => Err(ComplianceServiceError::InvalidThreshold),
        _ => Ok(()),
    }
}

fn regulation_missing(err: RepositoryError, regulation_id: &str) -> ComplianceServiceError {
    match err {
        RepositoryError::NotFound => {
            ComplianceServiceError::RegulationNotFound(regulation_id.to_string())
        }
        other => other.into(),
    }
}

fn pattern_missing(err: RepositoryError, pattern_id: &str) -> ComplianceServiceError {
    match err {
        RepositoryError::NotFound => ComplianceServiceError::PatternNotFound(pattern_id.to_string()),
        other => other.into(),
    }
}

/// Error raised by the external compliance service.
#[derive(Debug, thiserror::Error)]
pub enum ComplianceServiceError {
    #[error("Regulation with ID '{0}' not found")]
    RegulationNotFound(String),
    #[error("Regulation with ID '{0}' already exists")]
    DuplicateRegulation(String),
    #[error("Entry with ID '{0}' already exists")]
    DuplicateEntry(String),
    #[error("Pattern with ID '{0}' not found")]
    PatternNotFound(String),
    #[error("Pattern with ID '{0}' already exists")]
    DuplicatePattern(String),
    #[error("Invalid list_type. Must be one of: {}", SanctionsList::catalogue())]
    InvalidListType(String),
    #[error("risk_score_threshold must be between 0 and 100")]
    InvalidThreshold,
    #[error(transparent)]
    InvalidPage(#[from] PageError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
