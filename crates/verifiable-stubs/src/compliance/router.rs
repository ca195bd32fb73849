use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use super::catalog::{
    FraudPattern, FraudPatternFilter, FraudPatternInput, FraudPatternList, FraudPatternPatch,
    FraudPatternStored, PageRequest, Regulation, RegulationFilter, RegulationInput,
    RegulationList, RegulationPatch, RegulationStored, SanctionsEntryInput, SanctionsEntryList,
    SanctionsEntryStored,
};
use super::error::{EnvelopeError, EnvelopeJson, EnvelopeQuery};
use super::frameworks::{
    CheckReport, ComplianceRecord, FrameworkCheck, GdprCheckRequest, HipaaCheckRequest,
    Iso27001CheckRequest, MarketCheckRequest, PciCheckRequest, PepCheckRequest,
};
use super::repository::{
    ComplianceRecordRepository, FraudPatternRepository, RegulationRepository, SanctionsRepository,
};
use super::screening::{
    DocumentForgeryRequest, EntityComplianceReport, EntityComplianceRequest,
    FinancialHealthReport, FinancialVerifyRequest, ForgeryAssessment, FraudAssessment,
    FraudDetectRequest, SanctionsScreenReport, SanctionsScreenRequest,
};
use super::service::{
    ComplianceServiceError, ExternalComplianceService, FrameworkCheckService,
    FrameworkServiceError, SanctionsCriteria,
};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::store::RepositoryError;

/// Router builder exposing the framework questionnaires.
pub fn framework_check_router<R>(service: Arc<FrameworkCheckService<R>>) -> Router
where
    R: ComplianceRecordRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/compliance/aml/pep",
            post(check_handler::<R, PepCheckRequest>),
        )
        .route(
            "/api/v1/compliance/gdpr/check",
            post(check_handler::<R, GdprCheckRequest>),
        )
        .route(
            "/api/v1/compliance/pci/check",
            post(check_handler::<R, PciCheckRequest>),
        )
        .route(
            "/api/v1/compliance/hipaa/check",
            post(check_handler::<R, HipaaCheckRequest>),
        )
        .route(
            "/api/v1/compliance/iso27001/check",
            post(check_handler::<R, Iso27001CheckRequest>),
        )
        .route(
            "/api/v1/compliance/market/check",
            post(check_handler::<R, MarketCheckRequest>),
        )
        .route(
            "/api/v1/compliance/records/:request_id",
            get(record_handler::<R>),
        )
        .with_state(service)
}

impl From<FrameworkServiceError> for ApiError {
    fn from(value: FrameworkServiceError) -> Self {
        match value {
            FrameworkServiceError::RecordNotFound => ApiError::NotFound(value.to_string()),
            FrameworkServiceError::Encoding(_) | FrameworkServiceError::Repository(_) => {
                ApiError::Internal(value.to_string())
            }
        }
    }
}

pub(crate) async fn check_handler<R, C>(
    State(service): State<Arc<FrameworkCheckService<R>>>,
    JsonBody(request): JsonBody<C>,
) -> Result<Json<CheckReport<C::Outcome>>, ApiError>
where
    R: ComplianceRecordRepository + 'static,
    C: FrameworkCheck,
{
    Ok(Json(service.run(request)?))
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<FrameworkCheckService<R>>>,
    Path(request_id): Path<String>,
) -> Result<Json<ComplianceRecord>, ApiError>
where
    R: ComplianceRecordRepository + 'static,
{
    let request_id = Uuid::parse_str(&request_id)
        .map_err(|_| ApiError::BadRequest("request_id must be a UUID".to_string()))?;
    Ok(Json(service.record(&request_id)?))
}

type ExternalState<G, S, F> = State<Arc<ExternalComplianceService<G, S, F>>>;

/// Router builder exposing the regulation, sanctions and fraud catalogues
/// and the checks that consult them.
pub fn external_compliance_router<G, S, F>(
    service: Arc<ExternalComplianceService<G, S, F>>,
) -> Router
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/regulations",
            post(create_regulation_handler::<G, S, F>).get(list_regulations_handler::<G, S, F>),
        )
        .route(
            "/api/v1/regulations/:regulation_id",
            get(regulation_handler::<G, S, F>)
                .put(update_regulation_handler::<G, S, F>)
                .delete(delete_regulation_handler::<G, S, F>),
        )
        .route(
            "/api/v1/compliance/verify",
            post(verify_entity_handler::<G, S, F>),
        )
        .route(
            "/api/v1/sanctions/ofac-screen",
            post(sanctions_screen_handler::<G, S, F>),
        )
        .route(
            "/api/v1/sanctions/lists/:list_type/entries",
            post(add_sanctions_entry_handler::<G, S, F>)
                .get(list_sanctions_entries_handler::<G, S, F>),
        )
        .route(
            "/api/v1/financial/verify",
            post(financial_verify_handler::<G, S, F>),
        )
        .route("/api/v1/fraud/detect", post(fraud_detect_handler::<G, S, F>))
        .route(
            "/api/v1/fraud/document-forgery",
            post(document_forgery_handler::<G, S, F>),
        )
        .route(
            "/api/v1/fraud/patterns",
            post(create_pattern_handler::<G, S, F>).get(list_patterns_handler::<G, S, F>),
        )
        .route(
            "/api/v1/fraud/patterns/:pattern_id",
            get(pattern_handler::<G, S, F>)
                .put(update_pattern_handler::<G, S, F>)
                .delete(delete_pattern_handler::<G, S, F>),
        )
        .with_state(service)
}

impl From<ComplianceServiceError> for EnvelopeError {
    fn from(value: ComplianceServiceError) -> Self {
        match value {
            ComplianceServiceError::RegulationNotFound(_)
            | ComplianceServiceError::PatternNotFound(_) => EnvelopeError::NotFound(value.to_string()),
            ComplianceServiceError::DuplicateRegulation(_)
            | ComplianceServiceError::DuplicateEntry(_)
            | ComplianceServiceError::DuplicatePattern(_) => {
                EnvelopeError::Duplicate(value.to_string())
            }
            ComplianceServiceError::InvalidListType(_)
            | ComplianceServiceError::InvalidThreshold
            | ComplianceServiceError::InvalidPage(_) => EnvelopeError::Validation(value.to_string()),
            ComplianceServiceError::Repository(err @ RepositoryError::Conflict(_)) => {
                EnvelopeError::Duplicate(err.to_string())
            }
            ComplianceServiceError::Repository(other) => EnvelopeError::Internal(other.to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RegulationListQuery {
    pub(crate) category: Option<String>,
    pub(crate) jurisdiction: Option<String>,
    pub(crate) is_active: Option<bool>,
    pub(crate) page: Option<u32>,
    pub(crate) limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SanctionsListQuery {
    pub(crate) search: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) program: Option<String>,
    pub(crate) is_active: Option<bool>,
    pub(crate) page: Option<u32>,
    pub(crate) limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PatternListQuery {
    pub(crate) category: Option<String>,
    pub(crate) is_active: Option<bool>,
    pub(crate) page: Option<u32>,
    pub(crate) limit: Option<u32>,
}

fn page(page: Option<u32>, limit: Option<u32>) -> Result<PageRequest, EnvelopeError> {
    PageRequest::new(page, limit).map_err(|err| ComplianceServiceError::from(err).into())
}

pub(crate) async fn create_regulation_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    EnvelopeJson(input): EnvelopeJson<RegulationInput>,
) -> Result<(StatusCode, Json<RegulationStored>), EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Ok((StatusCode::CREATED, Json(service.create_regulation(input)?)))
}

pub(crate) async fn list_regulations_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    EnvelopeQuery(query): EnvelopeQuery<RegulationListQuery>,
) -> Result<Json<RegulationList>, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    let window = page(query.page, query.limit)?;
    let filter = RegulationFilter {
        category: query.category,
        jurisdiction: query.jurisdiction,
        is_active: query.is_active,
    };
    Ok(Json(service.list_regulations(&filter, window)?))
}

pub(crate) async fn regulation_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    Path(regulation_id): Path<String>,
) -> Result<Json<Regulation>, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Ok(Json(service.regulation(&regulation_id)?))
}

pub(crate) async fn update_regulation_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    Path(regulation_id): Path<String>,
    EnvelopeJson(patch): EnvelopeJson<RegulationPatch>,
) -> Result<Json<Regulation>, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Ok(Json(service.update_regulation(&regulation_id, patch)?))
}

pub(crate) async fn delete_regulation_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    Path(regulation_id): Path<String>,
) -> Result<StatusCode, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    service.delete_regulation(&regulation_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn verify_entity_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    EnvelopeJson(request): EnvelopeJson<EntityComplianceRequest>,
) -> Result<Json<EntityComplianceReport>, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Ok(Json(service.verify_entity(&request)?))
}

pub(crate) async fn sanctions_screen_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    EnvelopeJson(request): EnvelopeJson<SanctionsScreenRequest>,
) -> Result<Json<SanctionsScreenReport>, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Ok(Json(service.screen_sanctions(&request)?))
}

pub(crate) async fn add_sanctions_entry_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    Path(list_type): Path<String>,
    EnvelopeJson(input): EnvelopeJson<SanctionsEntryInput>,
) -> Result<(StatusCode, Json<SanctionsEntryStored>), EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    let stored = service.add_sanctions_entry(&list_type, input)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub(crate) async fn list_sanctions_entries_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    Path(list_type): Path<String>,
    EnvelopeQuery(query): EnvelopeQuery<SanctionsListQuery>,
) -> Result<Json<SanctionsEntryList>, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    let window = page(query.page, query.limit)?;
    let criteria = SanctionsCriteria {
        search: query.search,
        country: query.country,
        program: query.program,
        is_active: query.is_active,
    };
    Ok(Json(service.list_sanctions_entries(
        &list_type, criteria, window,
    )?))
}

pub(crate) async fn financial_verify_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    EnvelopeJson(request): EnvelopeJson<FinancialVerifyRequest>,
) -> Json<FinancialHealthReport>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Json(service.verify_financials(&request))
}

pub(crate) async fn fraud_detect_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    EnvelopeJson(request): EnvelopeJson<FraudDetectRequest>,
) -> Result<Json<FraudAssessment>, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Ok(Json(service.detect_fraud(&request)?))
}

pub(crate) async fn document_forgery_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    EnvelopeJson(request): EnvelopeJson<DocumentForgeryRequest>,
) -> Json<ForgeryAssessment>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Json(service.detect_forgery(&request))
}

pub(crate) async fn create_pattern_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    EnvelopeJson(input): EnvelopeJson<FraudPatternInput>,
) -> Result<(StatusCode, Json<FraudPatternStored>), EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Ok((StatusCode::CREATED, Json(service.create_fraud_pattern(input)?)))
}

pub(crate) async fn list_patterns_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    EnvelopeQuery(query): EnvelopeQuery<PatternListQuery>,
) -> Result<Json<FraudPatternList>, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    let window = page(query.page, query.limit)?;
    let filter = FraudPatternFilter {
        category: query.category,
        is_active: query.is_active,
    };
    Ok(Json(service.list_fraud_patterns(&filter, window)?))
}

pub(crate) async fn pattern_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    Path(pattern_id): Path<String>,
) -> Result<Json<FraudPattern>, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Ok(Json(service.fraud_pattern(&pattern_id)?))
}

pub(crate) async fn update_pattern_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    Path(pattern_id): Path<String>,
    EnvelopeJson(patch): EnvelopeJson<FraudPatternPatch>,
) -> Result<Json<FraudPattern>, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    Ok(Json(service.update_fraud_pattern(&pattern_id, patch)?))
}

pub(crate) async fn delete_pattern_handler<G, S, F>(
    State(service): ExternalState<G, S, F>,
    Path(pattern_id): Path<String>,
) -> Result<StatusCode, EnvelopeError>
where
    G: RegulationRepository + 'static,
    S: SanctionsRepository + 'static,
    F: FraudPatternRepository + 'static,
{
    service.delete_fraud_pattern(&pattern_id)?;
    Ok(StatusCode::NO_CONTENT)
}
