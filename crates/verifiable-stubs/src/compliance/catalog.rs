//! Reference catalogues consulted by the external compliance checks:
//! regulations, sanctions list entries and fraud patterns.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

fn active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyArticle {
    pub article_id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub penalties: Option<String>,
}

/// Regulation as submitted on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationInput {
    pub regulation_id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_fields: Option<Vec<String>>,
    #[serde(default)]
    pub key_articles: Option<Vec<KeyArticle>>,
    #[serde(default)]
    pub compliance_checklist: Option<Vec<String>>,
    #[serde(default)]
    pub penalties: Option<BTreeMap<String, String>>,
    #[serde(default = "active")]
    pub is_active: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Regulation {
    #[serde(flatten)]
    pub details: RegulationInput,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Regulation {
    pub fn new(details: RegulationInput, now: DateTime<Utc>) -> Self {
        Self {
            details,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegulationPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub category: Option<String>,
    pub jurisdiction: Option<String>,
    pub version: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub required_fields: Option<Vec<String>>,
    pub key_articles: Option<Vec<KeyArticle>>,
    pub compliance_checklist: Option<Vec<String>>,
    pub penalties: Option<BTreeMap<String, String>>,
    pub is_active: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl RegulationPatch {
    pub fn apply(self, target: &mut RegulationInput) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(code) = self.code {
            target.code = code;
        }
        if let Some(is_active) = self.is_active {
            target.is_active = is_active;
        }
        overwrite(&mut target.category, self.category);
        overwrite(&mut target.jurisdiction, self.jurisdiction);
        overwrite(&mut target.version, self.version);
        overwrite(&mut target.effective_date, self.effective_date);
        overwrite(&mut target.description, self.description);
        overwrite(&mut target.required_fields, self.required_fields);
        overwrite(&mut target.key_articles, self.key_articles);
        overwrite(&mut target.compliance_checklist, self.compliance_checklist);
        overwrite(&mut target.penalties, self.penalties);
        overwrite(&mut target.tags, self.tags);
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegulationSummary {
    pub regulation_id: String,
    pub name: String,
    pub code: String,
    pub category: Option<String>,
    pub jurisdiction: Option<String>,
}

impl From<Regulation> for RegulationSummary {
    fn from(value: Regulation) -> Self {
        let details = value.details;
        Self {
            regulation_id: details.regulation_id,
            name: details.name,
            code: details.code,
            category: details.category,
            jurisdiction: details.jurisdiction,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegulationFilter {
    pub category: Option<String>,
    pub jurisdiction: Option<String>,
    pub is_active: Option<bool>,
}

impl RegulationFilter {
    pub fn active() -> Self {
        Self {
            is_active: Some(true),
            ..Self::default()
        }
    }

    pub fn matches(&self, regulation: &Regulation) -> bool {
        let details = &regulation.details;
        equals(&self.category, details.category.as_deref())
            && equals(&self.jurisdiction, details.jurisdiction.as_deref())
            && self.is_active.map_or(true, |flag| flag == details.is_active)
    }
}

fn equals(wanted: &Option<String>, actual: Option<&str>) -> bool {
    match wanted {
        Some(wanted) => actual == Some(wanted.as_str()),
        None => true,
    }
}

/// Watchlists an entry can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SanctionsList {
    OfacSdn,
    EuConsolidated,
    UnConsolidated,
    Pep,
}

impl SanctionsList {
    pub const ALL: [SanctionsList; 4] = [
        SanctionsList::OfacSdn,
        SanctionsList::EuConsolidated,
        SanctionsList::UnConsolidated,
        SanctionsList::Pep,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SanctionsList::OfacSdn => "ofac_sdn",
            SanctionsList::EuConsolidated => "eu_consolidated",
            SanctionsList::UnConsolidated => "un_consolidated",
            SanctionsList::Pep => "pep",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|list| list.as_str() == value)
    }

    pub fn catalogue() -> String {
        Self::ALL
            .iter()
            .map(|list| list.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SanctionsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanctionsIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanctionsAdditionalInfo {
    #[serde(default)]
    pub addresses: Option<Vec<String>>,
    #[serde(default)]
    pub identifiers: Option<Vec<SanctionsIdentifier>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanctionsEntryInput {
    pub entry_id: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
    pub entity_type: String,
    pub country: String,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub listing_date: Option<NaiveDate>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub additional_info: Option<SanctionsAdditionalInfo>,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl SanctionsEntryInput {
    /// Case-insensitive substring match on the name, or an exact alias.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
            || self
                .aliases
                .as_ref()
                .is_some_and(|aliases| aliases.iter().any(|alias| alias == query))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanctionsEntry {
    pub list_type: SanctionsList,
    #[serde(flatten)]
    pub details: SanctionsEntryInput,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SanctionsEntry {
    pub fn new(list_type: SanctionsList, details: SanctionsEntryInput, now: DateTime<Utc>) -> Self {
        Self {
            list_type,
            details,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanctionsFilter {
    pub list_type: SanctionsList,
    pub search: Option<String>,
    pub country: Option<String>,
    pub program: Option<String>,
    pub is_active: Option<bool>,
}

impl SanctionsFilter {
    pub fn list(list_type: SanctionsList) -> Self {
        Self {
            list_type,
            search: None,
            country: None,
            program: None,
            is_active: None,
        }
    }

    pub fn matches(&self, entry: &SanctionsEntry) -> bool {
        let details = &entry.details;
        entry.list_type == self.list_type
            && self
                .search
                .as_deref()
                .map_or(true, |query| details.matches_name(query))
            && equals(&self.country, Some(details.country.as_str()))
            && equals(&self.program, details.program.as_deref())
            && self.is_active.map_or(true, |flag| flag == details.is_active)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternIndicator {
    pub field: String,
    pub condition: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudPatternInput {
    pub pattern_id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub indicators: Option<Vec<PatternIndicator>>,
    #[serde(default)]
    pub risk_score_threshold: Option<u32>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default = "active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraudPattern {
    #[serde(flatten)]
    pub details: FraudPatternInput,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FraudPattern {
    pub fn new(details: FraudPatternInput, now: DateTime<Utc>) -> Self {
        Self {
            details,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FraudPatternPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub indicators: Option<Vec<PatternIndicator>>,
    pub risk_score_threshold: Option<u32>,
    pub action: Option<String>,
    pub is_active: Option<bool>,
}

impl FraudPatternPatch {
    pub fn apply(self, target: &mut FraudPatternInput) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(category) = self.category {
            target.category = category;
        }
        if let Some(is_active) = self.is_active {
            target.is_active = is_active;
        }
        overwrite(&mut target.description, self.description);
        overwrite(&mut target.indicators, self.indicators);
        overwrite(&mut target.risk_score_threshold, self.risk_score_threshold);
        overwrite(&mut target.action, self.action);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FraudPatternFilter {
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

impl FraudPatternFilter {
    pub fn active() -> Self {
        Self {
            category: None,
            is_active: Some(true),
        }
    }

    pub fn matches(&self, pattern: &FraudPattern) -> bool {
        equals(&self.category, Some(pattern.details.category.as_str()))
            && self
                .is_active
                .map_or(true, |flag| flag == pattern.details.is_active)
    }
}

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("page must be greater than or equal to 1")]
    Page,
    #[error("limit must be between 1 and 100")]
    Limit,
}

/// One-based page window over a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Result<Self, PageError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if page < 1 {
            return Err(PageError::Page);
        }
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(PageError::Limit);
        }
        Ok(Self { page, limit })
    }

    fn offset(&self) -> usize {
        (self.page as usize - 1) * self.limit as usize
    }

    pub fn slice<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let items = items
            .into_iter()
            .skip(self.offset())
            .take(self.limit as usize)
            .collect();
        Page { total, items }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total: usize,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegulationStored {
    pub success: bool,
    pub regulation_id: String,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegulationList {
    pub success: bool,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub regulations: Vec<RegulationSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanctionsEntryStored {
    pub success: bool,
    pub entry_id: String,
    pub list_type: SanctionsList,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanctionsEntryList {
    pub success: bool,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub entries: Vec<SanctionsEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FraudPatternStored {
    pub success: bool,
    pub pattern_id: String,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraudPatternList {
    pub success: bool,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub patterns: Vec<FraudPattern>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_enforces_bounds() {
        assert_eq!(PageRequest::new(None, None), Ok(PageRequest::default()));
        assert_eq!(PageRequest::new(Some(0), None), Err(PageError::Page));
        assert_eq!(PageRequest::new(Some(1), Some(0)), Err(PageError::Limit));
        assert_eq!(PageRequest::new(Some(1), Some(101)), Err(PageError::Limit));
        assert!(PageRequest::new(Some(3), Some(100)).is_ok());
    }

    #[test]
    fn slice_reports_total_before_windowing() {
        let request = PageRequest::new(Some(2), Some(2)).expect("valid window");
        let page = request.slice((1..=5).collect::<Vec<_>>());
        assert_eq!(page.total, 5);
        assert_eq!(page.items, vec![3, 4]);

        let past_end = PageRequest::new(Some(4), Some(2))
            .expect("valid window")
            .slice((1..=5).collect::<Vec<_>>());
        assert_eq!(past_end.total, 5);
        assert!(past_end.items.is_empty());
    }

    #[test]
    fn sanctions_list_names_round_trip() {
        for list in SanctionsList::ALL {
            assert_eq!(SanctionsList::parse(list.as_str()), Some(list));
        }
        assert_eq!(SanctionsList::parse("OFAC-SDN"), None);
        assert_eq!(
            SanctionsList::catalogue(),
            "ofac_sdn, eu_consolidated, un_consolidated, pep"
        );
    }

    #[test]
    fn name_match_is_case_insensitive_but_alias_match_is_exact() {
        let entry = SanctionsEntryInput {
            entry_id: "SANC-1".to_string(),
            name: "AL-QA'IDA".to_string(),
            aliases: Some(vec!["THE BASE".to_string()]),
            entity_type: "Organization".to_string(),
            country: "AF".to_string(),
            program: None,
            listing_date: None,
            reason: None,
            additional_info: None,
            is_active: true,
        };

        assert!(entry.matches_name("qa'ida"));
        assert!(entry.matches_name("THE BASE"));
        assert!(!entry.matches_name("the base"));
    }

    #[test]
    fn regulation_patch_keeps_absent_fields() {
        let mut regulation = RegulationInput {
            regulation_id: "REG-1".to_string(),
            name: "Original".to_string(),
            code: "GDPR".to_string(),
            category: Some("Data Privacy".to_string()),
            jurisdiction: Some("European Union".to_string()),
            version: None,
            effective_date: None,
            description: None,
            required_fields: None,
            key_articles: None,
            compliance_checklist: None,
            penalties: None,
            is_active: true,
            tags: None,
        };

        RegulationPatch {
            name: Some("Renamed".to_string()),
            is_active: Some(false),
            ..RegulationPatch::default()
        }
        .apply(&mut regulation);

        assert_eq!(regulation.name, "Renamed");
        assert!(!regulation.is_active);
        assert_eq!(regulation.category.as_deref(), Some("Data Privacy"));
        assert_eq!(regulation.code, "GDPR");
    }
}
