//! Reference regulations, fraud patterns and watchlist entries loaded when
//! the service starts with seeding enabled.

use chrono::NaiveDate;

use super::catalog::{
    FraudPatternInput, KeyArticle, PatternIndicator, RegulationInput, SanctionsAdditionalInfo,
    SanctionsEntryInput, SanctionsIdentifier, SanctionsList,
};

fn article(label: &str, id: &str, title: &str) -> KeyArticle {
    KeyArticle {
        article_id: id.to_string(),
        title: title.to_string(),
        content: format!("{label} {id}: {title}"),
        penalties: None,
    }
}

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|value| value.to_string()).collect())
}

struct RegulationSeed {
    id: &'static str,
    name: &'static str,
    code: &'static str,
    category: &'static str,
    jurisdiction: &'static str,
    version: Option<&'static str>,
    effective_date: Option<(i32, u32, u32)>,
    description: &'static str,
}

impl RegulationSeed {
    fn into_input(self) -> RegulationInput {
        RegulationInput {
            regulation_id: self.id.to_string(),
            name: self.name.to_string(),
            code: self.code.to_string(),
            category: Some(self.category.to_string()),
            jurisdiction: Some(self.jurisdiction.to_string()),
            version: self.version.map(str::to_string),
            effective_date: self
                .effective_date
                .and_then(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day)),
            description: Some(self.description.to_string()),
            required_fields: None,
            key_articles: None,
            compliance_checklist: None,
            penalties: None,
            is_active: true,
            tags: None,
        }
    }
}

pub fn reference_regulations() -> Vec<RegulationInput> {
    vec![
        RegulationInput {
            required_fields: strings(&[
                "data_subject_consent",
                "purpose_limitation",
                "data_minimization",
            ]),
            key_articles: Some(vec![
                article("Article", "5", "Principles relating to processing of personal data"),
                article("Article", "6", "Lawfulness of processing"),
                article("Article", "32", "Security of processing"),
            ]),
            compliance_checklist: strings(&[
                "Obtain explicit consent",
                "Implement data encryption",
                "Appoint a Data Protection Officer (DPO)",
                "Maintain processing records",
            ]),
            tags: strings(&["privacy", "eu", "data-protection"]),
            ..RegulationSeed {
                id: "REG-GDPR-001",
                name: "General Data Protection Regulation",
                code: "GDPR",
                category: "Data Privacy",
                jurisdiction: "European Union",
                version: Some("2016/679"),
                effective_date: Some((2018, 5, 25)),
                description: "The General Data Protection Regulation (GDPR) is a regulation in EU law on data protection and privacy in the European Union and the European Economic Area.",
            }
            .into_input()
        },
        RegulationInput {
            required_fields: strings(&["customer_id", "beneficial_owner", "source_of_funds"]),
            key_articles: Some(vec![
                article("Recommendation", "10", "Customer due diligence"),
                article("Recommendation", "11", "Record-keeping"),
            ]),
            compliance_checklist: strings(&[
                "Verify customer identity",
                "Identify beneficial owners",
                "Screen against sanctions lists",
                "Monitor transactions for suspicious activity",
            ]),
            tags: strings(&["finance", "aml", "kyc", "fatf"]),
            ..RegulationSeed {
                id: "REG-KYC-001",
                name: "KYC/AML - FATF 40 Recommendations",
                code: "KYC-AML",
                category: "Financial Compliance",
                jurisdiction: "International",
                version: Some("2023"),
                effective_date: Some((2023, 1, 1)),
                description: "International standards for combating money laundering and the financing of terrorism and proliferation.",
            }
            .into_input()
        },
        RegulationInput {
            required_fields: strings(&["phi_protection", "access_control", "audit_logs"]),
            key_articles: Some(vec![
                article("Rule", "Privacy Rule", "Protected Health Information (PHI)"),
                article(
                    "Rule",
                    "Security Rule",
                    "Administrative, Physical, and Technical Safeguards",
                ),
            ]),
            compliance_checklist: strings(&[
                "Ensure confidentiality of e-PHI",
                "Protect against anticipated threats",
                "Train workforce on security",
                "Implement access controls",
            ]),
            tags: strings(&["healthcare", "privacy", "us", "phi"]),
            ..RegulationSeed {
                id: "REG-HIPAA-001",
                name: "Health Insurance Portability and Accountability Act",
                code: "HIPAA",
                category: "Healthcare Privacy",
                jurisdiction: "United States",
                version: Some("1996"),
                effective_date: Some((1996, 8, 21)),
                description: "US federal law that required the creation of national standards to protect sensitive patient health information from being disclosed without the patient's consent or knowledge.",
            }
            .into_input()
        },
        RegulationInput {
            key_articles: Some(vec![
                article("Section", "302", "Corporate Responsibility for Financial Reports"),
                article("Section", "404", "Management Assessment of Internal Controls"),
            ]),
            tags: strings(&["finance", "audit", "us"]),
            ..RegulationSeed {
                id: "REG-SOX-001",
                name: "Sarbanes-Oxley Act",
                code: "SOX",
                category: "Financial Reporting",
                jurisdiction: "United States",
                version: Some("2002"),
                effective_date: Some((2002, 7, 30)),
                description: "US federal law that set new or expanded requirements for all US public company boards, management and public accounting firms.",
            }
            .into_input()
        },
        RegulationInput {
            key_articles: Some(vec![
                article("Requirement", "3", "Protect stored cardholder data"),
                article("Requirement", "4", "Encrypt transmission of cardholder data"),
            ]),
            tags: strings(&["payment", "security", "pci"]),
            ..RegulationSeed {
                id: "REG-PCI-001",
                name: "Payment Card Industry Data Security Standard",
                code: "PCI-DSS",
                category: "Payment Security",
                jurisdiction: "International",
                version: Some("4.0"),
                effective_date: None,
                description: "Information security standard for organizations that handle branded credit cards from the major card schemes.",
            }
            .into_input()
        },
        RegulationInput {
            key_articles: Some(vec![
                article("Standard", "PSV_001", "Primary Source Verification (PSV)"),
                article("Standard", "GAP_ANALYSIS_002", "Work History and Gap Analysis"),
            ]),
            tags: strings(&["healthcare", "credentialing", "medical"]),
            ..RegulationSeed {
                id: "REG-MED-001",
                name: "General Medical Credentialing Standards",
                code: "MED-CRED",
                category: "Healthcare Compliance",
                jurisdiction: "United States",
                version: None,
                effective_date: None,
                description: "Standards for verifying the qualifications of healthcare professionals.",
            }
            .into_input()
        },
        RegulationInput {
            key_articles: Some(vec![
                article("Section", "1", "KYC/AML Requirements for Vendor Onboarding"),
                article("Section", "2", "Vendor Document Quality and Authenticity Standards"),
            ]),
            tags: strings(&["vendor", "onboarding", "compliance"]),
            ..RegulationSeed {
                id: "REG-VENDOR-001",
                name: "Vendor Onboarding Compliance Requirements",
                code: "VENDOR-ONB",
                category: "Vendor Management",
                jurisdiction: "Global",
                version: None,
                effective_date: None,
                description: "Requirements and standards for onboarding new vendors and third-party partners.",
            }
            .into_input()
        },
    ]
}

/// Reference patterns carry prose indicators; each becomes a presence check
/// on that text.
fn pattern(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    indicators: [&str; 4],
    threshold: u32,
) -> FraudPatternInput {
    FraudPatternInput {
        pattern_id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: Some(description.to_string()),
        indicators: Some(
            indicators
                .iter()
                .map(|field| PatternIndicator {
                    field: field.to_string(),
                    condition: "present".to_string(),
                    weight: 1.0,
                })
                .collect(),
        ),
        risk_score_threshold: Some(threshold),
        action: None,
        is_active: true,
    }
}

pub fn reference_fraud_patterns() -> Vec<FraudPatternInput> {
    vec![
        pattern(
            "FRAUD-ID-001",
            "Identity Theft Indicators",
            "Identity Fraud",
            "Common indicators and methods used in identity theft.",
            [
                "Multiple applications using same identity",
                "Inconsistent personal information",
                "Recent address changes without verification",
                "Mismatched biometric data",
            ],
            85,
        ),
        pattern(
            "FRAUD-DOC-001",
            "Document Tampering Detection",
            "Document Fraud",
            "Physical and digital indicators of document manipulation.",
            [
                "Inconsistent fonts or sizes",
                "Misaligned text or graphics",
                "Metadata inconsistencies",
                "Pixelation or compression artifacts",
            ],
            90,
        ),
        pattern(
            "FRAUD-SYN-001",
            "Synthetic Identity Fraud",
            "Identity Fraud",
            "Identity built from a combination of real and fake information.",
            [
                "Legitimate SSN with fake name",
                "Employment at non-existent companies",
                "Credit history built slowly over time",
                "Sudden large purchases",
            ],
            95,
        ),
        pattern(
            "FRAUD-AML-001",
            "Money Laundering Patterns",
            "Financial Fraud",
            "Common patterns used in money laundering stages.",
            [
                "Large cash deposits inconsistent with income",
                "Frequent structured transactions",
                "Complex transaction chains",
                "Sudden wealth without clear source",
            ],
            90,
        ),
        pattern(
            "FRAUD-MED-001",
            "Healthcare Billing Fraud",
            "Medical Fraud",
            "Patterns of fraudulent medical billing and identity theft.",
            [
                "Upcoding (billing for higher level of service)",
                "Unbundling (billing separately for bundled services)",
                "Phantom billing (billing for services not performed)",
                "Medical identity theft",
            ],
            85,
        ),
    ]
}

pub fn reference_sanctions() -> Vec<(SanctionsList, SanctionsEntryInput)> {
    vec![
        (
            SanctionsList::OfacSdn,
            SanctionsEntryInput {
                entry_id: "SANC-OFAC-001".to_string(),
                name: "AL-QA'IDA".to_string(),
                aliases: strings(&["AL-QAEDA", "THE BASE"]),
                entity_type: "Organization".to_string(),
                country: "AF".to_string(),
                program: Some("SDGT".to_string()),
                listing_date: None,
                reason: Some("Terrorism financing; Global security threat".to_string()),
                additional_info: Some(SanctionsAdditionalInfo {
                    addresses: None,
                    identifiers: Some(vec![SanctionsIdentifier {
                        kind: "Tax ID".to_string(),
                        value: "123456789".to_string(),
                    }]),
                }),
                is_active: true,
            },
        ),
        (
            SanctionsList::Pep,
            SanctionsEntryInput {
                entry_id: "SANC-PEP-001".to_string(),
                name: "John Doe".to_string(),
                aliases: strings(&["J. Doe"]),
                entity_type: "Individual".to_string(),
                country: "US".to_string(),
                program: Some("PEP-US".to_string()),
                listing_date: None,
                reason: Some("High-ranking government official".to_string()),
                additional_info: Some(SanctionsAdditionalInfo {
                    addresses: None,
                    identifiers: Some(vec![SanctionsIdentifier {
                        kind: "Passport".to_string(),
                        value: "A1234567".to_string(),
                    }]),
                }),
                is_active: true,
            },
        ),
    ]
}
