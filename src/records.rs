use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::extract::ExtractionWarning;

/// One row of the annual-accounts table.
///
/// All values are kept exactly as the page formats them. The site mixes
/// locale decimal and thousands separators, so parsing them into numbers
/// would have to guess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialYear {
    /// Closing date of the financial year
    pub year_end: String,

    /// Total assets (activa)
    pub assets: String,

    /// Gross margin (brutomarge)
    pub gross_margin: String,

    /// Operating profit (bedrijfswinst)
    pub operating_profit: String,

    /// Taxes
    pub taxes: String,

    /// Equity (eigen vermogen)
    pub equity: String,

    /// Debts (schulden); empty when the column is absent
    pub debts: String,
}

/// A registered company activity, with its NACE code when one is printed
/// alongside the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity description as printed on the page
    pub activity: String,

    /// Parenthesized 4-5 digit NACE code, if present in the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nace_code: Option<String>,
}

/// A single Official Gazette publication entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Publication date, literal DD-MM-YYYY as printed
    pub date: String,

    /// Publication type (the free text following the date)
    pub kind: String,

    /// The entry's full text, unsplit
    pub full_text: String,
}

/// Directors information. The site hides the names behind a registration
/// wall for most companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Directors {
    /// Names could not be read from the page
    Unavailable {
        /// Why the names are missing
        reason: String,
    },
    /// Names were listed openly on the page
    Available {
        /// Director names in document order
        names: Vec<String>,
    },
}

impl Directors {
    /// The fixed reason used when the section is absent or walled off
    pub const REGISTRATION_REQUIRED: &'static str =
        "Directors information requires registration";

    /// Default variant when the page gives us nothing
    pub fn unavailable() -> Self {
        Directors::Unavailable {
            reason: Self::REGISTRATION_REQUIRED.to_string(),
        }
    }
}

impl Default for Directors {
    fn default() -> Self {
        Directors::unavailable()
    }
}

/// Classification of a harvested PDF document link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    AnnualReport,
    ArticlesOfAssociation,
    OfficialPublication,
    Report,
    BalanceSheet,
    Document,
}

impl DocumentType {
    /// Stable lower-case name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::AnnualReport => "annual_report",
            DocumentType::ArticlesOfAssociation => "articles_of_association",
            DocumentType::OfficialPublication => "official_publication",
            DocumentType::Report => "report",
            DocumentType::BalanceSheet => "balance_sheet",
            DocumentType::Document => "document",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A PDF document discovered on the company page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfLink {
    /// Link text, or a synthesized title for bare URLs found in text
    pub title: String,

    /// Absolute URL of the document
    pub url: String,

    /// Filename derived from the URL's last path segment
    pub filename: String,

    /// Document classification
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
}

/// The assembled company record, one per lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Normalized company number the record was fetched for
    pub company_number: String,

    /// RFC 3339 timestamp of the scrape
    pub scraped_at: String,

    /// Identity fields (company name, legal form, address, ...) keyed by
    /// canonical name; fields absent from the page are simply omitted
    pub identity: BTreeMap<String, String>,

    /// Annual-accounts rows in document order
    pub financial_years: Vec<FinancialYear>,

    /// Registered activities in document order
    pub activities: Vec<Activity>,

    /// Official Gazette publications in document order
    pub publications: Vec<Publication>,

    /// Directors block
    pub directors: Directors,

    /// PDF documents, deduplicated by absolute URL
    pub pdf_links: Vec<PdfLink>,
}

/// Request metadata echoed on every envelope, success or not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupMetadata {
    /// Human-readable source name
    pub source: String,

    /// Country the registry covers
    pub country: String,

    /// RFC 3339 timestamp of the request
    pub request_time: String,

    /// Company number exactly as the caller supplied it
    pub company_number_input: String,

    /// Company number after normalization
    pub company_number_clean: String,

    /// Page URL that was (or would have been) fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Outcome of a company lookup: either a record or an error message,
/// always with metadata and any extraction warnings attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Whether the page was fetched and parsed
    pub success: bool,

    /// The assembled record, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CompanyRecord>,

    /// Fatal error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Per-extractor degradations; empty when every extractor ran clean
    #[serde(default)]
    pub warnings: Vec<ExtractionWarning>,

    /// Request metadata
    pub metadata: LookupMetadata,
}

impl ResultEnvelope {
    /// Wrap a successfully assembled record
    pub fn success(
        record: CompanyRecord,
        warnings: Vec<ExtractionWarning>,
        metadata: LookupMetadata,
    ) -> Self {
        Self {
            success: true,
            data: Some(record),
            error: None,
            warnings,
            metadata,
        }
    }

    /// Wrap a fatal fetch or parse failure
    pub fn failure(error: String, metadata: LookupMetadata) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            warnings: Vec::new(),
            metadata,
        }
    }

    /// Company name for display purposes, when the lookup produced one
    pub fn company_name(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.identity.get("company_name"))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directors_default_is_unavailable() {
        let directors = Directors::default();
        match directors {
            Directors::Unavailable { reason } => {
                assert_eq!(reason, Directors::REGISTRATION_REQUIRED);
            }
            Directors::Available { .. } => panic!("default should be unavailable"),
        }
    }

    #[test]
    fn test_document_type_serializes_snake_case() {
        let json = serde_json::to_string(&DocumentType::AnnualReport).unwrap();
        assert_eq!(json, "\"annual_report\"");
        let json = serde_json::to_string(&DocumentType::BalanceSheet).unwrap();
        assert_eq!(json, "\"balance_sheet\"");
    }

    #[test]
    fn test_envelope_roundtrip() {
        let mut record = CompanyRecord::default();
        record
            .identity
            .insert("company_name".to_string(), "Acme NV".to_string());

        let envelope = ResultEnvelope::success(record, Vec::new(), LookupMetadata::default());
        assert!(envelope.success);
        assert_eq!(envelope.company_name(), Some("Acme NV"));

        let json = serde_json::to_string(&envelope).unwrap();
        let back: ResultEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(back.company_name(), Some("Acme NV"));
        assert!(back.error.is_none());
    }
}
