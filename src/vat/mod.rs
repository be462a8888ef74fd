pub mod report;
pub mod soap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::VatConfig;
use crate::error::VatError;

/// Separators people type into VAT numbers ("BE 0403.200-393")
static VAT_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s.\-]").unwrap());

/// Placeholder used when the registry withholds a field
const NOT_AVAILABLE: &str = "Not available";

/// A normalized VAT validation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VatQuery {
    country_code: String,
    vat_number: String,
}

impl VatQuery {
    /// Normalize a raw country code and VAT number: the country code is
    /// upper-cased, the number stripped of spaces, dots and dashes
    pub fn new(country_code: &str, vat_number: &str) -> Self {
        Self {
            country_code: country_code.trim().to_uppercase(),
            vat_number: VAT_SEPARATORS.replace_all(vat_number, "").to_string(),
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn vat_number(&self) -> &str {
        &self.vat_number
    }
}

/// Outcome of a successful VIES checkVat call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VatValidation {
    /// Whether the number is registered for intra-EU transactions
    pub valid: bool,

    /// Country code as echoed by the registry
    pub country_code: String,

    /// VAT number as echoed by the registry
    pub vat_number: String,

    /// Registered company name, or "Not available"
    pub name: String,

    /// Registered company address, or "Not available"
    pub address: String,

    /// RFC 3339 timestamp of the request
    pub request_time: String,
}

/// Validate a VAT number against the EU VIES registry.
///
/// One SOAP call, no retries. Service faults (member state down, invalid
/// input) surface as [`VatError::Fault`].
pub async fn validate(query: &VatQuery, config: &VatConfig) -> Result<VatValidation, VatError> {
    ::log::info!(
        "Validating VAT {}{} against VIES",
        query.country_code(),
        query.vat_number()
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let envelope = soap::check_vat_envelope(query.country_code(), query.vat_number());
    let response = client
        .post(&config.endpoint)
        .header("Content-Type", "text/xml; charset=utf-8")
        .header("SOAPAction", "")
        .body(envelope)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(VatError::Status {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let parsed = soap::parse_check_vat_response(&body)?;

    Ok(VatValidation {
        valid: parsed.valid,
        country_code: parsed.country_code,
        vat_number: parsed.vat_number,
        name: parsed.name.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        address: parsed.address.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        request_time: chrono::Utc::now().to_rfc3339(),
    })
}
