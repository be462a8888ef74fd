use scraper::Html;
use url::Url;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::extract::{self, ExtractionWarning};
use crate::fetch::HttpFetcher;
use crate::identifier::CompanyIdentifier;
use crate::records::{CompanyRecord, LookupMetadata, ResultEnvelope};

/// Source name echoed in envelope metadata
pub const SOURCE_NAME: &str = "Staatsblad Monitor";

/// Country the registry covers
pub const SOURCE_COUNTRY: &str = "Belgium";

/// Build the company-detail page URL for a normalized number
pub fn page_url(base_url: &str, clean_number: &str) -> Result<String, ScrapeError> {
    let base = Url::parse(base_url)
        .map_err(|e| ScrapeError::Parse(format!("invalid base URL {base_url:?}: {e}")))?;
    let url = base
        .join(&format!(
            "/bedrijfsfiche.html?ondernemingsnummer={clean_number}"
        ))
        .map_err(|e| ScrapeError::Parse(format!("could not build page URL: {e}")))?;
    Ok(url.to_string())
}

/// Look up a company by its number and assemble the result envelope.
///
/// Fetch and document-level failures produce a `success=false` envelope;
/// individual extractor failures degrade their field and surface as
/// warnings on a successful envelope. This function never errors.
pub async fn lookup_company(raw_number: &str, config: &ScraperConfig) -> ResultEnvelope {
    let identifier = CompanyIdentifier::new(raw_number);
    let mut metadata = LookupMetadata {
        source: SOURCE_NAME.to_string(),
        country: SOURCE_COUNTRY.to_string(),
        request_time: chrono::Utc::now().to_rfc3339(),
        company_number_input: identifier.raw().to_string(),
        company_number_clean: identifier.clean().to_string(),
        url: None,
    };

    match run_lookup(&identifier, config, &mut metadata).await {
        Ok((record, warnings)) => ResultEnvelope::success(record, warnings, metadata),
        Err(e) => {
            ::log::error!("Lookup failed for {}: {}", identifier.clean(), e);
            ResultEnvelope::failure(e.to_string(), metadata)
        }
    }
}

/// The fallible part of the lookup: URL build, fetch, parse, extract
async fn run_lookup(
    identifier: &CompanyIdentifier,
    config: &ScraperConfig,
    metadata: &mut LookupMetadata,
) -> Result<(CompanyRecord, Vec<ExtractionWarning>), ScrapeError> {
    let url = page_url(&config.base_url, identifier.clean())?;
    metadata.url = Some(url.clone());

    ::log::info!("Searching company {} at {}", identifier.clean(), url);

    let fetcher = HttpFetcher::new(config)?;
    let body = fetcher.get(&url).await?;
    if body.trim().is_empty() {
        return Err(ScrapeError::Parse("empty response body".to_string()));
    }

    let doc = Html::parse_document(&body);
    let (record, warnings) = extract::extract_company(&doc, identifier.clean(), &config.base_url);

    ::log::info!(
        "Extracted company {}: {} financial years, {} activities, {} publications, {} PDF links",
        identifier.clean(),
        record.financial_years.len(),
        record.activities.len(),
        record.publications.len(),
        record.pdf_links.len()
    );
    if !warnings.is_empty() {
        ::log::warn!("{} extractor(s) degraded for {}", warnings.len(), identifier.clean());
    }

    Ok((record, warnings))
}
