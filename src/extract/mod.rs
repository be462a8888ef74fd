pub mod activities;
pub mod basic;
pub mod directors;
pub mod financial;
pub mod pdf_links;
pub mod publications;

#[cfg(test)]
mod tests;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::records::CompanyRecord;

/// A contained extractor failure. The affected field degrades to its
/// default; the warning is collected on the envelope so callers can tell
/// "absent on page" from "extractor failed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionWarning {
    /// Which extractor degraded
    pub extractor: String,

    /// What went wrong
    pub message: String,
}

impl ExtractionWarning {
    /// Create a warning for the named extractor
    pub fn new(extractor: &str, message: impl Into<String>) -> Self {
        Self {
            extractor: extractor.to_string(),
            message: message.into(),
        }
    }
}

/// Run every field extractor over the parsed page and assemble the record.
///
/// Extractors are independent: one failing degrades only its own field
/// and adds a warning, never aborts the others.
pub fn extract_company(
    doc: &Html,
    company_number: &str,
    base_url: &str,
) -> (CompanyRecord, Vec<ExtractionWarning>) {
    let mut warnings = Vec::new();
    let mut record = CompanyRecord {
        company_number: company_number.to_string(),
        scraped_at: chrono::Utc::now().to_rfc3339(),
        ..CompanyRecord::default()
    };

    match basic::extract(doc) {
        Ok(identity) => record.identity = identity,
        Err(warning) => {
            ::log::warn!("Error extracting basic info: {}", warning.message);
            warnings.push(warning);
        }
    }

    match financial::extract(doc) {
        Ok(years) => record.financial_years = years,
        Err(warning) => {
            ::log::warn!("Error extracting financial data: {}", warning.message);
            warnings.push(warning);
        }
    }

    match activities::extract(doc) {
        Ok(activities) => record.activities = activities,
        Err(warning) => {
            ::log::warn!("Error extracting activities: {}", warning.message);
            warnings.push(warning);
        }
    }

    match publications::extract(doc) {
        Ok(publications) => record.publications = publications,
        Err(warning) => {
            ::log::warn!("Error extracting publications: {}", warning.message);
            warnings.push(warning);
        }
    }

    match directors::extract(doc) {
        Ok(directors) => record.directors = directors,
        Err(warning) => {
            ::log::warn!("Error extracting directors: {}", warning.message);
            warnings.push(warning);
        }
    }

    match pdf_links::extract(doc, base_url) {
        Ok(links) => record.pdf_links = links,
        Err(warning) => {
            ::log::warn!("Error extracting PDF links: {}", warning.message);
            warnings.push(warning);
        }
    }

    (record, warnings)
}

/// Compile a CSS selector, mapping failure to a warning for `extractor`
pub(crate) fn selector(css: &str, extractor: &str) -> Result<Selector, ExtractionWarning> {
    Selector::parse(css)
        .map_err(|e| ExtractionWarning::new(extractor, format!("bad selector {css:?}: {e}")))
}

/// Text of an element's subtree with whitespace collapsed to single spaces
pub(crate) fn element_text(el: ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the parent element of the first text node matching `marker`
pub(crate) fn marker_parent<'a>(doc: &'a Html, marker: &Regex) -> Option<ElementRef<'a>> {
    doc.tree
        .root()
        .descendants()
        .find(|node| {
            node.value()
                .as_text()
                .is_some_and(|text| marker.is_match(text))
        })
        .and_then(|node| node.parent())
        .and_then(ElementRef::wrap)
}

/// Collect up to `limit` elements with one of the given tag names that
/// appear after the marker's parent in document order.
///
/// "After" means pre-order document position: the parent's own subtree
/// first, then everything that follows it on the page. The limit bounds
/// tree walks on malformed pages.
pub(crate) fn following_elements<'a>(
    doc: &'a Html,
    marker: &Regex,
    names: &[&str],
    limit: usize,
) -> Vec<ElementRef<'a>> {
    let Some(parent) = marker_parent(doc, marker) else {
        return Vec::new();
    };
    let parent_id = parent.id();

    doc.tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != parent_id)
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| names.contains(&el.value().name()))
        .take(limit)
        .collect()
}

/// Whether any text node inside `parent`'s subtree matches `pattern`
pub(crate) fn subtree_text_matches(parent: ElementRef, pattern: &Regex) -> bool {
    parent.text().any(|text| pattern.is_match(text))
}
