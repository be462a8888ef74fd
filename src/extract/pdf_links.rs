use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use std::collections::HashSet;

use super::{ExtractionWarning, element_text, selector};
use crate::records::{DocumentType, PdfLink};

/// Patterns that mark an anchor as a document candidate, matched against
/// the lower-cased href and link text
static PDF_HINTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\.pdf$",      // direct PDF links
        r"jaarrekening", // annual accounts
        r"financial",
        r"statement",
        r"verslag", // reports
        r"publicatie",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Bare PDF URLs appearing in the page's rendered text
static BARE_PDF_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+\.pdf").unwrap());

/// Harvest PDF document links in two passes: anchors first, then bare
/// URLs in the page text. Entries are deduplicated by absolute URL with
/// the first occurrence winning.
pub fn extract(doc: &Html, base_url: &str) -> Result<Vec<PdfLink>, ExtractionWarning> {
    const NAME: &str = "pdf_links";
    let anchor = selector("a[href]", NAME)?;

    let mut links = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    // Pass 1: anchor elements
    for link_el in doc.select(&anchor) {
        let Some(href) = link_el.value().attr("href") else {
            continue;
        };
        let href = href.to_lowercase();
        let title = element_text(link_el);
        let text = title.to_lowercase();

        let is_pdf = PDF_HINTS
            .iter()
            .any(|pattern| pattern.is_match(&href) || pattern.is_match(&text))
            || href.ends_with(".pdf");
        if !is_pdf {
            continue;
        }

        let url = resolve_url(&href, base_url);
        if !seen.insert(url.clone()) {
            continue;
        }
        links.push(PdfLink {
            title,
            filename: filename_from_url(&url),
            doc_type: classify(&text, &url),
            url,
        });
    }

    // Pass 2: bare URLs in the rendered text
    let page_text = doc.root_element().text().collect::<String>();
    for found in BARE_PDF_URL.find_iter(&page_text) {
        let url = found.as_str().to_string();
        if !seen.insert(url.clone()) {
            continue;
        }
        let filename = filename_from_url(&url);
        links.push(PdfLink {
            title: format!("PDF Document - {filename}"),
            doc_type: classify("", &url),
            filename,
            url,
        });
    }

    Ok(links)
}

/// Resolve an href against the site base URL.
///
/// Root-relative paths are prefixed with the base; absolute URLs pass
/// through; anything else is treated as relative to the site root.
fn resolve_url(href: &str, base_url: &str) -> String {
    if href.starts_with('/') {
        format!("{base_url}{href}")
    } else if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{base_url}/{href}")
    }
}

/// Filename from the URL's last path segment, query string stripped,
/// with a `.pdf` extension appended when missing
fn filename_from_url(url: &str) -> String {
    let last_segment = url.rsplit('/').next().unwrap_or(url);
    let mut filename = last_segment
        .split('?')
        .next()
        .unwrap_or(last_segment)
        .to_string();
    if !filename.ends_with(".pdf") {
        filename.push_str(".pdf");
    }
    filename
}

/// Classify a document by keyword sets over the lower-cased link text and
/// URL, in priority order
fn classify(link_text: &str, url: &str) -> DocumentType {
    let url = url.to_lowercase();
    let matches = |keywords: &[&str]| {
        keywords
            .iter()
            .any(|keyword| link_text.contains(keyword) || url.contains(keyword))
    };

    if matches(&["jaarrekening", "annual", "financial"]) {
        DocumentType::AnnualReport
    } else if matches(&["statuten", "articles", "constitution"]) {
        DocumentType::ArticlesOfAssociation
    } else if matches(&["publicatie", "publication", "gazette"]) {
        DocumentType::OfficialPublication
    } else if matches(&["verslag", "report"]) {
        DocumentType::Report
    } else if matches(&["balans", "balance"]) {
        DocumentType::BalanceSheet
    } else {
        DocumentType::Document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = "https://staatsbladmonitor.be";
        assert_eq!(
            resolve_url("/docs/x.pdf", base),
            "https://staatsbladmonitor.be/docs/x.pdf"
        );
        assert_eq!(
            resolve_url("https://other.be/y.pdf", base),
            "https://other.be/y.pdf"
        );
        assert_eq!(
            resolve_url("docs/z.pdf", base),
            "https://staatsbladmonitor.be/docs/z.pdf"
        );
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://x.be/docs/jaarrekening2023.pdf"),
            "jaarrekening2023.pdf"
        );
        // Query string stripped, extension appended
        assert_eq!(
            filename_from_url("https://x.be/download?id=7"),
            "download.pdf"
        );
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(
            classify("annual report 2023", "https://x.be/a.pdf"),
            DocumentType::AnnualReport
        );
        assert_eq!(
            classify("", "https://x.be/statuten.pdf"),
            DocumentType::ArticlesOfAssociation
        );
        assert_eq!(
            classify("gazette notice", "https://x.be/n.pdf"),
            DocumentType::OfficialPublication
        );
        assert_eq!(
            classify("verslag", "https://x.be/v.pdf"),
            DocumentType::Report
        );
        assert_eq!(
            classify("balans 2022", "https://x.be/b.pdf"),
            DocumentType::BalanceSheet
        );
        assert_eq!(classify("", "https://x.be/misc.pdf"), DocumentType::Document);
        // Annual-report terms win over later sets
        assert_eq!(
            classify("jaarrekening publicatie", "https://x.be/x.pdf"),
            DocumentType::AnnualReport
        );
    }
}
