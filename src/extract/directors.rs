use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use super::{ExtractionWarning, element_text, marker_parent, selector, subtree_text_matches};
use crate::records::Directors;

/// Section marker for the directors block, bilingual
static DIRECTORS_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Bestuurders|Directors").unwrap());

/// Registration wall notice, bilingual
static REGISTRATION_NOTICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Enkel toegankelijk voor geregistreerde gebruikers|Only accessible for registered users")
        .unwrap()
});

/// Extract the directors block.
///
/// Missing marker, a registration notice, or an empty section all yield
/// the `Unavailable` variant; this extractor never fails the lookup.
pub fn extract(doc: &Html) -> Result<Directors, ExtractionWarning> {
    const NAME: &str = "directors";

    let Some(parent) = marker_parent(doc, &DIRECTORS_MARKER) else {
        return Ok(Directors::unavailable());
    };

    if subtree_text_matches(parent, &REGISTRATION_NOTICE) {
        return Ok(Directors::unavailable());
    }

    let item = selector("li, tr", NAME)?;
    let names: Vec<String> = parent
        .select(&item)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();

    if names.is_empty() {
        Ok(Directors::unavailable())
    } else {
        Ok(Directors::Available { names })
    }
}
