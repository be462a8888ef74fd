use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use super::{ExtractionWarning, element_text, following_elements};
use crate::records::Publication;

/// Section marker for the Official Gazette publications block
static PUBLICATIONS_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Publicaties Belgisch Staatsblad").unwrap());

/// A DD-MM-YYYY date at the start of an entry, followed by the type text
static DATE_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}-\d{2}-\d{4})\s+(.+)").unwrap());

/// Number of rows/list items read after the marker. The publication list
/// can run long; the cap bounds traversal cost.
const MAX_ENTRIES: usize = 200;

/// Extract gazette publications following the publications marker.
///
/// Entries that do not start with a DD-MM-YYYY date are navigation or
/// filler rows and are dropped.
pub fn extract(doc: &Html) -> Result<Vec<Publication>, ExtractionWarning> {
    let mut publications = Vec::new();

    for entry in following_elements(doc, &PUBLICATIONS_MARKER, &["tr", "li"], MAX_ENTRIES) {
        let text = element_text(entry);
        if let Some(caps) = DATE_TYPE.captures(&text) {
            publications.push(Publication {
                date: caps[1].to_string(),
                kind: caps[2].trim().to_string(),
                full_text: text.clone(),
            });
        }
    }

    Ok(publications)
}
