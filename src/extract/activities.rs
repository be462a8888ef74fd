use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use super::{ExtractionWarning, element_text, following_elements};
use crate::records::Activity;

/// Section marker for the activities block
static ACTIVITIES_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Activiteiten|NACE").unwrap());

/// Parenthesized 4-5 digit NACE code inside an activity description
static NACE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{4,5})\)").unwrap());

/// Number of list items read after the marker. Bounds the walk on
/// malformed pages.
const MAX_ITEMS: usize = 10;

/// Extract registered activities following the activities marker.
///
/// Entries whose text starts with an opening parenthesis are footnotes on
/// the site, not activities, and are dropped.
pub fn extract(doc: &Html) -> Result<Vec<Activity>, ExtractionWarning> {
    let mut activities = Vec::new();

    for item in following_elements(doc, &ACTIVITIES_MARKER, &["li"], MAX_ITEMS) {
        let text = element_text(item);
        if text.is_empty() || text.starts_with('(') {
            continue;
        }
        activities.push(Activity {
            nace_code: nace_code(&text),
            activity: text,
        });
    }

    Ok(activities)
}

/// Pull the NACE code out of an activity description, if present
pub fn nace_code(activity_text: &str) -> Option<String> {
    NACE_CODE
        .captures(activity_text)
        .map(|caps| caps[1].to_string())
}
