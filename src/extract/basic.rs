use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use std::collections::BTreeMap;

use super::{ExtractionWarning, element_text, selector};

/// Known street and city tokens of the target site's address lines.
/// Single-site heuristic: a markup change silently yields no match.
static ADDRESS_TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Marnixlaan|Brussel|Antwerpen|Gent").unwrap());

/// Dutch labels used on the company page, mapped to canonical keys
fn canonical_key(label: &str) -> Option<&'static str> {
    match label {
        "vennootschapsnaam" => Some("company_name"),
        "vennootschapsvorm" => Some("legal_form"),
        "ondernemingsnummer" => Some("company_number"),
        "status" => Some("status"),
        "juridische situatie" => Some("legal_situation"),
        "adres" => Some("address"),
        "laatste publicatie" => Some("last_publication"),
        "laatste jaarrekening" => Some("last_annual_report"),
        _ => None,
    }
}

/// Extract the identity fields: page title, label/value table rows, and
/// the address-line heuristic.
///
/// Unmapped labels are kept verbatim as keys; duplicate labels overwrite
/// earlier values (last row wins).
pub fn extract(doc: &Html) -> Result<BTreeMap<String, String>, ExtractionWarning> {
    const NAME: &str = "basic_info";
    let mut info = BTreeMap::new();

    // Company name from the most prominent heading, falling back to the
    // document title. A table row may overwrite this below.
    let heading = selector("h1", NAME)?;
    let subheading = selector("h2", NAME)?;
    let title = selector("title", NAME)?;
    let name_el = doc
        .select(&heading)
        .next()
        .or_else(|| doc.select(&subheading).next())
        .or_else(|| doc.select(&title).next());
    if let Some(el) = name_el {
        let text = element_text(el);
        if !text.is_empty() {
            info.insert("company_name".to_string(), text);
        }
    }

    // Label/value rows from every table on the page
    let table = selector("table", NAME)?;
    let row = selector("tr", NAME)?;
    let cell = selector("td, th", NAME)?;
    for table_el in doc.select(&table) {
        for row_el in table_el.select(&row) {
            let cells: Vec<_> = row_el.select(&cell).collect();
            if cells.len() < 2 {
                continue;
            }
            let label = element_text(cells[0]).to_lowercase();
            let value = element_text(cells[1]);

            match canonical_key(&label) {
                Some(key) => info.insert(key.to_string(), value),
                None => info.insert(label, value),
            };
        }
    }

    // Address line by token match anywhere in the page text
    let address = doc.tree.root().descendants().find_map(|node| {
        node.value()
            .as_text()
            .map(|text| text.trim())
            .filter(|text| ADDRESS_TOKENS.is_match(text))
            .map(str::to_string)
    });
    if let Some(full_address) = address {
        info.insert("full_address".to_string(), full_address);
    }

    Ok(info)
}
