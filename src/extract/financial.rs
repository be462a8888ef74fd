use scraper::Html;

use super::{ExtractionWarning, element_text, selector};
use crate::records::FinancialYear;

/// Dutch column keywords that identify an annual-accounts table
const FINANCIAL_KEYWORDS: [&str; 5] = [
    "activa",
    "brutomarge",
    "bedrijfswinst",
    "eigen vermogen",
    "schulden",
];

/// Extract annual-accounts rows from every table that looks financial.
///
/// A table qualifies when the concatenated text of its first five cells
/// contains one of the keywords. The first row is assumed to be the
/// header; data rows bind cells 0..=6 positionally, with the debts column
/// optional. Rows with fewer than six cells are skipped.
pub fn extract(doc: &Html) -> Result<Vec<FinancialYear>, ExtractionWarning> {
    const NAME: &str = "financial_data";
    let table = selector("table", NAME)?;
    let row = selector("tr", NAME)?;
    let cell = selector("td, th", NAME)?;

    let mut years = Vec::new();

    for table_el in doc.select(&table) {
        let header_text = table_el
            .select(&cell)
            .take(5)
            .map(element_text)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if !FINANCIAL_KEYWORDS
            .iter()
            .any(|keyword| header_text.contains(keyword))
        {
            continue;
        }

        // Skip the header row
        for row_el in table_el.select(&row).skip(1) {
            let cells: Vec<_> = row_el.select(&cell).collect();
            if cells.len() < 6 {
                ::log::debug!(
                    "Skipping malformed financial row with {} cells",
                    cells.len()
                );
                continue;
            }

            years.push(FinancialYear {
                year_end: element_text(cells[0]),
                assets: element_text(cells[1]),
                gross_margin: element_text(cells[2]),
                operating_profit: element_text(cells[3]),
                taxes: element_text(cells[4]),
                equity: element_text(cells[5]),
                debts: cells.get(6).map(|c| element_text(*c)).unwrap_or_default(),
            });
        }
    }

    Ok(years)
}
