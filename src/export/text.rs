use crate::records::{Directors, ResultEnvelope};

use super::identity_lines;

/// Publications rows rendered before the "and N more" trailer
const MAX_PUBLICATION_ROWS: usize = 20;

/// Render an envelope as a plain-text report
pub fn render(envelope: &ResultEnvelope) -> String {
    let mut lines: Vec<String> = Vec::new();

    let Some(record) = &envelope.data else {
        lines.push("ERROR:".to_string());
        lines.push(
            envelope
                .error
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string()),
        );
        return lines.join("\n");
    };

    lines.push("STAATSBLAD MONITOR - COMPANY REPORT".to_string());
    lines.push(format!("Generated: {}", record.scraped_at));
    lines.push("=".repeat(50));
    lines.push(String::new());

    // Identity fields
    lines.push("COMPANY INFORMATION:".to_string());
    lines.push("-".repeat(20));
    for (key, value) in identity_lines(envelope) {
        lines.push(format!("{key}: {value}"));
    }
    lines.push(String::new());

    // Financial data, one block per year
    if !record.financial_years.is_empty() {
        lines.push("FINANCIAL DATA:".to_string());
        lines.push("-".repeat(15));
        for year in &record.financial_years {
            lines.push(format!("Year: {}", year.year_end));
            lines.push(format!("  Assets: {}", year.assets));
            lines.push(format!("  Gross Margin: {}", year.gross_margin));
            lines.push(format!("  Operating Profit: {}", year.operating_profit));
            lines.push(format!("  Taxes: {}", year.taxes));
            lines.push(format!("  Equity: {}", year.equity));
            lines.push(format!("  Debts: {}", year.debts));
            lines.push(String::new());
        }
    }

    // Activities
    if !record.activities.is_empty() {
        lines.push("ACTIVITIES:".to_string());
        lines.push("-".repeat(10));
        for activity in &record.activities {
            lines.push(format!("- {}", activity.activity));
        }
        lines.push(String::new());
    }

    // Publications, capped
    if !record.publications.is_empty() {
        lines.push("PUBLICATIONS:".to_string());
        lines.push("-".repeat(12));
        for publication in record.publications.iter().take(MAX_PUBLICATION_ROWS) {
            lines.push(format!("{} - {}", publication.date, publication.kind));
        }
        if record.publications.len() > MAX_PUBLICATION_ROWS {
            lines.push(format!(
                "... and {} more",
                record.publications.len() - MAX_PUBLICATION_ROWS
            ));
        }
        lines.push(String::new());
    }

    // Directors
    lines.push("DIRECTORS:".to_string());
    lines.push("-".repeat(10));
    match &record.directors {
        Directors::Available { names } => {
            for name in names {
                lines.push(format!("- {name}"));
            }
        }
        Directors::Unavailable { reason } => lines.push(reason.clone()),
    }
    lines.push(String::new());

    // PDF documents
    if !record.pdf_links.is_empty() {
        lines.push("PDF DOCUMENTS:".to_string());
        lines.push("-".repeat(15));
        for pdf in &record.pdf_links {
            lines.push(format!("- {} ({})", pdf.title, pdf.doc_type));
            lines.push(format!("  URL: {}", pdf.url));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
