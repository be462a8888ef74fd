use crate::records::{Directors, ResultEnvelope};

use super::identity_lines;

/// Publications rows rendered before the "and N more" trailer
const MAX_PUBLICATION_ROWS: usize = 50;

/// Render an envelope as a Markdown report
pub fn render(envelope: &ResultEnvelope) -> String {
    let mut md: Vec<String> = Vec::new();

    let Some(record) = &envelope.data else {
        md.push("# Error".to_string());
        md.push(format!(
            "**Error**: {}",
            envelope.error.as_deref().unwrap_or("Unknown error")
        ));
        return md.join("\n");
    };

    let title = envelope
        .company_name()
        .unwrap_or("Company Information")
        .to_string();
    md.push(format!("# {title}"));
    md.push(format!(
        "*Scraped from {} on {}*",
        envelope.metadata.source, record.scraped_at
    ));
    md.push(String::new());

    // Identity fields
    md.push("## Company Information".to_string());
    md.push(String::new());
    for (key, value) in identity_lines(envelope) {
        md.push(format!("**{key}**: {value}"));
    }
    md.push(String::new());

    // Financial data
    if !record.financial_years.is_empty() {
        md.push("## Financial Data".to_string());
        md.push(String::new());
        md.push(
            "| Year End | Assets | Gross Margin | Operating Profit | Taxes | Equity | Debts |"
                .to_string(),
        );
        md.push(
            "|----------|--------|--------------|------------------|-------|--------|-------|"
                .to_string(),
        );
        for year in &record.financial_years {
            md.push(format!(
                "| {} | {} | {} | {} | {} | {} | {} |",
                year.year_end,
                year.assets,
                year.gross_margin,
                year.operating_profit,
                year.taxes,
                year.equity,
                year.debts
            ));
        }
        md.push(String::new());
    }

    // Activities
    if !record.activities.is_empty() {
        md.push("## Activities".to_string());
        md.push(String::new());
        // The NACE code is already part of the activity text when present
        for activity in &record.activities {
            md.push(format!("- {}", activity.activity));
        }
        md.push(String::new());
    }

    // Publications, capped
    if !record.publications.is_empty() {
        md.push("## Official Gazette Publications".to_string());
        md.push(String::new());
        md.push("| Date | Type |".to_string());
        md.push("|------|------|".to_string());
        for publication in record.publications.iter().take(MAX_PUBLICATION_ROWS) {
            md.push(format!("| {} | {} |", publication.date, publication.kind));
        }
        md.push(String::new());
        if record.publications.len() > MAX_PUBLICATION_ROWS {
            md.push(format!(
                "*... and {} more publications*",
                record.publications.len() - MAX_PUBLICATION_ROWS
            ));
            md.push(String::new());
        }
    }

    // Directors
    md.push("## Directors".to_string());
    md.push(String::new());
    match &record.directors {
        Directors::Available { names } => {
            for name in names {
                md.push(format!("- {name}"));
            }
        }
        Directors::Unavailable { reason } => {
            md.push(format!("*{reason}*"));
        }
    }
    md.push(String::new());

    // PDF documents
    if !record.pdf_links.is_empty() {
        md.push("## PDF Documents".to_string());
        md.push(String::new());
        md.push("| Title | Type | URL |".to_string());
        md.push("|-------|------|-----|".to_string());
        for pdf in &record.pdf_links {
            md.push(format!("| {} | {} | {} |", pdf.title, pdf.doc_type, pdf.url));
        }
        md.push(String::new());
    }

    md.join("\n")
}
