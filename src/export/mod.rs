pub mod markdown;
pub mod text;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::records::ResultEnvelope;

/// Paths of the three files written for one envelope
#[derive(Debug, Clone)]
pub struct SavedFiles {
    pub json: PathBuf,
    pub markdown: PathBuf,
    pub text: PathBuf,
}

/// Render the envelope as JSON, Markdown and plain text and write all
/// three under `results_dir` with a shared timestamped filename.
pub fn save_envelope(
    envelope: &ResultEnvelope,
    results_dir: &Path,
    prefix: &str,
) -> Result<SavedFiles, ExportError> {
    fs::create_dir_all(results_dir)?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");

    let json_path = results_dir.join(format!("{prefix}_{stamp}.json"));
    fs::write(&json_path, serde_json::to_string_pretty(envelope)?)?;

    let md_path = results_dir.join(format!("{prefix}_{stamp}.md"));
    fs::write(&md_path, markdown::render(envelope))?;

    let txt_path = results_dir.join(format!("{prefix}_{stamp}.txt"));
    fs::write(&txt_path, text::render(envelope))?;

    ::log::info!(
        "Results saved to {}, {}, {}",
        json_path.display(),
        md_path.display(),
        txt_path.display()
    );

    Ok(SavedFiles {
        json: json_path,
        markdown: md_path,
        text: txt_path,
    })
}

/// "company_name" -> "Company Name", for section labels
pub(crate) fn label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Identity lines shared by both renderers: company number and scrape
/// time first, then the extracted identity fields
pub(crate) fn identity_lines(envelope: &ResultEnvelope) -> Vec<(String, String)> {
    let mut lines = Vec::new();
    if let Some(record) = &envelope.data {
        lines.push(("Company Number".to_string(), record.company_number.clone()));
        lines.push(("Scraped At".to_string(), record.scraped_at.clone()));
        for (key, value) in &record.identity {
            lines.push((label(key), value.clone()));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{CompanyRecord, LookupMetadata};

    fn sample_envelope() -> ResultEnvelope {
        let mut record = CompanyRecord {
            company_number: "0403200393".to_string(),
            scraped_at: "2024-06-01T12:00:00Z".to_string(),
            ..CompanyRecord::default()
        };
        record
            .identity
            .insert("company_name".to_string(), "Acme NV".to_string());
        ResultEnvelope::success(record, Vec::new(), LookupMetadata::default())
    }

    #[test]
    fn test_label() {
        assert_eq!(label("company_name"), "Company Name");
        assert_eq!(label("status"), "Status");
        assert_eq!(label("last_annual_report"), "Last Annual Report");
    }

    #[test]
    fn test_save_envelope_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let envelope = sample_envelope();

        let saved = save_envelope(&envelope, dir.path(), "staatsblad").unwrap();

        for path in [&saved.json, &saved.markdown, &saved.text] {
            assert!(path.exists(), "{} missing", path.display());
            assert!(path
                .file_name()
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("staatsblad_"));
        }

        // The JSON round-trips back into an envelope
        let json = fs::read_to_string(&saved.json).unwrap();
        let back: ResultEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(back.company_name(), Some("Acme NV"));
    }
}
