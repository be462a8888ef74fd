use crate::config::ReportConfig;
use crate::error::VatError;
use crate::vat::{VatQuery, VatValidation};

const RULE: &str =
    "==============================================================================";

/// Render the outcome of a VAT validation as a narrative compliance
/// report.
///
/// The report is fully templated; when `use_model` is set, a local model
/// is asked to write the compliance assessment section instead, falling
/// back to the template text if the model call fails.
pub async fn render(
    query: &VatQuery,
    outcome: &Result<VatValidation, VatError>,
    config: &ReportConfig,
) -> String {
    match outcome {
        Ok(validation) => {
            let assessment = assessment_section(validation, config).await;
            success_report(validation, &assessment)
        }
        Err(error) => failure_report(query, error),
    }
}

/// Assessment text: model-written when enabled and reachable, templated
/// otherwise
async fn assessment_section(validation: &VatValidation, config: &ReportConfig) -> String {
    if config.use_model {
        match model_analysis(validation, config).await {
            Ok(text) if !text.trim().is_empty() => return text.trim().to_string(),
            Ok(_) => ::log::warn!("Model returned an empty analysis, using template"),
            Err(e) => ::log::warn!("Model analysis unavailable ({e}), using template"),
        }
    }
    template_assessment(validation)
}

fn success_report(validation: &VatValidation, assessment: &str) -> String {
    let status = if validation.valid { "VALID" } else { "INVALID" };
    let summary = if validation.valid {
        format!(
            "The VAT number {}{} is registered in the VIES system and may be used \
             for intra-EU invoicing.",
            validation.country_code, validation.vat_number
        )
    } else {
        format!(
            "The VAT number {}{} is not registered in the VIES system and must not \
             be used for intra-EU invoicing.",
            validation.country_code, validation.vat_number
        )
    };

    let recommendations = if validation.valid {
        "- Keep a copy of this validation with the invoice records\n\
         - Re-validate before recurring high-value transactions"
    } else {
        "- Verify the number with the counterparty\n\
         - Check the country code matches the member state of registration\n\
         - Re-validate after correction"
    };

    format!(
        "{RULE}\n\
         VAT VALIDATION REPORT\n\
         Generated: {}\n\
         {RULE}\n\n\
         EXECUTIVE SUMMARY\n{summary}\n\n\
         VALIDATION STATUS\n{status}\n\n\
         COMPANY INFORMATION\n\
         Name: {}\n\
         Address: {}\n\n\
         COMPLIANCE ASSESSMENT\n{assessment}\n\n\
         RECOMMENDATIONS\n{recommendations}\n\n\
         TECHNICAL DETAILS\n\
         Country Code: {}\n\
         VAT Number: {}\n\
         Source: EU VIES checkVat\n\
         Checked At: {}\n\
         {RULE}",
        validation.request_time,
        validation.name,
        validation.address,
        validation.country_code,
        validation.vat_number,
        validation.request_time,
    )
}

fn failure_report(query: &VatQuery, error: &VatError) -> String {
    format!(
        "{RULE}\n\
         VAT VALIDATION ERROR\n\
         {RULE}\n\n\
         VALIDATION FAILED\n\n\
         Country Code: {}\n\
         VAT Number: {}\n\
         Error: {error}\n\n\
         RECOMMENDATIONS\n\
         - Verify input format\n\
         - Check network connectivity\n\
         - Ensure the VAT number is valid for the specified country\n\
         {RULE}",
        query.country_code(),
        query.vat_number(),
    )
}

fn template_assessment(validation: &VatValidation) -> String {
    if validation.valid {
        "The registry confirms an active VAT registration. Reverse-charge \
         treatment of intra-EU supplies to this counterparty is supported by \
         this validation."
            .to_string()
    } else {
        "The registry does not recognize this VAT number. Intra-EU supplies \
         to this counterparty cannot be zero-rated on the basis of this \
         number."
            .to_string()
    }
}

/// Ask a local Ollama server to write the assessment section
async fn model_analysis(
    validation: &VatValidation,
    config: &ReportConfig,
) -> Result<String, VatError> {
    let prompt = format!(
        "You are a business compliance analyst. In at most three sentences, \
         assess the compliance implications of this VAT validation result:\n\
         valid: {}\ncountry: {}\nvat number: {}\nname: {}\naddress: {}",
        validation.valid,
        validation.country_code,
        validation.vat_number,
        validation.name,
        validation.address,
    );

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/generate", config.model_endpoint))
        .json(&serde_json::json!({
            "model": config.model,
            "prompt": prompt,
            "stream": false,
        }))
        .send()
        .await?
        .error_for_status()?;

    let body: serde_json::Value = response.json().await?;
    Ok(body
        .get("response")
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string())
}
