use crate::error::VatError;

/// Namespace of the VIES checkVat operation
const CHECK_VAT_NS: &str = "urn:ec.europa.eu:taxud:vies:services:checkVat:types";

/// Parsed body of a successful checkVat response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckVatResponse {
    pub valid: bool,
    pub country_code: String,
    pub vat_number: String,
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Build the SOAP 1.1 request envelope for a checkVat call
pub fn check_vat_envelope(country_code: &str, vat_number: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:urn="{CHECK_VAT_NS}">
  <soapenv:Header/>
  <soapenv:Body>
    <urn:checkVat>
      <urn:countryCode>{}</urn:countryCode>
      <urn:vatNumber>{}</urn:vatNumber>
    </urn:checkVat>
  </soapenv:Body>
</soapenv:Envelope>"#,
        escape_xml(country_code),
        escape_xml(vat_number)
    )
}

/// Parse a checkVat SOAP response.
///
/// Matching is by local tag name so the server's namespace prefixes do
/// not matter. A SOAP fault maps to [`VatError::Fault`] with the fault
/// string as the message.
pub fn parse_check_vat_response(xml: &str) -> Result<CheckVatResponse, VatError> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| VatError::Soap(e.to_string()))?;

    if let Some(fault) = doc
        .descendants()
        .find(|node| node.tag_name().name() == "Fault")
    {
        let reason = fault
            .descendants()
            .find(|node| node.tag_name().name() == "faultstring")
            .and_then(|node| node.text())
            .unwrap_or("unknown fault")
            .trim()
            .to_string();
        return Err(VatError::Fault(reason));
    }

    let response = doc
        .descendants()
        .find(|node| node.tag_name().name() == "checkVatResponse")
        .ok_or_else(|| VatError::Soap("missing checkVatResponse element".to_string()))?;

    let field = |name: &str| -> Option<String> {
        response
            .descendants()
            .find(|node| node.tag_name().name() == name)
            .and_then(|node| node.text())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    };

    Ok(CheckVatResponse {
        valid: field("valid").as_deref() == Some("true"),
        country_code: field("countryCode").unwrap_or_default(),
        vat_number: field("vatNumber").unwrap_or_default(),
        name: field("name"),
        address: field("address"),
    })
}

/// Minimal XML text escaping for envelope values
fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
