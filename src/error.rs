use thiserror::Error;

/// Fatal errors for a company lookup. Anything that stops the page from
/// being fetched or parsed lands here and produces a failure envelope;
/// per-field extraction problems are warnings, not errors.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not a usable document
    #[error("could not parse document: {0}")]
    Parse(String),
}

/// Errors writing exported result files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem failure creating the results directory or writing a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Envelope could not be serialized
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the VIES checkVat call.
#[derive(Debug, Error)]
pub enum VatError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("VIES endpoint returned status {status}")]
    Status { status: u16 },

    /// The SOAP response could not be parsed
    #[error("malformed SOAP response: {0}")]
    Soap(String),

    /// The service answered with a SOAP fault (e.g. INVALID_INPUT,
    /// MS_UNAVAILABLE)
    #[error("VIES service fault: {0}")]
    Fault(String),
}
