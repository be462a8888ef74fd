use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the company-page scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Base URL of the registry site
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Directory where exported result files are written
    #[serde(default = "default_results_dir")]
    pub results_dir: String,
}

/// Configuration for the VIES VAT validation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VatConfig {
    /// checkVat SOAP endpoint
    #[serde(default = "default_vies_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Report formatting options
    #[serde(default)]
    pub report: ReportConfig,
}

/// Options for the narrative VAT report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Ask a local model to write the analysis section; when false (the
    /// default) the deterministic template is used throughout
    #[serde(default)]
    pub use_model: bool,

    /// Model name passed to the Ollama server
    #[serde(default = "default_model")]
    pub model: String,

    /// Ollama server base URL
    #[serde(default = "default_model_endpoint")]
    pub model_endpoint: String,
}

/// Top-level configuration combining both tools
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scraper settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// VAT validation settings
    #[serde(default)]
    pub vat: VatConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            results_dir: default_results_dir(),
        }
    }
}

impl Default for VatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_vies_endpoint(),
            timeout_secs: default_timeout_secs(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            use_model: false,
            model: default_model(),
            model_endpoint: default_model_endpoint(),
        }
    }
}

/// Default registry base URL
fn default_base_url() -> String {
    "https://staatsbladmonitor.be".to_string()
}

/// Default request timeout in seconds
fn default_timeout_secs() -> u64 {
    30
}

/// Default User-Agent string
fn default_user_agent() -> String {
    concat!("staatsblad-monitor/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default directory for exported files
fn default_results_dir() -> String {
    "results".to_string()
}

/// Default VIES checkVat endpoint
fn default_vies_endpoint() -> String {
    "https://ec.europa.eu/taxation_customs/vies/services/checkVatService".to_string()
}

/// Default model name for the report analysis section
fn default_model() -> String {
    "llama3.1".to_string()
}

/// Default Ollama server URL
fn default_model_endpoint() -> String {
    "http://localhost:11434".to_string()
}
