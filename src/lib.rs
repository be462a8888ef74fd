// Re-export modules
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod identifier;
pub mod records;
pub mod scrape;
pub mod vat;

// Re-export commonly used types for convenience
pub use records::{CompanyRecord, ResultEnvelope};
pub use vat::VatValidation;

use config::AppConfig;

/// Builder for a single company lookup against the registry site.
///
/// ```no_run
/// # async fn run() {
/// use staatsblad_monitor::Lookup;
///
/// let envelope = Lookup::new("0403.200.393").run().await;
/// if envelope.success {
///     println!("{:?}", envelope.company_name());
/// }
/// # }
/// ```
pub struct Lookup {
    company_number: String,
    config: AppConfig,
}

impl Lookup {
    /// Create a new lookup for a raw company number
    pub fn new(company_number: &str) -> Self {
        Self {
            company_number: company_number.to_string(),
            config: AppConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = AppConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Run the lookup and return the result envelope
    pub async fn run(self) -> ResultEnvelope {
        scrape::lookup_company(&self.company_number, &self.config.scraper).await
    }
}
