use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use std::time::Duration;

/// Blocking-style page fetcher over a configured reqwest client.
///
/// One GET per lookup; no retries, no session state. The timeout and
/// User-Agent come from configuration.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from scraper configuration
    pub fn new(config: &ScraperConfig) -> Result<Self, reqwest::Error> {
        Self::with_options(config.timeout_secs, &config.user_agent)
    }

    /// Build a fetcher with explicit timeout and User-Agent
    pub fn with_options(timeout_secs: u64, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a URL and return the response body as text.
    ///
    /// Non-success statuses are mapped to [`ScrapeError::Status`] rather
    /// than returned as bodies.
    pub async fn get(&self, url: &str) -> Result<String, ScrapeError> {
        ::log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
