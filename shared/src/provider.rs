use serde::Serialize;
use tracing::{error, info};

use crate::error::IngestError;

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Thin client for the Alpha Vantage `query` endpoint.
///
/// No retry and no timeout beyond the transport default; a slow or failing
/// provider surfaces directly to the caller.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct QueryParams<'a> {
    function: &'a str,
    symbol: &'a str,
    apikey: &'a str,
}

impl AlphaVantageClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the raw provider body for one symbol/function pair.
    ///
    /// The api key is never logged.
    pub async fn fetch(
        &self,
        symbol: &str,
        api_key: &str,
        function: &str,
    ) -> Result<Vec<u8>, IngestError> {
        info!("Requesting {} for {} from provider", function, symbol);

        let response = self
            .client
            .get(format!("{}/query", self.base_url))
            .query(&QueryParams {
                function,
                symbol,
                apikey: api_key,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Provider returned non-success status {}", status);
            return Err(IngestError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for AlphaVantageClient {
    fn default() -> Self {
        Self::new()
    }
}
