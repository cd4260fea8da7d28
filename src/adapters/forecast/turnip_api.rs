//! Turnip API forecaster - client for the public ac-turnip prediction
//! service.
//!
//! The upstream takes the week's twelve observations as a single
//! dash-delimited query parameter and answers with JSON carrying an
//! `avgPattern` array of predicted prices.
//!
//! # Configuration
//!
//! ```ignore
//! let config = TurnipApiConfig::new()
//!     .with_base_url("https://api.ac-turnip.com")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_max_retries(1);
//!
//! let forecaster = TurnipApiForecaster::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::ledger::PredictionPattern;
use crate::ports::{ForecastError, ForecastQuery, Forecaster};

/// Configuration for the turnip API forecaster.
#[derive(Debug, Clone)]
pub struct TurnipApiConfig {
    /// Base URL of the forecast service.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl TurnipApiConfig {
    /// Creates a configuration with the public endpoint defaults.
    pub fn new() -> Self {
        Self {
            base_url: "https://api.ac-turnip.com".to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 1,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl Default for TurnipApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Forecaster backed by the ac-turnip HTTP API.
pub struct TurnipApiForecaster {
    config: TurnipApiConfig,
    client: Client,
}

impl TurnipApiForecaster {
    /// Creates a forecaster with the given configuration.
    pub fn new(config: TurnipApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the data endpoint URL for a query.
    fn data_url(&self, query: &ForecastQuery) -> String {
        format!("{}/data/?f={}", self.config.base_url, query.encode())
    }

    /// Issues one GET against the upstream.
    async fn send_request(&self, query: &ForecastQuery) -> Result<Response, ForecastError> {
        self.client
            .get(self.data_url(query))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ForecastError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ForecastError::network(format!("connection failed: {}", e))
                } else {
                    ForecastError::network(e.to_string())
                }
            })
    }

    /// Maps the response status and body into a pattern.
    async fn parse_response(&self, response: Response) -> Result<PredictionPattern, ForecastError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return if status.is_server_error() {
                Err(ForecastError::unavailable(format!(
                    "server error {}: {}",
                    status, body
                )))
            } else {
                Err(ForecastError::network(format!(
                    "unexpected status {}: {}",
                    status, body
                )))
            };
        }

        let payload: TurnipResponse = response
            .json()
            .await
            .map_err(|e| ForecastError::parse(format!("failed to parse response: {}", e)))?;

        Ok(PredictionPattern::new(payload.avg_pattern))
    }
}

#[async_trait]
impl Forecaster for TurnipApiForecaster {
    async fn forecast(&self, query: ForecastQuery) -> Result<PredictionPattern, ForecastError> {
        let mut last_error = ForecastError::network("no attempts made");
        let mut attempt = 0;

        while attempt <= self.config.max_retries {
            match self.send_request(&query).await {
                Ok(response) => match self.parse_response(response).await {
                    Ok(pattern) => return Ok(pattern),
                    Err(err) => {
                        if !err.is_retryable() || attempt >= self.config.max_retries {
                            return Err(err);
                        }
                        last_error = err;
                    }
                },
                Err(err) => {
                    if !err.is_retryable() || attempt >= self.config.max_retries {
                        return Err(err);
                    }
                    last_error = err;
                }
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            let delay = Duration::from_secs(1 << attempt);
            tracing::warn!(attempt, error = %last_error, "retrying forecast request");
            sleep(delay).await;
            attempt += 1;
        }

        Err(last_error)
    }
}

/// Upstream response payload.
#[derive(Debug, Deserialize)]
struct TurnipResponse {
    #[serde(rename = "avgPattern")]
    avg_pattern: Vec<f64>,
}
