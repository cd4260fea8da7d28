//! Forecaster port - interface to the external price prediction service.
//!
//! The upstream accepts the week's twelve observations and returns the
//! predicted average pattern. This port carries the snapshot taken from a
//! [`PriceRecord`] and classifies upstream failures by retryability, so the
//! adapter can bound its retry loop.

use async_trait::async_trait;

use crate::domain::ledger::{MarketDay, PredictionPattern, PriceRecord};

/// Port for the external forecasting service.
#[async_trait]
pub trait Forecaster: Send + Sync {
    /// Requests a predicted pattern for one week of observations.
    async fn forecast(&self, query: ForecastQuery) -> Result<PredictionPattern, ForecastError>;
}

/// Snapshot of a record's twelve cells, in day-major AM/PM order.
///
/// Derived from the record at prediction time; the record itself is never
/// handed to the upstream adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastQuery {
    cells: [u32; 12],
}

impl ForecastQuery {
    /// Takes the query snapshot from a record.
    pub fn from_record(record: &PriceRecord) -> Self {
        Self {
            cells: record.cells(),
        }
    }

    /// The twelve observed values, Monday AM first.
    pub fn cells(&self) -> &[u32; 12] {
        &self.cells
    }

    /// Encodes the query in the upstream's wire form: a single
    /// dash-delimited string of twelve integers with a leading dash.
    ///
    /// An all-zero week encodes as `-0-0-0-0-0-0-0-0-0-0-0-0`.
    pub fn encode(&self) -> String {
        let mut encoded = String::new();
        for day in MarketDay::ALL {
            encoded.push_str(&format!(
                "-{}-{}",
                self.cells[day.index() * 2],
                self.cells[day.index() * 2 + 1]
            ));
        }
        encoded
    }
}

/// Forecast upstream errors.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    /// The upstream is unreachable or returned a server error.
    #[error("forecast service unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// The request exceeded the configured timeout.
    #[error("forecast request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Network error during the request.
    #[error("forecast network error: {0}")]
    Network(String),

    /// The upstream payload could not be parsed.
    #[error("forecast response unparseable: {0}")]
    Parse(String),
}

impl ForecastError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        ForecastError::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        ForecastError::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        ForecastError::Parse(message.into())
    }

    /// Returns true if retrying the request could succeed.
    ///
    /// A malformed payload is not retryable; the upstream will send the same
    /// bytes again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ForecastError::Unavailable { .. }
                | ForecastError::Timeout { .. }
                | ForecastError::Network(_)
        )
    }
}
