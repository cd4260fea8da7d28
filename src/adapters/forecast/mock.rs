//! Mock forecaster for testing.
//!
//! Returns a canned pattern (or an injected error) and records every query
//! it receives, so tests can verify the wire encoding without touching the
//! real upstream.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::ledger::PredictionPattern;
use crate::ports::{ForecastError, ForecastQuery, Forecaster};

/// Configurable mock implementation of the [`Forecaster`] port.
#[derive(Debug, Clone, Default)]
pub struct MockForecaster {
    pattern: PredictionPattern,
    fail_unavailable: bool,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockForecaster {
    /// Mock that answers every query with the given pattern.
    pub fn returning(values: Vec<f64>) -> Self {
        Self {
            pattern: PredictionPattern::new(values),
            ..Self::default()
        }
    }

    /// Mock that fails every query with an unavailable error.
    pub fn unavailable() -> Self {
        Self {
            fail_unavailable: true,
            ..Self::default()
        }
    }

    /// Encoded queries received so far, in call order.
    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Forecaster for MockForecaster {
    async fn forecast(&self, query: ForecastQuery) -> Result<PredictionPattern, ForecastError> {
        self.queries.lock().unwrap().push(query.encode());

        if self.fail_unavailable {
            return Err(ForecastError::unavailable("mock upstream down"));
        }
        Ok(self.pattern.clone())
    }
}
