//! Predict - orchestrates a forecast for one user's week.
//!
//! Snapshot the record, ask the upstream for the predicted pattern, render
//! an isolated chart. The record is never mutated here, so a failed or
//! timed-out upstream call needs no rollback, only clean propagation.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::ledger::{LedgerError, PredictionPattern, UserId};
use crate::ports::{
    ChartError, ChartImage, ChartRenderer, ForecastError, ForecastQuery, Forecaster, LedgerStore,
};

/// A completed forecast: the predicted pattern and its rendered chart.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub pattern: PredictionPattern,
    pub chart: ChartImage,
}

/// Prediction failures, surfaced to the caller as user-facing text.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("upstream unavailable: {0}")]
    Upstream(#[from] ForecastError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// Handler for forecast requests.
pub struct PredictHandler {
    store: Arc<dyn LedgerStore>,
    forecaster: Arc<dyn Forecaster>,
    renderer: Arc<dyn ChartRenderer>,
}

impl PredictHandler {
    pub fn new(
        store: Arc<dyn LedgerStore>,
        forecaster: Arc<dyn Forecaster>,
        renderer: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            store,
            forecaster,
            renderer,
        }
    }

    /// Produces a prediction for the user's current week.
    pub async fn handle(&self, user: &UserId) -> Result<Prediction, PredictError> {
        // 1. Snapshot the record; absent users cannot be forecast.
        let record = self
            .store
            .find_by_user(user)
            .await
            .map_err(LedgerError::from)?
            .ok_or_else(|| LedgerError::no_record(user.as_str()))?;

        // 2. Ask the upstream with the twelve-cell snapshot.
        let query = ForecastQuery::from_record(&record);
        let pattern = self.forecaster.forecast(query).await?;

        // 3. Render this call's own chart artifact.
        let chart = self.renderer.render(&pattern)?;
        tracing::info!(user = %user, values = pattern.values().len(), "forecast complete");

        Ok(Prediction { pattern, chart })
    }
}
