//! WeekReport - read-through record access and report formatting.

use std::sync::Arc;

use crate::domain::ledger::{LedgerError, PredictionPattern, PriceRecord, UserId};
use crate::domain::report::render_week;
use crate::ports::LedgerStore;

/// Handler for record lookups and week reports.
pub struct WeekReportHandler {
    store: Arc<dyn LedgerStore>,
}

impl WeekReportHandler {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Pure read-through of a user's record.
    pub async fn record(&self, user: &UserId) -> Result<Option<PriceRecord>, LedgerError> {
        Ok(self.store.find_by_user(user).await?)
    }

    /// Formats the user's week, failing with `NoRecord` when there is no
    /// data to report.
    pub async fn handle(
        &self,
        user: &UserId,
        pattern: Option<&PredictionPattern>,
    ) -> Result<String, LedgerError> {
        let record = self
            .record(user)
            .await?
            .ok_or_else(|| LedgerError::no_record(user.as_str()))?;

        Ok(render_week(&record, pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryLedgerStore;
    use crate::domain::ledger::{MarketDay, Slot, SubmitDay};

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[tokio::test]
    async fn reports_no_record_for_unknown_user() {
        let handler = WeekReportHandler::new(Arc::new(InMemoryLedgerStore::new()));

        assert_eq!(handler.record(&alice()).await.unwrap(), None);

        let err = handler.handle(&alice(), None).await.unwrap_err();
        assert!(matches!(err, LedgerError::NoRecord { .. }));
    }

    #[tokio::test]
    async fn formats_recorded_week() {
        let store = Arc::new(InMemoryLedgerStore::new());
        let mut record = PriceRecord::new(alice(), SubmitDay::Market(MarketDay::Monday));
        record.set_price(MarketDay::Monday, Slot::Am, 90);
        store.insert(&record).await.unwrap();

        let handler = WeekReportHandler::new(store);
        let report = handler.handle(&alice(), None).await.unwrap();

        assert!(report.contains("Monday    : 90am 0pm"));
        assert!(report.contains("Avg       : no prediction yet"));
    }

    #[tokio::test]
    async fn includes_pattern_when_present() {
        let store = Arc::new(InMemoryLedgerStore::new());
        let record = PriceRecord::new(alice(), SubmitDay::Market(MarketDay::Monday));
        store.insert(&record).await.unwrap();

        let handler = WeekReportHandler::new(store);
        let pattern = PredictionPattern::new(vec![86.0, 90.0]);
        let report = handler.handle(&alice(), Some(&pattern)).await.unwrap();

        assert!(report.contains("Avg       : [86, 90]"));
    }
}
