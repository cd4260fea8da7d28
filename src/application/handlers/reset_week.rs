//! ResetWeek - command handler for discarding a user's week.

use std::sync::Arc;

use crate::application::locks::UserLocks;
use crate::domain::ledger::{LedgerError, PriceRecord, SubmitDay, UserId};
use crate::ports::LedgerStore;

/// Handler for week resets.
///
/// Delete-then-recreate: any existing record is removed and a fresh zeroed
/// one stamped with the current weekday takes its place. The prior week is
/// discarded irrecoverably; there is no archive.
pub struct ResetWeekHandler {
    store: Arc<dyn LedgerStore>,
    locks: Arc<UserLocks>,
}

impl ResetWeekHandler {
    pub fn new(store: Arc<dyn LedgerStore>, locks: Arc<UserLocks>) -> Self {
        Self { store, locks }
    }

    /// Resets the user's week and returns the fresh record. Idempotent.
    pub async fn handle(&self, user: UserId) -> Result<PriceRecord, LedgerError> {
        let _guard = self.locks.acquire(&user).await;

        self.store.delete_by_user(&user).await?;

        let record = PriceRecord::new(user.clone(), SubmitDay::today());
        self.store.insert(&record).await?;
        tracing::info!(user = %user, "reset price record");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryLedgerStore;
    use crate::application::handlers::{SubmitPriceCommand, SubmitPriceHandler};
    use crate::domain::ledger::Slot;

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[tokio::test]
    async fn reset_discards_recorded_prices() {
        let store = Arc::new(InMemoryLedgerStore::new());
        let locks = Arc::new(UserLocks::new());
        let submit = SubmitPriceHandler::new(store.clone(), locks.clone());
        let reset = ResetWeekHandler::new(store.clone(), locks);

        submit
            .handle(SubmitPriceCommand {
                user: alice(),
                price: 480,
                slot: Slot::Am,
                day: Some(2),
            })
            .await
            .unwrap();

        reset.handle(alice()).await.unwrap();

        let stored = store.find_by_user(&alice()).await.unwrap().unwrap();
        assert_eq!(stored.cells(), [0; 12]);
    }

    #[tokio::test]
    async fn reset_is_idempotent() {
        let store = Arc::new(InMemoryLedgerStore::new());
        let reset = ResetWeekHandler::new(store.clone(), Arc::new(UserLocks::new()));

        let first = reset.handle(alice()).await.unwrap();
        let second = reset.handle(alice()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.record_count().await, 1);
    }

    #[tokio::test]
    async fn reset_without_prior_record_creates_zeroed_record() {
        let store = Arc::new(InMemoryLedgerStore::new());
        let reset = ResetWeekHandler::new(store.clone(), Arc::new(UserLocks::new()));

        let record = reset.handle(alice()).await.unwrap();
        assert!(record.is_unobserved());
        assert!(record.expected_reset_day() <= 6);
    }
}
