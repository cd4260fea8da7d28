//! SubmitPrice - command handler for recording one price observation.

use std::sync::Arc;

use crate::application::locks::UserLocks;
use crate::domain::ledger::{LedgerError, PriceRecord, Slot, SubmitDay, UserId};
use crate::ports::LedgerStore;

/// Command to record one observed price.
#[derive(Debug, Clone)]
pub struct SubmitPriceCommand {
    pub user: UserId,
    pub price: u32,
    pub slot: Slot,
    /// Day index 0..=6; defaults to the current weekday when absent.
    pub day: Option<i64>,
}

/// Handler for price submissions.
pub struct SubmitPriceHandler {
    store: Arc<dyn LedgerStore>,
    locks: Arc<UserLocks>,
}

impl SubmitPriceHandler {
    pub fn new(store: Arc<dyn LedgerStore>, locks: Arc<UserLocks>) -> Self {
        Self { store, locks }
    }

    /// Records the observation and returns the record as persisted.
    ///
    /// First contact creates a zeroed record stamped with the current
    /// weekday; later submissions overwrite only the targeted cell
    /// (last-write-wins). Sunday submissions pass the day gate but have no
    /// slot, so they are accepted and dropped.
    pub async fn handle(&self, cmd: SubmitPriceCommand) -> Result<PriceRecord, LedgerError> {
        // 1. Validate the day against the 0..=6 gate.
        let day = match cmd.day {
            Some(day) => SubmitDay::from_index(day)?,
            None => SubmitDay::today(),
        };

        // 2. Hold the user's lock across the whole read-check-write sequence.
        let _guard = self.locks.acquire(&cmd.user).await;

        match self.store.find_by_user(&cmd.user).await? {
            None => {
                let mut record = PriceRecord::new(cmd.user.clone(), SubmitDay::today());
                match day {
                    SubmitDay::Market(day) => record.set_price(day, cmd.slot, cmd.price),
                    SubmitDay::Sunday => {
                        tracing::warn!(user = %cmd.user, "sunday submission has no slot, nothing recorded");
                    }
                }
                self.store.insert(&record).await?;
                tracing::info!(user = %cmd.user, price = cmd.price, "created price record");
                Ok(record)
            }
            Some(mut record) => {
                match day {
                    SubmitDay::Market(day) => {
                        record.set_price(day, cmd.slot, cmd.price);
                        self.store
                            .update_slot(&cmd.user, day, record.pair(day))
                            .await?;
                        tracing::info!(user = %cmd.user, day = %day, price = cmd.price, "updated price record");
                    }
                    SubmitDay::Sunday => {
                        tracing::warn!(user = %cmd.user, "sunday submission has no slot, nothing recorded");
                    }
                }
                Ok(record)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryLedgerStore;
    use crate::domain::ledger::MarketDay;

    fn handler_with_store() -> (SubmitPriceHandler, Arc<InMemoryLedgerStore>) {
        let store = Arc::new(InMemoryLedgerStore::new());
        let handler = SubmitPriceHandler::new(store.clone(), Arc::new(UserLocks::new()));
        (handler, store)
    }

    fn submit(user: &str, price: u32, slot: Slot, day: i64) -> SubmitPriceCommand {
        SubmitPriceCommand {
            user: UserId::new(user).unwrap(),
            price,
            slot,
            day: Some(day),
        }
    }

    #[tokio::test]
    async fn first_submission_creates_record_with_one_cell() {
        let (handler, store) = handler_with_store();

        let record = handler.handle(submit("alice", 90, Slot::Am, 0)).await.unwrap();

        assert_eq!(record.price(MarketDay::Monday, Slot::Am), 90);
        let non_zero = record.cells().iter().filter(|&&p| p != 0).count();
        assert_eq!(non_zero, 1);
        assert_eq!(store.record_count().await, 1);
    }

    #[tokio::test]
    async fn rejects_out_of_range_day() {
        let (handler, store) = handler_with_store();

        for bad_day in [7, -1] {
            let err = handler
                .handle(submit("alice", 90, Slot::Am, bad_day))
                .await
                .unwrap_err();
            assert!(matches!(err, LedgerError::InvalidDay { .. }));
        }
        assert_eq!(store.record_count().await, 0);
    }

    #[tokio::test]
    async fn accepts_day_boundaries() {
        let (handler, _store) = handler_with_store();

        assert!(handler.handle(submit("alice", 90, Slot::Am, 0)).await.is_ok());
        assert!(handler.handle(submit("alice", 90, Slot::Am, 6)).await.is_ok());
    }

    #[tokio::test]
    async fn resubmission_is_last_write_wins() {
        let (handler, store) = handler_with_store();

        handler.handle(submit("alice", 120, Slot::Pm, 4)).await.unwrap();
        handler.handle(submit("alice", 45, Slot::Pm, 4)).await.unwrap();
        let record = handler.handle(submit("alice", 610, Slot::Pm, 4)).await.unwrap();

        assert_eq!(record.price(MarketDay::Friday, Slot::Pm), 610);

        let stored = store
            .find_by_user(&UserId::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.price(MarketDay::Friday, Slot::Pm), 610);
    }

    #[tokio::test]
    async fn update_preserves_other_cells() {
        let (handler, store) = handler_with_store();

        handler.handle(submit("alice", 90, Slot::Am, 0)).await.unwrap();
        handler.handle(submit("alice", 143, Slot::Pm, 1)).await.unwrap();

        let stored = store
            .find_by_user(&UserId::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.price(MarketDay::Monday, Slot::Am), 90);
        assert_eq!(stored.price(MarketDay::Tuesday, Slot::Pm), 143);
    }

    #[tokio::test]
    async fn sunday_submission_is_accepted_but_records_nothing() {
        let (handler, store) = handler_with_store();

        let record = handler.handle(submit("alice", 90, Slot::Am, 6)).await.unwrap();
        assert!(record.is_unobserved());

        // the record still exists, fully zeroed
        let stored = store
            .find_by_user(&UserId::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_unobserved());
    }

    #[tokio::test]
    async fn all_twelve_cells_round_trip() {
        let (handler, store) = handler_with_store();

        let mut expected = Vec::new();
        for day in 0..6i64 {
            for (slot, offset) in [(Slot::Am, 1u32), (Slot::Pm, 2u32)] {
                let price = (day as u32) * 10 + offset;
                handler.handle(submit("alice", price, slot, day)).await.unwrap();
                expected.push(price);
            }
        }

        let stored = store
            .find_by_user(&UserId::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.cells().to_vec(), expected);
    }
}
