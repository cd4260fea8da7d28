//! In-memory ledger store.
//!
//! Keeps records in a `HashMap` behind an async `RwLock`. Useful for testing
//! and development; nothing survives the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ledger::{MarketDay, PricePair, PriceRecord, Slot, StoreError, UserId};
use crate::ports::LedgerStore;

/// In-memory document store, one record per user.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedgerStore {
    records: Arc<RwLock<HashMap<UserId, PriceRecord>>>,
}

impl InMemoryLedgerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records (useful for tests).
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Drop all stored records.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn find_by_user(&self, user: &UserId) -> Result<Option<PriceRecord>, StoreError> {
        Ok(self.records.read().await.get(user).cloned())
    }

    async fn insert(&self, record: &PriceRecord) -> Result<(), StoreError> {
        self.records
            .write()
            .await
            .insert(record.user().clone(), record.clone());
        Ok(())
    }

    async fn update_slot(
        &self,
        user: &UserId,
        day: MarketDay,
        pair: PricePair,
    ) -> Result<(), StoreError> {
        if let Some(record) = self.records.write().await.get_mut(user) {
            record.set_price(day, Slot::Am, pair.am);
            record.set_price(day, Slot::Pm, pair.pm);
        }
        Ok(())
    }

    async fn delete_by_user(&self, user: &UserId) -> Result<(), StoreError> {
        self.records.write().await.remove(user);
        Ok(())
    }
}
