//! JSON-file ledger store.
//!
//! Persists one JSON document per user under a base directory, in exactly
//! the legacy document shape (`user`, `expected_day`, `"0"`..`"5"`), so data
//! written by earlier deployments reads back unchanged.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::ledger::{MarketDay, PricePair, PriceRecord, Slot, StoreError, UserId};
use crate::ports::LedgerStore;

/// File-backed document store, one `<user>.json` per record.
#[derive(Debug, Clone)]
pub struct JsonFileLedgerStore {
    base_path: PathBuf,
}

impl JsonFileLedgerStore {
    /// Create a store rooted at the given directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Document path for a user.
    fn record_path(&self, user: &UserId) -> PathBuf {
        self.base_path.join(format!("{}.json", user))
    }

    /// Ensure the base directory exists.
    async fn ensure_base_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StoreError::io(e.to_string()))
    }

    /// Write one record as its wire document.
    async fn write_record(&self, record: &PriceRecord) -> Result<(), StoreError> {
        self.ensure_base_dir().await?;

        let json = serde_json::to_vec_pretty(record)
            .map_err(|e| StoreError::serialization(e.to_string()))?;

        fs::write(self.record_path(record.user()), json)
            .await
            .map_err(|e| StoreError::io(e.to_string()))
    }
}

#[async_trait]
impl LedgerStore for JsonFileLedgerStore {
    async fn find_by_user(&self, user: &UserId) -> Result<Option<PriceRecord>, StoreError> {
        let path = self.record_path(user);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::io(e.to_string()))?;

        let record = serde_json::from_str(&json)
            .map_err(|e| StoreError::serialization(e.to_string()))?;

        Ok(Some(record))
    }

    async fn insert(&self, record: &PriceRecord) -> Result<(), StoreError> {
        self.write_record(record).await
    }

    async fn update_slot(
        &self,
        user: &UserId,
        day: MarketDay,
        pair: PricePair,
    ) -> Result<(), StoreError> {
        // Single-document store: the update reads, patches one field, and
        // rewrites the document. Per-user sequencing is the caller's job.
        let Some(mut record) = self.find_by_user(user).await? else {
            return Ok(());
        };

        record.set_price(day, Slot::Am, pair.am);
        record.set_price(day, Slot::Pm, pair.pm);
        self.write_record(&record).await
    }

    async fn delete_by_user(&self, user: &UserId) -> Result<(), StoreError> {
        let path = self.record_path(user);
        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path)
            .await
            .map_err(|e| StoreError::io(e.to_string()))
    }
}
