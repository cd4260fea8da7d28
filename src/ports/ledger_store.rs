//! LedgerStore port for price record persistence.

use async_trait::async_trait;

use crate::domain::ledger::{MarketDay, PricePair, PriceRecord, StoreError, UserId};

/// Document-store boundary for weekly price records.
///
/// One document per user, keyed by the user id. Each operation is a single
/// atomic document call; records are independent, so no multi-document
/// transactions exist at this boundary. Serializing concurrent
/// read-check-write sequences for one user is the caller's job (see
/// [`UserLocks`](crate::application::UserLocks)).
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Find the record for a user, `None` if the user has never submitted.
    async fn find_by_user(&self, user: &UserId) -> Result<Option<PriceRecord>, StoreError>;

    /// Insert a new record. At most one record per user may exist.
    async fn insert(&self, record: &PriceRecord) -> Result<(), StoreError>;

    /// Overwrite a single day's price pair, leaving every other field alone.
    ///
    /// Updating a user with no document is a no-op, matching document-store
    /// update semantics (zero matched documents, no error).
    async fn update_slot(
        &self,
        user: &UserId,
        day: MarketDay,
        pair: PricePair,
    ) -> Result<(), StoreError>;

    /// Delete the record for a user, if any.
    async fn delete_by_user(&self, user: &UserId) -> Result<(), StoreError>;
}
