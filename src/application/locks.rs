//! Per-user advisory locks.
//!
//! A submit or reset is a read-check-write sequence against the store; two
//! of them interleaving for the same user could race the insert-vs-update
//! existence check or lose an update. The registry hands out one async mutex
//! per user so those sequences serialize, while different users proceed in
//! parallel.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::ledger::UserId;

/// Registry of per-user advisory locks.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl UserLocks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a user, creating it on first contact.
    ///
    /// The guard must be held for the whole read-check-write sequence and is
    /// released on every exit path by dropping.
    pub async fn acquire(&self, user: &UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(user.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn same_user_acquisitions_serialize() {
        let locks = UserLocks::new();
        let alice = UserId::new("alice").unwrap();

        let guard = locks.acquire(&alice).await;

        let blocked = timeout(Duration::from_millis(50), locks.acquire(&alice)).await;
        assert!(blocked.is_err());

        drop(guard);
        let reacquired = timeout(Duration::from_millis(50), locks.acquire(&alice)).await;
        assert!(reacquired.is_ok());
    }

    #[tokio::test]
    async fn different_users_do_not_block_each_other() {
        let locks = UserLocks::new();
        let alice = UserId::new("alice").unwrap();
        let bob = UserId::new("bob").unwrap();

        let _alice_guard = locks.acquire(&alice).await;
        let bob_guard = timeout(Duration::from_millis(50), locks.acquire(&bob)).await;
        assert!(bob_guard.is_ok());
    }
}
