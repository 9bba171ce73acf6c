//! Per-todo operation locks.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::model::TodoId;

#[derive(Debug, Default)]
struct Entry {
    lock: Arc<AsyncMutex<()>>,
    /// Operations holding or waiting for `lock`
    users: usize,
}

/// Async locks keyed by todo id, created on demand
#[derive(Debug, Default)]
pub(crate) struct KeyedLocks {
    entries: Mutex<HashMap<TodoId, Entry>>,
}

/// Registration of one operation on an entry; dropping it, even while
/// still waiting, releases the entry once nobody else uses it.
struct Lease<'a> {
    owner: &'a KeyedLocks,
    id: TodoId,
    lock: Arc<AsyncMutex<()>>,
}

/// Held while an operation on one todo is in flight
pub(crate) struct KeyedGuard<'a> {
    // Field order matters: the mutex is released before the lease.
    _guard: OwnedMutexGuard<()>,
    _lease: Lease<'a>,
}

impl KeyedLocks {
    /// Wait until no other operation holds `id`
    pub(crate) async fn acquire(&self, id: &TodoId) -> KeyedGuard<'_> {
        let lease = self.lease(id);
        let guard = Arc::clone(&lease.lock).lock_owned().await;
        KeyedGuard {
            _guard: guard,
            _lease: lease,
        }
    }

    fn lease(&self, id: &TodoId) -> Lease<'_> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(id.clone()).or_default();
        entry.users += 1;
        Lease {
            owner: self,
            id: id.clone(),
            lock: Arc::clone(&entry.lock),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Drop for Lease<'_> {
    fn drop(&mut self) {
        let mut entries = self.owner.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(entry) = entries.get_mut(&self.id) else {
            return;
        };
        entry.users = entry.users.saturating_sub(1);
        if entry.users == 0 {
            entries.remove(&self.id);
        }
    }
}
