//! Local Cache - Core Trait
//!
//! A key-addressed store mapping a query signature to the last-known
//! result set. Implementations can be reactive UI stores, in-memory maps, etc.

mod memory;

use std::fmt;

use crate::error::CacheError;
use crate::model::Todo;

pub use memory::MemoryCache;

/// Ordered todo collection, most recent first
pub type Snapshot = Vec<Todo>;

/// Query signature a snapshot is cached under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// `query { todos { id text complete } }`
    AllTodos,
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::AllTodos => f.write_str("todos"),
        }
    }
}

/// Snapshot cache with explicit read and write
pub trait TodoCache {
    /// Read the full snapshot stored under `key`
    fn read(&self, key: QueryKey) -> Result<Snapshot, CacheError>;

    /// Replace the snapshot stored under `key`
    fn write(&self, key: QueryKey, snapshot: Snapshot);

    /// Read, transform and write back the snapshot under `key`.
    ///
    /// Implementations that can hold a write lock across the transform
    /// should override this so readers never see the intermediate state.
    fn modify<F>(&self, key: QueryKey, transform: F) -> Result<Snapshot, CacheError>
    where
        F: FnOnce(Snapshot) -> Snapshot,
    {
        let next = transform(self.read(key)?);
        self.write(key, next.clone());
        Ok(next)
    }
}
