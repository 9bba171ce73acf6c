//! In-memory snapshot cache.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{QueryKey, Snapshot, TodoCache};
use crate::error::CacheError;

/// Snapshot cache backed by a `RwLock`-guarded map
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<QueryKey, Snapshot>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-populated with the todo list query result
    pub fn with_todos(todos: Snapshot) -> Self {
        let cache = Self::new();
        cache.write(QueryKey::AllTodos, todos);
        cache
    }
}

impl TodoCache for MemoryCache {
    fn read(&self, key: QueryKey) -> Result<Snapshot, CacheError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&key).cloned().ok_or(CacheError::NotLoaded(key))
    }

    fn write(&self, key: QueryKey, snapshot: Snapshot) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key, snapshot);
    }

    fn modify<F>(&self, key: QueryKey, transform: F) -> Result<Snapshot, CacheError>
    where
        F: FnOnce(Snapshot) -> Snapshot,
    {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let current = entries.remove(&key).ok_or(CacheError::NotLoaded(key))?;
        let next = transform(current);
        entries.insert(key, next.clone());
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Todo;

    #[test]
    fn test_read_before_write_is_not_loaded() {
        let cache = MemoryCache::new();
        assert_eq!(
            cache.read(QueryKey::AllTodos),
            Err(CacheError::NotLoaded(QueryKey::AllTodos))
        );
    }

    #[test]
    fn test_modify_writes_back() {
        let cache = MemoryCache::with_todos(vec![Todo::new("1", "a", false)]);

        let next = cache
            .modify(QueryKey::AllTodos, |mut todos| {
                todos.push(Todo::new("2", "b", true));
                todos
            })
            .unwrap();

        assert_eq!(next.len(), 2);
        assert_eq!(cache.read(QueryKey::AllTodos).unwrap(), next);
    }

    #[test]
    fn test_modify_unloaded_leaves_cache_empty() {
        let cache = MemoryCache::new();
        let result = cache.modify(QueryKey::AllTodos, |todos| todos);
        assert!(result.is_err());
        assert!(cache.read(QueryKey::AllTodos).is_err());
    }
}
