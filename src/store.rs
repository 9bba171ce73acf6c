//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! local cache the synchronization core reads from and writes to.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{CacheError, QueryKey, Snapshot, Todo, TodoCache};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Result of the todo list query, `None` until the first load completes
    pub todos: Option<Vec<Todo>>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// `TodoCache` view of the app store
#[derive(Clone, Copy)]
pub struct StoreCache {
    store: AppStore,
}

impl StoreCache {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl TodoCache for StoreCache {
    fn read(&self, key: QueryKey) -> Result<Snapshot, CacheError> {
        match key {
            QueryKey::AllTodos => self
                .store
                .todos()
                .get_untracked()
                .ok_or(CacheError::NotLoaded(key)),
        }
    }

    fn write(&self, key: QueryKey, snapshot: Snapshot) {
        match key {
            QueryKey::AllTodos => self.store.todos().set(Some(snapshot)),
        }
    }

    // The write guard is held across the transform; subscribers are
    // notified once, when it drops. An unloaded list is never locked.
    fn modify<F>(&self, key: QueryKey, transform: F) -> Result<Snapshot, CacheError>
    where
        F: FnOnce(Snapshot) -> Snapshot,
    {
        match key {
            QueryKey::AllTodos => {
                let field = self.store.todos();
                if !field.with_untracked(Option::is_some) {
                    return Err(CacheError::NotLoaded(key));
                }
                let mut todos = field.write();
                let Some(current) = &mut *todos else {
                    return Err(CacheError::NotLoaded(key));
                };
                let next = transform(std::mem::take(current));
                *current = next.clone();
                Ok(next)
            }
        }
    }
}
