//! Cache Synchronization
//!
//! Each entry point issues the remote call, waits for it, then applies a
//! pure transform to the cached todo list. A failed remote call leaves the
//! cache untouched.
//!
//! Toggle and remove are serialized per todo id: the pre-toggle state is
//! captured after earlier operations on the same id have written their
//! result, so concurrent toggles cannot overwrite each other.

mod lock;
pub mod transform;


use tracing::{debug, warn};

use crate::cache::{QueryKey, Snapshot, TodoCache};
use crate::error::SyncResult;
use crate::model::Todo;
use crate::remote::TodoRemote;
use lock::KeyedLocks;

/// Synchronizes a local todo cache with the remote collection service
pub struct TodoSync<R, C> {
    remote: R,
    cache: C,
    locks: KeyedLocks,
}

impl<R, C> TodoSync<R, C>
where
    R: TodoRemote,
    C: TodoCache,
{
    pub fn new(remote: R, cache: C) -> Self {
        Self {
            remote,
            cache,
            locks: KeyedLocks::default(),
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Current cached todo list
    pub fn snapshot(&self) -> SyncResult<Snapshot> {
        Ok(self.cache.read(QueryKey::AllTodos)?)
    }

    /// Fetch the full list and cache it
    pub async fn load(&self) -> SyncResult<Snapshot> {
        let todos = self.remote.list().await.inspect_err(|e| {
            warn!(error = %e, "loading todos failed");
        })?;
        debug!(count = todos.len(), "loaded todos");
        self.cache.write(QueryKey::AllTodos, todos.clone());
        Ok(todos)
    }

    /// Create a todo and put it at the front of the cached list
    pub async fn create_todo(&self, text: &str) -> SyncResult<Todo> {
        let created = self.remote.create(text).await.inspect_err(|e| {
            warn!(error = %e, "creating todo failed");
        })?;
        let cached = created.clone();
        self.cache
            .modify(QueryKey::AllTodos, |todos| transform::prepend(todos, cached))?;
        debug!(id = %created.id, "created todo");
        Ok(created)
    }

    /// Flip `complete` on a todo, remotely and in the cache
    pub async fn update_todo(&self, todo: &Todo) -> SyncResult<Todo> {
        let _guard = self.locks.acquire(&todo.id).await;

        let current = self
            .cached(todo)
            .map_or(todo.complete, |cached| cached.complete);
        let complete = !current;

        self.remote
            .update_complete(&todo.id, complete)
            .await
            .inspect_err(|e| warn!(id = %todo.id, error = %e, "updating todo failed"))?;
        let todos = self.cache.modify(QueryKey::AllTodos, |todos| {
            transform::set_complete(todos, &todo.id, complete)
        })?;
        debug!(id = %todo.id, complete, "updated todo");

        let updated = todos
            .into_iter()
            .find(|t| t.id == todo.id)
            .unwrap_or_else(|| Todo {
                complete,
                ..todo.clone()
            });
        Ok(updated)
    }

    /// Remove a todo, remotely and from the cache
    pub async fn remove_todo(&self, todo: &Todo) -> SyncResult<()> {
        let _guard = self.locks.acquire(&todo.id).await;

        self.remote
            .remove(&todo.id)
            .await
            .inspect_err(|e| warn!(id = %todo.id, error = %e, "removing todo failed"))?;
        self.cache
            .modify(QueryKey::AllTodos, |todos| transform::without(todos, &todo.id))?;
        debug!(id = %todo.id, "removed todo");
        Ok(())
    }

    /// Cached copy of `todo`, if the list is loaded and still holds it
    fn cached(&self, todo: &Todo) -> Option<Todo> {
        self.cache
            .read(QueryKey::AllTodos)
            .ok()?
            .into_iter()
            .find(|t| t.id == todo.id)
    }
}
