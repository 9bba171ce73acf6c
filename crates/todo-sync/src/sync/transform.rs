//! Snapshot Transforms
//!
//! Pure functions applied to the cached snapshot after a successful
//! remote call. Entries they do not target pass through untouched.

use crate::cache::Snapshot;
use crate::model::{Todo, TodoId};

/// Put a newly created todo at the front (most recent first)
pub fn prepend(mut todos: Snapshot, created: Todo) -> Snapshot {
    todos.retain(|todo| todo.id != created.id);
    todos.insert(0, created);
    todos
}

/// Set `complete` on the todo with `id`
pub fn set_complete(todos: Snapshot, id: &TodoId, complete: bool) -> Snapshot {
    todos
        .into_iter()
        .map(|todo| {
            if &todo.id == id {
                Todo { complete, ..todo }
            } else {
                todo
            }
        })
        .collect()
}

/// Drop the todo with `id`
pub fn without(mut todos: Snapshot, id: &TodoId) -> Snapshot {
    todos.retain(|todo| &todo.id != id);
    todos
}
