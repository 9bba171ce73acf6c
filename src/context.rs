//! Application Context
//!
//! Shared client and error state provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{GraphqlRemote, SyncResult, Todo, TodoSync};

use crate::store::StoreCache;

/// Synchronization client wired to the GraphQL service and the app store
pub type TodoClient = TodoSync<GraphqlRemote, StoreCache>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    client: StoredValue<Rc<TodoClient>, LocalStorage>,
    /// Message of the last failed operation - read
    pub last_error: ReadSignal<Option<String>>,
    /// Message of the last failed operation - write
    set_last_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        client: TodoClient,
        last_error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            client: StoredValue::new_local(Rc::new(client)),
            last_error: last_error.0,
            set_last_error: last_error.1,
        }
    }

    /// Fetch the todo list into the store
    pub fn load(&self) {
        self.spawn(|client| async move { client.load().await.map(drop) });
    }

    pub fn create_todo(&self, text: String) {
        self.spawn(move |client| async move { client.create_todo(&text).await.map(drop) });
    }

    /// Toggle completion of a todo
    pub fn update_todo(&self, todo: Todo) {
        self.spawn(move |client| async move { client.update_todo(&todo).await.map(drop) });
    }

    pub fn remove_todo(&self, todo: Todo) {
        self.spawn(move |client| async move { client.remove_todo(&todo).await });
    }

    /// Run an operation in the background and record its outcome
    fn spawn<F, Fut>(&self, operation: F)
    where
        F: FnOnce(Rc<TodoClient>) -> Fut + 'static,
        Fut: Future<Output = SyncResult<()>> + 'static,
    {
        let client = self.client.get_value();
        let set_last_error = self.set_last_error;
        spawn_local(async move {
            match operation(client).await {
                Ok(()) => set_last_error.set(None),
                Err(err) => set_last_error.set(Some(err.to_string())),
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
