//! Todo List Frontend App
//!
//! Wires the store, the sync client and the list components together.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{ClientConfig, GraphqlRemote, TodoSync};
use tracing::info;

use crate::components::{TodoForm, TodoList};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, StoreCache};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let config = ClientConfig::from_env();
    info!(endpoint = %config.endpoint, "starting todo client");
    let client = TodoSync::new(GraphqlRemote::new(&config), StoreCache::new(store));

    let ctx = AppContext::new(client, signal(None));
    provide_context(ctx);

    // Initial load on mount
    Effect::new(move |_| ctx.load());

    let loaded = move || store.todos().with(Option::is_some);

    view! {
        <div class="app-layout">
            <main class="main-content">
                {move || ctx.last_error.get().map(|message| view! {
                    <p class="error">{message}</p>
                })}

                // Nothing but errors until the list query has answered
                <Show when=loaded>
                    <TodoForm />
                    <TodoList />
                </Show>
            </main>
        </div>
    }
}
