//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// Renders the cached todo list, most recent first
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().get().unwrap_or_default()
                // Completion is part of the key so a toggle re-renders the row
                key=|todo| (todo.id.clone(), todo.complete)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}
