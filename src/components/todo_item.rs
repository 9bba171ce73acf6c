//! Todo Item Component
//!
//! Individual row in the todo list.

use leptos::prelude::*;
use todo_sync::Todo;

use crate::context::use_app_context;

/// A single todo row: click toggles, × removes
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let complete = todo.complete;
    let text = todo.text.clone();
    let row_class = if complete { "todo-row completed" } else { "todo-row" };
    let toggled = todo.clone();

    view! {
        <li class=row_class on:click=move |_| ctx.update_todo(toggled.clone())>
            // Display only; the row click does the toggling
            <input
                type="checkbox"
                tabindex="-1"
                prop:checked=complete
                on:click=|ev| ev.prevent_default()
            />

            <span class="todo-text">{text}</span>

            <button class="delete-btn" on:click=move |ev| {
                ev.stop_propagation();
                ctx.remove_todo(todo.clone());
            }>"×"</button>
        </li>
    }
}
