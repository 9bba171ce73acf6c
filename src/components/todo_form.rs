//! Todo Form Component
//!
//! Single-line input creating a todo on Enter.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating new todos
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    // Text is forwarded as typed, empty included.
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            ctx.create_todo(new_text.get_untracked());
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="todo-form" on:submit=|ev| ev.prevent_default()>
            <input
                type="text"
                placeholder="Todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </form>
    }
}
