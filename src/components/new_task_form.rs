//! New Task Form Component
//!
//! Form for creating new tasks. The draft text is ephemeral and cleared
//! on submit.

use leptos::prelude::*;

use crate::store::{store_add_task, use_app_store};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let (draft, set_draft) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.trim().is_empty() {
            return;
        }
        store_add_task(&store, &text);
        set_draft.set(String::new());
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit" class="btn primary">"Add Task"</button>
        </form>
    }
}
