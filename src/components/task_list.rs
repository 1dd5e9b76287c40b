//! Task List Component
//!
//! Filtered task rows with toggle and delete controls.

use leptos::prelude::*;

use crate::models::TaskFilter;
use crate::store::{store_remove_task, store_toggle_task, use_app_store, AppStateStoreFields};
use crate::tasks::filter_tasks;

#[component]
pub fn TaskList(filter: ReadSignal<TaskFilter>) -> impl IntoView {
    let store = use_app_store();

    // Derived view, recomputed only when the collection or mode changes
    let filtered = Memo::new(move |_| filter_tasks(&store.tasks().get(), filter.get()));

    let empty_message = move || {
        if store.tasks().get().is_empty() {
            "No tasks yet! Add one above.".to_string()
        } else {
            format!("No {} tasks.", filter.get().label().to_lowercase())
        }
    };

    view! {
        <div class="task-list">
            <Show
                when=move || !filtered.get().is_empty()
                fallback=move || view! { <p class="empty-message">{empty_message}</p> }
            >
                <For
                    each=move || filtered.get()
                    key=|task| (task.id, task.completed)
                    children=move |task| {
                        let id = task.id;
                        view! {
                            <div class="task-row">
                                <label class="task-label">
                                    <input
                                        type="checkbox"
                                        checked=task.completed
                                        on:change=move |_| store_toggle_task(&store, id)
                                    />
                                    <span class=if task.completed { "task-text done" } else { "task-text" }>
                                        {task.text.clone()}
                                    </span>
                                </label>
                                <button class="btn danger" on:click=move |_| store_remove_task(&store, id)>
                                    "Delete"
                                </button>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
