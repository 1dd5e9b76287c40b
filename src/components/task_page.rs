//! Task Page
//!
//! Task screen: new-task form, filter buttons, and the filtered list.
//! The active filter mode lives here and lasts only for the session.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskList};
use crate::models::TaskFilter;

#[component]
pub fn TaskPage() -> impl IntoView {
    let (filter, set_filter) = signal(TaskFilter::default());

    view! {
        <div class="task-page">
            <h1>"Task Manager"</h1>

            <NewTaskForm />

            <div class="filter-bar">
                {TaskFilter::ALL_MODES.iter().map(|mode| {
                    let mode = *mode;
                    view! {
                        <button
                            class=move || if filter.get() == mode { "btn primary" } else { "btn secondary" }
                            on:click=move |_| set_filter.set(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <TaskList filter=filter />
        </div>
    }
}
