//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mutation
//! helpers apply a pure operation from `tasks` and then rewrite the
//! persisted collection.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::storage;
use crate::tasks;
use crate::models::Task;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, in insertion order
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new task; empty or whitespace-only text is ignored
pub fn store_add_task(store: &AppStore, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    tasks::add_task(&mut store.tasks().write(), text, js_sys::Date::now());
    persist(store);
}

/// Flip completion for the task with the given id
pub fn store_toggle_task(store: &AppStore, id: u64) {
    tasks::toggle_task(&mut store.tasks().write(), id);
    persist(store);
}

/// Remove the task with the given id
pub fn store_remove_task(store: &AppStore, id: u64) {
    tasks::remove_task(&mut store.tasks().write(), id);
    persist(store);
}

/// Each mutation rewrites the full persisted collection
fn persist(store: &AppStore) {
    storage::save_tasks(&store.tasks().get());
}
