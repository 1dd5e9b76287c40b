//! Task Operations
//!
//! Pure collection operations shared by the reactive store and tests.

use crate::models::{Task, TaskFilter};

/// Allocate an id for a new task.
///
/// Ids come from the creation timestamp in milliseconds; an add landing in
/// the same millisecond as the current maximum bumps past it so ids stay
/// unique for the lifetime of the collection.
pub fn next_task_id(tasks: &[Task], now_ms: f64) -> u64 {
    let stamp = now_ms as u64;
    match tasks.iter().map(|task| task.id).max() {
        Some(max) if stamp <= max => max + 1,
        _ => stamp,
    }
}

/// Append a new task with trimmed text. Empty or whitespace-only input is
/// a silent no-op.
pub fn add_task(tasks: &mut Vec<Task>, text: &str, now_ms: f64) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }
    let id = next_task_id(tasks, now_ms);
    tasks.push(Task {
        id,
        text: trimmed.to_string(),
        completed: false,
    });
}

/// Flip completion for the matching task. Unknown ids are a silent no-op.
pub fn toggle_task(tasks: &mut Vec<Task>, id: u64) {
    tasks.iter_mut()
        .find(|task| task.id == id)
        .map(|task| task.completed = !task.completed);
}

/// Remove the matching task. Unknown ids are a silent no-op.
pub fn remove_task(tasks: &mut Vec<Task>, id: u64) {
    tasks.retain(|task| task.id != id);
}

/// Derived read-only view of the collection for one filter mode.
/// All preserves insertion order unchanged.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    match filter {
        TaskFilter::All => tasks.to_vec(),
        TaskFilter::Active => tasks.iter().filter(|t| !t.completed).cloned().collect(),
        TaskFilter::Completed => tasks.iter().filter(|t| t.completed).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u64, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_add_trims_text() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "  buy milk  ", 1_000.0);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "buy milk");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_add_rejects_empty_text() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "", 1_000.0);
        add_task(&mut tasks, "   ", 2_000.0);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_ids_stay_unique_within_one_millisecond() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "first", 5_000.0);
        add_task(&mut tasks, "second", 5_000.0);
        add_task(&mut tasks, "third", 5_000.0);
        assert_eq!(tasks[0].id, 5_000);
        assert_eq!(tasks[1].id, 5_001);
        assert_eq!(tasks[2].id, 5_002);
    }

    #[test]
    fn test_toggle_then_delete() {
        let mut tasks = vec![make_task(1, "a", false)];
        toggle_task(&mut tasks, 1);
        assert!(tasks[0].completed);
        remove_task(&mut tasks, 1);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut tasks = vec![make_task(1, "a", false)];
        toggle_task(&mut tasks, 99);
        remove_task(&mut tasks, 99);
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_filter_all_preserves_insertion_order() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "a", 1.0);
        add_task(&mut tasks, "b", 2.0);
        add_task(&mut tasks, "c", 3.0);
        toggle_task(&mut tasks, 2);
        remove_task(&mut tasks, 1);

        let all = filter_tasks(&tasks, TaskFilter::All);
        let ids: Vec<u64> = all.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_active_and_completed_partition_the_collection() {
        let tasks = vec![
            make_task(1, "a", false),
            make_task(2, "b", true),
            make_task(3, "c", false),
        ];
        let active = filter_tasks(&tasks, TaskFilter::Active);
        let completed = filter_tasks(&tasks, TaskFilter::Completed);

        assert!(active.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
        assert_eq!(active.len() + completed.len(), tasks.len());
        assert!(active.iter().all(|t| !completed.iter().any(|c| c.id == t.id)));
    }
}
