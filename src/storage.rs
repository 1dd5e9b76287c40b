//! Task Persistence
//!
//! The full task collection lives in browser localStorage under a fixed
//! key and is rewritten after every mutation. Missing or corrupt data
//! loads as an empty collection.

use web_sys::Storage;

use crate::models::Task;

const STORAGE_KEY: &str = "tasks";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the persisted collection. Never errors: unavailable storage, an
/// absent key, and corrupt data all load as an empty collection.
pub fn load_tasks() -> Vec<Task> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => decode_tasks(&raw),
        _ => Vec::new(),
    }
}

/// Decode one stored payload. Corrupt JSON is treated as no data.
pub fn decode_tasks(raw: &str) -> Vec<Task> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Rewrite the whole collection. A failed write (quota, storage disabled)
/// is non-fatal: in-memory state stays ahead of the stored copy and a
/// warning goes to the console.
pub fn save_tasks(tasks: &[Task]) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(tasks) {
        Ok(encoded) => {
            if storage.set_item(STORAGE_KEY, &encoded).is_err() {
                web_sys::console::warn_1(&"[storage] Failed to persist tasks".into());
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[storage] Encode failed: {}", e).into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_payload_loads_as_empty() {
        assert!(decode_tasks("not json").is_empty());
        assert!(decode_tasks("{\"id\":1}").is_empty());
        assert!(decode_tasks("").is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let tasks = vec![
            Task {
                id: 10,
                text: "first".to_string(),
                completed: false,
            },
            Task {
                id: 20,
                text: "second".to_string(),
                completed: true,
            },
        ];
        let encoded = serde_json::to_string(&tasks).unwrap();
        assert_eq!(decode_tasks(&encoded), tasks);
    }
}
