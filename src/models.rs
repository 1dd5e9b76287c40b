//! Frontend Models
//!
//! Data structures for locally persisted tasks and remotely fetched posts.

use serde::{Deserialize, Serialize};

/// A user-created to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Remote post record (read-only on this side)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

/// One page of posts plus the (possibly estimated) total count
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub posts: Vec<Post>,
    pub total_count: u32,
}

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Display order of the filter buttons
    pub const ALL_MODES: [TaskFilter; 3] =
        [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }
}
