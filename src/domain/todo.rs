use serde::{Deserialize, Serialize};

use super::error::TodoError;

/// Sequential positive identifier. Assigned once, never reused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(pub u64);

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

impl Todo {
    /// Titles are stored trimmed; empty or whitespace-only titles are rejected.
    pub fn new(id: TodoId, title: impl Into<String>) -> Result<Self, TodoError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TodoError::EmptyTitle);
        }
        Ok(Self { id, title: trimmed.to_string(), done: false })
    }

    /// Only exposed transition: pending -> done. Stays done once set.
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

/// Next id is max(existing) + 1, or 1 for an empty collection. Ids removed by
/// external edits are never handed out again.
pub fn next_id(todos: &[Todo]) -> TodoId {
    TodoId(todos.iter().map(|t| t.id.0).max().unwrap_or(0) + 1)
}
