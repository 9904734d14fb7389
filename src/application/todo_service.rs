use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{next_id, Todo, TodoId};

/// Outcome of `mark_done` on an existing todo. Already-done is informational,
/// not an error, and performs no save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkDone {
    Marked(Todo),
    AlreadyDone(Todo),
}

pub trait TodoService {
    fn add(&self, title: &str) -> Result<Todo, TodoError>;
    fn list(&self) -> Result<Vec<Todo>, TodoError>;
    fn mark_done(&self, id: TodoId) -> Result<MarkDone, TodoError>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    fn add(&self, title: &str) -> Result<Todo, TodoError> {
        // Validate before touching storage so a bad title never creates the file.
        if title.trim().is_empty() {
            return Err(TodoError::EmptyTitle);
        }
        let mut todos = self.repo.load()?;
        let todo = Todo::new(next_id(&todos), title)?;
        todos.push(todo.clone());
        self.repo.save(&todos)?;
        tracing::debug!(id = todo.id.0, "added todo");
        Ok(todo)
    }

    fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let mut todos = self.repo.load()?;
        // Storage preserves insertion order; display order is by id.
        todos.sort_by_key(|t| t.id);
        Ok(todos)
    }

    fn mark_done(&self, id: TodoId) -> Result<MarkDone, TodoError> {
        let mut todos = self.repo.load()?;
        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
            return Err(TodoError::NotFound(id));
        };
        if todo.done {
            return Ok(MarkDone::AlreadyDone(todo.clone()));
        }
        todo.mark_done();
        let marked = todo.clone();
        self.repo.save(&todos)?;
        tracing::debug!(id = marked.id.0, "marked todo as done");
        Ok(MarkDone::Marked(marked))
    }
}
