use super::error::TodoError;
use super::todo::Todo;

/// Storage contract: the whole collection is loaded at the start of a command
/// and rewritten on save. A missing backing store is an empty collection, not
/// an error.
pub trait TodoRepository {
    fn load(&self) -> Result<Vec<Todo>, TodoError>;
    fn save(&self, todos: &[Todo]) -> Result<(), TodoError>;
}
