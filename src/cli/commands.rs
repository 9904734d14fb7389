use crate::application::todo_service::{MarkDone, TodoService};
use crate::domain::error::TodoError;
use crate::domain::todo::{Todo, TodoId};

/// One handler per subcommand. Each returns the text to print on stdout, or
/// the error whose `Display` goes to stderr with a non-zero exit.
pub fn add<S: TodoService>(service: &S, title: &str) -> Result<String, TodoError> {
    let todo = service.add(title)?;
    Ok(format!("Added todo #{}: \"{}\"", todo.id, todo.title))
}

pub fn list<S: TodoService>(service: &S) -> Result<String, TodoError> {
    let todos = service.list()?;
    if todos.is_empty() {
        return Ok("No todos found".to_string());
    }
    let lines: Vec<String> = todos.iter().map(render_line).collect();
    Ok(lines.join("\n"))
}

pub fn done<S: TodoService>(service: &S, raw_id: &str) -> Result<String, TodoError> {
    let id = parse_id(raw_id)?;
    match service.mark_done(id)? {
        MarkDone::Marked(todo) => {
            Ok(format!("Marked todo #{} as done: \"{}\"", todo.id, todo.title))
        }
        MarkDone::AlreadyDone(todo) => Ok(format!("Todo #{} is already done", todo.id)),
    }
}

fn render_line(todo: &Todo) -> String {
    let mark = if todo.done { '✓' } else { ' ' };
    format!("[{}] #{}: {}", mark, todo.id, todo.title)
}

/// The id arrives as raw text so that non-integers, zero, and negatives all
/// get the same validation message instead of a clap usage error.
fn parse_id(raw: &str) -> Result<TodoId, TodoError> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(TodoId(n)),
        _ => Err(TodoError::InvalidId),
    }
}
