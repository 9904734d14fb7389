use std::sync::{Arc, Mutex};

use super::todo_service::{MarkDone, TodoService, TodoServiceImpl};
use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{Todo, TodoId};

#[derive(Clone, Default)]
struct InMemoryRepo {
    items: Arc<Mutex<Vec<Todo>>>,
    saves: Arc<Mutex<usize>>,
}

impl InMemoryRepo {
    fn with_items(items: Vec<Todo>) -> Self {
        Self { items: Arc::new(Mutex::new(items)), saves: Arc::default() }
    }

    fn items(&self) -> Vec<Todo> {
        self.items.lock().unwrap().clone()
    }

    fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl TodoRepository for InMemoryRepo {
    fn load(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.items.lock().unwrap().clone())
    }

    fn save(&self, todos: &[Todo]) -> Result<(), TodoError> {
        *self.items.lock().unwrap() = todos.to_vec();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

fn todo(id: u64, title: &str, done: bool) -> Todo {
    Todo { id: TodoId(id), title: title.to_string(), done }
}

#[test]
fn add_assigns_sequential_ids_from_one() {
    let repo = InMemoryRepo::default();
    let service = TodoServiceImpl::new(repo.clone());
    let first = service.add("first").unwrap();
    let second = service.add("second").unwrap();
    assert_eq!(first.id, TodoId(1));
    assert_eq!(second.id, TodoId(2));
    assert_eq!(repo.items().len(), 2);
}

#[test]
fn add_stores_trimmed_title() {
    let repo = InMemoryRepo::default();
    let service = TodoServiceImpl::new(repo.clone());
    let added = service.add("  Buy groceries ").unwrap();
    assert_eq!(added.title, "Buy groceries");
    assert_eq!(repo.items()[0].title, "Buy groceries");
}

#[test]
fn add_rejects_blank_title_without_saving() {
    let repo = InMemoryRepo::default();
    let service = TodoServiceImpl::new(repo.clone());
    assert!(matches!(service.add("   "), Err(TodoError::EmptyTitle)));
    assert_eq!(repo.save_count(), 0);
}

#[test]
fn add_does_not_reuse_ids_after_external_removal() {
    // Storage edited out of band to drop id 2; ids keep counting from the max.
    let repo = InMemoryRepo::with_items(vec![todo(1, "a", false), todo(3, "b", false)]);
    let service = TodoServiceImpl::new(repo);
    let added = service.add("c").unwrap();
    assert_eq!(added.id, TodoId(4));
}

#[test]
fn list_sorts_by_id_regardless_of_storage_order() {
    let repo = InMemoryRepo::with_items(vec![
        todo(3, "c", false),
        todo(1, "a", true),
        todo(2, "b", false),
    ]);
    let service = TodoServiceImpl::new(repo);
    let ids: Vec<u64> = service.list().unwrap().iter().map(|t| t.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn mark_done_flips_flag_and_saves() {
    let repo = InMemoryRepo::with_items(vec![todo(1, "a", false)]);
    let service = TodoServiceImpl::new(repo.clone());
    let outcome = service.mark_done(TodoId(1)).unwrap();
    assert!(matches!(outcome, MarkDone::Marked(ref t) if t.done));
    assert!(repo.items()[0].done);
    assert_eq!(repo.save_count(), 1);
}

#[test]
fn mark_done_twice_reports_already_done_without_saving() {
    let repo = InMemoryRepo::with_items(vec![todo(1, "a", false)]);
    let service = TodoServiceImpl::new(repo.clone());
    service.mark_done(TodoId(1)).unwrap();
    let second = service.mark_done(TodoId(1)).unwrap();
    assert!(matches!(second, MarkDone::AlreadyDone(ref t) if t.done));
    assert_eq!(repo.save_count(), 1);
}

#[test]
fn mark_done_unknown_id_is_not_found_without_saving() {
    let repo = InMemoryRepo::default();
    let service = TodoServiceImpl::new(repo.clone());
    let err = service.mark_done(TodoId(999)).unwrap_err();
    assert!(matches!(err, TodoError::NotFound(TodoId(999))));
    assert_eq!(repo.save_count(), 0);
}
