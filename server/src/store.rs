//! In-memory todo store.
//!
//! Records live in a `Vec` behind a single `RwLock`: reads share the lock,
//! create and toggle take it exclusively, so each operation is atomic with
//! respect to every other. Lookups scan in insertion order and stop at the
//! first matching id; ids are not required to be unique.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::Todo;

#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl TodoStore {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos)),
        }
    }

    /// Store holding the three records the service starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Todo::new("1", "Clean room", false),
            Todo::new("2", "Buy groceries", true),
            Todo::new("3", "Play fifa", false),
        ])
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Todo> {
        let todos = self.todos.read().await;
        todos.iter().find(|todo| todo.id == id).cloned()
    }

    /// Appends `todo` as-is. Duplicate ids are accepted.
    pub async fn create(&self, todo: Todo) -> Todo {
        let mut todos = self.todos.write().await;
        todos.push(todo.clone());
        tracing::debug!(id = %todo.id, len = todos.len(), "todo created");
        todo
    }

    /// Flips `completed` on the first record with `id`, in place.
    pub async fn toggle(&self, id: &str) -> Option<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos.iter_mut().find(|todo| todo.id == id)?;
        todo.completed = !todo.completed;
        tracing::debug!(id = %todo.id, completed = todo.completed, "todo toggled");
        Some(todo.clone())
    }
}
