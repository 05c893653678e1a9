//! List Entity
//!
//! A named, ordered collection of todos. Todos are addressed by position;
//! each also carries an id that is never reused inside the list.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::todo::{Todo, TodoId};

/// Surrogate id of a list, unique within its session
pub type ListId = u32;

/// A named todo list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    id: ListId,
    name: String,
    todos: Vec<Todo>,
    next_todo_id: TodoId,
}

impl TodoList {
    /// Create an empty list. The name must already be validated and trimmed.
    pub(crate) fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            todos: Vec::new(),
            next_todo_id: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Todos in insertion order; the index is the todo's position
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn todos_mut(&mut self) -> &mut Vec<Todo> {
        &mut self.todos
    }

    pub(crate) fn next_todo_id(&self) -> TodoId {
        self.next_todo_id
    }

    /// Hand out the next todo id. Fails once the counter would wrap.
    pub(crate) fn allocate_todo_id(&mut self) -> DomainResult<TodoId> {
        let id = self.next_todo_id;
        self.next_todo_id = id.checked_add(1).ok_or(DomainError::IdsExhausted)?;
        Ok(id)
    }
}

impl Entity for TodoList {
    type Id = ListId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
