//! Todo Entity
//!
//! A named item with a completion flag, owned by exactly one list.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Surrogate id of a todo, unique within its parent list
pub type TodoId = u32;

/// A single todo inside a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    name: String,
    completed: bool,
}

impl Todo {
    /// Create an incomplete todo. The name is stored as given; callers
    /// validate it first.
    pub(crate) fn new(id: TodoId, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(7, "milk".to_string());
        assert_eq!(todo.id(), 7);
        assert_eq!(todo.name(), "milk");
        assert!(!todo.is_completed());
    }
}
