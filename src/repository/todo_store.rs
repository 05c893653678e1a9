//! Todo Store Operations
//!
//! Mutations on the todos of one list. Every operation either succeeds
//! completely or returns an error with the list unchanged.

use crate::domain::{DomainError, DomainResult, Missing, NameLimits, Todo, TodoList};

use super::traits::PositionalRepository;

impl PositionalRepository<Todo> for TodoList {
    fn entries(&self) -> &[Todo] {
        self.todos()
    }

    fn missing(position: usize) -> Missing {
        Missing::Todo(position)
    }
}

/// Trait for todo operations on a list
pub trait TodoOperations {
    /// Append a todo, validated under `limits`. Returns its position.
    fn add_todo(&mut self, name: &str, limits: &NameLimits) -> DomainResult<usize>;

    /// Remove the todo at `position`; later todos shift down by one
    fn delete_todo(&mut self, position: usize) -> DomainResult<Todo>;

    fn set_completed(&mut self, position: usize, completed: bool) -> DomainResult<()>;

    /// Flip the completion flag and return the new value
    fn toggle_completed(&mut self, position: usize) -> DomainResult<bool>;

    /// Mark every todo complete. No-op on an empty list.
    fn complete_all(&mut self);
}

fn todo_at(list: &mut TodoList, position: usize) -> DomainResult<&mut Todo> {
    let len = list.count();
    list.todos_mut().get_mut(position).ok_or_else(|| {
        log::warn!("stale position {position} (len {len})");
        DomainError::NotFound(Missing::Todo(position))
    })
}

impl TodoOperations for TodoList {
    fn add_todo(&mut self, name: &str, limits: &NameLimits) -> DomainResult<usize> {
        if let Err(e) = limits.validate_todo_name(name) {
            log::debug!("rejected todo for list {:?}: {e}", self.name());
            return Err(e);
        }

        // Stored untrimmed; only the length check sees the trimmed form.
        let id = self.allocate_todo_id()?;
        self.todos_mut().push(Todo::new(id, name.to_string()));
        let position = self.count() - 1;
        log::debug!("added todo {id} at {position} to list {:?}", self.name());
        Ok(position)
    }

    fn delete_todo(&mut self, position: usize) -> DomainResult<Todo> {
        self.ensure_position(position)?;
        let removed = self.todos_mut().remove(position);
        log::debug!("deleted todo at {position} from list {:?}", self.name());
        Ok(removed)
    }

    fn set_completed(&mut self, position: usize, completed: bool) -> DomainResult<()> {
        todo_at(self, position)?.set_completed(completed);
        Ok(())
    }

    fn toggle_completed(&mut self, position: usize) -> DomainResult<bool> {
        let todo = todo_at(self, position)?;
        let completed = !todo.is_completed();
        todo.set_completed(completed);
        Ok(completed)
    }

    fn complete_all(&mut self) {
        for todo in self.todos_mut().iter_mut() {
            todo.set_completed(true);
        }
        log::debug!("completed all todos in list {:?}", self.name());
    }
}
