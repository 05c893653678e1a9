//! List Store
//!
//! The ordered collection of lists owned by one session. Lists are
//! addressed by position; deleting a list shifts every later list down by
//! one. Todo operations are reachable through the list's position so a
//! caller holding only the store never has to touch a `TodoList` directly.

use crate::domain::{
    DomainError, DomainResult, ListId, Missing, NameLimits, Todo, TodoList,
};

use super::todo_store::TodoOperations;
use super::traits::PositionalRepository;

/// All lists of one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStore {
    pub(super) lists: Vec<TodoList>,
    pub(super) next_list_id: ListId,
    pub(super) limits: NameLimits,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store that validates names under `limits`
    pub fn with_limits(limits: NameLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> &NameLimits {
        &self.limits
    }

    /// Lists in order; the index is the list's position
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Create a list with the trimmed name and return its position. Fails
    /// with `IdsExhausted` once every list id has been handed out.
    pub fn create_list(&mut self, name: &str) -> DomainResult<usize> {
        if let Err(e) = self
            .limits
            .validate_list_name(name, self.lists.iter().map(TodoList::name))
        {
            log::debug!("rejected list name {name:?}: {e}");
            return Err(e);
        }

        let id = self.next_list_id;
        self.next_list_id = id.checked_add(1).ok_or_else(|| {
            log::warn!("list ids exhausted");
            DomainError::IdsExhausted
        })?;
        self.lists.push(TodoList::new(id, name.trim().to_string()));
        let position = self.lists.len() - 1;
        log::debug!("created list {id} at {position}");
        Ok(position)
    }

    /// Rename the list at `position`. Its own current name does not count
    /// as taken.
    pub fn rename_list(&mut self, position: usize, new_name: &str) -> DomainResult<()> {
        self.ensure_position(position)?;

        let others = self
            .lists
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != position)
            .map(|(_, list)| list.name());
        if let Err(e) = self.limits.validate_list_name(new_name, others) {
            log::debug!("rejected rename of list {position} to {new_name:?}: {e}");
            return Err(e);
        }

        let list = self.list_at(position)?;
        list.set_name(new_name.trim().to_string());
        log::debug!("renamed list {position}");
        Ok(())
    }

    /// Remove the list at `position` and return it
    pub fn delete_list(&mut self, position: usize) -> DomainResult<TodoList> {
        self.ensure_position(position)?;
        let removed = self.lists.remove(position);
        log::debug!("deleted list at {position}");
        Ok(removed)
    }

    pub fn get_list(&self, position: usize) -> Option<&TodoList> {
        self.lists.get(position)
    }

    fn list_at(&mut self, position: usize) -> DomainResult<&mut TodoList> {
        self.lists
            .get_mut(position)
            .ok_or(DomainError::NotFound(Missing::List(position)))
    }

    // Todo operations addressed through the list's position. These are the
    // only way to mutate a stored list, so the store's limits always apply.

    pub fn add_todo(&mut self, list_position: usize, name: &str) -> DomainResult<usize> {
        let limits = self.limits;
        self.list_at(list_position)?.add_todo(name, &limits)
    }

    pub fn delete_todo(&mut self, list_position: usize, position: usize) -> DomainResult<Todo> {
        self.list_at(list_position)?.delete_todo(position)
    }

    pub fn set_completed(
        &mut self,
        list_position: usize,
        position: usize,
        completed: bool,
    ) -> DomainResult<()> {
        self.list_at(list_position)?
            .set_completed(position, completed)
    }

    pub fn toggle_completed(&mut self, list_position: usize, position: usize) -> DomainResult<bool> {
        self.list_at(list_position)?.toggle_completed(position)
    }

    pub fn complete_all(&mut self, list_position: usize) -> DomainResult<()> {
        self.list_at(list_position)?.complete_all();
        Ok(())
    }
}

impl PositionalRepository<TodoList> for ListStore {
    fn entries(&self) -> &[TodoList] {
        &self.lists
    }

    fn missing(position: usize) -> Missing {
        Missing::List(position)
    }
}
