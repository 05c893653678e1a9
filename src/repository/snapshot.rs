//! Store Snapshots
//!
//! JSON form of a `ListStore` for transports that keep session data in a
//! cookie or similar blob. Restoring re-checks every invariant a live store
//! maintains, because the blob comes back from the client.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::{DomainError, Entity, ListId, NameLimits, TodoList};

use super::list_store::ListStore;

/// Reasons a snapshot cannot be restored
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot violates name rules: {0}")]
    Invalid(#[from] DomainError),

    #[error("snapshot has inconsistent ids: {0}")]
    CorruptIds(String),

    #[error("snapshot list name {0:?} is not trimmed")]
    UntrimmedName(String),
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    next_list_id: ListId,
    lists: &'a [TodoList],
}

#[derive(Deserialize)]
struct Snapshot {
    next_list_id: ListId,
    lists: Vec<TodoList>,
}

impl ListStore {
    /// Serialize the lists. Name limits are configuration and are not
    /// included.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        let snapshot = SnapshotRef {
            next_list_id: self.next_list_id,
            lists: &self.lists,
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Rebuild a store from [`ListStore::to_json`] output, validating it
    /// under `limits`.
    pub fn from_json(json: &str, limits: NameLimits) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if let Err(e) = check(&snapshot, &limits) {
            log::warn!("rejected session snapshot: {e}");
            return Err(e);
        }

        Ok(Self {
            lists: snapshot.lists,
            next_list_id: snapshot.next_list_id,
            limits,
        })
    }
}

fn check(snapshot: &Snapshot, limits: &NameLimits) -> Result<(), SnapshotError> {
    let mut names = HashSet::new();
    let mut list_ids = HashSet::new();

    for list in &snapshot.lists {
        limits.validate_list_name(list.name(), [])?;
        if list.name() != list.name().trim() {
            return Err(SnapshotError::UntrimmedName(list.name().to_string()));
        }
        if !names.insert(list.name()) {
            return Err(DomainError::DuplicateName.into());
        }
        if list.id() >= snapshot.next_list_id || !list_ids.insert(list.id()) {
            return Err(SnapshotError::CorruptIds(format!("list id {}", list.id())));
        }

        let mut todo_ids = HashSet::new();
        for todo in list.todos() {
            limits.validate_todo_name(todo.name())?;
            if todo.id() >= list.next_todo_id() || !todo_ids.insert(todo.id()) {
                return Err(SnapshotError::CorruptIds(format!(
                    "todo id {} in list {}",
                    todo.id(),
                    list.id()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NameField;

    fn sample_store() -> ListStore {
        let mut store = ListStore::new();
        store.create_list("Groceries").unwrap();
        store.create_list("Work").unwrap();
        store.add_todo(0, " milk").unwrap();
        store.add_todo(0, "eggs").unwrap();
        store.set_completed(0, 1, true).unwrap();
        store.delete_list(1).unwrap();
        store
    }

    #[test]
    fn test_restore_preserves_lists_and_counters() {
        let store = sample_store();
        let json = store.to_json().unwrap();
        let mut restored = ListStore::from_json(&json, NameLimits::default()).unwrap();
        assert_eq!(restored, store);

        // Id counters survive, so ids are still never reused.
        restored.create_list("Home").unwrap();
        assert_eq!(restored.get_list(1).unwrap().id(), 2);
        assert_eq!(restored.add_todo(0, "bread"), Ok(2));
        assert_eq!(restored.get_list(0).unwrap().todos()[2].id(), 2);
    }

    #[test]
    fn test_restore_rejects_malformed_json() {
        assert!(matches!(
            ListStore::from_json("{not json", NameLimits::default()),
            Err(SnapshotError::Json(_))
        ));
    }

    #[test]
    fn test_restore_rejects_duplicate_names() {
        let json = r#"{"next_list_id":2,"lists":[
            {"id":0,"name":"A","todos":[],"next_todo_id":0},
            {"id":1,"name":"A","todos":[],"next_todo_id":0}]}"#;
        assert!(matches!(
            ListStore::from_json(json, NameLimits::default()),
            Err(SnapshotError::Invalid(DomainError::DuplicateName))
        ));
    }

    #[test]
    fn test_restore_rejects_untrimmed_list_names() {
        // " A " would shadow "A" for every later uniqueness check.
        let json = r#"{"next_list_id":2,"lists":[
            {"id":0,"name":" A ","todos":[],"next_todo_id":0},
            {"id":1,"name":"A","todos":[],"next_todo_id":0}]}"#;
        assert!(matches!(
            ListStore::from_json(json, NameLimits::default()),
            Err(SnapshotError::UntrimmedName(name)) if name == " A "
        ));
    }

    #[test]
    fn test_restore_keeps_untrimmed_todo_names() {
        let json = r#"{"next_list_id":1,"lists":[
            {"id":0,"name":"A","todos":[{"id":0,"name":" milk ","completed":false}],"next_todo_id":1}]}"#;
        let store = ListStore::from_json(json, NameLimits::default()).unwrap();
        assert_eq!(store.get_list(0).unwrap().todos()[0].name(), " milk ");
    }

    #[test]
    fn test_restore_rejects_bad_todo_names() {
        let json = r#"{"next_list_id":1,"lists":[
            {"id":0,"name":"A","todos":[{"id":0,"name":"  ","completed":false}],"next_todo_id":1}]}"#;
        assert!(matches!(
            ListStore::from_json(json, NameLimits::default()),
            Err(SnapshotError::Invalid(DomainError::InvalidLength {
                field: NameField::Todo,
                ..
            }))
        ));
    }

    #[test]
    fn test_restore_rejects_stale_counters() {
        let json = r#"{"next_list_id":0,"lists":[
            {"id":0,"name":"A","todos":[],"next_todo_id":0}]}"#;
        assert!(matches!(
            ListStore::from_json(json, NameLimits::default()),
            Err(SnapshotError::CorruptIds(_))
        ));
    }

    #[test]
    fn test_restore_applies_given_limits() {
        let json = sample_store().to_json().unwrap();
        assert!(ListStore::from_json(&json, NameLimits::new(1, 3).unwrap()).is_err());
    }
}
