//! View Helpers
//!
//! Read-only derived state for rendering: completion status, counts and
//! display order. Display order puts unfinished work first but keeps each
//! entry's real position so the caller can still address it.

use serde::Serialize;

use crate::domain::{Todo, TodoList};

/// A list is complete when it has at least one todo and all are done
pub fn is_list_complete(list: &TodoList) -> bool {
    !list.todos().is_empty() && list.todos().iter().all(Todo::is_completed)
}

/// CSS class for a list row
pub fn list_class(list: &TodoList) -> Option<&'static str> {
    is_list_complete(list).then_some("complete")
}

pub fn remaining_count(list: &TodoList) -> usize {
    list.todos().iter().filter(|todo| !todo.is_completed()).count()
}

pub fn total_count(list: &TodoList) -> usize {
    list.todos().len()
}

/// Stable partition: entries failing `is_done` first, then the rest, each
/// group in original order. Returns (entry, original position) pairs.
fn partition_by<T>(items: &[T], is_done: impl Fn(&T) -> bool) -> Vec<(&T, usize)> {
    let (done, mut pending): (Vec<_>, Vec<_>) = items
        .iter()
        .enumerate()
        .map(|(position, item)| (item, position))
        .partition(|(item, _)| is_done(*item));
    pending.extend(done);
    pending
}

/// Incomplete lists first, then complete ones
pub fn sorted_lists(lists: &[TodoList]) -> Vec<(&TodoList, usize)> {
    partition_by(lists, is_list_complete)
}

/// Incomplete todos first, then completed ones
pub fn sorted_todos(todos: &[Todo]) -> Vec<(&Todo, usize)> {
    partition_by(todos, Todo::is_completed)
}

/// One row of the lists overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub position: usize,
    pub name: String,
    pub remaining: usize,
    pub total: usize,
    pub complete: bool,
}

impl ListSummary {
    pub fn new(list: &TodoList, position: usize) -> Self {
        Self {
            position,
            name: list.name().to_string(),
            remaining: remaining_count(list),
            total: total_count(list),
            complete: is_list_complete(list),
        }
    }
}

/// Overview rows in display order
pub fn summarize(lists: &[TodoList]) -> Vec<ListSummary> {
    sorted_lists(lists)
        .into_iter()
        .map(|(list, position)| ListSummary::new(list, position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{ListStore, TodoOperations};

    fn list_with(todos: &[(&str, bool)]) -> TodoList {
        let mut store = ListStore::new();
        store.create_list("List").unwrap();
        for (name, completed) in todos {
            let position = store.add_todo(0, name).unwrap();
            store.set_completed(0, position, *completed).unwrap();
        }
        store.get_list(0).cloned().unwrap()
    }

    fn names<T>(sorted: &[(&T, usize)], name: impl Fn(&T) -> &str) -> Vec<(String, usize)> {
        sorted
            .iter()
            .map(|(item, position)| (name(*item).to_string(), *position))
            .collect()
    }

    #[test]
    fn test_empty_list_is_never_complete() {
        let list = list_with(&[]);
        assert!(!is_list_complete(&list));
        assert_eq!(list_class(&list), None);
        assert_eq!(remaining_count(&list), 0);
        assert_eq!(total_count(&list), 0);
    }

    #[test]
    fn test_completion_requires_every_todo() {
        let partial = list_with(&[("milk", false), ("eggs", true)]);
        assert!(!is_list_complete(&partial));
        assert_eq!(remaining_count(&partial), 1);
        assert_eq!(total_count(&partial), 2);

        let done = list_with(&[("milk", true), ("eggs", true)]);
        assert!(is_list_complete(&done));
        assert_eq!(list_class(&done), Some("complete"));
    }

    #[test]
    fn test_complete_all_scenario() {
        let mut list = list_with(&[("milk", false), ("eggs", true)]);
        list.complete_all();
        assert_eq!(remaining_count(&list), 0);
        assert!(is_list_complete(&list));
    }

    #[test]
    fn test_sorted_todos_is_stable_partition() {
        let list = list_with(&[("A", false), ("B", true), ("C", false)]);
        let sorted = sorted_todos(list.todos());
        assert_eq!(
            names(&sorted, Todo::name),
            vec![
                ("A".to_string(), 0),
                ("C".to_string(), 2),
                ("B".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_sorted_lists_moves_complete_lists_last() {
        let mut store = ListStore::new();
        for name in ["done-1", "open", "empty", "done-2"] {
            store.create_list(name).unwrap();
        }
        store.add_todo(0, "x").unwrap();
        store.complete_all(0).unwrap();
        store.add_todo(1, "y").unwrap();
        store.add_todo(3, "z").unwrap();
        store.complete_all(3).unwrap();

        let sorted = sorted_lists(store.lists());
        assert_eq!(
            names(&sorted, TodoList::name),
            vec![
                ("open".to_string(), 1),
                ("empty".to_string(), 2),
                ("done-1".to_string(), 0),
                ("done-2".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_summarize_rows() {
        let mut store = ListStore::new();
        store.create_list("Groceries").unwrap();
        store.create_list("Work").unwrap();
        store.add_todo(0, "milk").unwrap();
        store.complete_all(0).unwrap();
        store.add_todo(1, "report").unwrap();
        store.add_todo(1, "email").unwrap();

        let rows = summarize(store.lists());
        assert_eq!(
            rows,
            vec![
                ListSummary {
                    position: 1,
                    name: "Work".to_string(),
                    remaining: 2,
                    total: 2,
                    complete: false,
                },
                ListSummary {
                    position: 0,
                    name: "Groceries".to_string(),
                    remaining: 0,
                    total: 1,
                    complete: true,
                },
            ]
        );

        let json = serde_json::to_value(&rows[1]).unwrap();
        assert_eq!(json["complete"], true);
    }
}
