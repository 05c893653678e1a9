//! Session To-Do Lists
//!
//! Layered like the rest of our backends:
//! - domain: entities, name rules and errors
//! - repository: the per-session list store and todo operations
//! - view: read-only derived state for rendering
//!
//! HTTP routing, templates and session transport live elsewhere. A host
//! keeps one `ListStore` per session (see the `session-registry` crate) and
//! calls into it per request.

pub mod domain;
pub mod repository;
pub mod view;

pub use domain::{
    validate_list_name, validate_todo_name, DomainError, DomainResult, Entity, ListId, Missing,
    InvalidLimits, NameField, NameLimits, Todo, TodoId, TodoList,
};
pub use repository::{ListStore, PositionalRepository, SnapshotError, TodoOperations};
pub use view::{
    is_list_complete, list_class, remaining_count, sorted_lists, sorted_todos, summarize,
    total_count, ListSummary,
};
