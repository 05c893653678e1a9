//! Domain Layer
//!
//! Entities, name rules and errors. No IO and no async here.

mod entity;
mod list;
mod todo;
mod validation;

pub use entity::{DomainError, DomainResult, Entity, Missing, NameField};
pub use list::{ListId, TodoList};
pub use todo::{Todo, TodoId};
pub use validation::{
    validate_list_name, validate_todo_name, InvalidLimits, NameLimits, MAX_NAME_LEN, MIN_NAME_LEN,
};
