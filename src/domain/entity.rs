//! Domain Layer - Core Entity Trait
//!
//! Every list and todo carries a surrogate id next to its position.
//! Positions are the public address; ids let a caller notice that a
//! position has shifted under it.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's surrogate identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's surrogate identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Which kind of name failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameField {
    List,
    Todo,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::List => f.write_str("The list name"),
            NameField::Todo => f.write_str("Todo"),
        }
    }
}

/// The position that did not resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "position", rename_all = "lowercase")]
pub enum Missing {
    List(usize),
    Todo(usize),
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::List(position) => write!(f, "No list at position {position}"),
            Missing::Todo(position) => write!(f, "No todo at position {position}"),
        }
    }
}

/// Domain-level errors
///
/// All variants are recoverable: the operation that produced one left the
/// store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum DomainError {
    #[error("{field} should be between {min} and {max} characters.")]
    InvalidLength {
        field: NameField,
        min: usize,
        max: usize,
    },
    #[error("List name must be unique.")]
    DuplicateName,
    #[error("{0}.")]
    NotFound(Missing),
    #[error("No more ids are available.")]
    IdsExhausted,
}

impl DomainError {
    /// True for errors caused by bad user input rather than a stale position
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidLength { .. } | DomainError::DuplicateName
        )
    }
}
