//! Name Validation
//!
//! Pure checks run before any mutation. Length is measured in characters
//! after trimming leading and trailing whitespace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::{DomainError, DomainResult, NameField};

/// Shortest accepted name, in characters
pub const MIN_NAME_LEN: usize = 1;
/// Longest accepted name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Length bounds rejected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid name limits {min_len}..={max_len}: need 1 <= min <= max")]
pub struct InvalidLimits {
    pub min_len: usize,
    pub max_len: usize,
}

/// Length bounds applied to list and todo names
///
/// The minimum is at least 1, so an all-whitespace name never passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNameLimits")]
pub struct NameLimits {
    min_len: usize,
    max_len: usize,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawNameLimits {
    min_len: usize,
    max_len: usize,
}

impl Default for RawNameLimits {
    fn default() -> Self {
        Self {
            min_len: MIN_NAME_LEN,
            max_len: MAX_NAME_LEN,
        }
    }
}

impl TryFrom<RawNameLimits> for NameLimits {
    type Error = InvalidLimits;

    fn try_from(raw: RawNameLimits) -> Result<Self, Self::Error> {
        Self::new(raw.min_len, raw.max_len)
    }
}

impl Default for NameLimits {
    fn default() -> Self {
        Self {
            min_len: MIN_NAME_LEN,
            max_len: MAX_NAME_LEN,
        }
    }
}

impl NameLimits {
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, InvalidLimits> {
        if min_len == 0 || min_len > max_len {
            return Err(InvalidLimits { min_len, max_len });
        }
        Ok(Self { min_len, max_len })
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    fn check_length(&self, field: NameField, name: &str) -> DomainResult<()> {
        let len = name.trim().chars().count();
        if (self.min_len..=self.max_len).contains(&len) {
            Ok(())
        } else {
            Err(DomainError::InvalidLength {
                field,
                min: self.min_len,
                max: self.max_len,
            })
        }
    }

    /// Validate a list name against the length rule and the names already
    /// taken in the session. Comparison is exact and case-sensitive on the
    /// trimmed input.
    pub fn validate_list_name<'a, I>(&self, name: &str, existing: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.check_length(NameField::List, name)?;

        let trimmed = name.trim();
        if existing.into_iter().any(|taken| taken == trimmed) {
            return Err(DomainError::DuplicateName);
        }
        Ok(())
    }

    /// Validate a todo name. Todos may share names.
    pub fn validate_todo_name(&self, name: &str) -> DomainResult<()> {
        self.check_length(NameField::Todo, name)
    }
}

/// [`NameLimits::validate_list_name`] with the default 1..=100 bounds
pub fn validate_list_name<'a, I>(name: &str, existing: I) -> DomainResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    NameLimits::default().validate_list_name(name, existing)
}

/// [`NameLimits::validate_todo_name`] with the default 1..=100 bounds
pub fn validate_todo_name(name: &str) -> DomainResult<()> {
    NameLimits::default().validate_todo_name(name)
}
