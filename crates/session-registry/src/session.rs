//! Session state
//!
//! What one browser session owns: its list store and a one-shot flash
//! message for the next rendered page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use session_todos::{DomainError, ListStore, NameLimits};
use std::fmt;
use uuid::Uuid;

/// Opaque session identifier supplied by the transport
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random id for transports that do not mint their own
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Message shown once on the next page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Flash {
    Success(String),
    Error(String),
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Flash::Success(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Flash::Success(message) | Flash::Error(message) => message,
        }
    }
}

impl From<&DomainError> for Flash {
    fn from(error: &DomainError) -> Self {
        Flash::Error(error.to_string())
    }
}

/// State held for one session
#[derive(Debug, Clone)]
pub struct Session {
    lists: ListStore,
    flash: Option<Flash>,
    created_at: DateTime<Utc>,
    last_accessed: DateTime<Utc>,
}

impl Session {
    /// Empty session, as created on first access
    pub fn new(limits: NameLimits) -> Self {
        let now = Utc::now();
        Self {
            lists: ListStore::with_limits(limits),
            flash: None,
            created_at: now,
            last_accessed: now,
        }
    }

    pub fn lists(&self) -> &ListStore {
        &self.lists
    }

    pub fn lists_mut(&mut self) -> &mut ListStore {
        &mut self.lists
    }

    pub(crate) fn replace_lists(&mut self, lists: ListStore) {
        self.lists = lists;
    }

    /// Set the flash, replacing any unread one
    pub fn set_flash(&mut self, flash: Flash) {
        self.flash = Some(flash);
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    /// Read and clear the flash
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_accessed(&self) -> DateTime<Utc> {
        self.last_accessed
    }

    pub(crate) fn touch(&mut self) {
        self.last_accessed = Utc::now();
    }
}
