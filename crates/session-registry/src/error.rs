//! Registry error types

use session_todos::SnapshotError;
use thiserror::Error;

use crate::session::SessionId;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Session not found: {0}")]
    UnknownSession(SessionId),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
