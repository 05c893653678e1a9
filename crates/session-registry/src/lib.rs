//! # Session Registry
//!
//! Holds one `session_todos::ListStore` per session, created empty on first
//! access and discarded when the transport ends the session. Access to a
//! session is serialized so position-based operations never interleave.

pub mod config;
pub mod error;
pub mod registry;
pub mod session;

// Re-exports
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::SessionRegistry;
pub use session::{Flash, Session, SessionId};
