//! Repository Layer
//!
//! In-memory stores for one session's lists and todos.

mod list_store;
mod snapshot;
mod todo_store;
mod traits;


pub use list_store::ListStore;
pub use snapshot::SnapshotError;
pub use todo_store::TodoOperations;
pub use traits::PositionalRepository;
