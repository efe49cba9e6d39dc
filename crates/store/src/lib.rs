//! In-memory record store keyed by content identity.
//!
//! Records are insertion-ordered and immutable once stored; the only
//! mutations are create and delete. Callers own the handle and pass it where
//! it is needed (no process-wide store).

mod error;
mod memory;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
