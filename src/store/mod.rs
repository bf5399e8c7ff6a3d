//! Storage abstraction for task persistence.
//!
//! The persisted value for a task is its canonical todo.txt line keyed by
//! the storage-assigned integer id; that line format is the one bit-exact
//! contract between store implementations. [`SqliteStore`] is the
//! production backend, [`MemoryStore`] the in-memory double used by tests.

use crate::error::Result;
use crate::model::Task;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Capability interface over an ordered keyed store.
///
/// `get`, `update` and `delete` fail with `TaskNotFound` for absent ids.
/// Each call is atomic with respect to other processes opening the same
/// store; there are no cross-call transactions.
pub trait Storage {
    /// Assigns a fresh unique id onto `task` and persists it.
    fn create(&mut self, task: &mut Task) -> Result<()>;

    /// Returns every stored task, ids populated, in key order.
    fn list(&self) -> Result<Vec<Task>>;

    fn get(&self, id: u64) -> Result<Task>;

    fn update(&mut self, id: u64, task: &Task) -> Result<()>;

    fn delete(&mut self, id: u64) -> Result<()>;
}
