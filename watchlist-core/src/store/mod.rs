//! Persistent store adapters
//!
//! A store is a synchronous, string-valued key-value map that outlives the
//! process. It only knows *how* to keep values; deciding *when* to write is
//! up to the list manager.
//!
//! All stores are trait-based so the list manager can be tested against an
//! in-memory map and run against a file on disk.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreResult;

/// Durable key-value storage
pub trait Store: Send {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` if the key was never set or the store has been cleared
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove every key from the store
    fn clear(&self) -> StoreResult<()>;
}
