//! Small key-value persistence for client-local state.
//!
//! The identity token and the reminders preference live here. Interfaces
//! inject a [`KeyValueStore`]; tests use [`MemoryStore`].

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Trait for string key-value storage operations
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write (or overwrite) a value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
