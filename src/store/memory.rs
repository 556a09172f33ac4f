//! In-process reference implementation of the [`Store`] capability.

use super::Store;
use crate::error::{ContainerError, Result};
use crate::value::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::Duration;

/// An in-memory [`Store`].
///
/// TTLs are accepted and ignored: entries live as long as the store does,
/// which is the natural reading of a per-request in-process store. A backend
/// with real expiry semantics can honor them.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, Value>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` when the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Store for MemoryStore {
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.entries.borrow().contains_key(key))
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.entries.borrow().get(key).cloned().ok_or_else(|| ContainerError::not_found(key))
    }

    fn set(&self, key: &str, value: Value, _ttl: Option<Duration>) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
