//! Read-once-per-cycle container backed by a persistent store.
//!
//! A flash container carries data across exactly one boundary between units
//! of work (one request writes, the next request reads, then the data is
//! gone). [`FlashContainer::init`] loads the store slot into memory and
//! immediately clears the slot, which is what guarantees the one-cycle
//! visibility: whatever was written is seen by at most one subsequent
//! lifecycle.
//!
//! After `init`, reads and writes operate on the in-memory copy; every
//! mutation re-persists the full snapshot under the same slot, so a late
//! reader in the *same* unit of work sees current state while the next unit
//! of work starts from whatever this one persisted, and wipes it again on
//! its own `init`.

use crate::container::{Container, MutableContainer};
use crate::error::{ContainerError, Result};
use crate::store::Store;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::debug;

/// A container whose contents survive for at most one full lifecycle after
/// being written, backed by a slot in an injected [`Store`].
pub struct FlashContainer {
    store: Rc<dyn Store>,
    store_key: String,
    data: RefCell<BTreeMap<String, Value>>,
}

impl FlashContainer {
    /// Creates a flash container over the `store_key` slot of `store`.
    ///
    /// The container starts empty; call [`FlashContainer::init`] to load
    /// the slot.
    #[must_use]
    pub fn new(store: Rc<dyn Store>, store_key: impl Into<String>) -> Self {
        Self { store, store_key: store_key.into(), data: RefCell::new(BTreeMap::new()) }
    }

    /// Loads the backing slot into memory, then clears the slot.
    ///
    /// Calling `init` again overwrites the in-memory state from the store
    /// (which, having been cleared, normally yields an empty map) and clears
    /// the slot once more.
    ///
    /// # Errors
    ///
    /// Fails with a store error when the slot could not be read or cleared,
    /// or when the slot holds something other than a map.
    pub fn init(&self) -> Result<()> {
        let loaded = if self.store.has(&self.store_key)? {
            match self.store.get(&self.store_key)? {
                Value::Map(entries) => entries,
                Value::Null => BTreeMap::new(),
                _ => {
                    return Err(ContainerError::store(
                        "get",
                        &self.store_key,
                        "flash slot does not hold a map",
                    ));
                }
            }
        } else {
            BTreeMap::new()
        };
        debug!(slot = %self.store_key, entries = loaded.len(), "flash slot loaded");
        *self.data.borrow_mut() = loaded;
        // Clearing the slot is what makes the data one-shot.
        self.store.set(&self.store_key, Value::Map(BTreeMap::new()), None)
    }

    fn persist(&self) -> Result<()> {
        let snapshot = self.data.borrow().clone();
        self.store.set(&self.store_key, Value::Map(snapshot), None)
    }
}

impl Container for FlashContainer {
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.data.borrow().contains_key(key))
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.data.borrow().get(key).cloned().ok_or_else(|| ContainerError::not_found(key))
    }
}

impl MutableContainer for FlashContainer {
    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.data.borrow_mut().insert(key.to_string(), value);
        self.persist()
    }

    fn unset(&self, key: &str) -> Result<()> {
        if self.data.borrow_mut().remove(key).is_none() {
            return Err(ContainerError::not_found(key));
        }
        self.persist()
    }

    fn clear(&self) -> Result<()> {
        self.data.borrow_mut().clear();
        self.persist()
    }
}
