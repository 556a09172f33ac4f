//! A container view over an injected persistent store.

use super::Store;
use crate::container::{Container, MutableContainer};
use crate::error::{ContainerError, Result};
use crate::value::Value;
use std::rc::Rc;
use std::time::Duration;

/// Exposes a [`Store`] through the container contract.
///
/// Reads delegate directly to the store; writes go through
/// [`MutableContainer`] and apply the default TTL configured at
/// construction. This is the bridge that lets a persistent cache backend sit
/// at the bottom of a decorator stack.
pub struct StoreContainer {
    store: Rc<dyn Store>,
    ttl: Option<Duration>,
}

impl StoreContainer {
    /// Creates a container over `store` with no default TTL.
    #[must_use]
    pub fn new(store: Rc<dyn Store>) -> Self {
        Self { store, ttl: None }
    }

    /// Creates a container over `store` whose writes expire after `ttl`.
    #[must_use]
    pub fn with_ttl(store: Rc<dyn Store>, ttl: Duration) -> Self {
        Self { store, ttl: Some(ttl) }
    }
}

impl Container for StoreContainer {
    fn has(&self, key: &str) -> Result<bool> {
        self.store.has(key)
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.store.get(key)
    }
}

impl MutableContainer for StoreContainer {
    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.store.set(key, value, self.ttl)
    }

    fn unset(&self, key: &str) -> Result<()> {
        if !self.store.has(key)? {
            return Err(ContainerError::not_found(key));
        }
        self.store.delete(key)
    }

    fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}
