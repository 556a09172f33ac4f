//! Memoizing decorator.

use crate::container::Container;
use crate::error::{ContainerError, Result};
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::trace;

/// Memoizes successful resolutions of the inner container.
///
/// Only successful `get`s populate the cache; a not-found result is never
/// cached and is retried on every call, so a key appearing later in the
/// inner container becomes visible. `has` answers `true` straight from the
/// cache and otherwise delegates without resolving.
///
/// The cache lives as long as the decorator instance; discard the instance
/// to invalidate everything.
///
/// # Examples
///
/// ```rust
/// use keystack::{CachingContainer, Container, Dictionary, Value};
///
/// let cached = CachingContainer::new(Dictionary::from_iter([("k", Value::from(1))]));
/// assert_eq!(cached.get("k").unwrap().as_int(), Some(1));
/// assert_eq!(cached.get("k").unwrap().as_int(), Some(1)); // served from cache
/// ```
pub struct CachingContainer<C> {
    inner: C,
    cache: RefCell<HashMap<String, Value>>,
}

impl<C: Container> CachingContainer<C> {
    /// Creates a caching decorator over `inner` with an empty cache.
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self { inner, cache: RefCell::new(HashMap::new()) }
    }

    /// Returns the number of cached resolutions.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    fn wrap(&self, key: &str, source: ContainerError) -> ContainerError {
        if source.is_not_found() {
            ContainerError::not_found_at(key, "not found in inner container")
        } else {
            ContainerError::wrap_inner(
                format!("caching container: inner container failed for key '{key}'"),
                source,
            )
        }
    }
}

impl<C: Container> Container for CachingContainer<C> {
    fn has(&self, key: &str) -> Result<bool> {
        if self.cache.borrow().contains_key(key) {
            return Ok(true);
        }
        self.inner.has(key).map_err(|e| self.wrap(key, e))
    }

    fn get(&self, key: &str) -> Result<Value> {
        if let Some(value) = self.cache.borrow().get(key) {
            trace!(key, "cache hit");
            return Ok(value.clone());
        }
        trace!(key, "cache miss");
        let value = self.inner.get(key).map_err(|e| self.wrap(key, e))?;
        self.cache.borrow_mut().insert(key.to_string(), value.clone());
        Ok(value)
    }
}
