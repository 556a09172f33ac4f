//! Null-object container.

use crate::container::{Container, MutableContainer};
use crate::error::{ContainerError, Result};
use crate::value::Value;

/// A container that holds nothing, accepts writes, and discards them.
///
/// Useful as a default collaborator where a real container is optional:
/// `has` is always `false`, `get` always fails not-found, `set` and `clear`
/// succeed without effect, and `unset` fails not-found since there is never
/// anything to remove.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpContainer;

impl NoOpContainer {
    /// Creates a no-op container.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Functional update; the result is just as empty as the receiver.
    #[must_use]
    pub fn with_mappings<K, I>(&self, _mappings: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self
    }

    /// Functional update; the result is just as empty as the receiver.
    #[must_use]
    pub fn with_added_mappings<K, I>(&self, _mappings: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self
    }

    /// Functional update; the result is just as empty as the receiver.
    #[must_use]
    pub fn without_keys<K, I>(&self, _keys: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = K>,
    {
        Self
    }
}

impl Container for NoOpContainer {
    fn has(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn get(&self, key: &str) -> Result<Value> {
        Err(ContainerError::not_found(key))
    }
}

impl MutableContainer for NoOpContainer {
    fn set(&self, _key: &str, _value: Value) -> Result<()> {
        Ok(())
    }

    fn unset(&self, key: &str) -> Result<()> {
        Err(ContainerError::not_found(key))
    }

    fn clear(&self) -> Result<()> {
        Ok(())
    }
}
