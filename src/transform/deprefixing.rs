//! Prefix-adding decorator, the inverse of prefixing.

use crate::container::Container;
use crate::error::{ContainerError, Result};
use crate::value::Value;
use tracing::trace;

/// Presents prefixed inner keys under bare outer keys.
///
/// `get("host")` looks up `"app.host"` internally (for prefix `"app."`).
/// In non-strict mode a miss on the prefixed form falls back to the bare
/// key before propagating not-found.
///
/// # Examples
///
/// ```rust
/// use keystack::{Container, DeprefixingContainer, Dictionary, Value};
///
/// let inner = Dictionary::from_iter([("app.host", Value::from("localhost"))]);
/// let bare = DeprefixingContainer::new(inner, "app.", true);
/// assert_eq!(bare.get("host").unwrap().as_str(), Some("localhost"));
/// ```
pub struct DeprefixingContainer<C> {
    inner: C,
    prefix: String,
    strict: bool,
}

impl<C: Container> DeprefixingContainer<C> {
    /// Creates a deprefixing decorator over `inner`.
    #[must_use]
    pub fn new(inner: C, prefix: impl Into<String>, strict: bool) -> Self {
        Self { inner, prefix: prefix.into(), strict }
    }

    fn wrap(&self, key: &str, source: ContainerError) -> ContainerError {
        ContainerError::wrap_inner(
            format!("deprefixing container ('{}') failed for key '{key}'", self.prefix),
            source,
        )
    }
}

impl<C: Container> Container for DeprefixingContainer<C> {
    fn has(&self, key: &str) -> Result<bool> {
        let prefixed = format!("{}{key}", self.prefix);
        if self.inner.has(&prefixed).map_err(|e| self.wrap(key, e))? {
            return Ok(true);
        }
        if !self.strict {
            return self.inner.has(key).map_err(|e| self.wrap(key, e));
        }
        Ok(false)
    }

    fn get(&self, key: &str) -> Result<Value> {
        let prefixed = format!("{}{key}", self.prefix);
        match self.inner.get(&prefixed) {
            Ok(value) => Ok(value),
            Err(e) if e.is_not_found() => {
                if !self.strict {
                    trace!(key, prefixed, "prefixed lookup missed, falling back to bare key");
                    match self.inner.get(key) {
                        Ok(value) => Ok(value),
                        Err(e) if e.is_not_found() => Err(ContainerError::not_found(key)),
                        Err(e) => Err(self.wrap(key, e)),
                    }
                } else {
                    Err(ContainerError::not_found(key))
                }
            }
            Err(e) => Err(self.wrap(key, e)),
        }
    }
}
