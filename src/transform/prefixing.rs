//! Prefix-stripping decorator.

use crate::container::Container;
use crate::error::{ContainerError, Result};
use crate::value::Value;
use tracing::trace;

/// Presents an inner container under prefixed keys.
///
/// Outer keys are expected to carry the prefix; it is stripped before
/// delegating. In strict mode an unprefixed outer key is not-found
/// immediately. In non-strict mode the decorator is forgiving twice over:
/// an unprefixed key is delegated as-is, and when the stripped key misses it
/// retries with the key exactly as given before propagating the miss.
///
/// # Examples
///
/// ```rust
/// use keystack::{Container, Dictionary, PrefixingContainer, Value};
///
/// let inner = Dictionary::from_iter([("host", Value::from("localhost"))]);
/// let prefixed = PrefixingContainer::new(inner, "app.", true);
/// assert_eq!(prefixed.get("app.host").unwrap().as_str(), Some("localhost"));
/// assert!(prefixed.get("host").unwrap_err().is_not_found());
/// ```
pub struct PrefixingContainer<C> {
    inner: C,
    prefix: String,
    strict: bool,
}

impl<C: Container> PrefixingContainer<C> {
    /// Creates a prefixing decorator over `inner`.
    #[must_use]
    pub fn new(inner: C, prefix: impl Into<String>, strict: bool) -> Self {
        Self { inner, prefix: prefix.into(), strict }
    }

    /// The key to delegate with, or `None` when strict mode rejects an
    /// unprefixed key outright.
    fn inner_key<'a>(&self, key: &'a str) -> Option<&'a str> {
        match key.strip_prefix(&self.prefix) {
            Some(stripped) => Some(stripped),
            None if self.strict => None,
            None => Some(key),
        }
    }

    fn wrap(&self, key: &str, source: ContainerError) -> ContainerError {
        ContainerError::wrap_inner(
            format!("prefixing container ('{}') failed for key '{key}'", self.prefix),
            source,
        )
    }
}

impl<C: Container> Container for PrefixingContainer<C> {
    fn has(&self, key: &str) -> Result<bool> {
        let Some(inner_key) = self.inner_key(key) else {
            return Ok(false);
        };
        if self.inner.has(inner_key).map_err(|e| self.wrap(key, e))? {
            return Ok(true);
        }
        if !self.strict && inner_key != key {
            return self.inner.has(key).map_err(|e| self.wrap(key, e));
        }
        Ok(false)
    }

    fn get(&self, key: &str) -> Result<Value> {
        let Some(inner_key) = self.inner_key(key) else {
            return Err(ContainerError::not_found_at(
                key,
                format!("key does not carry prefix '{}'", self.prefix),
            ));
        };
        match self.inner.get(inner_key) {
            Ok(value) => Ok(value),
            Err(e) if e.is_not_found() => {
                if !self.strict && inner_key != key {
                    trace!(key, inner_key, "prefixed lookup missed, retrying key as given");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    #[test]
    fn test_strict_resolves_prefixed_keys_only() {
        let inner = Dictionary::from_iter([("x", Value::from(1))]);
        let prefixed = PrefixingContainer::new(inner, "app.", true);

        assert!(prefixed.has("app.x").unwrap());
        assert_eq!(prefixed.get("app.x").unwrap().as_int(), Some(1));

        assert!(!prefixed.has("x").unwrap());
        assert!(prefixed.get("x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_non_strict_passes_unprefixed_key_through() {
        // Inner has only the bare key; the unprefixed outer key still
        // resolves because nothing gets stripped.
        let inner = Dictionary::from_iter([("x", Value::from(1))]);
        let prefixed = PrefixingContainer::new(inner, "app.", false);

        assert!(prefixed.has("x").unwrap());
        assert_eq!(prefixed.get("x").unwrap().as_int(), Some(1));
    }

    #[test]
    fn test_non_strict_retries_with_key_as_given() {
        // Inner stores the key *with* the prefix; stripping misses, the
        // fallback with the original key hits.
        let inner = Dictionary::from_iter([("app.x", Value::from(7))]);
        let prefixed = PrefixingContainer::new(inner, "app.", false);

        assert!(prefixed.has("app.x").unwrap());
        assert_eq!(prefixed.get("app.x").unwrap().as_int(), Some(7));
    }

    #[test]
    fn test_strict_does_not_retry() {
        let inner = Dictionary::from_iter([("app.x", Value::from(7))]);
        let prefixed = PrefixingContainer::new(inner, "app.", true);

        assert!(!prefixed.has("app.x").unwrap());
        assert!(prefixed.get("app.x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_miss_reports_outer_key() {
        let prefixed = PrefixingContainer::new(Dictionary::default(), "app.", false);
        let err = prefixed.get("app.missing").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("app.missing"));
    }
}
