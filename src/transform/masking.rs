//! Key-visibility decorator.

use crate::container::Container;
use crate::error::{ContainerError, Result};
use crate::value::Value;
use std::collections::BTreeMap;

/// Exposes or hides inner keys behind a visibility mask.
///
/// A key is exposed iff it has an override set to `true`, or it has no
/// override and the default policy is exposed. Hidden keys behave exactly
/// like absent ones: `get` fails not-found and `has` is `false` regardless
/// of the inner container.
///
/// # Examples
///
/// ```rust
/// use keystack::{Container, Dictionary, MaskingContainer, Value};
///
/// let inner = Dictionary::from_iter([
///     ("public", Value::from(1)),
///     ("secret", Value::from(2)),
/// ]);
/// let masked = MaskingContainer::new(inner, true, [("secret", false)]);
/// assert!(masked.has("public").unwrap());
/// assert!(!masked.has("secret").unwrap());
/// ```
pub struct MaskingContainer<C> {
    inner: C,
    default_exposed: bool,
    overrides: BTreeMap<String, bool>,
}

impl<C: Container> MaskingContainer<C> {
    /// Creates a masking decorator over `inner` with the given default
    /// visibility and per-key overrides.
    #[must_use]
    pub fn new<K, I>(inner: C, default_exposed: bool, overrides: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, bool)>,
    {
        Self {
            inner,
            default_exposed,
            overrides: overrides.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    fn is_exposed(&self, key: &str) -> bool {
        self.overrides.get(key).copied().unwrap_or(self.default_exposed)
    }
}

impl<C: Container> Container for MaskingContainer<C> {
    fn has(&self, key: &str) -> Result<bool> {
        if !self.is_exposed(key) {
            return Ok(false);
        }
        self.inner.has(key)
    }

    fn get(&self, key: &str) -> Result<Value> {
        if !self.is_exposed(key) {
            return Err(ContainerError::not_found_at(key, "key is masked"));
        }
        self.inner.get(key)
    }
}
