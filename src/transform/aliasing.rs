//! Alias-substituting decorator.

use crate::container::Container;
use crate::error::Result;
use crate::value::Value;
use std::collections::BTreeMap;
use tracing::trace;

/// Substitutes keys through an alias map before delegating.
///
/// Keys with an alias are replaced by it; keys without one pass through
/// unchanged, so the decorator is transparent for everything outside the
/// map.
///
/// # Examples
///
/// ```rust
/// use keystack::{AliasingContainer, Container, Dictionary, Value};
///
/// let inner = Dictionary::from_iter([("database_host", Value::from("localhost"))]);
/// let aliased = AliasingContainer::new(inner, [("db", "database_host")]);
/// assert_eq!(aliased.get("db").unwrap().as_str(), Some("localhost"));
/// ```
pub struct AliasingContainer<C> {
    inner: C,
    aliases: BTreeMap<String, String>,
}

impl<C: Container> AliasingContainer<C> {
    /// Creates an aliasing decorator over `inner`.
    #[must_use]
    pub fn new<K, A, I>(inner: C, aliases: I) -> Self
    where
        K: Into<String>,
        A: Into<String>,
        I: IntoIterator<Item = (K, A)>,
    {
        Self {
            inner,
            aliases: aliases.into_iter().map(|(k, a)| (k.into(), a.into())).collect(),
        }
    }

    fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        match self.aliases.get(key) {
            Some(alias) => {
                trace!(key, alias, "alias substituted");
                alias
            }
            None => key,
        }
    }
}

impl<C: Container> Container for AliasingContainer<C> {
    fn has(&self, key: &str) -> Result<bool> {
        self.inner.has(self.translate(key))
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.inner.get(self.translate(key))
    }
}
