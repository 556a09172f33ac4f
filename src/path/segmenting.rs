//! Flat-to-tree segmenting decorator.

use crate::container::{Container, ContainerRef};
use crate::error::{ContainerError, Result};
use crate::value::Value;
use std::rc::Rc;
use tracing::trace;

/// Presents a flat, delimiter-keyed container as a navigable tree.
///
/// A lookup joins the current root and the requested key into a full
/// delimited key. When the inner container holds that full key, the leaf
/// value is returned; otherwise `get` returns a *deeper*
/// `SegmentingContainer` rooted at the joined key, so chained `get` calls
/// keep descending until a leaf is reached.
///
/// Note the deliberate asymmetry inherited from the original design:
/// [`Container::has`] checks the key *as given* against the inner container,
/// not the root-qualified key that `get` uses. Callers navigating a subtree
/// must probe with full keys or rely on `get`.
///
/// # Examples
///
/// ```rust
/// use keystack::{Container, Dictionary, SegmentingContainer, Value};
/// use std::rc::Rc;
///
/// let flat = Dictionary::from_iter([("config.db.host", Value::from("localhost"))]);
/// let tree = SegmentingContainer::new(Rc::new(flat), ".");
///
/// let config = tree.get("config").unwrap();
/// let db = config.as_container().unwrap().get("db").unwrap();
/// let host = db.as_container().unwrap().get("host").unwrap();
/// assert_eq!(host.as_str(), Some("localhost"));
/// ```
pub struct SegmentingContainer {
    inner: ContainerRef,
    delimiter: String,
    root: String,
}

impl SegmentingContainer {
    /// Creates a segmenting view over `inner` with an empty root.
    #[must_use]
    pub fn new(inner: ContainerRef, delimiter: impl Into<String>) -> Self {
        Self::rooted(inner, delimiter, "")
    }

    /// Creates a segmenting view scoped to `root`.
    #[must_use]
    pub fn rooted(
        inner: ContainerRef,
        delimiter: impl Into<String>,
        root: impl Into<String>,
    ) -> Self {
        Self { inner, delimiter: delimiter.into(), root: root.into() }
    }

    /// The root key this view is scoped to (empty at the top).
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    fn full_key(&self, key: &str) -> String {
        let mut key = key;
        while let Some(stripped) = key.strip_prefix(&self.delimiter) {
            key = stripped;
        }
        let mut root = self.root.as_str();
        while let Some(stripped) = root.strip_suffix(&self.delimiter) {
            root = stripped;
        }
        match (root.is_empty(), key.is_empty()) {
            (true, _) => key.to_string(),
            (_, true) => root.to_string(),
            (false, false) => format!("{root}{}{key}", self.delimiter),
        }
    }
}

impl Container for SegmentingContainer {
    /// Checks the raw key against the inner container, ignoring the root.
    fn has(&self, key: &str) -> Result<bool> {
        self.inner.has(key)
    }

    fn get(&self, key: &str) -> Result<Value> {
        if self.delimiter.is_empty() {
            return Err(ContainerError::misconfigured("segment delimiter is empty"));
        }
        let full_key = self.full_key(key);
        if self.inner.has(&full_key)? {
            return self.inner.get(&full_key);
        }
        trace!(key, full_key, "no leaf at key, descending");
        Ok(Value::Container(Rc::new(Self::rooted(
            self.inner.clone(),
            self.delimiter.clone(),
            full_key,
        ))))
    }
}
