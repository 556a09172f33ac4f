//! Nested-structure decorator with in-place lazy wrapping.

use crate::container::Container;
use crate::error::{ContainerError, Result};
use crate::value::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::trace;

/// Wraps a nested map and lazily materializes sub-containers.
///
/// On first access to a key holding a nested [`Value::Map`], the map is
/// replaced *in place* by a [`HierarchyContainer`] wrapping it; repeat
/// access returns the identical wrapper. Sub-containers thus exist only for
/// the parts of the tree actually visited, and are built exactly once.
/// Scalar values are returned as-is; [`Container::has`] is a plain
/// existence check regardless of value shape.
///
/// # Examples
///
/// ```rust
/// use keystack::{Container, HierarchyContainer};
/// use serde_json::json;
///
/// let tree = HierarchyContainer::from_json(json!({
///     "db": {"host": "localhost"},
///     "debug": true,
/// })).unwrap();
///
/// let db = tree.get("db").unwrap();
/// let host = db.as_container().unwrap().get("host").unwrap();
/// assert_eq!(host.as_str(), Some("localhost"));
/// ```
#[derive(Debug)]
pub struct HierarchyContainer {
    data: RefCell<BTreeMap<String, Value>>,
}

impl HierarchyContainer {
    /// Creates a hierarchy over the given nested map.
    #[must_use]
    pub fn new(data: BTreeMap<String, Value>) -> Self {
        Self { data: RefCell::new(data) }
    }

    /// Creates a hierarchy from a JSON object.
    ///
    /// # Errors
    ///
    /// Fails with [`ContainerError::Misconfigured`] when `json` is not an
    /// object.
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        match Value::from(json) {
            Value::Map(data) => Ok(Self::new(data)),
            other => Err(ContainerError::misconfigured(format!(
                "hierarchy requires a JSON object, got {other:?}"
            ))),
        }
    }
}

impl Container for HierarchyContainer {
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.data.borrow().contains_key(key))
    }

    fn get(&self, key: &str) -> Result<Value> {
        let mut data = self.data.borrow_mut();
        let Some(slot) = data.get_mut(key) else {
            return Err(ContainerError::not_found(key));
        };
        if matches!(slot, Value::Map(_)) {
            // First visit: swap the raw map out for a memoized wrapper.
            if let Value::Map(map) = std::mem::replace(slot, Value::Null) {
                trace!(key, "materializing sub-container");
                *slot = Value::Container(Rc::new(HierarchyContainer::new(map)));
            }
        }
        Ok(slot.clone())
    }
}
