//! An immutable in-memory container over a fixed key-value mapping.
//!
//! [`Dictionary`] is the canonical leaf of a container stack. It never
//! mutates: the functional-update methods ([`Dictionary::with_mappings`],
//! [`Dictionary::with_added_mappings`], [`Dictionary::without_keys`]) derive
//! a new dictionary and leave the receiver untouched, so a dictionary can be
//! shared freely across decorators.
//!
//! # Examples
//!
//! ```rust
//! use keystack::{Container, Dictionary, Value};
//!
//! let base = Dictionary::from_iter([("a", Value::from(1))]);
//! let extended = base.with_added_mappings([("b", Value::from(2))]);
//!
//! assert_eq!(extended.get("a").unwrap().as_int(), Some(1));
//! assert_eq!(extended.get("b").unwrap().as_int(), Some(2));
//! assert!(!base.has("b").unwrap());
//! ```

use crate::container::Container;
use crate::error::{ContainerError, Result};
use crate::value::Value;
use std::collections::BTreeMap;

/// Concrete in-memory container over a fixed mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    data: BTreeMap<String, Value>,
}

impl Dictionary {
    /// Creates a dictionary over the given mapping.
    #[must_use]
    pub fn new(data: BTreeMap<String, Value>) -> Self {
        Self { data }
    }

    /// Creates a dictionary from a JSON object.
    ///
    /// # Errors
    ///
    /// Fails with [`ContainerError::Misconfigured`] when `json` is not an
    /// object.
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        match Value::from(json) {
            Value::Map(data) => Ok(Self { data }),
            other => Err(ContainerError::misconfigured(format!(
                "dictionary requires a JSON object, got {other:?}"
            ))),
        }
    }

    /// Returns a new dictionary whose data is exactly `mappings`, discarding
    /// the receiver's data.
    #[must_use]
    pub fn with_mappings<K, I>(&self, mappings: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self { data: mappings.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }

    /// Returns a new dictionary with `mappings` merged over the receiver's
    /// data. Keys defined by `mappings` take precedence on conflict; all
    /// other keys are carried over unchanged.
    #[must_use]
    pub fn with_added_mappings<K, I>(&self, mappings: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut data = self.data.clone();
        data.extend(mappings.into_iter().map(|(k, v)| (k.into(), v)));
        Self { data }
    }

    /// Returns a new dictionary with the given keys removed. Keys absent
    /// from the receiver are ignored.
    #[must_use]
    pub fn without_keys<K, I>(&self, keys: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = K>,
    {
        let mut data = self.data.clone();
        for key in keys {
            data.remove(key.as_ref());
        }
        Self { data }
    }

    /// Returns the number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when the dictionary holds no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the mappings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Container for Dictionary {
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.data.contains_key(key))
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.data.get(key).cloned().ok_or_else(|| ContainerError::not_found(key))
    }
}

impl From<BTreeMap<String, Value>> for Dictionary {
    fn from(data: BTreeMap<String, Value>) -> Self {
        Self { data }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self { data: iter.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }
}
