//! The container capability contract shared by every component.
//!
//! A [`Container`] resolves keys to [`Value`]s. Decorators wrap another
//! container and change key interpretation, caching, or value shaping without
//! changing this base contract, so arbitrary stacks compose freely.
//!
//! The contract couples `has` and `get`: if `has(key)` returns `false`,
//! `get(key)` must fail with a not-found error. Components with fallback
//! semantics (non-strict prefixing, composite scans) document how they honor
//! this coupling.
//!
//! Container graphs are confined to a single logical unit of work. Mutable
//! components use `RefCell` internally and the shared handle type is [`Rc`],
//! so container types are deliberately neither `Send` nor `Sync`; sharing a
//! graph across concurrent tasks requires external synchronization that this
//! crate does not provide.
//!
//! # Examples
//!
//! ```rust
//! use keystack::{Container, ContainerExt, Dictionary, Value};
//!
//! let config = Dictionary::from_iter([("host", Value::from("localhost"))]);
//! assert!(config.has("host").unwrap());
//! assert_eq!(config.get("host").unwrap().as_str(), Some("localhost"));
//! assert_eq!(config.get_or("port", Value::from(5432)).unwrap().as_int(), Some(5432));
//! ```

use crate::error::Result;
use crate::value::Value;
use std::rc::Rc;

/// A shared, type-erased container handle.
///
/// This is the form containers take when they are stored inside a [`Value`],
/// aggregated by composites, or late-bound through proxies.
pub type ContainerRef = Rc<dyn Container>;

/// The shared read capability: key → value resolution.
pub trait Container {
    /// Returns whether `key` exists under this component's resolution rule.
    ///
    /// # Errors
    ///
    /// Never fails for simple absence; fails with a container error only
    /// when presence could not be determined (a failing inner container,
    /// an unbound proxy, invalid wiring).
    fn has(&self, key: &str) -> Result<bool>;

    /// Resolves `key` to a value.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error when the key is absent under this
    /// component's resolution rule, or a container error when resolution
    /// failed for any other reason.
    fn get(&self, key: &str) -> Result<Value>;
}

impl<T: Container + ?Sized> Container for &T {
    fn has(&self, key: &str) -> Result<bool> {
        (**self).has(key)
    }

    fn get(&self, key: &str) -> Result<Value> {
        (**self).get(key)
    }
}

impl<T: Container + ?Sized> Container for Rc<T> {
    fn has(&self, key: &str) -> Result<bool> {
        (**self).has(key)
    }

    fn get(&self, key: &str) -> Result<Value> {
        (**self).get(key)
    }
}

impl<T: Container + ?Sized> Container for Box<T> {
    fn has(&self, key: &str) -> Result<bool> {
        (**self).has(key)
    }

    fn get(&self, key: &str) -> Result<Value> {
        (**self).get(key)
    }
}

/// The write capability exposed by mutable containers.
///
/// Methods take `&self`: mutable containers are shared through [`Rc`] and
/// manage their state behind interior mutability.
pub trait MutableContainer: Container {
    /// Stores `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Fails with a container error when the backing state could not be
    /// written (e.g. a failing injected store).
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Removes `key`.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error when `key` is absent, or a container
    /// error when the backing state could not be written.
    fn unset(&self, key: &str) -> Result<()>;

    /// Removes all keys.
    ///
    /// # Errors
    ///
    /// Fails with a container error when the backing state could not be
    /// written.
    fn clear(&self) -> Result<()>;
}

/// Convenience helpers layered over the base [`Container`] contract.
pub trait ContainerExt: Container {
    /// Resolves `key`, or returns `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Propagates container failures; only not-found errors are replaced
    /// by the default.
    fn get_or(&self, key: &str, default: Value) -> Result<Value> {
        match self.get(key) {
            Ok(value) => Ok(value),
            Err(e) if e.is_not_found() => Ok(default),
            Err(e) => Err(e),
        }
    }

    /// Resolves `key` to `Some(value)`, or `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Propagates container failures.
    fn get_opt(&self, key: &str) -> Result<Option<Value>> {
        match self.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl<T: Container + ?Sized> ContainerExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    #[test]
    fn test_blanket_impls_delegate() {
        let dict = Dictionary::from_iter([("k", Value::from(1))]);
        let by_ref: &Dictionary = &dict;
        assert!(by_ref.has("k").unwrap());

        let boxed: Box<dyn Container> = Box::new(dict.clone());
        assert_eq!(boxed.get("k").unwrap(), Value::from(1));

        let shared: ContainerRef = Rc::new(dict);
        assert_eq!(shared.get("k").unwrap(), Value::from(1));
    }

    #[test]
    fn test_get_or_applies_default_only_when_absent() {
        let dict = Dictionary::from_iter([("present", Value::from("yes"))]);
        assert_eq!(dict.get_or("present", Value::from("no")).unwrap().as_str(), Some("yes"));
        assert_eq!(dict.get_or("absent", Value::from("no")).unwrap().as_str(), Some("no"));
    }

    #[test]
    fn test_get_opt() {
        let dict = Dictionary::from_iter([("present", Value::from(1))]);
        assert_eq!(dict.get_opt("present").unwrap(), Some(Value::from(1)));
        assert_eq!(dict.get_opt("absent").unwrap(), None);
    }
}
