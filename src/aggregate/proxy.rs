//! Late-binding decorator for circular wiring.

use crate::container::{Container, ContainerRef};
use crate::error::{ContainerError, Result};
use crate::value::Value;
use std::cell::RefCell;

/// A container whose inner target is bound after construction.
///
/// This exists for two-phase wiring: when two containers need to reference
/// each other, construct both with proxies in the reference slots, then bind
/// every proxy before the graph is used. Using a proxy before binding fails
/// fast with [`ContainerError::ProxyUnbound`]; it is never a silent no-op.
/// The target may be rebound at any time.
///
/// # Examples
///
/// ```rust
/// use keystack::{Container, Dictionary, ProxyContainer, Value};
/// use std::rc::Rc;
///
/// let proxy = ProxyContainer::new();
/// assert!(proxy.get("k").is_err());
///
/// proxy.set_inner_container(Rc::new(Dictionary::from_iter([("k", Value::from(1))])));
/// assert_eq!(proxy.get("k").unwrap().as_int(), Some(1));
/// ```
#[derive(Default)]
pub struct ProxyContainer {
    inner: RefCell<Option<ContainerRef>>,
}

impl ProxyContainer {
    /// Creates an unbound proxy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a proxy already bound to `inner`.
    #[must_use]
    pub fn bound(inner: ContainerRef) -> Self {
        Self { inner: RefCell::new(Some(inner)) }
    }

    /// Binds or rebinds the inner container.
    pub fn set_inner_container(&self, inner: ContainerRef) {
        *self.inner.borrow_mut() = Some(inner);
    }

    /// Returns whether an inner container has been bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.inner.borrow().is_some()
    }

    // Clone the handle out so no borrow is held while delegating; a
    // delegated call is allowed to rebind this very proxy.
    fn target(&self) -> Result<ContainerRef> {
        self.inner.borrow().clone().ok_or(ContainerError::ProxyUnbound)
    }
}

impl Container for ProxyContainer {
    fn has(&self, key: &str) -> Result<bool> {
        self.target()?.has(key)
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.target()?.get(key)
    }
}
