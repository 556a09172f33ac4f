//! Value-transforming decorator.

use crate::container::Container;
use crate::error::Result;
use crate::value::Value;

/// The transform applied to every resolved value.
///
/// Receives the resolved value, the key it was resolved under, and the
/// mapping container itself, so transforms can resolve other keys for
/// contextual or recursive mapping.
pub type MapFn = Box<dyn Fn(Value, &str, &dyn Container) -> Result<Value>>;

/// Post-processes everything the inner container resolves.
///
/// `has` delegates untouched; only `get` results pass through the
/// transform. Transform failures surface as the transform reports them
/// (typically [`ContainerError::Callback`]).
///
/// [`ContainerError::Callback`]: crate::ContainerError::Callback
///
/// # Examples
///
/// ```rust
/// use keystack::{Container, Dictionary, MappingContainer, Value};
///
/// let inner = Dictionary::from_iter([("greeting", Value::from("hello"))]);
/// let shouting = MappingContainer::new(inner, |value, _key, _c| {
///     Ok(match value.as_str() {
///         Some(s) => Value::from(s.to_uppercase()),
///         None => value,
///     })
/// });
/// assert_eq!(shouting.get("greeting").unwrap().as_str(), Some("HELLO"));
/// ```
pub struct MappingContainer<C> {
    inner: C,
    transform: MapFn,
}

impl<C: Container> MappingContainer<C> {
    /// Creates a mapping decorator over `inner`.
    #[must_use]
    pub fn new(
        inner: C,
        transform: impl Fn(Value, &str, &dyn Container) -> Result<Value> + 'static,
    ) -> Self {
        Self { inner, transform: Box::new(transform) }
    }
}

impl<C: Container> Container for MappingContainer<C> {
    fn has(&self, key: &str) -> Result<bool> {
        self.inner.has(key)
    }

    fn get(&self, key: &str) -> Result<Value> {
        let value = self.inner.get(key)?;
        (self.transform)(value, key, self)
    }
}
