//! The immutable, map-backed service provider.

use super::{ExtensionChain, ExtensionMap, FactoryMap, ServiceProvider};
use crate::container::Container;
use crate::error::Result;
use crate::value::Value;
use std::rc::Rc;

/// A service provider holding fixed factory and extension maps.
///
/// Built once through the consuming builder methods and immutable
/// afterward. Registering several extensions for the same id appends them
/// to that id's chain in registration order.
///
/// # Examples
///
/// ```rust
/// use keystack::{Container, StaticProvider, ServiceProvider, Value};
///
/// let provider = StaticProvider::new()
///     .with_factory("port", |_base| Ok(Value::from(8080)))
///     .with_extension("port", |_base, prev| Ok(prev));
///
/// assert!(provider.factories().contains_key("port"));
/// assert_eq!(provider.extensions()["port"].len(), 1);
/// ```
#[derive(Default)]
pub struct StaticProvider {
    factories: FactoryMap,
    extensions: ExtensionMap,
}

impl StaticProvider {
    /// Creates a provider with no factories and no extensions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for `id`, replacing any existing one.
    #[must_use]
    pub fn with_factory(
        mut self,
        id: impl Into<String>,
        factory: impl Fn(&dyn Container) -> Result<Value> + 'static,
    ) -> Self {
        self.factories.insert(id.into(), Rc::new(factory));
        self
    }

    /// Registers an extension for `id`, appended to the id's chain.
    #[must_use]
    pub fn with_extension(
        mut self,
        id: impl Into<String>,
        extension: impl Fn(&dyn Container, Value) -> Result<Value> + 'static,
    ) -> Self {
        self.extensions.entry(id.into()).or_insert_with(ExtensionChain::new).push(Rc::new(extension));
        self
    }
}

impl ServiceProvider for StaticProvider {
    fn factories(&self) -> &FactoryMap {
        &self.factories
    }

    fn extensions(&self) -> &ExtensionMap {
        &self.extensions
    }
}
