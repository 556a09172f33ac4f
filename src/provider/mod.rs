//! The service-provider model: lazy, factory-driven resolution.
//!
//! A [`ServiceProvider`] bundles named **factories** (produce a value for a
//! key, given a base container) and named **extensions** (transform a
//! previously produced value). Providers are merged once by
//! [`CompositeCachingServiceProvider`] (later factories override, same-key
//! extensions chain in registration order) and consumed by a
//! [`DelegatingContainer`] that invokes factories per request.
//!
//! Extensions for a key are an explicit ordered [`ExtensionChain`] folded
//! left-to-right at invocation time, rather than closures nested at merge
//! time: the composition order stays auditable and deep same-key stacks do
//! not nest call frames.
//!
//! # Examples
//!
//! ```rust
//! use keystack::{Container, DelegatingContainer, StaticProvider, Value};
//! use std::rc::Rc;
//!
//! let provider = StaticProvider::new()
//!     .with_factory("greeting", |_base| Ok(Value::from("hello")))
//!     .with_extension("greeting", |_base, prev| {
//!         Ok(Value::from(format!("{}!", prev.as_str().unwrap_or_default())))
//!     });
//!
//! let services = DelegatingContainer::new(Rc::new(provider));
//! assert_eq!(services.get("greeting").unwrap().as_str(), Some("hello!"));
//! ```

mod composite;
mod delegating;
mod r#static;

pub use composite::CompositeCachingServiceProvider;
pub use delegating::DelegatingContainer;
pub use r#static::StaticProvider;

use crate::container::Container;
use crate::error::Result;
use crate::value::Value;
use std::collections::BTreeMap;
use std::rc::Rc;

/// A factory produces the value for a service id, resolving dependencies
/// through the base container it is given.
pub type FactoryFn = Rc<dyn Fn(&dyn Container) -> Result<Value>>;

/// An extension transforms the value produced by a factory (or by earlier
/// extensions) for the same service id.
pub type ExtensionFn = Rc<dyn Fn(&dyn Container, Value) -> Result<Value>>;

/// The map of factories exposed by a provider.
pub type FactoryMap = BTreeMap<String, FactoryFn>;

/// The map of extension chains exposed by a provider.
pub type ExtensionMap = BTreeMap<String, ExtensionChain>;

/// An ordered list of extensions for one service id.
///
/// Applied by folding left-to-right: the first extension receives the
/// factory's value, each later extension receives its predecessor's output.
#[derive(Clone, Default)]
pub struct ExtensionChain {
    links: Vec<ExtensionFn>,
}

impl ExtensionChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chain holding a single extension.
    #[must_use]
    pub fn single(extension: ExtensionFn) -> Self {
        Self { links: vec![extension] }
    }

    /// Appends an extension to the end of the chain.
    pub fn push(&mut self, extension: ExtensionFn) {
        self.links.push(extension);
    }

    /// Appends every extension of `other`, preserving order.
    pub fn append_chain(&mut self, other: &ExtensionChain) {
        self.links.extend(other.links.iter().cloned());
    }

    /// Returns the number of extensions in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` when the chain holds no extensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Folds `value` through the chain, left to right.
    ///
    /// # Errors
    ///
    /// Propagates the first extension failure.
    pub fn apply(&self, base: &dyn Container, value: Value) -> Result<Value> {
        self.links.iter().try_fold(value, |current, extension| extension(base, current))
    }
}

/// A bundle of named factories and named extension chains.
pub trait ServiceProvider {
    /// The factories, keyed by service id.
    fn factories(&self) -> &FactoryMap;

    /// The extension chains, keyed by service id.
    fn extensions(&self) -> &ExtensionMap;
}
