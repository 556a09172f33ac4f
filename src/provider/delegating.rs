//! Provider-backed container performing lazy factory invocation.

use super::ServiceProvider;
use crate::container::{Container, ContainerRef};
use crate::error::{ContainerError, Result};
use crate::value::Value;
use std::rc::Rc;
use tracing::trace;

/// Resolves keys by invoking a provider's factories and extensions.
///
/// `get(id)` looks the id up in the provider's factories; a missing id is
/// not-found. The factory, and afterwards the id's extension chain if any,
/// is invoked against a **base container**: the parent supplied at
/// construction, or the delegating container itself when no parent was
/// given. The self-as-base default lets factories resolve sibling services
/// through the same provider without a separately wired root.
///
/// Any factory or extension failure, not-found included, is wrapped as
/// [`ContainerError::ServiceCreation`]: an inner dependency miss must never
/// masquerade as absence of the requested id itself.
///
/// `has(id)` consults factories only; an id with extensions but no factory
/// is not resolvable and reports absent.
///
/// # Examples
///
/// ```rust
/// use keystack::{Container, DelegatingContainer, StaticProvider, Value};
/// use std::rc::Rc;
///
/// let provider = StaticProvider::new()
///     .with_factory("host", |_base| Ok(Value::from("localhost")))
///     .with_factory("url", |base| {
///         let host = base.get("host")?;
///         Ok(Value::from(format!("http://{}/", host.as_str().unwrap_or_default())))
///     });
///
/// let services = DelegatingContainer::new(Rc::new(provider));
/// assert_eq!(services.get("url").unwrap().as_str(), Some("http://localhost/"));
/// ```
pub struct DelegatingContainer {
    provider: Rc<dyn ServiceProvider>,
    parent: Option<ContainerRef>,
}

impl DelegatingContainer {
    /// Creates a delegating container that uses itself as the base for
    /// factory invocation.
    #[must_use]
    pub fn new(provider: Rc<dyn ServiceProvider>) -> Self {
        Self { provider, parent: None }
    }

    /// Creates a delegating container whose factories resolve dependencies
    /// against `parent` instead of this container.
    #[must_use]
    pub fn with_parent(provider: Rc<dyn ServiceProvider>, parent: ContainerRef) -> Self {
        Self { provider, parent: Some(parent) }
    }

    fn with_base<R>(&self, f: impl FnOnce(&dyn Container) -> R) -> R {
        match &self.parent {
            Some(parent) => f(parent.as_ref()),
            None => f(self),
        }
    }

    fn creation_failed(id: &str, source: ContainerError) -> ContainerError {
        ContainerError::ServiceCreation { id: id.to_string(), source: Box::new(source) }
    }
}

impl Container for DelegatingContainer {
    fn has(&self, id: &str) -> Result<bool> {
        Ok(self.provider.factories().contains_key(id))
    }

    fn get(&self, id: &str) -> Result<Value> {
        let factory =
            self.provider.factories().get(id).ok_or_else(|| ContainerError::not_found(id))?;
        trace!(id, "invoking service factory");
        let value =
            self.with_base(|base| factory(base)).map_err(|e| Self::creation_failed(id, e))?;

        match self.provider.extensions().get(id) {
            Some(chain) if !chain.is_empty() => {
                trace!(id, extensions = chain.len(), "applying extension chain");
                self.with_base(|base| chain.apply(base, value))
                    .map_err(|e| Self::creation_failed(id, e))
            }
            _ => Ok(value),
        }
    }
}
