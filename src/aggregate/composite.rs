//! Ordered-fallback aggregation.

use crate::container::{Container, ContainerRef};
use crate::error::{ContainerError, Result};
use crate::value::Value;
use tracing::trace;

/// Scans an ordered list of containers and resolves from the first match.
///
/// `get` asks each member `has` in order; the first member that reports the
/// key supplies the value through its own `get`. A member failing
/// unexpectedly aborts the scan with an error naming the member's position.
/// A member that claims the key but then reports it missing propagates as
/// not-found, also naming the position.
///
/// # Examples
///
/// ```rust
/// use keystack::{CompositeContainer, Container, Dictionary, Value};
/// use std::rc::Rc;
///
/// let overrides = Dictionary::from_iter([("port", Value::from(8080))]);
/// let defaults = Dictionary::from_iter([
///     ("port", Value::from(80)),
///     ("host", Value::from("localhost")),
/// ]);
/// let merged = CompositeContainer::new(vec![
///     Rc::new(overrides) as Rc<dyn Container>,
///     Rc::new(defaults),
/// ]);
///
/// assert_eq!(merged.get("port").unwrap().as_int(), Some(8080));
/// assert_eq!(merged.get("host").unwrap().as_str(), Some("localhost"));
/// ```
pub struct CompositeContainer {
    containers: Vec<ContainerRef>,
}

impl CompositeContainer {
    /// Creates a composite over the given containers; earlier entries win.
    #[must_use]
    pub fn new(containers: impl IntoIterator<Item = ContainerRef>) -> Self {
        Self { containers: containers.into_iter().collect() }
    }

    /// Returns the number of aggregated containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns `true` when no containers are aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    fn at_position(position: usize, key: &str, source: ContainerError) -> ContainerError {
        ContainerError::AtPosition { position, key: key.to_string(), source: Box::new(source) }
    }
}

impl Container for CompositeContainer {
    fn has(&self, key: &str) -> Result<bool> {
        for (position, container) in self.containers.iter().enumerate() {
            if container.has(key).map_err(|e| Self::at_position(position, key, e))? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn get(&self, key: &str) -> Result<Value> {
        for (position, container) in self.containers.iter().enumerate() {
            if container.has(key).map_err(|e| Self::at_position(position, key, e))? {
                trace!(key, position, "composite member matched");
                return container.get(key).map_err(|e| {
                    if e.is_not_found() {
                        ContainerError::not_found_at(
                            key,
                            format!("container at position {position} reported it missing"),
                        )
                    } else {
                        Self::at_position(position, key, e)
                    }
                });
            }
        }
        Err(ContainerError::not_found(key))
    }
}
