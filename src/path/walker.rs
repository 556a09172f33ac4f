//! Delimited-path walking decorator.

use crate::container::Container;
use crate::error::{ContainerError, Result};
use crate::value::Value;
use tracing::trace;

/// Interprets keys as delimited paths through nested sub-containers.
///
/// The key is split on the delimiter, empty segments (including a leading
/// delimiter) are discarded, and the walk starts at the inner container.
/// Every intermediate segment must resolve to a [`Value::Container`]; the
/// final segment's value is returned as-is, whether it is a container or a
/// plain value.
///
/// # Examples
///
/// ```rust
/// use keystack::{Container, Dictionary, PathContainer, Value};
/// use std::rc::Rc;
///
/// let leaf = Dictionary::from_iter([("c", Value::from(42))]);
/// let mid = Dictionary::from_iter([("b", Value::Container(Rc::new(leaf)))]);
/// let root = Dictionary::from_iter([("a", Value::Container(Rc::new(mid)))]);
///
/// let paths = PathContainer::new(root, ".");
/// assert_eq!(paths.get("a.b.c").unwrap().as_int(), Some(42));
/// ```
pub struct PathContainer<C> {
    inner: C,
    delimiter: String,
}

impl<C: Container> PathContainer<C> {
    /// Creates a path decorator over `inner` splitting keys on `delimiter`.
    #[must_use]
    pub fn new(inner: C, delimiter: impl Into<String>) -> Self {
        Self { inner, delimiter: delimiter.into() }
    }

    fn step(&self, path: &str, segment: &str, source: ContainerError) -> ContainerError {
        if source.is_not_found() {
            ContainerError::not_found_at(path, format!("segment '{segment}' not found"))
        } else {
            ContainerError::wrap_inner(
                format!("path container failed at segment '{segment}' of '{path}'"),
                source,
            )
        }
    }
}

impl<C: Container> Container for PathContainer<C> {
    fn has(&self, key: &str) -> Result<bool> {
        match self.get(key) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn get(&self, key: &str) -> Result<Value> {
        if self.delimiter.is_empty() {
            return Err(ContainerError::misconfigured("path delimiter is empty"));
        }
        let segments: Vec<&str> =
            key.split(self.delimiter.as_str()).filter(|s| !s.is_empty()).collect();
        let Some((&first, rest)) = segments.split_first() else {
            return Err(ContainerError::not_found_at(key, "path is empty"));
        };
        trace!(key, segments = segments.len(), "walking path");

        let mut value = self.inner.get(first).map_err(|e| self.step(key, first, e))?;
        for (i, &segment) in rest.iter().enumerate() {
            let Value::Container(container) = &value else {
                return Err(ContainerError::not_found_at(
                    key,
                    format!(
                        "segment '{}' did not resolve to a container; remaining path: '{}'",
                        segments[i],
                        segments[i + 1..].join(&self.delimiter),
                    ),
                ));
            };
            value = container.get(segment).map_err(|e| self.step(key, segment, e))?;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use std::rc::Rc;

    /// `{a: {b: {c: 42}}}` as nested containers.
    fn nested() -> Dictionary {
        let leaf = Dictionary::from_iter([("c", Value::from(42))]);
        let mid = Dictionary::from_iter([("b", Value::Container(Rc::new(leaf)))]);
        Dictionary::from_iter([("a", Value::Container(Rc::new(mid)))])
    }

    #[test]
    fn test_walks_nested_containers() {
        let paths = PathContainer::new(nested(), ".");
        assert_eq!(paths.get("a.b.c").unwrap().as_int(), Some(42));
        assert!(paths.has("a.b.c").unwrap());
    }

    #[test]
    fn test_leading_delimiter_and_empty_segments_are_discarded() {
        let paths = PathContainer::new(nested(), ".");
        assert_eq!(paths.get(".a.b.c").unwrap().as_int(), Some(42));
        assert_eq!(paths.get("a..b..c").unwrap().as_int(), Some(42));
    }

    #[test]
    fn test_intermediate_container_is_returned_for_partial_path() {
        let paths = PathContainer::new(nested(), ".");
        assert!(matches!(paths.get("a.b").unwrap(), Value::Container(_)));
    }

    #[test]
    fn test_missing_segment_is_named() {
        let paths = PathContainer::new(nested(), ".");
        let err = paths.get("a.x.c").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("'x'"));
        assert!(!paths.has("a.x.c").unwrap());
    }

    #[test]
    fn test_non_container_intermediate_names_remaining_path() {
        let flat = Dictionary::from_iter([("a", Value::from(1))]);
        let paths = PathContainer::new(flat, ".");
        let err = paths.get("a.b.c").unwrap_err();
        assert!(err.is_not_found());
        let message = err.to_string();
        assert!(message.contains("'a'"));
        assert!(message.contains("b.c"));
    }

    #[test]
    fn test_empty_path_is_not_found() {
        let paths = PathContainer::new(nested(), ".");
        let err = paths.get("").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("path is empty"));
        // A key of only delimiters parses to nothing as well.
        assert!(paths.get("...").unwrap_err().is_not_found());
    }

    #[test]
    fn test_empty_delimiter_is_a_failure_not_a_miss() {
        let paths = PathContainer::new(nested(), "");
        let err = paths.get("a.b.c").unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_single_segment_resolves_against_inner() {
        let paths = PathContainer::new(nested(), "/");
        assert!(matches!(paths.get("a").unwrap(), Value::Container(_)));
    }
}
