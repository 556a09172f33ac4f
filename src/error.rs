//! Error handling for keystack containers.
//!
//! The whole library distinguishes exactly two kinds of failure, following the
//! classic container-interop contract:
//!
//! 1. **Not found**: the requested key does not exist under the component's
//!    own resolution rule. Callers may always treat this as "absent" and fall
//!    back to a default. Detected with [`ContainerError::is_not_found`].
//! 2. **Container failure**: presence or resolution could not be determined
//!    for a reason other than simple absence: invalid wiring (an empty path
//!    delimiter, an unbound proxy), a failed factory or extension, a backing
//!    store that errored, or an unexpected failure from a wrapped inner
//!    container. These carry their cause via [`std::error::Error::source`].
//!
//! Decorators never silently swallow an inner error: they either fully handle
//! it (a fallback key resolved) or re-raise it wrapped with enough context to
//! name the decorator and the key or position involved.
//!
//! # Examples
//!
//! ```rust
//! use keystack::{Container, Dictionary};
//!
//! let dict = Dictionary::default();
//! match dict.get("missing") {
//!     Err(e) if e.is_not_found() => { /* apply a default */ }
//!     Err(e) => panic!("container failure: {e}"),
//!     Ok(_) => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ContainerError>;

/// The error type for all container and service-provider operations.
///
/// Variants fall into two kinds. `NotFound` and `NotFoundAt` are the
/// "not found" kind; every other variant is a genuine container failure.
/// Use [`ContainerError::is_not_found`] rather than matching variants when
/// deciding whether a default may be applied.
#[derive(Error, Debug)]
pub enum ContainerError {
    /// The key does not exist under the component's resolution rule.
    #[error("key '{key}' not found")]
    NotFound {
        /// The key that could not be resolved
        key: String,
    },

    /// The key does not exist, with extra detail about why resolution
    /// stopped (a masked key, an empty path, an unresolved path segment,
    /// a miss reported by a specific composite member).
    #[error("key '{key}' not found: {detail}")]
    NotFoundAt {
        /// The key that could not be resolved
        key: String,
        /// Why the component considers the key absent
        detail: String,
    },

    /// The container was wired or configured in a way that makes the
    /// requested operation impossible (e.g. an empty path delimiter).
    #[error("container is misconfigured: {reason}")]
    Misconfigured {
        /// Description of the configuration problem
        reason: String,
    },

    /// A proxy container was used before its inner container was bound.
    #[error("inner container is not set")]
    ProxyUnbound,

    /// A service factory or extension failed while producing a value.
    #[error("could not create service '{id}'")]
    ServiceCreation {
        /// The service id whose factory or extension failed
        id: String,
        /// The underlying failure
        #[source]
        source: Box<ContainerError>,
    },

    /// A member of a composite container failed unexpectedly during a scan.
    #[error("container at position {position} failed while resolving key '{key}'")]
    AtPosition {
        /// Zero-based position of the offending container in the composite
        position: usize,
        /// The key being resolved when the member failed
        key: String,
        /// The underlying failure
        #[source]
        source: Box<ContainerError>,
    },

    /// An inner container failed unexpectedly inside a decorator.
    #[error("{context}")]
    Inner {
        /// Which decorator failed, and for which key
        context: String,
        /// The underlying failure
        #[source]
        source: Box<ContainerError>,
    },

    /// An injected backing store failed during an I/O operation.
    #[error("store operation '{operation}' failed for key '{key}': {message}")]
    Store {
        /// The store operation that failed ("get", "set", "delete", "clear")
        operation: String,
        /// The store key involved
        key: String,
        /// Description of the store failure
        message: String,
    },

    /// A user-supplied callback (factory, extension, or mapping transform)
    /// reported a domain failure of its own.
    #[error("{message}")]
    Callback {
        /// The failure message reported by the callback
        message: String,
    },
}

impl ContainerError {
    /// Creates a plain not-found error for `key`.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Creates a not-found error for `key` carrying extra resolution detail.
    pub fn not_found_at(key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::NotFoundAt { key: key.into(), detail: detail.into() }
    }

    /// Creates a misconfiguration error.
    pub fn misconfigured(reason: impl Into<String>) -> Self {
        Self::Misconfigured { reason: reason.into() }
    }

    /// Creates a callback failure, for use inside factories, extensions,
    /// and mapping transforms.
    pub fn callback(message: impl Into<String>) -> Self {
        Self::Callback { message: message.into() }
    }

    /// Creates a store failure for the given operation and key.
    pub fn store(
        operation: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Store { operation: operation.into(), key: key.into(), message: message.into() }
    }

    /// Wraps an unexpected inner failure with decorator context.
    pub(crate) fn wrap_inner(context: impl Into<String>, source: ContainerError) -> Self {
        Self::Inner { context: context.into(), source: Box::new(source) }
    }

    /// Returns `true` if this error means "the key is absent" rather than
    /// "resolution failed". Safe to treat as a cue to apply a default.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotFoundAt { .. })
    }
}
