//! keystack - composable key-value container resolution
//!
//! A family of interchangeable key→value lookup components sharing one
//! capability contract ([`Container`]), stackable into a resolution
//! pipeline, plus a service-provider model that produces values lazily from
//! registered factories and lets multiple providers extend each other's
//! definitions.
//!
//! # Architecture Overview
//!
//! Callers hold a [`Container`]; a request for a key cascades through zero
//! or more decorators down to a leaf: a [`Dictionary`], a
//! [`DelegatingContainer`] backed by service providers, or an injected
//! persistent [`Store`]. Decorators change key interpretation, caching, or
//! value shaping without changing the base contract, so stacks compose
//! freely.
//!
//! Two error kinds cover everything ([`ContainerError`]): *not found* (the
//! key is absent under the component's resolution rule; safe to default)
//! and *container failure* (resolution broke for any other reason; carries
//! its cause). [`ContainerError::is_not_found`] separates the two.
//!
//! # Core Modules
//!
//! ## Contract and leaves
//! - [`container`] - The `Container`/`MutableContainer` contract and helpers
//! - [`dictionary`] - Immutable in-memory container with functional updates
//! - [`noop`] - Null-object container
//! - [`store`] - Injected persistence capability and its container views
//! - [`flash`] - Read-once-per-cycle container over a store slot
//!
//! ## Decorators
//! - [`transform`] - Aliasing, prefixing, deprefixing, masking
//! - [`path`] - Delimited path walking, flat-to-tree segmenting, lazy
//!   hierarchy wrapping
//! - [`aggregate`] - Composite fallback, value mapping, memoization, and
//!   late-bound proxies
//!
//! ## Service providers
//! - [`provider`] - Factories, ordered extension chains, memoized provider
//!   merging, and the delegating container
//!
//! # Examples
//!
//! A configuration stack with overrides, defaults, and provider-built
//! services:
//!
//! ```rust
//! use keystack::{
//!     CachingContainer, CompositeContainer, Container, ContainerRef,
//!     DelegatingContainer, Dictionary, StaticProvider, Value,
//! };
//! use std::rc::Rc;
//!
//! let defaults = Dictionary::from_iter([("timeout", Value::from(30))]);
//! let overrides = Dictionary::from_iter([("timeout", Value::from(5))]);
//!
//! let provider = StaticProvider::new()
//!     .with_factory("dsn", |_| Ok(Value::from("postgres://localhost")));
//! let services = DelegatingContainer::new(Rc::new(provider));
//!
//! let stack = CachingContainer::new(CompositeContainer::new([
//!     Rc::new(overrides) as ContainerRef,
//!     Rc::new(services) as ContainerRef,
//!     Rc::new(defaults) as ContainerRef,
//! ]));
//!
//! assert_eq!(stack.get("timeout").unwrap().as_int(), Some(5));
//! assert_eq!(stack.get("dsn").unwrap().as_str(), Some("postgres://localhost"));
//! ```
//!
//! # Concurrency
//!
//! Every component is synchronous and confined to one logical unit of work.
//! Shared handles are [`std::rc::Rc`] and mutable state sits behind
//! `RefCell`, so the types are deliberately not `Send`/`Sync`; embedding a
//! container graph in a concurrent runtime means giving each task its own
//! graph or adding external synchronization.

// Contract and leaves
pub mod container;
pub mod dictionary;
pub mod error;
pub mod value;

// Utility containers
pub mod flash;
pub mod noop;
pub mod store;

// Decorators
pub mod aggregate;
pub mod path;
pub mod transform;

// Service providers
pub mod provider;

pub use aggregate::{CachingContainer, CompositeContainer, MapFn, MappingContainer, ProxyContainer};
pub use container::{Container, ContainerExt, ContainerRef, MutableContainer};
pub use dictionary::Dictionary;
pub use error::{ContainerError, Result};
pub use flash::FlashContainer;
pub use noop::NoOpContainer;
pub use path::{HierarchyContainer, PathContainer, SegmentingContainer};
pub use provider::{
    CompositeCachingServiceProvider, DelegatingContainer, ExtensionChain, ExtensionFn,
    ExtensionMap, FactoryFn, FactoryMap, ServiceProvider, StaticProvider,
};
pub use store::{MemoryStore, Store, StoreContainer};
pub use transform::{
    AliasingContainer, DeprefixingContainer, MaskingContainer, PrefixingContainer,
};
pub use value::Value;
