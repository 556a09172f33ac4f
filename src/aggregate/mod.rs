//! Aggregation decorators.
//!
//! Components that combine or post-process other containers:
//!
//! - [`CompositeContainer`] scans an ordered list of containers and serves
//!   the first hit.
//! - [`MappingContainer`] post-processes every resolved value through a
//!   transform.
//! - [`CachingContainer`] memoizes successful resolutions.
//! - [`ProxyContainer`] late-binds its inner container, which is how two
//!   containers that reference each other get wired.

mod caching;
mod composite;
mod mapping;
mod proxy;

pub use caching::CachingContainer;
pub use composite::CompositeContainer;
pub use mapping::{MapFn, MappingContainer};
pub use proxy::ProxyContainer;
