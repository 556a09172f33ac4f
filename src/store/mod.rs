//! The persistent-store capability consumed by cache-style containers.
//!
//! Persistence is always an injected collaborator: the core never picks a
//! storage backend. [`Store`] is the `has`/`get`/`set`/`delete`/`clear`
//! surface that [`FlashContainer`](crate::FlashContainer) and
//! [`StoreContainer`] expect, and [`MemoryStore`] is the in-process
//! reference implementation.
//!
//! Store I/O failures surface as [`ContainerError::Store`]; retry and
//! timeout policy belong to the caller, not the core.
//!
//! [`ContainerError::Store`]: crate::ContainerError::Store

mod container;
mod memory;

pub use container::StoreContainer;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::value::Value;
use std::time::Duration;

/// A key-value store with optional per-entry time-to-live.
///
/// Implementations are expected to be confined to one logical unit of work,
/// like every other component in this crate; a store backed by a genuinely
/// shared resource must handle its own synchronization.
pub trait Store {
    /// Returns whether the store holds an entry for `key`.
    ///
    /// # Errors
    ///
    /// Fails with a store error when presence could not be determined.
    fn has(&self, key: &str) -> Result<bool>;

    /// Reads the entry for `key`.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error when the entry is absent, or a store
    /// error when the read failed.
    fn get(&self, key: &str) -> Result<Value>;

    /// Writes `value` under `key`, optionally expiring after `ttl`.
    ///
    /// # Errors
    ///
    /// Fails with a store error when the write failed.
    fn set(&self, key: &str, value: Value, ttl: Option<Duration>) -> Result<()>;

    /// Deletes the entry for `key`. Deleting an absent entry is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Fails with a store error when the delete failed.
    fn delete(&self, key: &str) -> Result<()>;

    /// Deletes every entry.
    ///
    /// # Errors
    ///
    /// Fails with a store error when the clear failed.
    fn clear(&self) -> Result<()>;
}
