//! Key-transform decorators.
//!
//! These decorators rewrite or filter keys before delegating to an inner
//! container, leaving values untouched:
//!
//! - [`AliasingContainer`] substitutes keys through an alias map.
//! - [`PrefixingContainer`] expects outer keys to carry a prefix and strips
//!   it before delegating; non-strict mode falls back to the key as given.
//! - [`DeprefixingContainer`] is the inverse: outer keys are bare, the
//!   prefix is added internally; non-strict mode falls back to the bare key.
//! - [`MaskingContainer`] exposes or hides keys per a default policy with
//!   per-key overrides.
//!
//! All four are generic over the inner container, so stacks compose without
//! boxing; use [`ContainerRef`](crate::ContainerRef) as the inner type when
//! type erasure is needed.

mod aliasing;
mod deprefixing;
mod masking;
mod prefixing;

pub use aliasing::AliasingContainer;
pub use deprefixing::DeprefixingContainer;
pub use masking::MaskingContainer;
pub use prefixing::PrefixingContainer;
