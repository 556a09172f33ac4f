//! Path and hierarchy decorators.
//!
//! Three ways of treating keys as trees:
//!
//! - [`PathContainer`] interprets a key as a delimited path and walks a tree
//!   of nested sub-containers segment by segment.
//! - [`SegmentingContainer`] goes the other way: it presents a *flat*
//!   container with delimited keys as a navigable tree, descending by
//!   returning deeper views of itself.
//! - [`HierarchyContainer`] wraps a nested map structure and lazily
//!   materializes sub-containers in place as the structure is visited.

mod hierarchy;
mod segmenting;
mod walker;

pub use hierarchy::HierarchyContainer;
pub use segmenting::SegmentingContainer;
pub use walker::PathContainer;
