//! Schema descriptors for instree.
//!
//! A [`Descriptor`] says how one value is extracted from a tree: from the
//! current node, its parent, an attribute, a property, a named child, or
//! from arrays, maps and objects of nested descriptors. Descriptors are
//! immutable once built and are only ever read by the walker.

pub mod descriptor;
pub mod guard;

pub use descriptor::{Descriptor, ObjectField};
pub use guard::{NodeGuard, ValueGuard};
