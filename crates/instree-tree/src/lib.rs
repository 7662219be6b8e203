//! Tree adapter interface for instree.
//!
//! The walker never touches a concrete tree directly. Everything it needs is
//! expressed by [`TreeAdapter`]: parent and child navigation, attribute and
//! property reads, and single-hop redirection for indirection nodes.
//!
//! [`scene::SceneTree`] is an arena-backed reference implementation used by
//! tests and by callers that assemble trees in memory.

/// The adapter trait and its provided navigation helpers.
pub mod adapter;

/// Process-wide memoization of property existence checks.
pub mod cache;

/// An in-memory scene tree implementing [`TreeAdapter`].
pub mod scene;

pub use adapter::{PropertyError, TreeAdapter};
pub use cache::PropertyCache;
pub use scene::{NodeId, SceneTree, Variant};
