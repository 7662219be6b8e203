use core::fmt::Debug;
use core::hash::Hash;

use ahash::AHashSet;
use thiserror::Error;

use crate::cache::PropertyCache;

/// Failure to read a property from a node.
///
/// Reading a property a class does not declare is an error on the host
/// platform, not a nil value. Adapters report it here and
/// [`TreeAdapter::has_property`] caches the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("class '{class}' has no property '{property}'")]
    UnknownProperty { class: String, property: String },
}

/// Read-only capabilities the walker needs from a tree.
///
/// Implementors must keep child enumeration order stable for the lifetime of
/// a parse, and must not mutate the tree while a parse is running.
pub trait TreeAdapter {
    /// Handle into the tree. Cheap to copy, comparable and hashable.
    type Node: Copy + Eq + Hash + Debug;
    /// Raw attribute or property value handed to guards.
    type Value: Clone + PartialEq + Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// First child with the given name.
    fn named_child(&self, node: Self::Node, name: &str) -> Option<Self::Node>;

    /// All children, in enumeration order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<Self::Value>;

    /// Read a property.
    ///
    /// `Ok(None)` means the property exists but holds nil. `Err` means the
    /// node's class does not have the property at all.
    fn property(&self, node: Self::Node, name: &str)
    -> Result<Option<Self::Value>, PropertyError>;

    /// Class name of the node. Property existence is assumed to be a function
    /// of the class, which is what makes it cacheable.
    fn class_name(&self, node: Self::Node) -> &str;

    /// One hop of indirection: the node this node stands in for, if any.
    fn redirect(&self, node: Self::Node) -> Option<Self::Node>;

    /// Human readable name used in reports.
    fn display_name(&self, node: Self::Node) -> String;

    /// Whether the node's class has the named property.
    ///
    /// Memoized in the process-wide [`PropertyCache`] per (class, property).
    fn has_property(&self, node: Self::Node, name: &str) -> bool {
        PropertyCache::global().has_property(self, node, name)
    }

    /// Follow redirections until a node that does not redirect.
    ///
    /// A chain that revisits a node stops at the node whose redirect would
    /// close the cycle.
    fn resolve_indirection(&self, node: Self::Node) -> Self::Node {
        let mut current = node;
        let mut visited = AHashSet::new();
        visited.insert(current);
        while let Some(next) = self.redirect(current) {
            if !visited.insert(next) {
                tracing::trace!(?current, ?next, "indirection cycle cut");
                break;
            }
            current = next;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{SceneTree, Variant};

    #[test]
    fn test_resolve_indirection_follows_chain() {
        let mut tree = SceneTree::new("Root", "Folder");
        let root = tree.root();
        let target = tree.add_child(root, "Target", "Part");
        let middle = tree.add_object_value(root, "Middle", Some(target));
        let head = tree.add_object_value(root, "Head", Some(middle));

        assert_eq!(tree.resolve_indirection(head), target);
        assert_eq!(tree.resolve_indirection(target), target);
    }

    #[test]
    fn test_resolve_indirection_empty_object_value_is_terminal() {
        let mut tree = SceneTree::new("Root", "Folder");
        let root = tree.root();
        let empty = tree.add_object_value(root, "Empty", None);

        assert_eq!(tree.resolve_indirection(empty), empty);
    }

    #[test]
    fn test_resolve_indirection_self_reference_terminates() {
        let mut tree = SceneTree::new("Root", "Folder");
        let root = tree.root();
        let looped = tree.add_object_value(root, "Loop", None);
        tree.set_property(looped, "Value", Some(Variant::Instance(looped)));

        assert_eq!(tree.resolve_indirection(looped), looped);
    }

    #[test]
    fn test_resolve_indirection_two_node_cycle_terminates() {
        let mut tree = SceneTree::new("Root", "Folder");
        let root = tree.root();
        let a = tree.add_object_value(root, "A", None);
        let b = tree.add_object_value(root, "B", Some(a));
        tree.set_property(a, "Value", Some(Variant::Instance(b)));

        assert_eq!(tree.resolve_indirection(a), b);
        assert_eq!(tree.resolve_indirection(b), a);
    }
}
