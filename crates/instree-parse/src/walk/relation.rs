//! Moves between nodes: the parent and named children.
//!
//! Both transitions drop the field context, so nested descriptors see the
//! new node as their own root.

use instree_schema::Descriptor;
use instree_tree::TreeAdapter;

use crate::context::{FieldContext, is_optional, resolve_name};
use crate::error::ParseErrorKind;

use super::{WalkResult, Walker};

impl<'a, A: TreeAdapter> Walker<'a, A> {
    pub(super) fn walk_parent(
        &self,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        inner: &Descriptor<A>,
    ) -> WalkResult<A> {
        match self.tree.parent(node) {
            Some(parent) => self.parse(parent, None, inner),
            None => {
                if !is_optional(field) {
                    self.record(node, ParseErrorKind::NoParent);
                }
                Ok(None)
            }
        }
    }

    pub(super) fn walk_child(
        &self,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        inner: &Descriptor<A>,
        name: Option<&str>,
    ) -> WalkResult<A> {
        let Some(name) = resolve_name(name, field) else {
            self.record(node, ParseErrorKind::ChildNameMissing);
            return Ok(None);
        };

        match self.tree.named_child(node, name) {
            Some(child) => self.parse(child, None, inner),
            None => {
                if !is_optional(field) {
                    self.record(
                        node,
                        ParseErrorKind::ChildMissing {
                            name: name.to_string(),
                        },
                    );
                }
                Ok(None)
            }
        }
    }
}
