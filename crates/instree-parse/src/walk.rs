//! The schema-interpreting walker.
//!
//! # Architecture
//!
//! The walk follows the descriptor shape, not the tree shape:
//! - `Walker::parse`: resolves indirection, then dispatches on the descriptor
//! - `leaf`: attribute, property and instance reads
//! - `relation`: moves to the current node, the parent, or a named child
//! - `compound`: arrays, maps and objects of nested descriptors
//!
//! # Error Handling
//!
//! Data errors are recorded in the shared `WalkState` and the walk goes on,
//! so one pass reports as much as possible. Only `WalkError` unwinds. Every
//! path push is paired with a pop in `with_path`, on both outcomes.

mod compound;
mod leaf;
mod relation;

use core::cell::RefCell;

use instree_schema::Descriptor;
use instree_tree::TreeAdapter;

use crate::context::{FieldContext, WalkState};
use crate::error::{ParseError, ParseErrorKind, WalkError};
use crate::options::ParseOptions;
use crate::path::{ParsePath, PathSegment};
use crate::value::ParsedFor;

/// Result of interpreting one descriptor: a value, nothing, or a fatal error.
pub type WalkResult<A> = Result<Option<ParsedFor<A>>, WalkError>;

/// Interprets descriptors against one tree, from one root.
///
/// Uses interior mutability so nested calls share the path and the error
/// sink through `&self`.
pub struct Walker<'a, A: TreeAdapter> {
    tree: &'a A,
    root: A::Node,
    options: &'a ParseOptions<A>,
    state: RefCell<WalkState<A::Node>>,
}

impl<'a, A: TreeAdapter> Walker<'a, A> {
    pub fn new(tree: &'a A, root: A::Node, options: &'a ParseOptions<A>) -> Self {
        Self {
            tree,
            root,
            options,
            state: RefCell::new(WalkState::new()),
        }
    }

    pub fn tree(&self) -> &'a A {
        self.tree
    }

    pub fn root(&self) -> A::Node {
        self.root
    }

    /// A copy of the current path.
    pub fn path(&self) -> ParsePath {
        self.state.borrow().path.clone()
    }

    pub fn error_count(&self) -> usize {
        self.state.borrow().error_count()
    }

    /// Record a data error on `node` at the current path.
    pub fn record(&self, node: A::Node, kind: ParseErrorKind) {
        self.state.borrow_mut().record(node, self.root, kind);
    }

    /// Run `f` with `segment` pushed onto the path. The segment is popped
    /// before returning, whatever `f` returned.
    pub fn with_path<T>(&self, segment: PathSegment, f: impl FnOnce(&Self) -> T) -> T {
        self.state.borrow_mut().push_path(segment);
        let result = f(self);
        self.state.borrow_mut().pop_path();
        result
    }

    /// Interpret `descriptor` against `node` inside the enclosing `field`.
    pub fn parse(
        &self,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        descriptor: &Descriptor<A>,
    ) -> WalkResult<A> {
        let node = self.tree.resolve_indirection(node);

        match descriptor {
            Descriptor::Current(inner) => self.parse(node, None, inner),
            Descriptor::Parent(inner) => self.walk_parent(node, field, inner),
            Descriptor::Attribute { guard, name } => {
                Ok(self.walk_attribute(node, field, guard, name.as_deref()))
            }
            Descriptor::Property { guard, name } => {
                Ok(self.walk_property(node, field, guard, name.as_deref()))
            }
            Descriptor::Child { inner, name } => {
                self.walk_child(node, field, inner, name.as_deref())
            }
            Descriptor::Instance(guard) => Ok(self.walk_instance(node, field, guard)),
            Descriptor::Array(element) => self.walk_array(node, field, element),
            Descriptor::Map { key, value } => self.walk_map(node, field, key, value),
            Descriptor::Object(fields) => self.walk_object(node, field, fields),
            Descriptor::Custom { name, meta } => {
                self.walk_custom(node, field, name, meta.as_ref())
            }
        }
    }

    /// The node that `Instance`, `Array`, `Map` and `Object` operate on.
    ///
    /// Without a field context this is `node` itself. Inside a field it is
    /// the child named after the field, as is: an indirection child is only
    /// followed once a nested descriptor is parsed on it. A missing child is
    /// an error unless the field is optional.
    fn field_target(&self, node: A::Node, field: Option<FieldContext<'_>>) -> Option<A::Node> {
        let Some(field) = field else {
            return Some(node);
        };

        let child = self.tree.named_child(node, field.name);
        if child.is_none() && !field.optional {
            self.record(
                node,
                ParseErrorKind::ChildMissing {
                    name: field.name.to_string(),
                },
            );
        }
        child
    }

    fn walk_custom(
        &self,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        name: &str,
        meta: Option<&A::Value>,
    ) -> WalkResult<A> {
        let Some(parser) = self.options.custom_parser(name) else {
            return Err(WalkError::UnregisteredCustom {
                name: name.to_string(),
                path: self.path(),
            });
        };
        parser.parse(self, node, field, meta)
    }

    /// Consume the walker and return the recorded errors.
    pub fn finish(self) -> Vec<ParseError<A::Node>> {
        self.state.into_inner().errors
    }
}
