//! Positional state threaded through the walk.
//!
//! `FieldContext` travels by value down the recursion and says which object
//! field (if any) encloses the descriptor being interpreted. `WalkState` is
//! owned by the top-level walk and shared by every nested call: it holds the
//! current path and the errors recorded so far.

use crate::error::{ParseError, ParseErrorKind};
use crate::path::{ParsePath, PathSegment};

/// The object field enclosing the current descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldContext<'f> {
    pub name: &'f str,
    pub optional: bool,
}

impl<'f> FieldContext<'f> {
    pub fn new(name: &'f str, optional: bool) -> Self {
        Self { name, optional }
    }
}

/// Whether the enclosing field, if any, is optional.
pub(crate) fn is_optional(field: Option<FieldContext<'_>>) -> bool {
    field.is_some_and(|field| field.optional)
}

/// Explicit name from the descriptor, else the enclosing field's name.
pub(crate) fn resolve_name<'n>(
    explicit: Option<&'n str>,
    field: Option<FieldContext<'n>>,
) -> Option<&'n str> {
    explicit.or(field.map(|field| field.name))
}

/// Mutable state of one walk.
#[derive(Debug)]
pub struct WalkState<N> {
    /// Current path, starting at the root sentinel
    pub path: ParsePath,
    /// Recorded data errors, in recording order
    pub errors: Vec<ParseError<N>>,
}

impl<N> Default for WalkState<N> {
    fn default() -> Self {
        Self {
            path: ParsePath::root(),
            errors: Vec::new(),
        }
    }
}

impl<N> WalkState<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, snapshotting the current path.
    pub fn record(&mut self, node: N, root: N, kind: ParseErrorKind) {
        let path = self.path.clone();
        self.errors.push(ParseError {
            node,
            root,
            path,
            kind,
        });
    }

    pub fn push_path(&mut self, segment: PathSegment) {
        self.path.push(segment);
    }

    pub fn pop_path(&mut self) {
        self.path.pop();
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
