//! Error types for the walker.
//!
//! Two categories:
//! - `ParseError`: data errors recorded at the current path. The walk
//!   continues after recording one.
//! - `WalkError`: the descriptor itself cannot be interpreted. The walk is
//!   aborted and the error is returned to the caller.

use core::fmt::{self, Debug, Display};

use thiserror::Error;

use crate::path::ParsePath;

/// Broad classification of a [`ParseErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A required attribute, property, child or parent is absent.
    MissingReference,
    /// A value is present but its guard rejected it.
    ShapeMismatch,
    /// A name could not be inferred; the descriptor is at fault.
    SchemaMalformed,
    /// Recorded by a custom parser.
    Custom,
}

/// What went wrong at one node. The display text is the report message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    #[error("Attribute name was not provided.")]
    AttributeNameMissing,

    #[error("Attribute '{name}' does not exist on instance.")]
    AttributeMissing { name: String },

    #[error("Attribute '{name}' on instance does not match the provided type.")]
    AttributeMismatch { name: String, expected: String },

    #[error("Property name was not provided.")]
    PropertyNameMissing,

    #[error("Class '{class}' does not have a '{name}' property")]
    UnknownProperty { class: String, name: String },

    #[error("Property '{name}' on instance is set to nil.")]
    PropertyNil { name: String },

    #[error("Property '{name}' on instance does not match the provided type.")]
    PropertyMismatch { name: String, expected: String },

    #[error("Child name was not provided.")]
    ChildNameMissing,

    #[error("Child '{name}' does not exist under instance.")]
    ChildMissing { name: String },

    #[error("Instance does not match instance guard.")]
    InstanceMismatch { expected: String },

    #[error("Instance does not have a parent.")]
    NoParent,

    #[error("{message}")]
    Custom { parser: String, message: String },
}

impl ParseErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParseErrorKind::AttributeNameMissing
            | ParseErrorKind::PropertyNameMissing
            | ParseErrorKind::ChildNameMissing => ErrorCategory::SchemaMalformed,
            ParseErrorKind::AttributeMissing { .. }
            | ParseErrorKind::PropertyNil { .. }
            | ParseErrorKind::ChildMissing { .. }
            | ParseErrorKind::NoParent => ErrorCategory::MissingReference,
            ParseErrorKind::AttributeMismatch { .. }
            | ParseErrorKind::UnknownProperty { .. }
            | ParseErrorKind::PropertyMismatch { .. }
            | ParseErrorKind::InstanceMismatch { .. } => ErrorCategory::ShapeMismatch,
            ParseErrorKind::Custom { .. } => ErrorCategory::Custom,
        }
    }
}

/// A data error recorded during one walk.
///
/// `path` is a snapshot taken when the error was recorded; later path
/// changes made by sibling descents do not affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError<N> {
    /// Node the error was raised on.
    pub node: N,
    /// Root node of the walk that produced the error.
    pub root: N,
    pub path: ParsePath,
    pub kind: ParseErrorKind,
}

impl<N> ParseError<N> {
    /// The human readable message, as shown in reports.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl<N> Display for ParseError<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.path)
    }
}

impl<N: Debug> core::error::Error for ParseError<N> {}

/// Fatal errors that abort the whole walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// A `Custom` descriptor names a parser that was never registered.
    #[error("no custom parser registered for '{name}' at {path}")]
    UnregisteredCustom { name: String, path: ParsePath },

    /// A custom parser gave up on the descriptor.
    #[error("custom parser '{name}' failed at {path}: {reason}")]
    CustomFailed {
        name: String,
        reason: String,
        path: ParsePath,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let cases = [
            (
                ParseErrorKind::AttributeMissing { name: "Health".into() },
                "Attribute 'Health' does not exist on instance.",
            ),
            (
                ParseErrorKind::AttributeMismatch {
                    name: "Health".into(),
                    expected: "number".into(),
                },
                "Attribute 'Health' on instance does not match the provided type.",
            ),
            (
                ParseErrorKind::UnknownProperty {
                    class: "Folder".into(),
                    name: "Size".into(),
                },
                "Class 'Folder' does not have a 'Size' property",
            ),
            (
                ParseErrorKind::PropertyNil { name: "Value".into() },
                "Property 'Value' on instance is set to nil.",
            ),
            (
                ParseErrorKind::ChildMissing { name: "Config".into() },
                "Child 'Config' does not exist under instance.",
            ),
            (ParseErrorKind::NoParent, "Instance does not have a parent."),
        ];
        for (kind, message) in cases {
            assert_eq!(kind.to_string(), message);
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            ParseErrorKind::ChildNameMissing.category(),
            ErrorCategory::SchemaMalformed
        );
        assert_eq!(ParseErrorKind::NoParent.category(), ErrorCategory::MissingReference);
        assert_eq!(
            ParseErrorKind::InstanceMismatch {
                expected: "Part".into()
            }
            .category(),
            ErrorCategory::ShapeMismatch
        );
    }

    #[test]
    fn test_parse_error_display() {
        let error = ParseError {
            node: 1usize,
            root: 0usize,
            path: ParsePath::root(),
            kind: ParseErrorKind::NoParent,
        };
        assert_eq!(error.to_string(), "Instance does not have a parent. at <ROOT>");
        assert_eq!(error.message(), "Instance does not have a parent.");
    }
}
