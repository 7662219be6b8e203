//! Schema-interpreting walker for instree.
//!
//! [`parse`] interprets a [`Descriptor`] against a root node of any
//! [`TreeAdapter`] and returns either the produced value or every data error
//! found along the way, together with the partially built value.
//!
//! ```ignore
//! let descriptor = Descriptor::object([
//!     ObjectField::required("Health", Descriptor::attribute(variant::number())),
//!     ObjectField::optional("Spawn", Descriptor::instance(NodeGuard::any())),
//! ]);
//! match parse(&tree, tree.root(), &descriptor)? {
//!     ParseOutcome::Success(value) => { /* use value */ }
//!     ParseOutcome::Failure { errors, .. } => { /* report errors */ }
//! }
//! ```

pub mod context;
pub mod error;
pub mod options;
pub mod path;
pub mod value;
pub mod walk;

pub use context::FieldContext;
pub use error::{ErrorCategory, ParseError, ParseErrorKind, WalkError};
pub use options::{CustomParser, FnParser, ParseOptions};
pub use path::{ParsePath, PathSegment};
pub use value::{Parsed, ParsedFor, ParsedMap};
pub use walk::{WalkResult, Walker};

use instree_schema::Descriptor;
use instree_tree::TreeAdapter;

/// Outcome of a walk that was not aborted.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<N, V> {
    /// No errors were recorded.
    Success(Option<Parsed<N, V>>),
    /// At least one error was recorded. `incomplete` is whatever could be
    /// built anyway, useful for debugging malformed trees.
    Failure {
        errors: Vec<ParseError<N>>,
        incomplete: Option<Parsed<N, V>>,
    },
}

/// [`ParseOutcome`] for the node and value types of tree `A`.
pub type ParseOutcomeFor<A> = ParseOutcome<<A as TreeAdapter>::Node, <A as TreeAdapter>::Value>;

impl<N, V> ParseOutcome<N, V> {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success(_))
    }

    /// Recorded errors; empty on success.
    pub fn errors(&self) -> &[ParseError<N>] {
        match self {
            ParseOutcome::Success(_) => &[],
            ParseOutcome::Failure { errors, .. } => errors,
        }
    }

    /// The produced value, complete or not.
    pub fn value(&self) -> Option<&Parsed<N, V>> {
        match self {
            ParseOutcome::Success(value) => value.as_ref(),
            ParseOutcome::Failure { incomplete, .. } => incomplete.as_ref(),
        }
    }

    /// Treat any recorded error as failure.
    pub fn into_result(self) -> Result<Option<Parsed<N, V>>, Vec<ParseError<N>>> {
        match self {
            ParseOutcome::Success(value) => Ok(value),
            ParseOutcome::Failure { errors, .. } => Err(errors),
        }
    }
}

/// Parse the tree below `root` with default options.
pub fn parse<A: TreeAdapter>(
    tree: &A,
    root: A::Node,
    descriptor: &Descriptor<A>,
) -> Result<ParseOutcomeFor<A>, WalkError> {
    parse_with_options(tree, root, descriptor, &ParseOptions::default())
}

/// Parse the tree below `root`.
///
/// Data errors never abort the walk; they are returned in
/// [`ParseOutcome::Failure`]. `Err` means the descriptor could not be
/// interpreted at all.
pub fn parse_with_options<A: TreeAdapter>(
    tree: &A,
    root: A::Node,
    descriptor: &Descriptor<A>,
    options: &ParseOptions<A>,
) -> Result<ParseOutcomeFor<A>, WalkError> {
    tracing::debug!(descriptor = descriptor.kind(), ?root, "parsing instance tree");

    let walker = Walker::new(tree, root, options);
    let parsed = walker.parse(root, None, descriptor)?;
    let errors = walker.finish();

    tracing::debug!(errors = errors.len(), "instance tree parsed");

    if errors.is_empty() {
        Ok(ParseOutcome::Success(parsed))
    } else {
        Ok(ParseOutcome::Failure {
            errors,
            incomplete: parsed,
        })
    }
}
