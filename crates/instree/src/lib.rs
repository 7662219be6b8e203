//! Parse scene-graph instance trees into strongly shaped values.
//!
//! - [`tree`]: the adapter interface and the in-memory [`SceneTree`]
//! - [`schema`]: descriptors and guards
//! - [`parse`]: the walker
//! - [`report`]: grouped, deduplicated error reports

pub mod report;

pub use instree_parse as parse;
pub use instree_schema as schema;
pub use instree_tree as tree;

pub use instree_parse::{
    ParseError, ParseErrorKind, ParseOptions, ParseOutcome, ParseOutcomeFor, Parsed, WalkError,
    parse_with_options,
};
pub use instree_schema::{Descriptor, NodeGuard, ObjectField, ValueGuard};
pub use instree_tree::{NodeId, SceneTree, TreeAdapter, Variant};
pub use report::{ErrorReport, ReportOptions};

pub mod prelude {
    pub use crate::report::{ErrorReport, ReportOptions, report};
    pub use crate::{parse_instance_tree, parse_instance_tree_with};
    pub use instree_parse::{FieldContext, ParseOptions, ParseOutcome, Parsed, WalkError};
    pub use instree_schema::guard::variant;
    pub use instree_schema::{Descriptor, NodeGuard, ObjectField, ValueGuard};
    pub use instree_tree::{NodeId, SceneTree, TreeAdapter, Variant};
}

/// Parse the tree below `root` with default options.
///
/// When any data error is recorded the grouped report is emitted as
/// `tracing` warnings before the outcome is returned.
pub fn parse_instance_tree<A: TreeAdapter>(
    tree: &A,
    root: A::Node,
    descriptor: &Descriptor<A>,
) -> Result<ParseOutcomeFor<A>, WalkError> {
    parse_instance_tree_with(tree, root, descriptor, &ParseOptions::default())
}

/// [`parse_instance_tree`] with explicit parse options.
pub fn parse_instance_tree_with<A: TreeAdapter>(
    tree: &A,
    root: A::Node,
    descriptor: &Descriptor<A>,
    options: &ParseOptions<A>,
) -> Result<ParseOutcomeFor<A>, WalkError> {
    let outcome = parse_with_options(tree, root, descriptor, options)?;
    if let ParseOutcome::Failure { errors, .. } = &outcome {
        report::report(tree, errors);
    }
    Ok(outcome)
}
