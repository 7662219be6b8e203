//! Grouped error reports.
//!
//! A walk can record many errors for the same place in the descriptor, e.g.
//! one per array element. Reports group errors by path, drop repeats of the
//! same message on the same node, and cap how many errors each group shows.
//!
//! Rendered form of one group:
//!
//! ```text
//! Error parsing <ROOT>.Items.<ARRAY ELEMENT>:
//! 		For Workspace.Items.Sword: Attribute 'Damage' does not exist on instance.
//! 		For Workspace.Items.Bow: Attribute 'Damage' does not exist on instance.
//! 		For Workspace.Items.Axe: Attribute 'Damage' does not exist on instance.
//! 		+1 more errors, [Workspace.Items.Sword: ..., ...]
//! ```

use core::hash::Hash;

use ahash::{AHashMap, AHashSet};
use indexmap::IndexMap;
use instree_parse::ParseError;
use instree_tree::TreeAdapter;

/// Default cap on errors shown per path.
pub const MAX_PATH_ERROR_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Errors shown inline per path; the rest go to the overflow line.
    pub max_errors_per_path: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_errors_per_path: MAX_PATH_ERROR_COUNT,
        }
    }
}

impl ReportOptions {
    pub fn with_max_errors_per_path(mut self, max: usize) -> Self {
        self.max_errors_per_path = max;
        self
    }
}

/// Deduplicated errors sharing one path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGroup<'e, N> {
    /// Dotted path, e.g. `<ROOT>.Items.<ARRAY ELEMENT>`.
    pub path: String,
    /// Surviving errors, in recording order.
    pub errors: Vec<&'e ParseError<N>>,
}

impl<'e, N> PathGroup<'e, N> {
    /// Errors shown inline under `max`.
    pub fn shown(&self, max: usize) -> &[&'e ParseError<N>] {
        &self.errors[..self.errors.len().min(max)]
    }

    /// How many errors do not fit under `max`.
    pub fn hidden_count(&self, max: usize) -> usize {
        self.errors.len().saturating_sub(max)
    }
}

/// Errors of one walk, grouped for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport<'e, N> {
    groups: Vec<PathGroup<'e, N>>,
    options: ReportOptions,
}

impl<'e, N: Copy + Eq + Hash> ErrorReport<'e, N> {
    pub fn new(errors: &'e [ParseError<N>]) -> Self {
        Self::with_options(errors, ReportOptions::default())
    }

    pub fn with_options(errors: &'e [ParseError<N>], options: ReportOptions) -> Self {
        let mut by_path: IndexMap<String, Vec<&'e ParseError<N>>> = IndexMap::new();
        for error in errors {
            by_path.entry(error.path.to_string()).or_default().push(error);
        }

        let groups = by_path
            .into_iter()
            .map(|(path, errors)| PathGroup {
                path,
                errors: deduplicate(errors),
            })
            .collect();

        Self { groups, options }
    }
}

impl<'e, N: Copy> ErrorReport<'e, N> {
    /// Groups in the order their paths were first seen.
    pub fn groups(&self) -> &[PathGroup<'e, N>] {
        &self.groups
    }

    pub fn options(&self) -> ReportOptions {
        self.options
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Render every line of the report, naming nodes through `tree`.
    pub fn lines<A>(&self, tree: &A) -> Vec<String>
    where
        A: TreeAdapter<Node = N>,
    {
        let max = self.options.max_errors_per_path;
        let describe = |error: &ParseError<N>| {
            format!("{}: {}", tree.display_name(error.node), error.message())
        };

        let mut lines = Vec::new();
        for group in &self.groups {
            lines.push(format!("Error parsing {}:", group.path));
            for error in group.shown(max) {
                lines.push(format!("\t\tFor {}", describe(error)));
            }

            let hidden = group.hidden_count(max);
            if hidden > 0 {
                let all: Vec<String> = group.errors.iter().map(|error| describe(error)).collect();
                lines.push(format!("\t\t+{hidden} more errors, [{}]", all.join(", ")));
            }
        }
        lines
    }

    pub fn render<A>(&self, tree: &A) -> String
    where
        A: TreeAdapter<Node = N>,
    {
        self.lines(tree).join("\n")
    }

    /// Emit every line as a `tracing` warning.
    pub fn emit<A>(&self, tree: &A)
    where
        A: TreeAdapter<Node = N>,
    {
        for line in self.lines(tree) {
            tracing::warn!("{line}");
        }
    }
}

/// Drop errors whose node already produced the same message.
fn deduplicate<N: Copy + Eq + Hash>(errors: Vec<&ParseError<N>>) -> Vec<&ParseError<N>> {
    let mut seen: AHashMap<N, AHashSet<String>> = AHashMap::new();
    errors
        .into_iter()
        .filter(|error| seen.entry(error.node).or_default().insert(error.message()))
        .collect()
}

/// Group, deduplicate and emit `errors` with default options.
pub fn report<A: TreeAdapter>(tree: &A, errors: &[ParseError<A::Node>]) {
    ErrorReport::new(errors).emit(tree);
}
