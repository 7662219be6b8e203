//! Parse options and custom parser registration.

use core::fmt;

use ahash::AHashMap;
use instree_tree::TreeAdapter;

use crate::context::FieldContext;
use crate::error::WalkError;
use crate::value::ParsedFor;
use crate::walk::Walker;

/// Extraction logic behind a `Custom` descriptor.
///
/// Custom parsers get the walker itself, so they can record data errors at
/// the current path with [`Walker::record`] and recurse into nested
/// descriptors with [`Walker::parse`]. Returning `Err` aborts the whole walk.
pub trait CustomParser<A: TreeAdapter> {
    fn parse(
        &self,
        walker: &Walker<'_, A>,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        meta: Option<&A::Value>,
    ) -> Result<Option<ParsedFor<A>>, WalkError>;
}

/// Adapter turning a closure into a [`CustomParser`].
pub struct FnParser<F>(pub F);

impl<A, F> CustomParser<A> for FnParser<F>
where
    A: TreeAdapter,
    F: Fn(
        &Walker<'_, A>,
        A::Node,
        Option<FieldContext<'_>>,
        Option<&A::Value>,
    ) -> Result<Option<ParsedFor<A>>, WalkError>,
{
    fn parse(
        &self,
        walker: &Walker<'_, A>,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        meta: Option<&A::Value>,
    ) -> Result<Option<ParsedFor<A>>, WalkError> {
        (self.0)(walker, node, field, meta)
    }
}

/// Options for one walk.
pub struct ParseOptions<A: TreeAdapter> {
    custom: AHashMap<String, Box<dyn CustomParser<A>>>,
}

impl<A: TreeAdapter> Default for ParseOptions<A> {
    fn default() -> Self {
        Self {
            custom: AHashMap::new(),
        }
    }
}

impl<A: TreeAdapter> ParseOptions<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom parser under `name`, replacing any previous one.
    pub fn with_custom(
        mut self,
        name: impl Into<String>,
        parser: impl CustomParser<A> + 'static,
    ) -> Self {
        self.custom.insert(name.into(), Box::new(parser));
        self
    }

    /// Register a closure as a custom parser.
    pub fn with_custom_fn<F>(self, name: impl Into<String>, parser: F) -> Self
    where
        F: Fn(
                &Walker<'_, A>,
                A::Node,
                Option<FieldContext<'_>>,
                Option<&A::Value>,
            ) -> Result<Option<ParsedFor<A>>, WalkError>
            + 'static,
    {
        self.with_custom(name, FnParser(parser))
    }

    pub fn custom_parser(&self, name: &str) -> Option<&dyn CustomParser<A>> {
        self.custom.get(name).map(|parser| parser.as_ref())
    }
}

impl<A: TreeAdapter> fmt::Debug for ParseOptions<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.custom.keys().collect();
        names.sort();
        f.debug_struct("ParseOptions")
            .field("custom", &names)
            .finish()
    }
}
