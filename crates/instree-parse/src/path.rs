use core::fmt::{self, Display};

use thisisplural::Plural;

/// Literal text of the sentinel segments.
pub const ROOT_SEGMENT: &str = "<ROOT>";
pub const ARRAY_ELEMENT_SEGMENT: &str = "<ARRAY ELEMENT>";
pub const MAP_KEY_SEGMENT: &str = "<MAP KEY>";
pub const MAP_VALUE_SEGMENT: &str = "<MAP VALUE>";

/// Position of the walker inside the descriptor, from the root down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Plural)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref)]
pub struct ParsePath(pub Vec<PathSegment>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Root,
    /// Object field name
    Field(String),
    /// Any element of an array; elements are not indexed
    ArrayElement,
    MapKey,
    MapValue,
}

impl ParsePath {
    /// A path holding only the root sentinel.
    pub fn root() -> Self {
        ParsePath(vec![PathSegment::Root])
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.0.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Each segment rendered on its own.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl Default for ParsePath {
    fn default() -> Self {
        Self::root()
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Root => f.write_str(ROOT_SEGMENT),
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::ArrayElement => f.write_str(ARRAY_ELEMENT_SEGMENT),
            PathSegment::MapKey => f.write_str(MAP_KEY_SEGMENT),
            PathSegment::MapValue => f.write_str(MAP_VALUE_SEGMENT),
        }
    }
}

impl Display for ParsePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
