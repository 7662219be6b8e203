//! Values produced by the walker.

use indexmap::IndexMap;
use instree_tree::TreeAdapter;
use thisisplural::Plural;

/// Value produced for a descriptor.
///
/// Positions that failed, or that were optional and absent, hold `None`
/// inside arrays and objects so that partially parsed values keep their
/// shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<N, V> {
    /// Raw attribute or property value.
    Value(V),
    Node(N),
    Array(Vec<Option<Parsed<N, V>>>),
    Map(ParsedMap<N, V>),
    Object(IndexMap<String, Option<Parsed<N, V>>>),
}

/// [`Parsed`] for the node and value types of tree `A`.
pub type ParsedFor<A> = Parsed<<A as TreeAdapter>::Node, <A as TreeAdapter>::Value>;

impl<N, V> Parsed<N, V> {
    pub fn as_value(&self) -> Option<&V> {
        match self {
            Parsed::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&N> {
        match self {
            Parsed::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Option<Parsed<N, V>>]> {
        match self {
            Parsed::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ParsedMap<N, V>> {
        match self {
            Parsed::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Option<Parsed<N, V>>>> {
        match self {
            Parsed::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Value of an object field. `None` for non-objects, unknown fields, and
    /// fields that produced nothing.
    pub fn field(&self, name: &str) -> Option<&Parsed<N, V>> {
        self.as_object()?.get(name)?.as_ref()
    }
}

/// Entries of a map descriptor, in first-insertion order.
///
/// Keys are compared with `PartialEq`, so any parsed value can be a key.
/// Inserting an existing key replaces its value and keeps its position.
#[derive(Debug, Clone, PartialEq, Plural)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref, new)]
pub struct ParsedMap<N, V>(Vec<(Parsed<N, V>, Option<Parsed<N, V>>)>);

impl<N, V> Default for ParsedMap<N, V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<N: PartialEq, V: PartialEq> ParsedMap<N, V> {
    /// Insert an entry; returns the previous value when the key existed.
    pub fn insert(
        &mut self,
        key: Parsed<N, V>,
        value: Option<Parsed<N, V>>,
    ) -> Option<Option<Parsed<N, V>>> {
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &Parsed<N, V>) -> Option<&Parsed<N, V>> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn contains_key(&self, key: &Parsed<N, V>) -> bool {
        self.0.iter().any(|(existing, _)| existing == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Parsed<N, V>> {
        self.0.iter().map(|(key, _)| key)
    }
}
