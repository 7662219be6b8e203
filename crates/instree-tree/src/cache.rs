use std::sync::{LazyLock, PoisonError, RwLock};

use ahash::AHashMap;

use crate::adapter::TreeAdapter;

static PROPERTY_CACHE: LazyLock<PropertyCache> = LazyLock::new(PropertyCache::new);

/// Memoized answers to "does class `C` have property `P`".
///
/// The process-wide instance lives for the whole program and only grows.
/// Its key space is bounded by the classes and property names the host
/// exposes, not by the amount of data parsed.
#[derive(Debug, Default)]
pub struct PropertyCache {
    // class name -> property name -> exists
    entries: RwLock<AHashMap<String, AHashMap<String, bool>>>,
}

impl PropertyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`TreeAdapter::has_property`].
    pub fn global() -> &'static PropertyCache {
        &PROPERTY_CACHE
    }

    /// Cached existence check; on a miss the adapter is asked once and any
    /// failure is remembered as `false`.
    pub fn has_property<A: TreeAdapter + ?Sized>(
        &self,
        tree: &A,
        node: A::Node,
        property: &str,
    ) -> bool {
        let class = tree.class_name(node);
        if let Some(exists) = self.get(class, property) {
            return exists;
        }

        let exists = tree.property(node, property).is_ok();
        tracing::trace!(class, property, exists, "property existence cached");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(class.to_string())
            .or_default()
            .insert(property.to_string(), exists);
        exists
    }

    /// Look up a cached answer without consulting any tree.
    pub fn get(&self, class: &str, property: &str) -> Option<bool> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(class)
            .and_then(|properties| properties.get(property))
            .copied()
    }

    /// Number of cached (class, property) pairs.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|properties| properties.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
