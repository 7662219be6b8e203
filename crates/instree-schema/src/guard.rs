//! Guards: pass/fail predicates supplied alongside descriptors.
//!
//! Guards never coerce. A [`ValueGuard`] sees the raw attribute or property
//! value (or its absence); a [`NodeGuard`] sees the node itself together with
//! the tree it belongs to.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use instree_tree::TreeAdapter;
use instree_tree::scene::Variant;

type ValueCheck<V> = dyn Fn(Option<&V>) -> bool + Send + Sync;

/// Predicate over a raw value. `None` means the value is absent.
pub struct ValueGuard<V> {
    name: Cow<'static, str>,
    check: Arc<ValueCheck<V>>,
}

impl<V: 'static> ValueGuard<V> {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        check: impl Fn(Option<&V>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Guard over present values only; absence always fails.
    pub fn present(
        name: impl Into<Cow<'static, str>>,
        check: impl Fn(&V) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, move |value: Option<&V>| value.is_some_and(&check))
    }

    /// Accept any present value.
    pub fn any() -> Self {
        Self::new("any", |value: Option<&V>| value.is_some())
    }

    /// Wrap a guard so that absence passes as well.
    pub fn optional(inner: ValueGuard<V>) -> Self {
        let name = format!("{}?", inner.name);
        Self::new(name, move |value: Option<&V>| {
            value.is_none() || inner.check(value)
        })
    }
}

impl<V> ValueGuard<V> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn check(&self, value: Option<&V>) -> bool {
        (self.check)(value)
    }
}

impl<V> Clone for ValueGuard<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            check: Arc::clone(&self.check),
        }
    }
}

impl<V> fmt::Debug for ValueGuard<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueGuard").field(&self.name).finish()
    }
}

type NodeCheck<A> = dyn Fn(&A, <A as TreeAdapter>::Node) -> bool + Send + Sync;

/// Predicate over a node of tree `A`.
pub struct NodeGuard<A: TreeAdapter> {
    name: Cow<'static, str>,
    check: Arc<NodeCheck<A>>,
}

impl<A: TreeAdapter + 'static> NodeGuard<A> {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        check: impl Fn(&A, A::Node) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Accept every node.
    pub fn any() -> Self {
        Self::new("Instance", |_: &A, _| true)
    }

    /// Accept nodes whose class name equals `class`.
    pub fn is_class(class: impl Into<String>) -> Self {
        let class = class.into();
        Self::new(class.clone(), move |tree: &A, node| {
            tree.class_name(node) == class
        })
    }
}

impl<A: TreeAdapter> NodeGuard<A> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn check(&self, tree: &A, node: A::Node) -> bool {
        (self.check)(tree, node)
    }
}

impl<A: TreeAdapter> Clone for NodeGuard<A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            check: Arc::clone(&self.check),
        }
    }
}

impl<A: TreeAdapter> fmt::Debug for NodeGuard<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeGuard").field(&self.name).finish()
    }
}

/// Ready-made guards over scene tree [`Variant`]s.
pub mod variant {
    use super::*;

    pub fn boolean() -> ValueGuard<Variant> {
        ValueGuard::present("boolean", |v: &Variant| matches!(v, Variant::Bool(_)))
    }

    pub fn number() -> ValueGuard<Variant> {
        ValueGuard::present("number", |v: &Variant| matches!(v, Variant::Number(_)))
    }

    pub fn string() -> ValueGuard<Variant> {
        ValueGuard::present("string", |v: &Variant| matches!(v, Variant::String(_)))
    }

    pub fn vector3() -> ValueGuard<Variant> {
        ValueGuard::present("Vector3", |v: &Variant| matches!(v, Variant::Vector3(_)))
    }

    pub fn instance_ref() -> ValueGuard<Variant> {
        ValueGuard::present("Instance", |v: &Variant| {
            matches!(v, Variant::Instance(_))
        })
    }

    /// One of a fixed set of strings.
    pub fn one_of(options: &[&str]) -> ValueGuard<Variant> {
        let options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
        let name = options.join(" | ");
        ValueGuard::present(name, move |v: &Variant| {
            v.as_str().is_some_and(|s| options.iter().any(|o| o == s))
        })
    }
}
