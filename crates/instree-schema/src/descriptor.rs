use instree_tree::TreeAdapter;

use crate::guard::{NodeGuard, ValueGuard};

/// How to extract one value from a tree of `A`.
///
/// Inside an [`Descriptor::Object`] field, `Array`, `Map`, `Object` and
/// `Instance` implicitly target the child named after the field, while
/// `Attribute`, `Property` and `Child` use the field name as their default
/// name. `Current`, `Parent` and `Child` drop the field context for
/// everything nested inside them.
#[derive(Debug, Clone)]
pub enum Descriptor<A: TreeAdapter> {
    /// Reinterpret the current node, clearing the field context.
    Current(Box<Descriptor<A>>),
    /// Move to the parent node.
    Parent(Box<Descriptor<A>>),
    Attribute {
        guard: ValueGuard<A::Value>,
        /// Falls back to the enclosing field name.
        name: Option<String>,
    },
    Property {
        guard: ValueGuard<A::Value>,
        /// Falls back to the enclosing field name.
        name: Option<String>,
    },
    /// Move to a named child.
    Child {
        inner: Box<Descriptor<A>>,
        /// Falls back to the enclosing field name.
        name: Option<String>,
    },
    /// The target node itself, checked by a guard.
    Instance(NodeGuard<A>),
    /// Every child of the target, in enumeration order.
    Array(Box<Descriptor<A>>),
    /// Every child of the target parsed once as a key and once as a value.
    Map {
        key: Box<Descriptor<A>>,
        value: Box<Descriptor<A>>,
    },
    Object(Vec<ObjectField<A>>),
    /// Extraction delegated to a custom parser registered under `name`.
    Custom {
        name: String,
        meta: Option<A::Value>,
    },
}

/// One named field of an object descriptor.
#[derive(Debug, Clone)]
pub struct ObjectField<A: TreeAdapter> {
    pub name: String,
    pub descriptor: Descriptor<A>,
    pub optional: bool,
}

impl<A: TreeAdapter> ObjectField<A> {
    pub fn required(name: impl Into<String>, descriptor: Descriptor<A>) -> Self {
        Self {
            name: name.into(),
            descriptor,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, descriptor: Descriptor<A>) -> Self {
        Self {
            name: name.into(),
            descriptor,
            optional: true,
        }
    }
}

impl<A: TreeAdapter> Descriptor<A> {
    pub fn current(inner: Descriptor<A>) -> Self {
        Descriptor::Current(Box::new(inner))
    }

    pub fn parent(inner: Descriptor<A>) -> Self {
        Descriptor::Parent(Box::new(inner))
    }

    /// Attribute named after the enclosing field.
    pub fn attribute(guard: ValueGuard<A::Value>) -> Self {
        Descriptor::Attribute { guard, name: None }
    }

    pub fn named_attribute(name: impl Into<String>, guard: ValueGuard<A::Value>) -> Self {
        Descriptor::Attribute {
            guard,
            name: Some(name.into()),
        }
    }

    /// Property named after the enclosing field.
    pub fn property(guard: ValueGuard<A::Value>) -> Self {
        Descriptor::Property { guard, name: None }
    }

    pub fn named_property(name: impl Into<String>, guard: ValueGuard<A::Value>) -> Self {
        Descriptor::Property {
            guard,
            name: Some(name.into()),
        }
    }

    /// Child named after the enclosing field.
    pub fn child(inner: Descriptor<A>) -> Self {
        Descriptor::Child {
            inner: Box::new(inner),
            name: None,
        }
    }

    pub fn named_child(name: impl Into<String>, inner: Descriptor<A>) -> Self {
        Descriptor::Child {
            inner: Box::new(inner),
            name: Some(name.into()),
        }
    }

    pub fn instance(guard: NodeGuard<A>) -> Self {
        Descriptor::Instance(guard)
    }

    pub fn array(element: Descriptor<A>) -> Self {
        Descriptor::Array(Box::new(element))
    }

    pub fn map(key: Descriptor<A>, value: Descriptor<A>) -> Self {
        Descriptor::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn object(fields: impl IntoIterator<Item = ObjectField<A>>) -> Self {
        Descriptor::Object(fields.into_iter().collect())
    }

    pub fn custom(name: impl Into<String>, meta: Option<A::Value>) -> Self {
        Descriptor::Custom {
            name: name.into(),
            meta,
        }
    }

    /// Short name of the variant, for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Descriptor::Current(_) => "self",
            Descriptor::Parent(_) => "parent",
            Descriptor::Attribute { .. } => "attribute",
            Descriptor::Property { .. } => "property",
            Descriptor::Child { .. } => "child",
            Descriptor::Instance(_) => "instance",
            Descriptor::Array(_) => "array",
            Descriptor::Map { .. } => "map",
            Descriptor::Object(_) => "object",
            Descriptor::Custom { .. } => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::variant;
    use instree_tree::SceneTree;

    type D = Descriptor<SceneTree>;

    #[test]
    fn test_object_keeps_field_order() {
        let d = D::object([
            ObjectField::required("b", D::attribute(variant::number())),
            ObjectField::optional("a", D::attribute(variant::string())),
        ]);
        let Descriptor::Object(fields) = d else {
            panic!("expected object");
        };
        let names: Vec<_> = fields.iter().map(|f| (f.name.as_str(), f.optional)).collect();
        assert_eq!(names, vec![("b", false), ("a", true)]);
    }

    #[test]
    fn test_named_constructors() {
        let d = D::named_property("Size", variant::vector3());
        assert!(matches!(
            &d,
            Descriptor::Property { name: Some(n), guard } if n == "Size" && guard.name() == "Vector3"
        ));

        let d = D::named_child("Config", D::instance(NodeGuard::any()));
        assert!(matches!(&d, Descriptor::Child { name: Some(n), .. } if n == "Config"));
    }

    #[test]
    fn test_kind() {
        let attr = D::attribute(variant::boolean());
        let array = D::array(D::instance(NodeGuard::any()));
        let current = D::current(D::instance(NodeGuard::any()));

        assert_eq!(attr.kind(), "attribute");
        assert_eq!(array.kind(), "array");
        assert_eq!(current.kind(), "self");
    }
}
