//! Attribute, property and instance reads.

use instree_schema::{NodeGuard, ValueGuard};
use instree_tree::TreeAdapter;

use crate::context::{FieldContext, is_optional, resolve_name};
use crate::error::ParseErrorKind;
use crate::value::{Parsed, ParsedFor};

use super::Walker;

impl<'a, A: TreeAdapter> Walker<'a, A> {
    pub(super) fn walk_attribute(
        &self,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        guard: &ValueGuard<A::Value>,
        name: Option<&str>,
    ) -> Option<ParsedFor<A>> {
        let Some(name) = resolve_name(name, field) else {
            self.record(node, ParseErrorKind::AttributeNameMissing);
            return None;
        };

        let attribute = self.tree.attribute(node, name);
        if attribute.is_none() && is_optional(field) {
            return None;
        }

        if !guard.check(attribute.as_ref()) {
            let kind = match attribute {
                None => ParseErrorKind::AttributeMissing {
                    name: name.to_string(),
                },
                Some(_) => ParseErrorKind::AttributeMismatch {
                    name: name.to_string(),
                    expected: guard.name().to_string(),
                },
            };
            self.record(node, kind);
            return None;
        }

        attribute.map(Parsed::Value)
    }

    pub(super) fn walk_property(
        &self,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        guard: &ValueGuard<A::Value>,
        name: Option<&str>,
    ) -> Option<ParsedFor<A>> {
        let Some(name) = resolve_name(name, field) else {
            self.record(node, ParseErrorKind::PropertyNameMissing);
            return None;
        };

        let unknown = || ParseErrorKind::UnknownProperty {
            class: self.tree.class_name(node).to_string(),
            name: name.to_string(),
        };

        if !self.tree.has_property(node, name) {
            self.record(node, unknown());
            return None;
        }

        // The cache answers per class; a node may still refuse the read.
        let Ok(property) = self.tree.property(node, name) else {
            self.record(node, unknown());
            return None;
        };

        if property.is_none() && is_optional(field) {
            return None;
        }

        if !guard.check(property.as_ref()) {
            let kind = match property {
                None => ParseErrorKind::PropertyNil {
                    name: name.to_string(),
                },
                Some(_) => ParseErrorKind::PropertyMismatch {
                    name: name.to_string(),
                    expected: guard.name().to_string(),
                },
            };
            self.record(node, kind);
            return None;
        }

        property.map(Parsed::Value)
    }

    pub(super) fn walk_instance(
        &self,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        guard: &NodeGuard<A>,
    ) -> Option<ParsedFor<A>> {
        let target = self.field_target(node, field)?;

        if !guard.check(self.tree, target) {
            self.record(
                node,
                ParseErrorKind::InstanceMismatch {
                    expected: guard.name().to_string(),
                },
            );
            return None;
        }

        Some(Parsed::Node(target))
    }
}
