//! Arrays, maps and objects.
//!
//! Each of them works on the field target (see `Walker::field_target`) and
//! keeps going after a failed element or field, so the result may be
//! partial while the errors pile up in the shared state.

use indexmap::IndexMap;
use instree_schema::{Descriptor, ObjectField};
use instree_tree::TreeAdapter;

use crate::context::FieldContext;
use crate::path::PathSegment;
use crate::value::{Parsed, ParsedMap};

use super::{WalkResult, Walker};

impl<'a, A: TreeAdapter> Walker<'a, A> {
    pub(super) fn walk_array(
        &self,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        element: &Descriptor<A>,
    ) -> WalkResult<A> {
        let Some(target) = self.field_target(node, field) else {
            return Ok(None);
        };

        let children = self.tree.children(target);
        let mut items = Vec::with_capacity(children.len());
        for child in children {
            let item = self.with_path(PathSegment::ArrayElement, |walker| {
                walker.parse(child, None, element)
            })?;
            items.push(item);
        }

        Ok(Some(Parsed::Array(items)))
    }

    /// Both the key and the value descriptor see the map's own field
    /// context, not a fresh one.
    pub(super) fn walk_map(
        &self,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        key: &Descriptor<A>,
        value: &Descriptor<A>,
    ) -> WalkResult<A> {
        let Some(target) = self.field_target(node, field) else {
            return Ok(None);
        };

        let mut map = ParsedMap::new();
        for child in self.tree.children(target) {
            let parsed_key = self.with_path(PathSegment::MapKey, |walker| {
                walker.parse(child, field, key)
            })?;
            let parsed_value = self.with_path(PathSegment::MapValue, |walker| {
                walker.parse(child, field, value)
            })?;

            if let Some(parsed_key) = parsed_key {
                map.insert(parsed_key, parsed_value);
            }
        }

        Ok(Some(Parsed::Map(map)))
    }

    pub(super) fn walk_object(
        &self,
        node: A::Node,
        field: Option<FieldContext<'_>>,
        fields: &[ObjectField<A>],
    ) -> WalkResult<A> {
        let Some(target) = self.field_target(node, field) else {
            return Ok(None);
        };

        let mut object = IndexMap::with_capacity(fields.len());
        for object_field in fields {
            let context = FieldContext::new(&object_field.name, object_field.optional);
            let value = self.with_path(PathSegment::Field(object_field.name.clone()), |walker| {
                walker.parse(target, Some(context), &object_field.descriptor)
            })?;
            object.insert(object_field.name.clone(), value);
        }

        Ok(Some(Parsed::Object(object)))
    }
}
