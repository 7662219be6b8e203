use core::fmt::{self, Display};

use indexmap::IndexMap;

use crate::adapter::{PropertyError, TreeAdapter};

/// Class name of nodes that redirect through their `Value` property.
pub const OBJECT_VALUE_CLASS: &str = "ObjectValue";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A raw attribute or property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Bool(bool),
    Number(f64),
    String(String),
    Vector3([f64; 3]),
    /// Reference to another node in the same tree.
    Instance(NodeId),
}

impl Variant {
    pub fn type_name(&self) -> &'static str {
        match self {
            Variant::Bool(_) => "boolean",
            Variant::Number(_) => "number",
            Variant::String(_) => "string",
            Variant::Vector3(_) => "Vector3",
            Variant::Instance(_) => "Instance",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Variant::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<NodeId> {
        match self {
            Variant::Instance(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Bool(value)
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Variant::Number(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Variant::Number(value.into())
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(value)
    }
}

impl From<NodeId> for Variant {
    fn from(value: NodeId) -> Self {
        Variant::Instance(value)
    }
}

/// A node in a [`SceneTree`].
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub class_name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub attributes: IndexMap<String, Variant>,
    /// Declared properties. `None` is a declared property holding nil.
    pub properties: IndexMap<String, Option<Variant>>,
}

impl SceneNode {
    fn new(name: String, class_name: String, parent: Option<NodeId>) -> Self {
        Self {
            name,
            class_name,
            parent,
            children: Vec::new(),
            attributes: IndexMap::new(),
            properties: IndexMap::new(),
        }
    }
}

/// Arena-backed scene tree.
///
/// Nodes are never removed, so a [`NodeId`] stays valid for the lifetime of
/// the tree. Every node answers the built-in `Name`, `ClassName` and `Parent`
/// properties in addition to the ones set with [`SceneTree::set_property`].
#[derive(Debug, Clone)]
pub struct SceneTree {
    root: NodeId,
    nodes: Vec<SceneNode>,
}

impl SceneTree {
    /// Create a tree holding a single root node.
    pub fn new(root_name: impl Into<String>, root_class: impl Into<String>) -> Self {
        Self {
            root: NodeId(0),
            nodes: vec![SceneNode::new(root_name.into(), root_class.into(), None)],
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn get_node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child under `parent` and return its id.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        class_name: impl Into<String>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(SceneNode::new(name.into(), class_name.into(), Some(parent)));
        self.node_mut(parent).children.push(id);
        id
    }

    /// Append an `ObjectValue` child whose `Value` property points at `target`.
    pub fn add_object_value(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        target: Option<NodeId>,
    ) -> NodeId {
        let id = self.add_child(parent, name, OBJECT_VALUE_CLASS);
        self.set_property(id, "Value", target.map(Variant::Instance));
        id
    }

    pub fn set_attribute(&mut self, node: NodeId, name: impl Into<String>, value: impl Into<Variant>) {
        self.node_mut(node)
            .attributes
            .insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Option<Variant> {
        self.node_mut(node).attributes.shift_remove(name)
    }

    /// Declare a property on `node`, optionally holding nil.
    pub fn set_property(&mut self, node: NodeId, name: impl Into<String>, value: Option<Variant>) {
        self.node_mut(node).properties.insert(name.into(), value);
    }

    /// Dotted names from the root down to `node`, e.g. `Workspace.Map.Spawn`.
    pub fn full_name(&self, node: NodeId) -> String {
        let mut names = vec![self.node(node).name.as_str()];
        let mut current = self.node(node).parent;
        while let Some(id) = current {
            let parent = self.node(id);
            names.push(parent.name.as_str());
            current = parent.parent;
        }
        names.reverse();
        names.join(".")
    }
}

impl TreeAdapter for SceneTree {
    type Node = NodeId;
    type Value = Variant;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn named_child(&self, node: NodeId, name: &str) -> Option<NodeId> {
        self.node(node)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).name == name)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node).children.clone()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<Variant> {
        self.node(node).attributes.get(name).cloned()
    }

    fn property(&self, node: NodeId, name: &str) -> Result<Option<Variant>, PropertyError> {
        let scene_node = self.node(node);
        match name {
            "Name" => Ok(Some(Variant::String(scene_node.name.clone()))),
            "ClassName" => Ok(Some(Variant::String(scene_node.class_name.clone()))),
            "Parent" => Ok(scene_node.parent.map(Variant::Instance)),
            _ => scene_node
                .properties
                .get(name)
                .cloned()
                .ok_or_else(|| PropertyError::UnknownProperty {
                    class: scene_node.class_name.clone(),
                    property: name.to_string(),
                }),
        }
    }

    fn class_name(&self, node: NodeId) -> &str {
        &self.node(node).class_name
    }

    fn redirect(&self, node: NodeId) -> Option<NodeId> {
        let scene_node = self.node(node);
        if scene_node.class_name != OBJECT_VALUE_CLASS {
            return None;
        }
        scene_node
            .properties
            .get("Value")
            .and_then(|value| value.as_ref())
            .and_then(Variant::as_instance)
    }

    fn display_name(&self, node: NodeId) -> String {
        self.full_name(node)
    }
}
