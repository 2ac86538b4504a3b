//! Node types for the citation knowledge graph.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Attribute mapping attached to a node (e.g. `title`, `level`).
///
/// A `BTreeMap` keeps attribute order deterministic across exports.
pub type Attrs = BTreeMap<String, Value>;

/// Type of a node in the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// A scholarly work, keyed by its stable work identifier.
    Paper,

    /// An author, keyed by display name.
    Author,

    /// A research concept, keyed by display name.
    Concept,

    /// Anything else.
    #[default]
    Entity,
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NodeType::Paper => "Paper",
            NodeType::Author => "Author",
            NodeType::Concept => "Concept",
            NodeType::Entity => "Entity",
        };
        write!(f, "{s}")
    }
}

/// A typed, attributed node.
///
/// The identifier is the unique key within a [`GraphStore`]; inserting a
/// second node with the same identifier is a no-op and the first node's
/// attributes win.
///
/// [`GraphStore`]: crate::graph::GraphStore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier (work id, author name, concept name).
    pub id: String,

    /// Node type.
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Additional metadata.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: Attrs,
}

impl Node {
    /// Create a node with no attributes.
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_type,
            attrs: Attrs::new(),
        }
    }

    /// Attach an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Read an attribute.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }
}
