//! Node-link JSON export/import for the graph store.
//!
//! The format mirrors the NetworkX node-link layout: a `nodes` array with
//! node attributes inlined next to the identifier, and a `links` array of
//! `(source, target, relation)` triples. Round-tripping preserves every
//! node tuple and edge triple exactly, except that attributes named after
//! the fixed node fields are dropped (see [`RESERVED_NODE_KEYS`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

use super::store::GraphStore;
use super::types::{Attrs, Node, NodeType};

/// Node attribute keys that collide with the fixed node-link fields.
///
/// Attributes are inlined next to the identifier, so these names belong
/// to the node's identity and cannot double as attribute keys.
pub const RESERVED_NODE_KEYS: [&str; 2] = ["id", "type"];

/// Serialized form of a [`GraphStore`].
///
/// Node attributes named `id` or `type` (see [`RESERVED_NODE_KEYS`]) are
/// omitted from the export rather than clobbering the identity fields;
/// every other attribute round-trips losslessly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphExport {
    /// Always true: the store is a directed graph.
    pub directed: bool,
    /// Always false: one relation label per directed pair.
    pub multigraph: bool,
    /// Graph-level metadata.
    pub graph: GraphMeta,
    /// All nodes.
    pub nodes: Vec<ExportNode>,
    /// All edges.
    pub links: Vec<ExportLink>,
}

/// Graph-level attributes in the export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphMeta {
    /// When the export was produced.
    pub generated_at: DateTime<Utc>,
}

/// A node in node-link form, attributes inlined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(flatten)]
    pub attrs: Attrs,
}

/// An edge in node-link form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportLink {
    pub source: String,
    pub target: String,
    pub relation: String,
}

impl GraphStore {
    /// Build the node-link representation of the store.
    pub fn to_export(&self) -> GraphExport {
        GraphExport {
            directed: true,
            multigraph: false,
            graph: GraphMeta {
                generated_at: Utc::now(),
            },
            nodes: self
                .nodes()
                .map(|node| ExportNode {
                    id: node.id.clone(),
                    node_type: node.node_type,
                    attrs: node
                        .attrs
                        .iter()
                        .filter(|(key, _)| !RESERVED_NODE_KEYS.contains(&key.as_str()))
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect(),
                })
                .collect(),
            links: self
                .edges()
                .map(|(source, target, relation)| ExportLink {
                    source: source.to_string(),
                    target: target.to_string(),
                    relation: relation.to_string(),
                })
                .collect(),
        }
    }

    /// Rebuild a store from its node-link representation.
    pub fn from_export(export: GraphExport) -> Self {
        let mut graph = GraphStore::new();
        for node in export.nodes {
            graph.insert_node(Node {
                id: node.id,
                node_type: node.node_type,
                attrs: node.attrs,
            });
        }
        for link in export.links {
            graph.add_edge(link.source, link.target, link.relation);
        }
        graph
    }

    /// Write the store as pretty-printed node-link JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.to_export())?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a store from a node-link JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let export: GraphExport = serde_json::from_str(&json)?;
        Ok(Self::from_export(export))
    }
}
