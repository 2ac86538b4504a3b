//! In-memory directed graph store with typed, deduplicated nodes.

use std::collections::BTreeMap;

use super::types::{Attrs, Node, NodeType};

/// The citation knowledge graph.
///
/// Nodes are keyed by identifier; edges are directed and carry exactly one
/// relation label per ordered `(source, target)` pair. Re-adding the same
/// pair overwrites the label (last write wins); the store deliberately is
/// not a multigraph. Nothing is ever removed during a run.
///
/// The store is single-writer by construction: the orchestrator holds it
/// and hands agents `&mut` access one at a time. Edge endpoints are not
/// required to exist as nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStore {
    nodes: BTreeMap<String, Node>,
    // source -> target -> relation label
    edges: BTreeMap<String, BTreeMap<String, String>>,
}

impl GraphStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Node Operations ====================

    /// Insert a node if its identifier is absent.
    ///
    /// Returns whether the node was inserted. Duplicate insertion is a
    /// no-op: attributes of an existing node are never merged or
    /// overwritten.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        node_type: NodeType,
        attrs: Attrs,
    ) -> bool {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(
            id.clone(),
            Node {
                id,
                node_type,
                attrs,
            },
        );
        true
    }

    /// Insert a prebuilt node if its identifier is absent.
    pub fn insert_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.nodes.insert(node.id.clone(), node);
        true
    }

    /// Whether a node with this identifier exists.
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get a node by identifier.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all nodes in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    // ==================== Edge Operations ====================

    /// Insert a directed edge with a relation label.
    ///
    /// Returns whether the `(source, target)` pair was new. Re-adding an
    /// existing pair replaces its relation label.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        relation: impl Into<String>,
    ) -> bool {
        self.edges
            .entry(source.into())
            .or_default()
            .insert(target.into(), relation.into())
            .is_none()
    }

    /// Whether a directed edge exists between the pair.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .get(source)
            .is_some_and(|targets| targets.contains_key(target))
    }

    /// Relation label of the edge between the pair, if any.
    pub fn relation(&self, source: &str, target: &str) -> Option<&str> {
        self.edges
            .get(source)
            .and_then(|targets| targets.get(target))
            .map(String::as_str)
    }

    /// Successor identifiers of a node, in deterministic order.
    pub fn get_neighbors(&self, id: &str) -> Vec<&str> {
        self.edges
            .get(id)
            .map(|targets| targets.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    /// Iterate over all `(source, target, relation)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.edges.iter().flat_map(|(source, targets)| {
            targets.iter().map(move |(target, relation)| {
                (source.as_str(), target.as_str(), relation.as_str())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attrs(pairs: &[(&str, serde_json::Value)]) -> Attrs {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn add_node_is_idempotent_and_keeps_first_attrs() {
        let mut graph = GraphStore::new();
        assert!(graph.add_node("W1", NodeType::Paper, attrs(&[("title", json!("First"))])));
        assert!(!graph.add_node("W1", NodeType::Paper, attrs(&[("title", json!("Second"))])));

        assert_eq!(graph.node_count(), 1);
        let node = graph.get_node("W1").unwrap();
        assert_eq!(node.attr("title"), Some(&json!("First")));
    }

    #[test]
    fn duplicate_node_does_not_change_type() {
        let mut graph = GraphStore::new();
        graph.add_node("Ada Lovelace", NodeType::Author, Attrs::new());
        graph.add_node("Ada Lovelace", NodeType::Concept, Attrs::new());
        assert_eq!(
            graph.get_node("Ada Lovelace").unwrap().node_type,
            NodeType::Author
        );
    }

    #[test]
    fn add_edge_is_idempotent_per_pair() {
        let mut graph = GraphStore::new();
        assert!(graph.add_edge("W1", "W2", "cites"));
        assert!(!graph.add_edge("W1", "W2", "cites"));

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("W1", "W2"));
        assert!(!graph.has_edge("W2", "W1"));
    }

    #[test]
    fn same_pair_overwrites_relation_label() {
        let mut graph = GraphStore::new();
        graph.add_edge("W1", "W2", "cites");
        graph.add_edge("W1", "W2", "hasConcept");

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.relation("W1", "W2"), Some("hasConcept"));
    }

    #[test]
    fn neighbors_are_successors_only() {
        let mut graph = GraphStore::new();
        graph.add_edge("W1", "W2", "cites");
        graph.add_edge("W1", "W3", "cites");
        graph.add_edge("W4", "W1", "cites");

        assert_eq!(graph.get_neighbors("W1"), vec!["W2", "W3"]);
        assert_eq!(graph.get_neighbors("W2"), Vec::<&str>::new());
    }

    #[test]
    fn neighbors_order_is_stable() {
        let mut graph = GraphStore::new();
        graph.add_edge("W1", "Wc", "cites");
        graph.add_edge("W1", "Wa", "cites");
        graph.add_edge("W1", "Wb", "cites");

        let first = graph.get_neighbors("W1");
        let second = graph.get_neighbors("W1");
        assert_eq!(first, second);
    }

    #[test]
    fn edge_endpoints_need_not_be_nodes() {
        let mut graph = GraphStore::new();
        graph.add_edge("W1", "W2", "cites");
        assert!(!graph.has_node("W1"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn edges_iterates_all_triples() {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "W1", "writtenBy");
        graph.add_edge("W1", "C", "hasConcept");

        let triples: Vec<_> = graph.edges().collect();
        assert_eq!(
            triples,
            vec![("A", "W1", "writtenBy"), ("W1", "C", "hasConcept")]
        );
    }
}
