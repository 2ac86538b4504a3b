//! Property-based tests for the graph store invariants.
//!
//! These validate the dedup contract over arbitrary inputs:
//!
//! - node insertion is idempotent and first-insert-wins on attributes
//! - edge insertion is idempotent per ordered pair
//! - insertion order of distinct nodes never affects the node set

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use crate::graph::{Attrs, GraphStore, NodeType};

    fn identifier() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9 ]{0,12}"
    }

    fn node_type() -> impl Strategy<Value = NodeType> {
        prop_oneof![
            Just(NodeType::Paper),
            Just(NodeType::Author),
            Just(NodeType::Concept),
            Just(NodeType::Entity),
        ]
    }

    proptest! {
        /// Inserting the same identifier any number of times leaves one node.
        #[test]
        fn node_insertion_is_idempotent(
            id in identifier(),
            ntype in node_type(),
            repeats in 1usize..5
        ) {
            let mut graph = GraphStore::new();
            for i in 0..repeats {
                graph.add_node(&id, ntype, [("round".to_string(), json!(i))].into());
            }
            prop_assert_eq!(graph.node_count(), 1);
            prop_assert_eq!(graph.get_node(&id).unwrap().attr("round"), Some(&json!(0)));
        }

        /// Re-adding an identical (source, target, relation) triple changes nothing.
        #[test]
        fn edge_insertion_is_idempotent(
            source in identifier(),
            target in identifier(),
            relation in "[a-zA-Z]{1,10}"
        ) {
            let mut graph = GraphStore::new();
            graph.add_edge(&source, &target, &relation);
            let count = graph.edge_count();
            graph.add_edge(&source, &target, &relation);

            prop_assert_eq!(graph.edge_count(), count);
            prop_assert!(graph.has_edge(&source, &target));
            prop_assert_eq!(graph.relation(&source, &target), Some(relation.as_str()));
        }

        /// A second relation on the same pair replaces the first; the pair
        /// still counts as one edge.
        #[test]
        fn same_pair_keeps_single_relation(
            source in identifier(),
            target in identifier(),
            first in "[a-z]{1,8}",
            second in "[A-Z]{1,8}"
        ) {
            let mut graph = GraphStore::new();
            graph.add_edge(&source, &target, &first);
            graph.add_edge(&source, &target, &second);

            prop_assert_eq!(graph.edge_count(), 1);
            prop_assert_eq!(graph.relation(&source, &target), Some(second.as_str()));
        }

        /// Node set is insertion-order independent.
        #[test]
        fn node_set_ignores_insertion_order(mut ids in proptest::collection::vec(identifier(), 1..8)) {
            let mut forward = GraphStore::new();
            for id in &ids {
                forward.add_node(id, NodeType::Entity, Attrs::new());
            }

            ids.reverse();
            let mut backward = GraphStore::new();
            for id in &ids {
                backward.add_node(id, NodeType::Entity, Attrs::new());
            }

            let a: Vec<_> = forward.nodes().map(|n| n.id.clone()).collect();
            let b: Vec<_> = backward.nodes().map(|n| n.id.clone()).collect();
            prop_assert_eq!(a, b);
        }
    }
}
