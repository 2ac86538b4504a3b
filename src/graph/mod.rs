//! The citation knowledge graph store.
//!
//! Holds typed, deduplicated nodes and directed, relation-labeled edges.
//! Insertion is idempotent by identifier for nodes and by ordered pair for
//! edges; nothing is removed during a run. The node-link JSON export in
//! [`export`] gives the store a lossless persistent form.
//!
//! ## Example
//!
//! ```rust
//! use citegraph::graph::{Attrs, GraphStore, NodeType};
//!
//! let mut graph = GraphStore::new();
//! graph.add_node("W2741809807", NodeType::Paper, Attrs::new());
//! graph.add_node("Heather Piwowar", NodeType::Author, Attrs::new());
//! graph.add_edge("Heather Piwowar", "W2741809807", "writtenBy");
//!
//! assert!(graph.has_edge("Heather Piwowar", "W2741809807"));
//! assert_eq!(graph.get_neighbors("Heather Piwowar"), vec!["W2741809807"]);
//! ```

mod export;
#[cfg(test)]
mod proptest;
mod store;
mod types;

pub use export::{ExportLink, ExportNode, GraphExport, GraphMeta, RESERVED_NODE_KEYS};
pub use store::GraphStore;
pub use types::{Attrs, Node, NodeType};
