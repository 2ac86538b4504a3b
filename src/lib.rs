//! # citegraph
//!
//! Incrementally builds a citation knowledge graph by querying a scholarly
//! works API and inserting typed nodes and relation-labeled edges into an
//! in-memory directed graph.
//!
//! ## Core Components
//!
//! - **Source**: adapter for the OpenAlex works API (DOI, work-id, topic,
//!   and batch lookups; absence as a value, not an error)
//! - **Graph**: deduplicated node/edge store with node-link JSON
//!   export/import
//! - **Agents**: perceive → decide → act cycles expanding the graph along
//!   one relation each (seed, citations, authors, concepts)
//! - **Orchestrator**: sequential agent runs chained on the seeded paper
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use citegraph::{OpenAlexClient, Orchestrator};
//!
//! let source = Arc::new(OpenAlexClient::default_client()?);
//! let mut orchestrator = Orchestrator::with_defaults(source);
//!
//! let report = orchestrator.expand("Bitcoin").await?;
//! if let Some(seed) = &report.seed {
//!     println!("seeded {} ({})", seed.paper, seed.title);
//! }
//!
//! orchestrator.graph().save("graph.json")?;
//! ```

pub mod agents;
pub mod error;
pub mod graph;
pub mod orchestrator;
pub mod source;

// Re-exports for convenience
pub use agents::{
    AgentCycle, AgentMemory, AuthorAgent, AuthorOutcome, CitationAgent, CitationOutcome,
    ConceptAgent, ConceptOutcome, CycleRecord, Flagged, SeedAgent, SeedOutcome,
};
pub use error::{Error, Result};
pub use graph::{Attrs, GraphExport, GraphStore, Node, NodeType};
pub use orchestrator::{ExpansionReport, Orchestrator, OrchestratorConfig};
pub use source::{ClientConfig, OpenAlexClient, PaperRecord, WorkSource};
