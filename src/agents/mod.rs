//! Graph-expansion agents and the perceive → decide → act contract.
//!
//! Each agent expands the graph along one relation type: [`SeedAgent`]
//! bootstraps a paper with its authors, [`CitationAgent`] follows
//! `referenced_works`, [`AuthorAgent`] links authorships, and
//! [`ConceptAgent`] tags relevant concepts. All four implement
//! [`AgentCycle`], which fixes the stage order and keeps graph writes
//! confined to the act stage.
//!
//! The anchor paper's identifier is carried explicitly through every
//! stage (no agent ever infers "the paper I'm working on" from the
//! store's contents) and papers are always addressed by their stable
//! work identifier.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use citegraph::agents::{AgentCycle, SeedAgent, CitationAgent};
//! use citegraph::graph::GraphStore;
//! use citegraph::source::OpenAlexClient;
//!
//! let source = Arc::new(OpenAlexClient::default_client()?);
//! let mut graph = GraphStore::new();
//!
//! let mut seed = SeedAgent::new(source.clone());
//! let seeded = seed.run(&mut graph, "Bitcoin".to_string()).await?;
//!
//! if let Some(outcome) = seeded {
//!     let mut citations = CitationAgent::new(source);
//!     citations.run(&mut graph, outcome.paper).await?;
//! }
//! ```

mod author;
mod citation;
mod concept;
mod cycle;
#[cfg(test)]
pub(crate) mod fixtures;
mod memory;
mod seed;

pub use author::{AuthorAgent, AuthorDecision, AuthorItem, AuthorOutcome, AuthorPerception};
pub use citation::{CitationAgent, CitationOutcome, CitationPerception};
pub use concept::{
    ConceptAgent, ConceptDecision, ConceptItem, ConceptOutcome, ConceptPerception,
};
pub use cycle::{AgentCycle, Flagged};
pub use memory::{AgentMemory, CycleRecord};
pub use seed::{SeedAgent, SeedOutcome};

/// Relation label on author → paper edges.
pub const REL_WRITTEN_BY: &str = "writtenBy";

/// Relation label on paper → referenced paper edges.
pub const REL_CITES: &str = "cites";

/// Relation label on paper → concept edges.
pub const REL_HAS_CONCEPT: &str = "hasConcept";

/// Node attribute holding a paper title.
pub const ATTR_TITLE: &str = "title";

/// Node attribute holding a concept's hierarchy level.
pub const ATTR_LEVEL: &str = "level";

/// Node attribute holding the upstream identifier of an author or concept.
pub const ATTR_SOURCE_ID: &str = "source_id";
