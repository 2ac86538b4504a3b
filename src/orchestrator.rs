//! Sequential orchestration of the expansion agents.
//!
//! The orchestrator owns the graph store and the four agents, and runs
//! them in a fixed order per seed: Seed → Citation → Author → Concept,
//! threading the seeded paper's identifier into each downstream agent.
//! Agents run strictly one at a time, so the store has exactly one writer
//! by construction.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::agents::{
    AgentCycle, AuthorAgent, AuthorOutcome, CitationAgent, CitationOutcome, ConceptAgent,
    ConceptOutcome, SeedAgent, SeedOutcome,
};
use crate::error::Result;
use crate::graph::GraphStore;
use crate::source::WorkSource;

/// Expansion bounds for the agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Candidates a topic seed search may return (default 1).
    pub topic_limit: usize,
    /// References expanded per paper (default 5).
    pub max_refs: usize,
    /// Concepts linked per paper (default 5).
    pub max_concepts: usize,
    /// Concept relevance threshold, exclusive (default 0.5).
    pub min_concept_score: f64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            topic_limit: 1,
            max_refs: 5,
            max_concepts: 5,
            min_concept_score: 0.5,
        }
    }
}

/// What one expansion pass did, stage by stage.
///
/// A `None` stage means that stage's cycle yielded no result (absent
/// record, empty reference list, nothing above the concept threshold).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpansionReport {
    pub seed: Option<SeedOutcome>,
    pub citations: Option<CitationOutcome>,
    pub authors: Option<AuthorOutcome>,
    pub concepts: Option<ConceptOutcome>,
}

impl ExpansionReport {
    /// Whether the seed stage produced a paper.
    pub fn seeded(&self) -> bool {
        self.seed.is_some()
    }
}

/// Runs the agents sequentially against an owned graph store.
pub struct Orchestrator {
    graph: GraphStore,
    seed: SeedAgent,
    citation: CitationAgent,
    author: AuthorAgent,
    concept: ConceptAgent,
}

impl Orchestrator {
    /// Create an orchestrator over a fresh graph.
    pub fn new(source: Arc<dyn WorkSource>, config: OrchestratorConfig) -> Self {
        Self {
            graph: GraphStore::new(),
            seed: SeedAgent::new(source.clone()).with_topic_limit(config.topic_limit),
            citation: CitationAgent::new(source.clone()).with_max_refs(config.max_refs),
            author: AuthorAgent::new(source.clone()),
            concept: ConceptAgent::new(source)
                .with_max_concepts(config.max_concepts)
                .with_min_score(config.min_concept_score),
        }
    }

    /// Orchestrator with default expansion bounds.
    pub fn with_defaults(source: Arc<dyn WorkSource>) -> Self {
        Self::new(source, OrchestratorConfig::default())
    }

    /// Continue building on a previously loaded graph.
    pub fn with_graph(mut self, graph: GraphStore) -> Self {
        self.graph = graph;
        self
    }

    /// Expand the graph around one seed (DOI, work id, or topic).
    ///
    /// Each agent's anchor is the paper the seed stage resolved; a seed
    /// that resolves to nothing short-circuits the whole pass.
    pub async fn expand(&mut self, seed_input: impl Into<String>) -> Result<ExpansionReport> {
        let seed_input = seed_input.into();
        let Some(seed) = self.seed.run(&mut self.graph, seed_input.clone()).await? else {
            info!("seed {seed_input:?} resolved to nothing, skipping expansion");
            return Ok(ExpansionReport::default());
        };

        let anchor = seed.paper.clone();
        let citations = self.citation.run(&mut self.graph, anchor.clone()).await?;
        let authors = self.author.run(&mut self.graph, anchor.clone()).await?;
        let concepts = self.concept.run(&mut self.graph, anchor).await?;

        info!(
            "expanded {:?}: graph now has {} nodes, {} edges",
            seed.paper,
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(ExpansionReport {
            seed: Some(seed),
            citations,
            authors,
            concepts,
        })
    }

    /// Expand around several seeds in order.
    pub async fn expand_all(
        &mut self,
        seeds: impl IntoIterator<Item = String>,
    ) -> Result<Vec<ExpansionReport>> {
        let mut reports = Vec::new();
        for seed in seeds {
            reports.push(self.expand(seed).await?);
        }
        Ok(reports)
    }

    /// The graph built so far.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Mutable access to the graph (single writer still holds).
    pub fn graph_mut(&mut self) -> &mut GraphStore {
        &mut self.graph
    }

    /// Consume the orchestrator, keeping the graph.
    pub fn into_graph(self) -> GraphStore {
        self.graph
    }

    /// Cycle logs of the individual agents.
    pub fn seed_agent(&self) -> &SeedAgent {
        &self.seed
    }

    pub fn citation_agent(&self) -> &CitationAgent {
        &self.citation
    }

    pub fn author_agent(&self) -> &AuthorAgent {
        &self.author
    }

    pub fn concept_agent(&self) -> &ConceptAgent {
        &self.concept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::fixtures::{
        paper, with_authors, with_concepts, with_refs, EmptySource, StaticSource,
    };
    use pretty_assertions::assert_eq;

    fn corpus() -> Arc<StaticSource> {
        let anchor = with_concepts(
            with_refs(
                with_authors(
                    paper("W100", "Bitcoin: A Peer-to-Peer Electronic Cash System"),
                    &[("A1", Some("Satoshi Nakamoto"))],
                ),
                &["W1", "W2"],
            ),
            &[("C1", "Cryptography", 1, 0.8), ("C2", "Currency", 2, 0.6)],
        );
        Arc::new(
            StaticSource::new(vec![
                anchor,
                paper("W1", "b-money"),
                paper("W2", "Hashcash"),
            ])
            .with_topic("Bitcoin", &["W100"]),
        )
    }

    #[tokio::test]
    async fn expand_runs_the_full_chain() {
        let mut orchestrator = Orchestrator::with_defaults(corpus());

        let report = orchestrator.expand("Bitcoin").await.unwrap();

        assert!(report.seeded());
        let seed = report.seed.unwrap();
        assert_eq!(seed.paper, "W100");

        // Every downstream agent anchored on the seeded paper.
        assert_eq!(report.citations.unwrap().paper, "W100");
        assert_eq!(report.authors.unwrap().paper, "W100");
        assert_eq!(report.concepts.unwrap().paper, "W100");

        let graph = orchestrator.graph();
        // W100 + 2 references + 1 author + 2 concepts.
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.relation("W100", "W1"), Some("cites"));
        assert_eq!(graph.relation("Satoshi Nakamoto", "W100"), Some("writtenBy"));
        assert_eq!(graph.relation("W100", "Cryptography"), Some("hasConcept"));
    }

    #[tokio::test]
    async fn unresolvable_seed_short_circuits_the_pass() {
        let mut orchestrator = Orchestrator::with_defaults(Arc::new(EmptySource));

        let report = orchestrator.expand("no such topic").await.unwrap();

        assert!(!report.seeded());
        assert!(report.citations.is_none());
        assert_eq!(orchestrator.graph().node_count(), 0);

        // Only the seed agent ran a cycle.
        assert_eq!(orchestrator.seed_agent().memory().len(), 1);
        assert!(orchestrator.citation_agent().memory().is_empty());
    }

    #[tokio::test]
    async fn repeated_expansion_is_idempotent_on_the_graph() {
        let mut orchestrator = Orchestrator::with_defaults(corpus());

        orchestrator.expand("W100").await.unwrap();
        let nodes = orchestrator.graph().node_count();
        let edges = orchestrator.graph().edge_count();

        orchestrator.expand("W100").await.unwrap();
        assert_eq!(orchestrator.graph().node_count(), nodes);
        assert_eq!(orchestrator.graph().edge_count(), edges);
    }

    #[tokio::test]
    async fn expansion_continues_on_a_loaded_graph() {
        let mut first = Orchestrator::with_defaults(corpus());
        first.expand("W100").await.unwrap();
        let saved = first.into_graph();

        let mut second = Orchestrator::with_defaults(corpus()).with_graph(saved);
        let report = second.expand("W100").await.unwrap();

        // Nothing was new the second time around.
        assert_eq!(report.authors.unwrap().authors_added.len(), 0);
        assert_eq!(report.concepts.unwrap().concepts_added.len(), 0);
    }
}
