//! Concept agent: enriches a paper with its research concepts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::graph::{GraphStore, Node, NodeType};
use crate::source::WorkSource;

use super::cycle::{AgentCycle, Flagged};
use super::memory::AgentMemory;
use super::{ATTR_LEVEL, ATTR_SOURCE_ID, REL_HAS_CONCEPT};

/// Adds Concept nodes for the anchor paper and `hasConcept` edges from the
/// anchor's work identifier to each concept name.
///
/// Only concepts scoring above `min_score` are considered, truncated to
/// `max_concepts` in relevance order as delivered by the source.
pub struct ConceptAgent {
    source: Arc<dyn WorkSource>,
    max_concepts: usize,
    min_score: f64,
    memory: AgentMemory,
}

/// One concept kept after relevance filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptItem {
    /// Upstream concept identifier, when known.
    pub id: Option<String>,
    /// Display name (the graph key).
    pub name: String,
    /// Depth in the concept hierarchy.
    pub level: Option<u32>,
    /// Relevance score.
    pub score: f64,
}

/// The anchor paper and its relevant concepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptPerception {
    pub anchor: String,
    pub concepts: Vec<ConceptItem>,
}

/// Concepts annotated with novelty against the current graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptDecision {
    pub anchor: String,
    pub concepts: Vec<Flagged<ConceptItem>>,
}

/// Summary of the concept expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptOutcome {
    /// The anchor paper.
    pub paper: String,
    /// Names of the concepts newly inserted as nodes.
    pub concepts_added: Vec<String>,
    /// Total number of concepts linked (new and existing).
    pub concepts_linked: usize,
}

impl ConceptAgent {
    const NAME: &'static str = "ConceptAgent";

    pub fn new(source: Arc<dyn WorkSource>) -> Self {
        Self {
            source,
            max_concepts: 5,
            min_score: 0.5,
            memory: AgentMemory::new(),
        }
    }

    /// Maximum number of concepts linked per paper (default 5).
    pub fn with_max_concepts(mut self, max_concepts: usize) -> Self {
        self.max_concepts = max_concepts;
        self
    }

    /// Relevance threshold; concepts must score strictly above it
    /// (default 0.5).
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }
}

#[async_trait]
impl AgentCycle for ConceptAgent {
    type Input = String;
    type Perception = ConceptPerception;
    type Decision = ConceptDecision;
    type Outcome = ConceptOutcome;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    fn memory_mut(&mut self) -> &mut AgentMemory {
        &mut self.memory
    }

    async fn perceive(&self, anchor: &String) -> Result<Option<ConceptPerception>> {
        debug!("[{}] fetching concepts for {anchor}", Self::NAME);
        let Some(record) = self.source.by_id(anchor).await? else {
            warn!("[{}] no record for {anchor}", Self::NAME);
            return Ok(None);
        };

        let mut concepts: Vec<ConceptItem> = record
            .concepts
            .iter()
            .filter(|c| c.score > self.min_score)
            .filter_map(|c| {
                // A concept without a name has no graph key; skip it.
                let name = c.display_name.clone()?;
                Some(ConceptItem {
                    id: c.id.clone(),
                    name,
                    level: c.level,
                    score: c.score,
                })
            })
            .collect();
        concepts.truncate(self.max_concepts);

        debug!("[{}] kept {} concepts", Self::NAME, concepts.len());
        Ok(Some(ConceptPerception {
            anchor: anchor.clone(),
            concepts,
        }))
    }

    fn decide(
        &self,
        graph: &GraphStore,
        perception: &ConceptPerception,
    ) -> Option<ConceptDecision> {
        if perception.concepts.is_empty() {
            return None;
        }
        let concepts = perception
            .concepts
            .iter()
            .map(|concept| Flagged::new(concept.clone(), !graph.has_node(&concept.name)))
            .collect();
        Some(ConceptDecision {
            anchor: perception.anchor.clone(),
            concepts,
        })
    }

    async fn act(
        &self,
        graph: &mut GraphStore,
        decision: &ConceptDecision,
    ) -> Result<ConceptOutcome> {
        let mut concepts_added = Vec::new();

        for flagged in &decision.concepts {
            let concept = &flagged.item;
            if flagged.is_new {
                let mut node = Node::new(&concept.name, NodeType::Concept);
                if let Some(level) = concept.level {
                    node = node.with_attr(ATTR_LEVEL, level);
                }
                if let Some(id) = &concept.id {
                    node = node.with_attr(ATTR_SOURCE_ID, id.clone());
                }
                graph.insert_node(node);
                concepts_added.push(concept.name.clone());
            }
            graph.add_edge(&decision.anchor, &concept.name, REL_HAS_CONCEPT);
        }

        info!(
            "[{}] added {} concepts, linked {} to {}",
            Self::NAME,
            concepts_added.len(),
            decision.concepts.len(),
            decision.anchor
        );
        Ok(ConceptOutcome {
            paper: decision.anchor.clone(),
            concepts_added,
            concepts_linked: decision.concepts.len(),
        })
    }
}
