//! Author agent: links a paper's authors into the graph.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::graph::{GraphStore, Node, NodeType};
use crate::source::WorkSource;

use super::cycle::{AgentCycle, Flagged};
use super::memory::AgentMemory;
use super::{ATTR_SOURCE_ID, REL_WRITTEN_BY};

/// Adds Author nodes for the anchor paper and `writtenBy` edges from each
/// author to the anchor's work identifier.
///
/// Authors are keyed by display name; the upstream author identifier, when
/// known, is kept as a node attribute. The paper is always addressed by
/// its stable work identifier, matching the other agents.
pub struct AuthorAgent {
    source: Arc<dyn WorkSource>,
    memory: AgentMemory,
}

/// One author extracted from the anchor's authorships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorItem {
    /// Upstream author identifier, when known.
    pub id: Option<String>,
    /// Display name (the graph key).
    pub name: String,
}

/// The anchor paper and its authors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorPerception {
    pub anchor: String,
    pub authors: Vec<AuthorItem>,
}

/// Authors annotated with novelty against the current graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDecision {
    pub anchor: String,
    pub authors: Vec<Flagged<AuthorItem>>,
}

/// Summary of the author expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorOutcome {
    /// The anchor paper.
    pub paper: String,
    /// Names of the authors newly inserted as nodes.
    pub authors_added: Vec<String>,
    /// Total number of authors linked (new and existing).
    pub authors_linked: usize,
}

impl AuthorAgent {
    const NAME: &'static str = "AuthorAgent";

    pub fn new(source: Arc<dyn WorkSource>) -> Self {
        Self {
            source,
            memory: AgentMemory::new(),
        }
    }
}

#[async_trait]
impl AgentCycle for AuthorAgent {
    type Input = String;
    type Perception = AuthorPerception;
    type Decision = AuthorDecision;
    type Outcome = AuthorOutcome;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    fn memory_mut(&mut self) -> &mut AgentMemory {
        &mut self.memory
    }

    async fn perceive(&self, anchor: &String) -> Result<Option<AuthorPerception>> {
        debug!("[{}] fetching authors for {anchor}", Self::NAME);
        let Some(record) = self.source.by_id(anchor).await? else {
            warn!("[{}] no record for {anchor}", Self::NAME);
            return Ok(None);
        };

        let authors: Vec<AuthorItem> = record
            .authorships
            .iter()
            .filter_map(|a| a.author.as_ref())
            .map(|author| AuthorItem {
                id: author.id.clone(),
                name: author.display_name_or_unknown().to_string(),
            })
            .collect();

        debug!("[{}] found {} authors", Self::NAME, authors.len());
        Ok(Some(AuthorPerception {
            anchor: anchor.clone(),
            authors,
        }))
    }

    fn decide(&self, graph: &GraphStore, perception: &AuthorPerception) -> Option<AuthorDecision> {
        if perception.authors.is_empty() {
            return None;
        }
        let authors = perception
            .authors
            .iter()
            .map(|author| Flagged::new(author.clone(), !graph.has_node(&author.name)))
            .collect();
        Some(AuthorDecision {
            anchor: perception.anchor.clone(),
            authors,
        })
    }

    async fn act(&self, graph: &mut GraphStore, decision: &AuthorDecision) -> Result<AuthorOutcome> {
        let mut authors_added = Vec::new();

        for flagged in &decision.authors {
            let author = &flagged.item;
            if flagged.is_new {
                let mut node = Node::new(&author.name, NodeType::Author);
                if let Some(id) = &author.id {
                    node = node.with_attr(ATTR_SOURCE_ID, id.clone());
                }
                graph.insert_node(node);
                authors_added.push(author.name.clone());
            }
            graph.add_edge(&author.name, &decision.anchor, REL_WRITTEN_BY);
        }

        info!(
            "[{}] added {} authors, linked {} to {}",
            Self::NAME,
            authors_added.len(),
            decision.authors.len(),
            decision.anchor
        );
        Ok(AuthorOutcome {
            paper: decision.anchor.clone(),
            authors_added,
            authors_linked: decision.authors.len(),
        })
    }
}
