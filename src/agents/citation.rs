//! Citation agent: expands the graph along referenced works.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::graph::{GraphStore, Node, NodeType};
use crate::source::WorkSource;

use super::cycle::AgentCycle;
use super::memory::AgentMemory;
use super::{ATTR_TITLE, REL_CITES};

/// Adds the anchor paper's references as Paper nodes with `cites` edges.
///
/// The anchor identifier is threaded explicitly through perception and
/// decision so edges are never inferred from the store's contents.
pub struct CitationAgent {
    source: Arc<dyn WorkSource>,
    max_refs: usize,
    memory: AgentMemory,
}

/// The anchor paper and its referenced-work identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationPerception {
    /// The paper whose references are being expanded.
    pub anchor: String,
    /// Referenced-work identifiers, truncated to the agent's `max_refs`.
    pub refs: Vec<String>,
}

/// Summary of the references added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationOutcome {
    /// The anchor paper.
    pub paper: String,
    /// Identifiers of the references that resolved and were linked.
    pub cited: Vec<String>,
}

impl CitationAgent {
    const NAME: &'static str = "CitationAgent";

    pub fn new(source: Arc<dyn WorkSource>) -> Self {
        Self {
            source,
            max_refs: 5,
            memory: AgentMemory::new(),
        }
    }

    /// Maximum number of references expanded per paper (default 5).
    pub fn with_max_refs(mut self, max_refs: usize) -> Self {
        self.max_refs = max_refs;
        self
    }
}

#[async_trait]
impl AgentCycle for CitationAgent {
    type Input = String;
    type Perception = CitationPerception;
    type Decision = CitationPerception;
    type Outcome = CitationOutcome;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    fn memory_mut(&mut self) -> &mut AgentMemory {
        &mut self.memory
    }

    async fn perceive(&self, anchor: &String) -> Result<Option<CitationPerception>> {
        debug!("[{}] fetching references for {anchor}", Self::NAME);
        let Some(record) = self.source.by_id(anchor).await? else {
            warn!("[{}] no record for {anchor}", Self::NAME);
            return Ok(None);
        };

        let mut refs = record.referenced_works;
        debug!("[{}] found {} references", Self::NAME, refs.len());
        refs.truncate(self.max_refs);

        Ok(Some(CitationPerception {
            anchor: anchor.clone(),
            refs,
        }))
    }

    fn decide(
        &self,
        _graph: &GraphStore,
        perception: &CitationPerception,
    ) -> Option<CitationPerception> {
        // Pass-through; resolution in act dedups implicitly per identifier.
        if perception.refs.is_empty() {
            return None;
        }
        Some(perception.clone())
    }

    async fn act(
        &self,
        graph: &mut GraphStore,
        decision: &CitationPerception,
    ) -> Result<CitationOutcome> {
        // One batched lookup; references the source does not know are
        // simply missing from the result and skipped.
        let resolved = self.source.by_ids(&decision.refs).await?;

        let mut cited = Vec::with_capacity(resolved.len());
        for record in resolved {
            graph.insert_node(
                Node::new(&record.id, NodeType::Paper)
                    .with_attr(ATTR_TITLE, record.title_or_untitled()),
            );
            graph.add_edge(&decision.anchor, &record.id, REL_CITES);
            cited.push(record.id);
        }

        info!(
            "[{}] linked {} of {} references for {}",
            Self::NAME,
            cited.len(),
            decision.refs.len(),
            decision.anchor
        );
        Ok(CitationOutcome {
            paper: decision.anchor.clone(),
            cited,
        })
    }
}
