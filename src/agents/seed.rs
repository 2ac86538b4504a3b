//! Seed agent: bootstraps the graph from a DOI, work id, or topic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::graph::{GraphStore, Node, NodeType};
use crate::source::{PaperRecord, WorkSource};

use super::cycle::AgentCycle;
use super::memory::AgentMemory;
use super::{ATTR_SOURCE_ID, ATTR_TITLE, REL_WRITTEN_BY};

/// Seeds the graph with a starting paper.
///
/// Input dispatch: strings starting with `10.` are resolved as DOIs,
/// strings starting with `W` as work identifiers, anything else as a
/// free-text topic search bounded by `topic_limit`.
pub struct SeedAgent {
    source: Arc<dyn WorkSource>,
    topic_limit: usize,
    memory: AgentMemory,
}

/// Summary of a seeded paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedOutcome {
    /// Work identifier of the seeded paper.
    pub paper: String,
    /// Paper title.
    pub title: String,
    /// Author display names, in authorship order.
    pub authors: Vec<String>,
}

impl SeedAgent {
    const NAME: &'static str = "SeedAgent";

    pub fn new(source: Arc<dyn WorkSource>) -> Self {
        Self {
            source,
            topic_limit: 1,
            memory: AgentMemory::new(),
        }
    }

    /// Maximum number of candidates a topic search may return.
    pub fn with_topic_limit(mut self, limit: usize) -> Self {
        self.topic_limit = limit;
        self
    }
}

#[async_trait]
impl AgentCycle for SeedAgent {
    type Input = String;
    type Perception = Vec<PaperRecord>;
    type Decision = PaperRecord;
    type Outcome = SeedOutcome;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    fn memory_mut(&mut self) -> &mut AgentMemory {
        &mut self.memory
    }

    async fn perceive(&self, input: &String) -> Result<Option<Vec<PaperRecord>>> {
        debug!("[{}] resolving seed input {input:?}", Self::NAME);
        let candidates = if input.starts_with("10.") {
            self.source.by_doi(input).await?.into_iter().collect()
        } else if input.starts_with('W') {
            self.source.by_id(input).await?.into_iter().collect()
        } else {
            self.source.by_topic(input, self.topic_limit).await?
        };

        if candidates.is_empty() {
            warn!("[{}] no record found for {input:?}", Self::NAME);
            return Ok(None);
        }
        Ok(Some(candidates))
    }

    fn decide(&self, _graph: &GraphStore, perception: &Vec<PaperRecord>) -> Option<PaperRecord> {
        // Take the first candidate; duplicate seeds are a store-level no-op.
        perception.first().cloned()
    }

    async fn act(&self, graph: &mut GraphStore, record: &PaperRecord) -> Result<SeedOutcome> {
        let paper_id = record.id.clone();
        let title = record.title_or_untitled().to_string();

        graph.insert_node(
            Node::new(&paper_id, NodeType::Paper).with_attr(ATTR_TITLE, title.clone()),
        );

        let mut authors = Vec::new();
        for authorship in &record.authorships {
            let Some(author) = &authorship.author else {
                continue;
            };
            let name = author.display_name_or_unknown().to_string();

            let mut node = Node::new(&name, NodeType::Author);
            if let Some(id) = &author.id {
                node = node.with_attr(ATTR_SOURCE_ID, id.clone());
            }
            graph.insert_node(node);
            graph.add_edge(&name, &paper_id, REL_WRITTEN_BY);
            authors.push(name);
        }

        info!(
            "[{}] seeded paper {paper_id} ({title:?}) with {} authors",
            Self::NAME,
            authors.len()
        );
        Ok(SeedOutcome {
            paper: paper_id,
            title,
            authors,
        })
    }
}
