//! The perceive → decide → act agent contract.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::GraphStore;

use super::memory::{AgentMemory, CycleRecord};

/// An item annotated with whether it is new to the graph.
///
/// Produced by the decide stage of agents that dedup against existing
/// nodes; act inserts only the flagged-new items but links every item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flagged<T> {
    pub item: T,
    pub is_new: bool,
}

impl<T> Flagged<T> {
    pub fn new(item: T, is_new: bool) -> Self {
        Self { item, is_new }
    }
}

/// A graph-expansion agent running a fixed three-stage cycle.
///
/// The stages compose strictly in order and each has a distinct authority:
///
/// 1. **perceive**: queries the external source; may not touch the graph.
///    Returns `Ok(None)` when the source has nothing for this input.
/// 2. **decide**: pure function of the perception and the graph's read
///    state. No I/O, no writes. Returns `None` to short-circuit the cycle.
/// 3. **act**: the only stage allowed to mutate the graph.
///
/// [`run`](AgentCycle::run) composes the stages, appends one
/// [`CycleRecord`] to the agent's memory (absences captured as `null`),
/// and returns act's outcome. An error at any stage aborts the run before
/// anything is committed to memory.
#[async_trait]
pub trait AgentCycle: Send + Sync {
    type Input: Serialize + Send + Sync;
    type Perception: Serialize + Send + Sync;
    type Decision: Serialize + Send + Sync;
    type Outcome: Serialize + Send + Sync;

    /// Agent name, used in memory records and logs.
    fn name(&self) -> &str;

    /// The agent's cycle log.
    fn memory(&self) -> &AgentMemory;

    fn memory_mut(&mut self) -> &mut AgentMemory;

    /// Gather data from the external source for this input.
    async fn perceive(&self, input: &Self::Input) -> Result<Option<Self::Perception>>;

    /// Derive the graph mutations warranted by a perception.
    fn decide(&self, graph: &GraphStore, perception: &Self::Perception)
        -> Option<Self::Decision>;

    /// Apply the decision to the graph and summarize what changed.
    async fn act(&self, graph: &mut GraphStore, decision: &Self::Decision)
        -> Result<Self::Outcome>;

    /// Run one full cycle against the graph.
    async fn run(
        &mut self,
        graph: &mut GraphStore,
        input: Self::Input,
    ) -> Result<Option<Self::Outcome>> {
        let perception = self.perceive(&input).await?;
        let decision = match &perception {
            Some(p) => self.decide(graph, p),
            None => None,
        };
        let outcome = match &decision {
            Some(d) => Some(self.act(graph, d).await?),
            None => {
                debug!("[{}] cycle yielded no result", self.name());
                None
            }
        };

        let record = CycleRecord {
            agent: self.name().to_string(),
            input: serde_json::to_value(&input)?,
            perception: serde_json::to_value(&perception)?,
            decision: serde_json::to_value(&decision)?,
            outcome: serde_json::to_value(&outcome)?,
            recorded_at: Utc::now(),
        };
        self.memory_mut().record(record);

        Ok(outcome)
    }
}
