//! Append-only per-agent memory of past cycles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One completed perceive → decide → act cycle.
///
/// Stage values are captured as JSON snapshots; an absence at any stage is
/// recorded as `null`. Records exist for audit and debugging only; the
/// cycle never reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// Name of the agent that ran the cycle.
    pub agent: String,
    /// The input the cycle was invoked with.
    pub input: Value,
    /// What perceive returned.
    pub perception: Value,
    /// What decide returned.
    pub decision: Value,
    /// What act returned.
    pub outcome: Value,
    /// When the cycle completed.
    pub recorded_at: DateTime<Utc>,
}

/// Ordered log of an agent's past cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentMemory {
    records: Vec<CycleRecord>,
}

impl AgentMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cycle record. Records are never updated or removed.
    pub(crate) fn record(&mut self, record: CycleRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[CycleRecord] {
        &self.records
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&CycleRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
