//! In-memory [`WorkSource`] fixtures shared by the agent tests.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::source::{AuthorRef, Authorship, ConceptEntry, PaperRecord, WorkSource};

/// A source backed by a fixed set of records.
#[derive(Debug, Default)]
pub struct StaticSource {
    records: Vec<PaperRecord>,
    dois: HashMap<String, String>,
    topics: HashMap<String, Vec<String>>,
}

impl StaticSource {
    pub fn new(records: Vec<PaperRecord>) -> Self {
        Self {
            records,
            dois: HashMap::new(),
            topics: HashMap::new(),
        }
    }

    /// Map a DOI to one of the known work identifiers.
    pub fn with_doi(mut self, doi: impl Into<String>, id: impl Into<String>) -> Self {
        self.dois.insert(doi.into(), id.into());
        self
    }

    /// Map a search topic to an ordered list of work identifiers.
    pub fn with_topic(mut self, topic: impl Into<String>, ids: &[&str]) -> Self {
        self.topics
            .insert(topic.into(), ids.iter().map(|s| s.to_string()).collect());
        self
    }

    fn find(&self, id: &str) -> Option<PaperRecord> {
        self.records.iter().find(|r| r.id == id).cloned()
    }
}

#[async_trait]
impl WorkSource for StaticSource {
    async fn by_doi(&self, doi: &str) -> Result<Option<PaperRecord>> {
        Ok(self.dois.get(doi).and_then(|id| self.find(id)))
    }

    async fn by_id(&self, id: &str) -> Result<Option<PaperRecord>> {
        Ok(self.find(id))
    }

    async fn by_topic(&self, topic: &str, limit: usize) -> Result<Vec<PaperRecord>> {
        let mut hits: Vec<PaperRecord> = self
            .topics
            .get(topic)
            .map(|ids| ids.iter().filter_map(|id| self.find(id)).collect())
            .unwrap_or_default();
        hits.truncate(limit);
        Ok(hits)
    }

    async fn by_ids(&self, ids: &[String]) -> Result<Vec<PaperRecord>> {
        Ok(ids.iter().filter_map(|id| self.find(id)).collect())
    }
}

/// A source that knows nothing.
#[derive(Debug, Default)]
pub struct EmptySource;

#[async_trait]
impl WorkSource for EmptySource {
    async fn by_doi(&self, _doi: &str) -> Result<Option<PaperRecord>> {
        Ok(None)
    }

    async fn by_id(&self, _id: &str) -> Result<Option<PaperRecord>> {
        Ok(None)
    }

    async fn by_topic(&self, _topic: &str, _limit: usize) -> Result<Vec<PaperRecord>> {
        Ok(Vec::new())
    }

    async fn by_ids(&self, _ids: &[String]) -> Result<Vec<PaperRecord>> {
        Ok(Vec::new())
    }
}

/// A source whose every lookup fails at the transport level.
#[derive(Debug, Default)]
pub struct FailingSource;

impl FailingSource {
    fn err() -> Error {
        Error::transport("fixture", "connection refused")
    }
}

#[async_trait]
impl WorkSource for FailingSource {
    async fn by_doi(&self, _doi: &str) -> Result<Option<PaperRecord>> {
        Err(Self::err())
    }

    async fn by_id(&self, _id: &str) -> Result<Option<PaperRecord>> {
        Err(Self::err())
    }

    async fn by_topic(&self, _topic: &str, _limit: usize) -> Result<Vec<PaperRecord>> {
        Err(Self::err())
    }

    async fn by_ids(&self, _ids: &[String]) -> Result<Vec<PaperRecord>> {
        Err(Self::err())
    }
}

/// A bare record with an id and title.
pub fn paper(id: &str, title: &str) -> PaperRecord {
    PaperRecord {
        id: id.to_string(),
        title: Some(title.to_string()),
        authorships: Vec::new(),
        referenced_works: Vec::new(),
        concepts: Vec::new(),
    }
}

/// Attach authorships as `(author_id, display_name)` pairs.
pub fn with_authors(mut record: PaperRecord, authors: &[(&str, Option<&str>)]) -> PaperRecord {
    record.authorships = authors
        .iter()
        .map(|(id, name)| Authorship {
            author: Some(AuthorRef {
                id: Some(id.to_string()),
                display_name: name.map(str::to_string),
            }),
        })
        .collect();
    record
}

/// Attach referenced-work identifiers.
pub fn with_refs<S: AsRef<str>>(mut record: PaperRecord, refs: &[S]) -> PaperRecord {
    record.referenced_works = refs.iter().map(|s| s.as_ref().to_string()).collect();
    record
}

/// Attach concepts as `(id, name, level, score)` tuples.
pub fn with_concepts(
    mut record: PaperRecord,
    concepts: &[(&str, &str, u32, f64)],
) -> PaperRecord {
    record.concepts = concepts
        .iter()
        .map(|(id, name, level, score)| ConceptEntry {
            id: Some(id.to_string()),
            display_name: Some(name.to_string()),
            level: Some(*level),
            score: *score,
        })
        .collect();
    record
}
