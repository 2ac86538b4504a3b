//! Record types returned by the scholarly works API.
//!
//! These mirror the subset of the OpenAlex work payload the agents consume.
//! Records are ephemeral: they are read during a cycle to derive graph
//! mutations and never stored themselves.

use serde::{Deserialize, Serialize};

/// Title used when the upstream record carries none.
pub const UNTITLED: &str = "Untitled Paper";

/// Display name used when an authorship carries none.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A single scholarly work as returned by the works API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Stable work identifier (e.g. `W2741809807` or the full OpenAlex URL).
    pub id: String,

    /// Work title, when known.
    #[serde(default)]
    pub title: Option<String>,

    /// Ordered authorship entries.
    #[serde(default)]
    pub authorships: Vec<Authorship>,

    /// Identifiers of works this work references.
    #[serde(default)]
    pub referenced_works: Vec<String>,

    /// Concepts tagged on the work, with relevance scores.
    #[serde(default)]
    pub concepts: Vec<ConceptEntry>,
}

impl PaperRecord {
    /// Title, falling back to [`UNTITLED`].
    pub fn title_or_untitled(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    /// Author display names in authorship order, defaulting missing names
    /// to [`UNKNOWN_AUTHOR`]. Authorships without an author object are
    /// skipped.
    pub fn author_names(&self) -> Vec<String> {
        self.authorships
            .iter()
            .filter_map(|a| a.author.as_ref())
            .map(|a| a.display_name_or_unknown().to_string())
            .collect()
    }
}

/// One authorship entry on a work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authorship {
    /// The author behind this entry. The API occasionally omits it.
    #[serde(default)]
    pub author: Option<AuthorRef>,
}

/// Reference to an author inside an authorship entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    /// Stable author identifier, when known.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name, when known.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl AuthorRef {
    /// Display name, falling back to [`UNKNOWN_AUTHOR`].
    pub fn display_name_or_unknown(&self) -> &str {
        self.display_name.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }
}

/// A concept tagged on a work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptEntry {
    /// Stable concept identifier, when known.
    #[serde(default)]
    pub id: Option<String>,

    /// Human-readable concept name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Depth in the concept hierarchy (0 = root field).
    #[serde(default)]
    pub level: Option<u32>,

    /// Relevance of the concept to the work, in [0, 1].
    #[serde(default)]
    pub score: f64,
}
