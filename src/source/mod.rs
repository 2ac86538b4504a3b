//! External source adapter for the scholarly works API.
//!
//! The adapter is the only component that talks to the network. It exposes
//! lookups by DOI, work identifier, free-text topic, and identifier batch,
//! all through the [`WorkSource`] trait so agents can run against any
//! record source (the live OpenAlex API in production, fixtures in tests).
//!
//! Absence is a value here: a work the upstream does not know comes back
//! as `Ok(None)` or an empty list, never as an error. There are no retries;
//! one failed lookup is one missing record.

mod client;
mod types;

pub use client::{ClientConfig, OpenAlexClient, WorkSource};
pub use types::{Authorship, AuthorRef, ConceptEntry, PaperRecord, UNKNOWN_AUTHOR, UNTITLED};
