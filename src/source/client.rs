//! Works API source trait and the OpenAlex client implementation.

use async_trait::async_trait;
use futures::future;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::types::PaperRecord;

/// A source of scholarly work records.
///
/// All lookups treat "the source has no such record" as an absence value,
/// never as an error. Only transport failures and undecodable payloads
/// surface as `Err`.
#[async_trait]
pub trait WorkSource: Send + Sync {
    /// Resolve a single work by DOI.
    async fn by_doi(&self, doi: &str) -> Result<Option<PaperRecord>>;

    /// Resolve a single work by its work identifier.
    async fn by_id(&self, id: &str) -> Result<Option<PaperRecord>>;

    /// Search works by free-text topic, returning at most `limit` records.
    async fn by_topic(&self, topic: &str, limit: usize) -> Result<Vec<PaperRecord>>;

    /// Resolve a batch of work identifiers in one call. Identifiers the
    /// source does not know are simply absent from the result.
    async fn by_ids(&self, ids: &[String]) -> Result<Vec<PaperRecord>>;
}

/// Configuration for [`OpenAlexClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL override (default: the public OpenAlex API).
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Contact e-mail sent with every request (OpenAlex polite pool).
    pub mailto: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
            mailto: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_mailto(mut self, mailto: impl Into<String>) -> Self {
        self.mailto = Some(mailto.into());
        self
    }
}

/// Client for the OpenAlex works API.
pub struct OpenAlexClient {
    config: ClientConfig,
    http: Client,
}

// Search endpoints wrap their hits in a results array.
#[derive(Debug, Deserialize)]
struct WorkList {
    #[serde(default)]
    results: Vec<PaperRecord>,
}

impl OpenAlexClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.openalex.org";

    /// Maximum number of identifiers OpenAlex accepts in one filter.
    const BATCH_CHUNK: usize = 50;

    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(Self::DEFAULT_BASE_URL)
    }

    fn query_params<'a>(&'a self, mut params: Vec<(&'a str, String)>) -> Vec<(&'a str, String)> {
        if let Some(mailto) = &self.config.mailto {
            params.push(("mailto", mailto.clone()));
        }
        params
    }

    /// Fetch a single work; any non-success status is treated as absent.
    async fn fetch_work(&self, url: String) -> Result<Option<PaperRecord>> {
        debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .query(&self.query_params(Vec::new()))
            .send()
            .await
            .map_err(|e| Error::transport(&url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!("{url} returned {status}, treating as not found");
            return Ok(None);
        }

        let record = response
            .json::<PaperRecord>()
            .await
            .map_err(|e| Error::malformed(&url, e.to_string()))?;
        Ok(Some(record))
    }

    /// Fetch a page of works; any non-success status yields an empty list.
    async fn fetch_list(&self, params: Vec<(&str, String)>) -> Result<Vec<PaperRecord>> {
        let url = format!("{}/works", self.base_url());
        debug!("GET {url} {params:?}");
        let response = self
            .http
            .get(&url)
            .query(&self.query_params(params))
            .send()
            .await
            .map_err(|e| Error::transport(&url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{url} returned {status}, treating as no results");
            return Ok(Vec::new());
        }

        let list = response
            .json::<WorkList>()
            .await
            .map_err(|e| Error::malformed(&url, e.to_string()))?;
        Ok(list.results)
    }

    fn id_filter(ids: &[String]) -> String {
        format!("openalex:{}", ids.join("|"))
    }
}

#[async_trait]
impl WorkSource for OpenAlexClient {
    async fn by_doi(&self, doi: &str) -> Result<Option<PaperRecord>> {
        self.fetch_work(format!("{}/works/doi:{}", self.base_url(), doi))
            .await
    }

    async fn by_id(&self, id: &str) -> Result<Option<PaperRecord>> {
        self.fetch_work(format!("{}/works/{}", self.base_url(), id))
            .await
    }

    async fn by_topic(&self, topic: &str, limit: usize) -> Result<Vec<PaperRecord>> {
        let mut results = self
            .fetch_list(vec![
                ("search", topic.to_string()),
                ("per-page", limit.max(1).to_string()),
            ])
            .await?;
        results.truncate(limit);
        Ok(results)
    }

    async fn by_ids(&self, ids: &[String]) -> Result<Vec<PaperRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let pages = ids.chunks(Self::BATCH_CHUNK).map(|chunk| {
            self.fetch_list(vec![
                ("filter", Self::id_filter(chunk)),
                ("per-page", chunk.len().to_string()),
            ])
        });

        let mut records = Vec::with_capacity(ids.len());
        for page in future::join_all(pages).await {
            records.extend(page?);
        }
        Ok(records)
    }
}
