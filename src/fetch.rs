//! Fetch Source implementations for article data.
//!
//! The runners are agnostic to where article payloads come from; they only
//! depend on the [`ArticleFetcher`] capability. Two implementations exist:
//!
//! - [`NetworkFetcher`]: issues HTTP GETs against the Article Search API.
//!   Requires an API key, checked once at construction.
//! - [`FileFetcher`]: serves a canned JSON document read from disk, used for
//!   offline runs and tests.
//!
//! Both return the raw JSON payload; [`find_articles`] composes a fetch with
//! [`parse_response`](crate::models::parse_response).

use crate::error::SearchError;
use crate::models::{self, Article};
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, info, instrument};
use url::Url;

const URL_BASE: &str = "http://api.nytimes.com/svc/search/v2/articlesearch";
const RESP_FMT: &str = "json";
const DOC_TYPE: &str = "article";

/// Capability that turns a query term into a raw article payload.
///
/// Implementations must be cheap to clone so the parallel runner can hand
/// one copy to each spawned task.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Fetch the raw JSON payload for one search term.
    async fn fetch(&self, term: &str) -> Result<Vec<u8>, SearchError>;
}

/// Fetch a term's articles and decode them.
///
/// Transport and decode failures surface as [`SearchError`]; an empty
/// document list is a valid, empty result.
pub async fn find_articles<F>(fetcher: &F, term: &str) -> Result<Vec<Article>, SearchError>
where
    F: ArticleFetcher + ?Sized,
{
    let data = fetcher.fetch(term).await?;
    let articles = models::parse_response(&data)?;
    debug!(%term, count = articles.len(), "Decoded articles");
    Ok(articles)
}

/// [`ArticleFetcher`] backed by the Article Search HTTP API.
#[derive(Debug, Clone)]
pub struct NetworkFetcher {
    client: reqwest::Client,
    endpoint: Url,
    key: String,
}

impl NetworkFetcher {
    /// Build a network fetcher with the given API key.
    ///
    /// Fails with [`SearchError::MissingApiKey`] when no key (or an empty
    /// one) is supplied, so a missing credential surfaces before any task
    /// is spawned rather than on every call.
    pub fn new(key: Option<&str>) -> Result<Self, SearchError> {
        let key = key
            .filter(|k| !k.is_empty())
            .ok_or(SearchError::MissingApiKey)?;
        let endpoint =
            Url::parse(&format!("{URL_BASE}.{RESP_FMT}")).expect("endpoint URL is well-formed");

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            key: key.to_string(),
        })
    }
}

#[async_trait]
impl ArticleFetcher for NetworkFetcher {
    #[instrument(level = "info", skip_all, fields(%term))]
    async fn fetch(&self, term: &str) -> Result<Vec<u8>, SearchError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", term)
            .append_pair("fq", DOC_TYPE)
            .append_pair("api-key", &self.key);

        let response = self.client.get(url).send().await?;
        let body = response.bytes().await?;
        info!(bytes = body.len(), "Fetched article payload");
        Ok(body.to_vec())
    }
}

/// [`ArticleFetcher`] backed by a JSON document on disk.
///
/// The file is read once at construction; every `fetch` call returns a copy
/// of the same payload regardless of the term.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    data: Vec<u8>,
}

impl FileFetcher {
    /// Wrap a fetcher around the JSON document at `path`.
    ///
    /// Fails if the file cannot be read.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let data = tokio::fs::read(path.as_ref()).await?;
        info!(path = %path.as_ref().display(), bytes = data.len(), "Loaded fixture");
        Ok(Self { data })
    }
}

#[async_trait]
impl ArticleFetcher for FileFetcher {
    async fn fetch(&self, _term: &str) -> Result<Vec<u8>, SearchError> {
        Ok(self.data.clone())
    }
}
