//! Data models for the article search payload.
//!
//! This module defines the structures that mirror the Article Search API's
//! JSON envelope:
//! - [`ArticleResponse`]: the `{ "response": { "docs": [...] } }` wrapper
//! - [`Article`]: a single matching document (headline, URL, publication date)
//!
//! The nesting of the structs follows the payload shape exactly so the
//! whole response deserializes in one `serde_json` pass.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::fmt;

/// The top-level envelope returned by the Article Search API.
///
/// Only the fields this application consumes are modeled; everything else
/// in the payload is ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct ArticleResponse {
    /// The `response` wrapper object.
    pub response: ResponseBody,
}

/// The `response` object holding the matching documents.
#[derive(Debug, Deserialize)]
pub struct ResponseBody {
    /// The matching articles, in the order the API returned them.
    #[serde(rename = "docs")]
    pub articles: Vec<Article>,
}

/// A single article returned by a search.
///
/// Field names are renamed to match the API's JSON keys (`web_url`,
/// `pub_date`, nested `headline.main`).
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    /// The article headline wrapper.
    pub headline: Headline,
    /// The canonical URL of the article.
    #[serde(rename = "web_url")]
    pub url: String,
    /// The publication timestamp, ISO-8601 in the payload.
    #[serde(rename = "pub_date")]
    pub date: DateTime<FixedOffset>,
}

/// The `headline` object; only the main headline is used.
#[derive(Debug, Clone, Deserialize)]
pub struct Headline {
    /// The primary headline text.
    pub main: String,
}

impl fmt::Display for Article {
    /// Render the article as one output line: `(<date>) '<title>' - <url>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) '{}' - {}",
            self.date.format("%d %b %Y"),
            self.headline.main,
            self.url
        )
    }
}

/// Decode a raw JSON payload into the list of matching articles.
///
/// A payload with zero documents decodes to an empty list; that is a valid
/// result, not an error.
pub fn parse_response(data: &[u8]) -> Result<Vec<Article>, serde_json::Error> {
    let response: ArticleResponse = serde_json::from_slice(data)?;
    Ok(response.response.articles)
}
