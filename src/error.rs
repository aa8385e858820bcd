//! Error types for article search.
//!
//! [`SearchError`] distinguishes the failure modes the runners care about:
//! a missing credential (fatal, caught at fetcher construction), transport
//! failures, and payload decode failures (both carried per-task and never
//! fatal to a batch). An empty result set is not an error anywhere in this
//! crate; runners report it as a distinct "no results" outcome instead.

use thiserror::Error;

/// Everything that can go wrong while searching for articles.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No API key was supplied. Surfaced once when the network fetcher is
    /// constructed, never per-call.
    #[error("no API key found (set NYT_API_KEY or pass --api-key)")]
    MissingApiKey,

    /// The HTTP request failed or returned an unreadable body.
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Reading the fixture file from disk failed.
    #[error("could not read article data: {0}")]
    Io(#[from] std::io::Error),

    /// The payload could not be decoded into the expected article shape.
    #[error("could not decode article payload: {0}")]
    Parse(#[from] serde_json::Error),
}
