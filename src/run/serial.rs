//! Serial batch run mode.
//!
//! The baseline the parallel runner is measured against: terms are fetched
//! strictly one at a time, in submission order, and merged in that same
//! order. A failed term is logged and skipped; the remaining terms still
//! run.

use crate::error::SearchError;
use crate::fetch::{ArticleFetcher, find_articles};
use crate::models::Article;
use crate::run::{ResultStream, render};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};

/// Fetch articles for each term in order and merge the results.
///
/// Returns `Ok(None)` when the merged result is empty, whether because no
/// terms were submitted, every term failed, or nothing matched.
#[instrument(level = "info", skip_all, fields(terms = terms.len()))]
pub async fn run_serial<F>(
    fetcher: &F,
    terms: &[String],
) -> Result<Option<ResultStream>, SearchError>
where
    F: ArticleFetcher,
{
    let articles: Vec<Article> = stream::iter(terms)
        .then(|term| async move {
            match find_articles(fetcher, term).await {
                Ok(articles) => {
                    debug!(%term, count = articles.len(), "Merged term results");
                    articles
                }
                Err(e) => {
                    warn!(%term, error = %e, "Error searching for term; skipping");
                    Vec::new()
                }
            }
        })
        .concat()
        .await;

    if articles.is_empty() {
        info!("Found no articles");
        return Ok(None);
    }

    info!(count = articles.len(), "Serial search complete");
    Ok(render(&articles))
}
