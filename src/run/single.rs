//! Single-term run mode.
//!
//! The simplest runner: fetch articles for the first submitted term and
//! format them. Unlike the batch runners, a fetch failure here is returned
//! to the caller since there are no sibling terms to fall back on.

use crate::error::SearchError;
use crate::fetch::{ArticleFetcher, find_articles};
use crate::run::{ResultStream, render};
use tracing::{error, info, instrument};

/// Fetch and format articles for the first term in `terms`.
///
/// Returns `Ok(None)` when no term was submitted or nothing matched.
#[instrument(level = "info", skip_all)]
pub async fn run_single<F>(
    fetcher: &F,
    terms: &[String],
) -> Result<Option<ResultStream>, SearchError>
where
    F: ArticleFetcher,
{
    let Some(term) = terms.first() else {
        return Ok(None);
    };

    let articles = match find_articles(fetcher, term).await {
        Ok(articles) => articles,
        Err(e) => {
            error!(%term, error = %e, "Error finding articles");
            return Err(e);
        }
    };

    if articles.is_empty() {
        info!(%term, "Found no articles for term");
        return Ok(None);
    }

    info!(%term, count = articles.len(), "Single search complete");
    Ok(render(&articles))
}
