//! Parallel batch run mode: the concurrent fan-out/fan-in aggregator.
//!
//! One task is spawned per term and each task reports exactly one outcome —
//! its term's decoded articles or the error that prevented them — over a
//! many-producer/one-consumer channel. A single coordinator loop is the only
//! code that touches the merged result: it drains the channel, appends each
//! success in the order outcomes arrive, and logs each failure without
//! aborting the run. Tasks never share mutable state, so no locking is
//! needed.
//!
//! The channel closes once every task has dropped its sender, which is the
//! completion signal: the drain loop ends exactly when all N outcomes have
//! been observed, failures included. Merge order follows task completion
//! timing and is therefore not stable across runs; compare parallel output
//! to the serial baseline as a multiset.
//!
//! There is no timeout or cancellation path. A fetch that hangs holds the
//! whole aggregation open, even after every other task has reported. That is
//! a known limitation of this design, not an oversight.

use crate::error::SearchError;
use crate::fetch::{ArticleFetcher, find_articles};
use crate::models::Article;
use crate::run::{ResultStream, render};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// One task's report back to the coordinator.
type Outcome = (String, Result<Vec<Article>, SearchError>);

/// Fetch articles for all terms concurrently and merge the results.
///
/// Spawns exactly one task per term; zero terms spawns nothing and returns
/// `Ok(None)` immediately. Per-term failures are logged and skipped, so the
/// only `Err` a caller can see comes from before any task existed. Returns
/// `Ok(None)` when the merged result is empty.
#[instrument(level = "info", skip_all, fields(terms = terms.len()))]
pub async fn run_parallel<F>(
    fetcher: &F,
    terms: &[String],
) -> Result<Option<ResultStream>, SearchError>
where
    F: ArticleFetcher + Clone + 'static,
{
    if terms.is_empty() {
        debug!("No terms submitted; nothing to spawn");
        return Ok(None);
    }

    let (tx, mut rx) = mpsc::channel::<Outcome>(terms.len());

    for term in terms {
        let tx = tx.clone();
        let fetcher = fetcher.clone();
        let term = term.clone();
        tokio::spawn(async move {
            let outcome = find_articles(&fetcher, &term).await;
            // The receiver outlives every sender, so this only fails if the
            // whole run was dropped mid-flight.
            let _ = tx.send((term, outcome)).await;
        });
    }
    // Drop the original sender so the channel closes once the last task has
    // reported its outcome.
    drop(tx);

    let mut articles: Vec<Article> = Vec::new();
    let mut observed = 0usize;
    let mut failures = 0usize;

    while let Some((term, outcome)) = rx.recv().await {
        observed += 1;
        match outcome {
            Ok(mut set) => {
                debug!(%term, count = set.len(), "Merged term results");
                articles.append(&mut set);
            }
            Err(e) => {
                failures += 1;
                warn!(%term, error = %e, "Error in search");
            }
        }
    }

    info!(
        observed,
        failures,
        merged = articles.len(),
        "All tasks reported"
    );

    if articles.is_empty() {
        info!("Found no articles");
        return Ok(None);
    }

    Ok(render(&articles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::run_serial;
    use crate::run::testutil::{FIXTURE, FailingFetcher, FixtureFetcher, lines};
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn terms(names: &[&str]) -> Vec<String> {
        names.iter().map(|t| t.to_string()).collect()
    }

    fn multiset(lines: Vec<String>) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for line in lines {
            *counts.entry(line).or_default() += 1;
        }
        counts
    }

    #[tokio::test]
    async fn test_run_parallel_merges_two_terms() {
        let fetcher = FixtureFetcher::new();
        let stream = run_parallel(&fetcher, &terms(&["foo", "bar"]))
            .await
            .unwrap()
            .expect("fixture has articles");

        assert_eq!(lines(stream).len(), 20);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_run_parallel_matches_serial_as_multiset() {
        let fetcher = FixtureFetcher::new();
        let batch = terms(&["foo", "bar", "baz"]);

        let parallel = lines(run_parallel(&fetcher, &batch).await.unwrap().unwrap());
        let serial = lines(run_serial(&fetcher, &batch).await.unwrap().unwrap());

        assert_eq!(multiset(parallel), multiset(serial));
    }

    #[tokio::test]
    async fn test_run_parallel_no_terms_spawns_nothing() {
        let fetcher = FixtureFetcher::new();
        let result = run_parallel(&fetcher, &[]).await.unwrap();
        assert!(result.is_none());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_parallel_observes_every_failure() {
        let fetcher = FailingFetcher::new();
        let batch = terms(&["a", "b", "c", "d", "e"]);

        let result = run_parallel(&fetcher, &batch).await.unwrap();
        assert!(result.is_none());
        // One outcome per term, even though every one of them failed.
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_run_parallel_mixed_outcomes_keep_successes() {
        /// Fails on the term "bad", serves the fixture otherwise.
        #[derive(Clone)]
        struct MixedFetcher;

        #[async_trait]
        impl crate::fetch::ArticleFetcher for MixedFetcher {
            async fn fetch(&self, term: &str) -> Result<Vec<u8>, SearchError> {
                if term == "bad" {
                    Err(SearchError::Io(std::io::Error::other("boom")))
                } else {
                    Ok(FIXTURE.as_bytes().to_vec())
                }
            }
        }

        let stream = run_parallel(&MixedFetcher, &terms(&["good", "bad", "fine"]))
            .await
            .unwrap()
            .expect("two terms succeed");

        assert_eq!(lines(stream).len(), 20);
    }

    #[tokio::test]
    async fn test_run_parallel_overlaps_fetch_latency() {
        /// Serves the fixture after a fixed per-call delay, simulating a
        /// slow upstream.
        #[derive(Clone)]
        struct SlowFetcher {
            delay: Duration,
        }

        #[async_trait]
        impl crate::fetch::ArticleFetcher for SlowFetcher {
            async fn fetch(&self, _term: &str) -> Result<Vec<u8>, SearchError> {
                tokio::time::sleep(self.delay).await;
                Ok(FIXTURE.as_bytes().to_vec())
            }
        }

        let fetcher = SlowFetcher {
            delay: Duration::from_millis(100),
        };
        let batch = terms(&["a", "b", "c", "d", "e"]);

        let started = tokio::time::Instant::now();
        let stream = run_parallel(&fetcher, &batch).await.unwrap().unwrap();
        let elapsed = started.elapsed();

        assert_eq!(lines(stream).len(), 50);
        // Five serial 100ms fetches would take at least 500ms; concurrent
        // fetches overlap, so the run should come in well under that.
        assert!(
            elapsed < Duration::from_millis(450),
            "parallel run took {elapsed:?}"
        );
    }
}
