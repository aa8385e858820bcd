//! # Article Search
//!
//! A CLI that searches New York Times articles for one or more free-text
//! terms and prints one formatted line per match:
//!
//! ```text
//! (<date>) '<title>' - <url>
//! ```
//!
//! ## Run modes
//!
//! - **single**: fetch articles for one term
//! - **serial**: fetch each term in turn, merging results in submission order
//! - **parallel**: fetch every term concurrently, merging results as they
//!   arrive (the fan-out/fan-in aggregator this crate is built around)
//!
//! ## Usage
//!
//! ```sh
//! NYT_API_KEY=... article_search parallel beer wine cider
//! article_search serial --fixture fixtures/sample.json beer wine
//! ```
//!
//! Articles come from the Article Search HTTP API, or from a canned JSON
//! document when `--fixture` is given; the runners are agnostic to which.

use clap::Parser;
use std::io::BufRead;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod fetch;
mod models;
mod run;

use cli::{Cli, Mode};
use error::SearchError;
use fetch::{ArticleFetcher, FileFetcher, NetworkFetcher};
use run::{ResultStream, run_parallel, run_serial, run_single};

#[tokio::main]
async fn main() -> Result<(), SearchError> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args.mode, terms = args.terms.len(), "Parsed CLI arguments");

    // Constructing the fetcher is the one fatal error path: a missing API
    // key or an unreadable fixture surfaces here, before any task runs.
    let results = match args.fixture {
        Some(ref path) => {
            let fetcher = FileFetcher::new(path).await.inspect_err(
                |e| error!(%path, error = %e, "Could not load fixture"),
            )?;
            dispatch(args.mode, &fetcher, &args.terms).await?
        }
        None => {
            let fetcher = NetworkFetcher::new(args.api_key.as_deref())
                .inspect_err(|e| error!(error = %e, "Could not build API client"))?;
            dispatch(args.mode, &fetcher, &args.terms).await?
        }
    };

    match results {
        Some(stream) => {
            for line in stream.lines() {
                println!("{}", line?);
            }
        }
        None => println!("No results for that query"),
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Search complete");

    Ok(())
}

/// Hand the terms to whichever runner the mode selects.
async fn dispatch<F>(
    mode: Mode,
    fetcher: &F,
    terms: &[String],
) -> Result<Option<ResultStream>, SearchError>
where
    F: ArticleFetcher + Clone + 'static,
{
    match mode {
        Mode::Single => run_single(fetcher, terms).await,
        Mode::Serial => run_serial(fetcher, terms).await,
        Mode::Parallel => run_parallel(fetcher, terms).await,
    }
}
