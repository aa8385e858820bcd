//! Run modes for article search.
//!
//! Each runner takes an [`ArticleFetcher`](crate::fetch::ArticleFetcher) and
//! a list of search terms and produces a readable stream of formatted result
//! lines, one per article:
//!
//! ```text
//! (<date>) '<title>' - <url>
//! ```
//!
//! | Mode | Module | Execution | Merge order |
//! |------|--------|-----------|-------------|
//! | single | [`single`] | one fetch for the first term | API order |
//! | serial | [`serial`] | one fetch at a time | submission order |
//! | parallel | [`parallel`] | one task per term, concurrently | completion order |
//!
//! All runners return `Ok(None)` when there is nothing to show — zero terms,
//! zero matches, or every term failed. That outcome is distinct from an
//! error: per-term failures are logged and skipped, and only a failure that
//! precedes any fetching (a missing credential at fetcher construction)
//! surfaces as a fatal `Err` to the caller.

use crate::models::Article;
use std::io::Cursor;

pub mod parallel;
pub mod serial;
pub mod single;

pub use parallel::run_parallel;
pub use serial::run_serial;
pub use single::run_single;

/// The readable stream of formatted result lines handed back to the caller.
///
/// `Cursor` implements `BufRead`, so callers consume it with
/// [`BufRead::lines`](std::io::BufRead::lines).
pub type ResultStream = Cursor<Vec<u8>>;

/// Render merged articles as a stream of formatted lines.
///
/// Returns `None` for an empty merge, the runners' shared "no results"
/// outcome.
pub(crate) fn render(articles: &[Article]) -> Option<ResultStream> {
    if articles.is_empty() {
        return None;
    }

    let mut buf = String::new();
    for article in articles {
        buf.push_str(&article.to_string());
        buf.push('\n');
    }
    Some(Cursor::new(buf.into_bytes()))
}
