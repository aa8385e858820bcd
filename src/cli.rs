//! Command-line interface definitions for article search.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The run mode is a positional argument, followed by one or more free-text
//! search terms; the API key can come from a flag or the environment.

use clap::{Parser, ValueEnum};

/// Which runner executes the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Fetch articles for a single term.
    Single,
    /// Fetch terms one at a time, merging in submission order.
    Serial,
    /// Fetch all terms concurrently, merging in completion order.
    Parallel,
}

/// Command-line arguments for the article search application.
///
/// # Examples
///
/// ```sh
/// # One term against the live API
/// article_search single beer
///
/// # Several terms, fetched concurrently
/// article_search parallel beer wine cider
///
/// # Offline, against the bundled fixture
/// article_search serial --fixture fixtures/sample.json beer wine
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Run mode
    #[arg(value_enum)]
    pub mode: Mode,

    /// One or more search terms
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Article Search API key (required unless --fixture is given)
    #[arg(long, env = "NYT_API_KEY")]
    pub api_key: Option<String>,

    /// Read articles from a canned JSON file instead of the network
    #[arg(long)]
    pub fixture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(&["article_search", "parallel", "beer", "wine"]);

        assert_eq!(cli.mode, Mode::Parallel);
        assert_eq!(cli.terms, vec!["beer".to_string(), "wine".to_string()]);
        assert!(cli.fixture.is_none());
    }

    #[test]
    fn test_cli_fixture_flag() {
        let cli = Cli::parse_from(&[
            "article_search",
            "single",
            "--fixture",
            "fixtures/sample.json",
            "beer",
        ]);

        assert_eq!(cli.mode, Mode::Single);
        assert_eq!(cli.fixture.as_deref(), Some("fixtures/sample.json"));
    }

    #[test]
    fn test_cli_requires_terms() {
        assert!(Cli::try_parse_from(&["article_search", "serial"]).is_err());
    }

    #[test]
    fn test_cli_requires_mode() {
        assert!(Cli::try_parse_from(&["article_search"]).is_err());
    }
}
