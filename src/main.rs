// devsearch: command-line driver for a search session.
//
// Runs a search against the configured service, follows "load more" for the
// requested number of pages and prints what it accumulated.

use anyhow::{Context, Result, bail};
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use devsearch_client::config::env::ENV_BASE_URL;
use devsearch_client::{SearchConfig, SearchSession, SessionSnapshot};
use tracing_subscriber::EnvFilter;

/// Search a devsearch service and page through the results
#[derive(Parser, Debug)]
#[command(name = "devsearch")]
#[command(version)]
#[command(about = "Run a search session against a devsearch service and print the results")]
struct Args {
    /// Search service base URL (overrides DEVSEARCH_BASE_URL)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    base_url: Option<String>,

    /// Number of pages to fetch, following "load more"
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Query words, joined with single spaces
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,
}

fn print_results(snapshot: &SessionSnapshot, from: usize) {
    for (index, item) in snapshot.results.iter().enumerate().skip(from) {
        println!("{:>4}. {}", index + 1, item.title);
        println!("      {}", item.url);
        if let Some(snippet) = &item.highlight_snippet {
            println!("      {snippet}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let query = args.query.join(" ");

    let base_url = args.base_url;
    let config = SearchConfig::from_lookup(|key| {
        if key == ENV_BASE_URL && base_url.is_some() {
            return base_url.clone();
        }
        std::env::var(key).ok()
    })
    .context("Failed to load configuration")?;

    tracing::info!("Searching {} for '{}'", config.base_url(), query);
    let session = SearchSession::from_config(&config)?;

    let mut transition = session.search(&query).await;
    let mut printed = 0;

    for page in 1..=args.pages {
        let snapshot = session.snapshot();
        print_results(&snapshot, printed);
        printed = snapshot.results.len();

        if page == args.pages || !snapshot.can_load_more() {
            break;
        }
        transition = session.load_more().await;
    }

    let snapshot = session.snapshot();
    if let Some(error) = &snapshot.last_error {
        bail!("Search failed after {} results: {error}", snapshot.results.len());
    }

    if snapshot.shows_no_results() {
        println!("No results found");
    } else {
        println!(
            "-- {} results, {} (last step: {:?})",
            snapshot.results.len(),
            if snapshot.is_exhausted() { "no more pages" } else { "more available" },
            transition
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let err = Args::try_parse_from(["devsearch", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_defaults_and_query_words() {
        let args = Args::try_parse_from(["devsearch", "rust", "async"]).unwrap();
        assert_eq!(args.pages, 1);
        assert!(args.base_url.is_none());
        assert_eq!(args.query, ["rust", "async"]);
    }

    #[test]
    fn test_flags_are_parsed() {
        let args = Args::try_parse_from([
            "devsearch",
            "--base-url",
            "localhost:9000",
            "--pages",
            "3",
            "tokio",
        ])
        .unwrap();
        assert_eq!(args.base_url.as_deref(), Some("localhost:9000"));
        assert_eq!(args.pages, 3);
    }

    #[test]
    fn test_zero_pages_rejected() {
        let err = Args::try_parse_from(["devsearch", "--pages", "0", "rust"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(Args::try_parse_from(["devsearch", "--base-url", "", "rust"]).is_err());
    }

    #[test]
    fn test_query_required() {
        let err = Args::try_parse_from(["devsearch", "--pages", "2"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
