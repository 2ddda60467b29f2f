//! Command-line interface definitions.
//!
//! Two ways to run the analyzer: `batch` scores a fixed URL list and prints
//! records to stdout; `serve` exposes the same pipeline as an HTTP endpoint.
//! The charged-word dictionary location and the fetch deadline apply to both.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the jaundice rate analyzer.
///
/// # Examples
///
/// ```sh
/// # Score the built-in demo article list
/// jaundice_rate batch
///
/// # Score explicit URLs against a custom dictionary
/// jaundice_rate --charged-dict ./my_dict batch https://inosmi.ru/a.html
///
/// # Run the HTTP service
/// jaundice_rate serve --port 8080
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory of charged-word files, one word per line
    #[arg(long, default_value = "./charged_dict")]
    pub charged_dict: PathBuf,

    /// Per-article fetch deadline in seconds
    #[arg(long, default_value_t = 3)]
    pub fetch_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a list of article URLs and print one record per URL
    Batch {
        /// Article URLs; the built-in demo list is used when empty
        urls: Vec<String>,
    },
    /// Serve `GET /?urls=...` over HTTP
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_with_urls() {
        let cli = Cli::parse_from(&[
            "jaundice_rate",
            "batch",
            "https://inosmi.ru/a.html",
            "https://inosmi.ru/b.html",
        ]);

        assert_eq!(cli.charged_dict, PathBuf::from("./charged_dict"));
        assert_eq!(cli.fetch_timeout_secs, 3);
        match cli.command {
            Command::Batch { urls } => assert_eq!(urls.len(), 2),
            _ => panic!("expected batch subcommand"),
        }
    }

    #[test]
    fn test_batch_defaults_to_empty_url_list() {
        let cli = Cli::parse_from(&["jaundice_rate", "batch"]);
        match cli.command {
            Command::Batch { urls } => assert!(urls.is_empty()),
            _ => panic!("expected batch subcommand"),
        }
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::parse_from(&[
            "jaundice_rate",
            "--charged-dict",
            "/tmp/dict",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
        ]);

        assert_eq!(cli.charged_dict, PathBuf::from("/tmp/dict"));
        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 9000);
            }
            _ => panic!("expected serve subcommand"),
        }
    }
}
