//! # Jaundice Rate
//!
//! Scores news articles for sensationalism by measuring what share of each
//! article's words comes from a dictionary of emotionally charged vocabulary.
//!
//! ## Usage
//!
//! ```sh
//! # Batch mode over the demo article list
//! jaundice_rate batch
//!
//! # HTTP service
//! jaundice_rate serve --port 8080
//! curl 'http://127.0.0.1:8080/?urls=https://inosmi.ru/economic/20211105/250847958.html'
//! ```
//!
//! ## Architecture
//!
//! The charged-word dictionary is loaded once, then every URL is processed by
//! an independent concurrent task: fetch under a deadline, site-specific
//! extraction, tokenization, scoring. Each task produces exactly one result
//! record; a failed article never disturbs its siblings.

use clap::Parser;
use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod charged;
mod cli;
mod extractors;
mod fetch;
mod models;
mod pipeline;
mod score;
mod server;
mod tokenize;

use cli::{Cli, Command};
use pipeline::Pipeline;

/// Articles scored when `batch` is invoked with no URLs. The last two
/// demonstrate the failure taxonomy: a 404 page and an unsupported site.
const DEMO_ARTICLES: &[&str] = &[
    "https://inosmi.ru/economic/20211105/250847958.html",
    "https://inosmi.ru/economic/20211104/250846376.html",
    "https://inosmi.ru/social/20211110/250870936.html",
    "https://inosmi.ru/social/20211110/250867022.html",
    "https://inosmi.ru/social/20211110/250865347.html",
    "https://inosmi.ru/not/exist.html",
    "https://lenta.ru/brief/2021/08/26/afg_terror/",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args.charged_dict, args.fetch_timeout_secs, "Parsed CLI arguments");

    // Charged words are loaded exactly once, before any article task exists.
    // An unreadable or empty dictionary aborts the run here.
    let charged_words = charged::load_charged_words(&args.charged_dict).await?;
    let deadline = Duration::from_secs(args.fetch_timeout_secs);
    let pipeline = Pipeline::new(charged_words, deadline)?;

    match args.command {
        Command::Batch { urls } => {
            let urls = if urls.is_empty() {
                info!(count = DEMO_ARTICLES.len(), "No URLs given, using demo article list");
                DEMO_ARTICLES.iter().map(|u| u.to_string()).collect()
            } else {
                urls
            };

            let results = pipeline.run(urls).await?;
            for result in &results {
                println!("\n{result}");
            }
        }
        Command::Serve { host, port } => {
            let addr: SocketAddr = format!("{host}:{port}").parse()?;
            server::serve(addr, pipeline).await?;
        }
    }

    Ok(())
}
