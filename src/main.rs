//! # DND Headlines
//!
//! Fetches the "top headlines" list for one or more news sources from the
//! News API and prints them as a ranked list with relative publish times.
//!
//! ## Features
//!
//! - One GET per source, mapped into fixed four-field [`models::Article`] records
//! - Missing fields kept as the literal `"null"` the API itself uses
//! - Memoized single-shot loading per (source, API key)
//! - Optional JSON snapshots and Markdown lists on disk
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=YOUR_KEY dnd_headlines -s bbc-news -s reuters -j ./json -m ./markdown
//! ```
//!
//! ## Architecture
//!
//! 1. **Settings**: CLI flags and env vars merged over an optional YAML config
//! 2. **Fetching**: One [`loader::ArticleLoader`] per source, loaded concurrently
//! 3. **Output**: Ranked list on stdout, then JSON and Markdown files

use chrono::{DateTime, Local, Utc};
use clap::Parser;
use futures::stream::{self, StreamExt};
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod extract;
mod loader;
mod models;
mod outputs;
mod presentation;
mod sources;
mod utils;

use api::HeadlineFetcher;
use cli::Cli;
use config::{HeadlinesConfig, load_config, resolve};
use loader::{ArticleLoader, LoaderKey};
use models::{Article, HeadlinesSnapshot};
use outputs::{json, markdown};
use presentation::{Backdrop, backdrop, ranked_title, relative_time};
use utils::ensure_writable_dir;

/// Sources fetched at the same time.
const PARALLEL_SOURCES: usize = 4;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args.sources, ?args.json_output_dir, ?args.markdown_output_dir, "Parsed CLI arguments");

    if args.list_sources {
        for source in sources::all() {
            println!("{:<26} {}", source.key, source.label);
        }
        return Ok(());
    }

    // ---- Settings ----
    let file_config = match &args.config {
        Some(path) => load_config(path).await?,
        None => HeadlinesConfig::default(),
    };
    let settings = resolve(&args, &file_config)?;
    info!(endpoint = %settings.endpoint, sources = ?settings.sources, "Resolved settings");

    for source in &settings.sources {
        if sources::find(source).is_none() {
            warn!(%source, "Unknown news source; requesting it anyway");
        }
    }

    // Early check: output dirs must be writable before any network work
    for dir in [&args.json_output_dir, &args.markdown_output_dir].into_iter().flatten() {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "Output directory is not writable");
            return Err(e);
        }
    }

    // ---- Fetch ----
    let fetcher = HeadlineFetcher::new(&settings.endpoint)?;
    debug!(endpoint = %fetcher.endpoint(), "Fetcher ready");

    // One loader per distinct source; repeats share its result.
    let mut loaders: Vec<ArticleLoader<HeadlineFetcher>> = Vec::new();
    for source in &settings.sources {
        if !loaders.iter().any(|l| l.matches(source, &settings.api_key)) {
            loaders.push(ArticleLoader::new(
                fetcher.clone(),
                LoaderKey::new(source, &settings.api_key),
            ));
        }
    }

    stream::iter(&loaders)
        .for_each_concurrent(PARALLEL_SOURCES, |loader| async move {
            let result = loader.load().await;
            debug!(source = %loader.key().source, ok = result.is_ok(), "Source loaded");
        })
        .await;

    // ---- Output, in the order sources were requested ----
    let now = Utc::now();
    let mut shown = 0usize;
    for source in &settings.sources {
        let Some(loader) = loaders.iter().find(|l| l.matches(source, &settings.api_key)) else {
            continue;
        };
        match loader.load().await {
            Ok(articles) if !articles.is_empty() => {
                print_headlines(source, articles, now);
                let snapshot = snapshot_for(source, articles, Local::now());
                write_outputs(&snapshot, &args, now).await;
                shown += 1;
            }
            Ok(_) => warn!(%source, "No results found"),
            Err(e) => error!(%source, kind = ?e.kind(), error = %e, "Fetching headlines failed"),
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        requested = settings.sources.len(),
        fetched = loaders.len(),
        shown,
        "Execution complete"
    );

    if shown == 0 {
        return Err("no headlines could be fetched".into());
    }
    Ok(())
}

fn label_of(source: &str) -> String {
    sources::label_for(source).unwrap_or(source).to_string()
}

fn snapshot_for(source: &str, articles: &[Article], fetched: DateTime<Local>) -> HeadlinesSnapshot {
    HeadlinesSnapshot {
        source: source.to_string(),
        label: label_of(source),
        local_date: fetched.date_naive().to_string(),
        fetched_at: fetched.with_timezone(&Utc).to_rfc3339(),
        articles: articles.to_vec(),
    }
}

fn print_headlines(source: &str, articles: &[Article], now: DateTime<Utc>) {
    println!("== {} ==", label_of(source));
    match backdrop(source, articles) {
        Backdrop::Image(url) => println!("   [backdrop] {url}"),
        Backdrop::BrandLogo => println!("   [backdrop] {} logo", label_of(source)),
        Backdrop::None => {}
    }
    for (i, article) in articles.iter().enumerate() {
        match relative_time(&article.published_at, now) {
            Some(when) => println!("{}  ({when})", ranked_title(i, article)),
            None => println!("{}", ranked_title(i, article)),
        }
    }
    println!();
}

#[instrument(level = "info", skip_all, fields(source = %snapshot.source))]
async fn write_outputs(snapshot: &HeadlinesSnapshot, args: &Cli, now: DateTime<Utc>) {
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_snapshot(snapshot, dir).await {
            error!(error = %e, "Failed to write JSON snapshot");
        }
    }

    if let Some(dir) = &args.markdown_output_dir {
        let path = markdown::markdown_path(snapshot, dir);
        let md = markdown::headlines_to_markdown(snapshot, now);
        match tokio::fs::write(&path, md).await {
            Ok(()) => info!(path = %path.display(), "Wrote Markdown"),
            Err(e) => error!(path = %path.display(), error = %e, "Failed writing Markdown"),
        }
    }
}
