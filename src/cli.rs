//! Command-line interface definitions for DND Headlines.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The API key and endpoint can also come from environment variables.

use clap::Parser;

/// Command-line arguments for the DND Headlines application.
///
/// # Examples
///
/// ```sh
/// # Top headlines for the default source
/// dnd_headlines --api-key YOUR_KEY
///
/// # Several sources, written out as JSON and Markdown
/// NEWS_API_KEY=YOUR_KEY dnd_headlines -s bbc-news -s reuters -j ./json -m ./markdown
///
/// # Show the known sources
/// dnd_headlines --list-sources
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News source key to fetch (repeatable); see --list-sources
    #[arg(short, long = "source")]
    pub sources: Vec<String>,

    /// News API key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base endpoint of the articles API
    #[arg(long, env = "NEWS_API_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Optional path to config.yaml file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory for JSON snapshots
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Output directory for Markdown files
    #[arg(short, long)]
    pub markdown_output_dir: Option<String>,

    /// Print the known news sources and exit
    #[arg(long)]
    pub list_sources: bool,
}
