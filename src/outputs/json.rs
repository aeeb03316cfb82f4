//! JSON snapshot output.
//!
//! Serializes a [`HeadlinesSnapshot`] so other tools can pick up the last
//! fetch for each source.
//!
//! # Output Structure
//!
//! Files are organized by date, one file per source:
//! ```text
//! json_output_dir/
//! └── 2021-01-01/
//!     ├── bbc-news.json
//!     └── reuters.json
//! ```
//!
//! A later fetch of the same source on the same day replaces the file.

use crate::models::HeadlinesSnapshot;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Path the snapshot is written to: `{json_output_dir}/{date}/{source}.json`.
pub fn snapshot_path(snapshot: &HeadlinesSnapshot, json_output_dir: &str) -> PathBuf {
    PathBuf::from(json_output_dir)
        .join(&snapshot.local_date)
        .join(format!("{}.json", snapshot.source))
}

/// Write a [`HeadlinesSnapshot`] to its date-based JSON file.
///
/// # Returns
///
/// The path written, or an error if directory creation or file writing fails.
#[instrument(level = "info", skip_all, fields(%json_output_dir, source = %snapshot.source))]
pub async fn write_snapshot(
    snapshot: &HeadlinesSnapshot,
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(snapshot)?;
    let path = snapshot_path(snapshot, json_output_dir);

    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(&path, json).await?;
    info!(path = %path.display(), articles = snapshot.articles.len(), "Wrote JSON snapshot");

    Ok(path)
}
