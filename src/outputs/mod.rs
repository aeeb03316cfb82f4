//! Output generation for fetched headlines.
//!
//! # Submodules
//!
//! - [`json`]: Writes `HeadlinesSnapshot` data to JSON files
//! - [`markdown`]: Renders a `HeadlinesSnapshot` as a ranked Markdown list
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2021-01-01/
//!     └── bbc-news.json
//!
//! markdown_output_dir/
//! └── 2021-01-01_bbc-news.md
//! ```

pub mod json;
pub mod markdown;
