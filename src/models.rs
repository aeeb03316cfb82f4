//! Data models for headline articles and the snapshots written to disk.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Article`]: One headline as returned by the News API
//! - [`HeadlinesSnapshot`]: The articles fetched for a single source, stamped with
//!   the time they were fetched
//!
//! The article fields keep the API's camelCase names on the wire, hence the
//! `#[serde(rename)]` attributes.

use serde::{Deserialize, Serialize};

/// Literal placeholder stored in any [`Article`] field the API left out.
///
/// The News API itself sometimes sends the *string* `"null"` instead of
/// omitting a field, so absent, JSON-null and `"null"` all collapse to this
/// value. Callers compare against it rather than against an `Option`.
pub const NULL_SENTINEL: &str = "null";

/// A single headline from a news source.
///
/// Every field is either the value extracted from the response or
/// [`NULL_SENTINEL`]; there is no partially-built article.
///
/// # Fields
///
/// * `title` - The headline text
/// * `url` - Link to the full article
/// * `url_to_image` - Link to the article's lead image
/// * `published_at` - Publish time, ISO-8601 (`yyyy-MM-ddTHH:mm:ssZ`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// The headline text.
    pub title: String,
    /// Link to the full article.
    pub url: String,
    /// Link to the article's lead image.
    #[serde(rename = "urlToImage")]
    pub url_to_image: String,
    /// When the article was published, as sent by the API.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        url_to_image: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            url_to_image: url_to_image.into(),
            published_at: published_at.into(),
        }
    }
}

/// Returns `true` when `value` carries real data rather than [`NULL_SENTINEL`].
pub fn is_present(value: &str) -> bool {
    value != NULL_SENTINEL
}

/// The headlines fetched for one source, as written by the JSON and Markdown outputs.
#[derive(Debug, Deserialize, Serialize)]
pub struct HeadlinesSnapshot {
    /// The source key the articles were requested for (e.g. `"bbc-news"`).
    pub source: String,
    /// Human-readable name of the source, or the key itself when unknown.
    pub label: String,
    /// The date of the fetch in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The fetch time in RFC 3339 (UTC).
    pub fetched_at: String,
    /// The articles in the order the API returned them.
    pub articles: Vec<Article>,
}
