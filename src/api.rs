//! News API interaction: one GET per fetch, no retries, no caching.
//!
//! This module provides the request side of a headline fetch. It builds the
//! request URL for a source, performs a single HTTP GET and hands the body to
//! [`extract_articles`](crate::extract::extract_articles).
//!
//! # Architecture
//!
//! - [`FetchHeadlines`]: Core trait defining an async headline fetch
//! - [`HeadlineFetcher`]: The `reqwest`-backed implementation
//!
//! Every call is a fresh network round-trip. Overlapping calls are independent
//! of each other; memoization lives in [`ArticleLoader`](crate::loader::ArticleLoader).
//!
//! The fetcher only emits `debug`-level tracing. Reporting failures is the
//! caller's job.

use crate::error::{FetchError, FetchResult};
use crate::extract::extract_articles;
use crate::utils::truncate_for_log;
use std::time::Instant;
use tracing::{debug, instrument};
use url::Url;

/// Base endpoint of the News API "articles" listing.
pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v1/articles";

/// Trait for async headline fetching.
///
/// Implementors return the ordered articles for `source`, or a
/// [`FetchError`]. This abstraction lets the loader run against a stub in tests.
pub trait FetchHeadlines {
    /// Fetch the top headlines for `source`, authenticating with `api_key`.
    async fn fetch_articles(&self, source: &str, api_key: &str) -> FetchResult;
}

/// Fetches headlines from a News API compatible endpoint.
#[derive(Debug, Clone)]
pub struct HeadlineFetcher {
    client: reqwest::Client,
    endpoint: Url,
}

impl HeadlineFetcher {
    /// Create a fetcher for `endpoint` with a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Url`] if `endpoint` is not an absolute URL.
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a fetcher that reuses an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the request URL: the endpoint plus `source` and `apiKey` query parameters.
    ///
    /// Any query already present on the endpoint is kept; the two parameters
    /// are appended after it, in that order, percent-encoded.
    pub fn build_request_url(&self, source: &str, api_key: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("source", source)
            .append_pair("apiKey", api_key);
        url
    }
}

impl FetchHeadlines for HeadlineFetcher {
    #[instrument(level = "debug", skip_all, fields(%source))]
    async fn fetch_articles(&self, source: &str, api_key: &str) -> FetchResult {
        let t0 = Instant::now();
        let url = self.build_request_url(source, api_key);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(%status, elapsed_ms = t0.elapsed().as_millis() as u64, "Non-success status");
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Received response body"
        );

        extract_articles(&body).inspect_err(|e| {
            debug!(error = %e, body_preview = %truncate_for_log(&body, 200), "Unusable response body");
        })
    }
}
