//! Memoized, single-shot headline loading.
//!
//! An [`ArticleLoader`] owns the parameters of one request and fetches at most
//! once: the first [`load`](ArticleLoader::load) performs the round-trip and
//! every later or concurrent call sees the same result. Refreshing means
//! building a new loader; a loader whose [`LoaderKey`] no longer matches the
//! selected source is stale and should be dropped by its owner.

use crate::api::FetchHeadlines;
use crate::error::FetchResult;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

/// Request parameters a loader's result belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoaderKey {
    pub source: String,
    pub api_key: String,
}

impl LoaderKey {
    pub fn new(source: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            api_key: api_key.into(),
        }
    }
}

pub struct ArticleLoader<F> {
    fetcher: F,
    key: LoaderKey,
    result: OnceCell<FetchResult>,
}

impl<F> ArticleLoader<F>
where
    F: FetchHeadlines,
{
    pub fn new(fetcher: F, key: LoaderKey) -> Self {
        Self {
            fetcher,
            key,
            result: OnceCell::new(),
        }
    }

    pub fn key(&self) -> &LoaderKey {
        &self.key
    }

    /// Whether a fetch has already completed (successfully or not).
    pub fn is_loaded(&self) -> bool {
        self.result.initialized()
    }

    /// Whether this loader answers a request for `source` with `api_key`.
    pub fn matches(&self, source: &str, api_key: &str) -> bool {
        self.key.source == source && self.key.api_key == api_key
    }

    /// Fetch on first use, then keep returning the same result.
    ///
    /// Failures are memoized as well; build a new loader to try again.
    #[instrument(level = "debug", skip_all, fields(source = %self.key.source))]
    pub async fn load(&self) -> &FetchResult {
        if self.is_loaded() {
            debug!("Reusing memoized result");
        }
        self.result
            .get_or_init(|| async {
                self.fetcher
                    .fetch_articles(&self.key.source, &self.key.api_key)
                    .await
            })
            .await
    }
}

impl<F> std::fmt::Debug for ArticleLoader<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleLoader")
            .field("source", &self.key.source)
            .field("loaded", &self.result.initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HeadlineFetcher;
    use crate::api::tests::serve_once;
    use crate::error::{FetchError, FetchErrorKind};
    use crate::models::Article;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Counts calls and answers with one article titled after the source.
    #[derive(Default)]
    struct CountingFetcher {
        calls: AtomicUsize,
        fail: bool,
    }

    impl FetchHeadlines for CountingFetcher {
        async fn fetch_articles(&self, source: &str, _api_key: &str) -> FetchResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            if self.fail {
                Err(FetchError::MissingArticles)
            } else {
                Ok(vec![Article::new(source, "null", "null", "null")])
            }
        }
    }

    #[tokio::test]
    async fn test_load_fetches_once() {
        let loader = ArticleLoader::new(CountingFetcher::default(), LoaderKey::new("bbc-news", "k"));
        assert!(!loader.is_loaded());

        let first = loader.load().await.as_ref().unwrap().clone();
        let second = loader.load().await.as_ref().unwrap().clone();

        assert!(loader.is_loaded());
        assert_eq!(first, second);
        assert_eq!(first[0].title, "bbc-news");
        assert_eq!(loader.fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_fetch() {
        let loader = ArticleLoader::new(CountingFetcher::default(), LoaderKey::new("ign", "k"));

        let (a, b) = tokio::join!(loader.load(), loader.load());
        assert!(a.is_ok() && b.is_ok());
        assert_eq!(loader.fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_memoized() {
        let fetcher = CountingFetcher {
            fail: true,
            ..Default::default()
        };
        let loader = ArticleLoader::new(fetcher, LoaderKey::new("metro", "k"));

        assert_eq!(loader.load().await.as_ref().unwrap_err().kind(), FetchErrorKind::Parse);
        assert!(loader.load().await.is_err());
        assert_eq!(loader.fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_matches_key() {
        let loader = ArticleLoader::new(CountingFetcher::default(), LoaderKey::new("bbc-news", "k"));
        assert!(loader.matches("bbc-news", "k"));
        assert!(!loader.matches("reuters", "k"));
        assert!(!loader.matches("bbc-news", "other"));
    }

    #[tokio::test]
    async fn test_loader_with_http_fetcher() {
        let (endpoint, _server) = serve_once("200 OK", r#"{"articles":[{"title":"A"}]}"#).await;
        let fetcher = HeadlineFetcher::new(&endpoint).unwrap();
        let loader = ArticleLoader::new(fetcher, LoaderKey::new("bbc-news", "k"));

        let articles = loader.load().await.as_ref().unwrap();
        assert_eq!(articles.len(), 1);
        // The mock server only answers once; a second network call would fail.
        assert_eq!(loader.load().await.as_ref().unwrap().len(), 1);
    }
}
