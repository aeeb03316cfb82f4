//! Failure taxonomy for a headline fetch.
//!
//! Every variant is terminal for the call that produced it. [`FetchError::kind`]
//! folds the variants into the two outcomes callers branch on: the request
//! never produced a usable response ([`FetchErrorKind::Network`]), or it did
//! but the body was not the expected document ([`FetchErrorKind::Parse`]).

use crate::models::Article;
use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Parse,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    Status(StatusCode),

    #[error("response body is empty")]
    EmptyBody,

    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no `articles` array")]
    MissingArticles,

    #[error("element {index} of `articles` is not an object")]
    NotAnObject { index: usize },
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Url(_) | FetchError::Transport(_) | FetchError::Status(_) => {
                FetchErrorKind::Network
            }
            FetchError::EmptyBody
            | FetchError::Json(_)
            | FetchError::MissingArticles
            | FetchError::NotAnObject { .. } => FetchErrorKind::Parse,
        }
    }
}

/// Outcome of one fetch: the ordered articles, or why there are none.
pub type FetchResult = Result<Vec<Article>, FetchError>;
