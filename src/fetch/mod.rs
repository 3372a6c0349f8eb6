//! Retrieval of the raw page text the analyses run over.

mod http;

use std::future::Future;

use thiserror::Error;

pub use http::HttpContentFetcher;

/// Raw text of one fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentResponse {
    pub content: String,
}

impl ContentResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The "no content" sentinel returned by fail-soft fetchers.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in chars, the unit every analysis indexes by.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// Errors that can occur while fetching content.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}'")]
    InvalidUrl { url: String },

    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("Request to '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read response body from '{url}': {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failure raised by a [`ContentFetcher`] that is not backed by HTTP
    /// (a file, a cache, a fixture). The message is shown to the user as is.
    #[error("{0}")]
    Other(String),
}

/// Source of the text a session analyses.
///
/// An `Err` is a hard failure: the coordinator aborts the session and
/// reports it. Fail-soft fetchers absorb their failures and return
/// [`ContentResponse::empty`] instead.
pub trait ContentFetcher: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<ContentResponse, FetchError>> + Send;
}
