use std::time::{Duration, Instant};

use reqwest::{Client, Url};

use super::{ContentFetcher, ContentResponse, FetchError};
use crate::config::FetchConfig;

/// Fetches the configured page with a single GET.
///
/// With `fail_soft` set, every failure is logged and turned into empty
/// content so the session carries on with nothing to analyse.
pub struct HttpContentFetcher {
    client: Client,
    url: Url,
    timeout: Duration,
    fail_soft: bool,
}

impl HttpContentFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let url = Url::parse(&config.url).map_err(|_| FetchError::InvalidUrl {
            url: config.url.clone(),
        })?;
        let timeout = Duration::from_secs(u64::from(config.timeout_seconds));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| FetchError::Client { source })?;

        Ok(Self {
            client,
            url,
            timeout,
            fail_soft: config.fail_soft,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn is_fail_soft(&self) -> bool {
        self.fail_soft
    }

    async fn fetch_strict(&self) -> Result<ContentResponse, FetchError> {
        let url = self.url.to_string();
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| self.classify(&url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let content = response
            .text()
            .await
            .map_err(|source| FetchError::Body {
                url: url.clone(),
                source,
            })?;
        Ok(ContentResponse::new(content))
    }

    fn classify(&self, url: &str, source: reqwest::Error) -> FetchError {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

impl ContentFetcher for HttpContentFetcher {
    async fn fetch(&self) -> Result<ContentResponse, FetchError> {
        let started = Instant::now();
        tracing::debug!(url = %self.url, "Fetching content");

        match self.fetch_strict().await {
            Ok(response) => {
                tracing::debug!(
                    url = %self.url,
                    chars = response.char_len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Content fetched"
                );
                Ok(response)
            }
            Err(err) if self.fail_soft => {
                tracing::warn!(url = %self.url, error = %err, "Fetch failed, using empty content");
                Ok(ContentResponse::empty())
            }
            Err(err) => Err(err),
        }
    }
}
