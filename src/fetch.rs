//! Remote text fetching.
//!
//! A single-shot HTTP GET for the plain-text artifacts the resolvers scrape
//! (dependency manifests, build scripts, Dockerfiles, image lists). There is
//! deliberately no retry and no caching: the pipeline runs interactively and
//! a missing upstream file degrades to an empty version field rather than
//! failing the run, so the fetcher reports unavailability as `None` and logs
//! the cause at debug level.

use tracing::debug;

use crate::constants::{HTTP_TIMEOUT, USER_AGENT};

/// Fetches UTF-8 text resources over HTTP with a bounded per-request timeout.
#[derive(Debug, Clone)]
pub struct TextFetcher {
    client: reqwest::Client,
}

impl TextFetcher {
    /// Create a fetcher with the crate-wide timeout and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client =
            reqwest::Client::builder().timeout(HTTP_TIMEOUT).user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Fetch the full body of `url` as text.
    ///
    /// Returns `None` for network errors, non-200 responses, and bodies that
    /// cannot be read. Callers treat `None` as "value unavailable", never as
    /// a reason to abort.
    pub async fn fetch_text(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("failed to fetch url {url}: {err}");
                return None;
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!("status error: {status} when fetching {url}");
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(err) => {
                debug!("read body error for {url}: {err}");
                None
            }
        }
    }
}
