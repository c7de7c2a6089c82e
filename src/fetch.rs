//! Page fetching
//!
//! The core only needs a status code and the raw body. Transport details
//! (timeouts, headers) are configured on the `ureq` agent here and nowhere
//! else.

use std::time::Duration;

use thiserror::Error;

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("apidoc-insight/", env!("CARGO_PKG_VERSION"));

/// Status line and body of a fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
}

/// Retrieves raw HTML for a URL
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// Blocking agent shared by the fetcher and the search provider.
///
/// Non-2xx statuses are returned as responses rather than errors so callers
/// can report the code.
pub fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Fetches pages over HTTP(S) with `ureq`
pub struct UreqFetcher {
    agent: ureq::Agent,
    user_agent: String,
}

impl UreqFetcher {
    pub fn new(agent: ureq::Agent, user_agent: impl Into<String>) -> Self {
        Self {
            agent,
            user_agent: user_agent.into(),
        }
    }
}

impl PageFetcher for UreqFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        tracing::info!("fetching details from {}", url);

        let response = self
            .agent
            .get(url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_vec()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "page fetched");
        Ok(FetchResponse { status, body })
    }
}
