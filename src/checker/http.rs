// src/checker/http.rs
// =============================================================================
// The one place that talks HTTP.
//
// Every request of a run goes through the same FetchClient:
// - always a GET
// - always our User-Agent header
// - 30 second timeout per request
// - follows up to 5 redirects
// - ANY status code counts as a response; deciding what a 404 means is up
//   to the caller
//
// There are no retries. A request either produces a response or a
// ValidatorError::Transport carrying the reqwest error that caused it.
// =============================================================================

use std::time::Duration;

use log::debug;
use reqwest::{redirect::Policy, Client, Response};

use crate::error::ValidatorError;

/// Timeout for a single request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How many redirects we follow before giving up
pub const MAX_REDIRECTS: usize = 5;

/// HTTP client shared by all requests of a run
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
}

impl FetchClient {
    pub fn new(user_agent: &str) -> Result<Self, ValidatorError> {
        Self::with_timeout(user_agent, REQUEST_TIMEOUT)
    }

    // Tests use this to hit the timeout path without waiting 30 seconds
    pub(crate) fn with_timeout(user_agent: &str, timeout: Duration) -> Result<Self, ValidatorError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| ValidatorError::InvalidConfig(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Sends a single GET request and returns the response, whatever its status
    pub async fn get(&self, url: &str) -> Result<Response, ValidatorError> {
        debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// GET and read the whole body as text, together with the status code
    pub async fn get_text(&self, url: &str) -> Result<(u16, String), ValidatorError> {
        let response = self.get(url).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}
