// src/checker/validate.rs
// =============================================================================
// Validates one link.
//
// This is where errors turn into data: whatever happens to a single link,
// validate_link() returns a LinkValidationResult. A link that could not be
// reached at all gets status code 0 and an "Error: ..." title, so the run
// carries on with the next link.
//
// Two requests are made for a reachable link:
// 1. GET the link itself (status code + where the redirects ended up)
// 2. GET the final URL again to read its title (see title.rs)
// =============================================================================

use log::{debug, info};
use reqwest::Response;
use serde::{Deserialize, Serialize};
use url::Url;

use super::http::FetchClient;
use super::title::resolve_title;

/// Status code used when no HTTP response was received
pub const NO_RESPONSE: u16 = 0;

/// Outcome of validating a single link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkValidationResult {
    /// The URL as it appears in the table
    pub url: String,
    /// HTTP status of the final response, or 0 if there was none
    pub status_code: u16,
    /// Where the link ended up after redirects
    pub effective_url: String,
    /// Page title, host name, or "Error: ..." for unreachable links
    pub title: String,
}

impl LinkValidationResult {
    /// True if a response was received at all (whatever its status)
    pub fn is_reachable(&self) -> bool {
        self.status_code != NO_RESPONSE
    }
}

/// Fetches `url` and describes what we found. Never fails.
pub async fn validate_link(client: &FetchClient, url: &str) -> LinkValidationResult {
    info!("Validating: {}", url);

    match client.get(url).await {
        Ok(response) => {
            let status_code = response.status().as_u16();
            let effective_url = effective_url(url, &response);
            // The body is never read; release the connection before the title fetch
            drop(response);
            debug!("  Status: {}, Effective: {}", status_code, effective_url);

            let title = resolve_title(client, &effective_url).await;

            LinkValidationResult {
                url: url.to_string(),
                status_code,
                effective_url,
                title,
            }
        }
        Err(e) => {
            debug!("  Error: {}", e);

            LinkValidationResult {
                url: url.to_string(),
                status_code: NO_RESPONSE,
                effective_url: url.to_string(),
                title: format!("Error: {}", e),
            }
        }
    }
}

// reqwest reports the URL of the last hop. If that is the link we asked for,
// keep the text from the table instead of the normalized form
// ("https://example.org" would otherwise come back as "https://example.org/").
fn effective_url(requested: &str, response: &Response) -> String {
    let last_hop = response.url();
    match Url::parse(requested) {
        Ok(parsed) if &parsed == last_hop => requested.to_string(),
        _ => last_hop.to_string(),
    }
}
