// src/checker/title.rs
// =============================================================================
// Works out a human-readable name for a link.
//
// resolve_title() always returns a String. It first ATTEMPTS to read the
// page title, and if that attempt yields nothing (fetch error, non-200,
// no <title>, only empty titles) it FALLS BACK to the host name.
// =============================================================================

use log::debug;

use super::document::{DocumentNode, HtmlDocument, StructuredDocument};
use super::entities::decode_entities;
use super::host::host_from_url;
use super::http::FetchClient;
use crate::error::ValidatorError;

/// Title of the page at `url`, or its host name if there is no usable title
pub async fn resolve_title(client: &FetchClient, url: &str) -> String {
    let attempt = fetch_title(client, url).await.unwrap_or_else(|e| {
        debug!("Error fetching titles for {}: {}", url, e);
        None
    });

    attempt.unwrap_or_else(|| host_from_url(url))
}

// Ok(None) means "page fetched, but nothing to show"
async fn fetch_title(client: &FetchClient, url: &str) -> Result<Option<String>, ValidatorError> {
    let (status, body) = client.get_text(url).await?;
    if status != 200 {
        debug!("No title for {}: HTTP {}", url, status);
        return Ok(None);
    }

    Ok(first_title(&HtmlDocument::parse(&body)))
}

/// First <title> with non-empty text, entities decoded.
/// Only the raw text is trimmed; a decoded "&nbsp;" stays a space.
pub fn first_title<D: StructuredDocument>(document: &D) -> Option<String> {
    document
        .find_all("title")
        .iter()
        .map(|node| node.text_content().trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(|raw| decode_entities(&raw))
        .find(|title| !title.is_empty())
}
