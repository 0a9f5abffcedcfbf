// src/checker/table.rs
// =============================================================================
// Finds the links we are supposed to validate.
//
// The discovery page has a table (TablePress, id "tablepress-stadtteilschulen")
// where one column holds the plain-text website of each school. We do NOT
// look at <a href> here: the cell text is the source of truth, and any cell
// whose trimmed text starts with http:// or https:// is a link.
//
// Order and duplicates are kept exactly as they appear in the table.
// =============================================================================

use log::debug;

use super::document::{DocumentNode, HtmlDocument, StructuredDocument};
use super::http::FetchClient;
use crate::config::ValidatorConfig;
use crate::error::ValidatorError;

/// Fetches the discovery page and returns every link found in the table
pub async fn extract_links_from_table(
    client: &FetchClient,
    config: &ValidatorConfig,
) -> Result<Vec<String>, ValidatorError> {
    debug!("Fetching URL: {}", config.source_url());

    let (status, body) = client.get_text(config.source_url()).await?;
    if status != 200 {
        return Err(ValidatorError::Fetch {
            url: config.source_url().to_string(),
            status,
        });
    }

    let document = HtmlDocument::parse(&body);
    let links = links_in_table(&document, config.table_id())?;

    debug!("Extracted {} links from table", links.len());
    Ok(links)
}

/// Collects the link-looking cell texts of the table with id `table_id`
pub fn links_in_table<D: StructuredDocument>(
    document: &D,
    table_id: &str,
) -> Result<Vec<String>, ValidatorError> {
    let table = document
        .find_by_id("table", table_id)
        .ok_or_else(|| ValidatorError::TableNotFound {
            table_id: table_id.to_string(),
        })?;

    let links = table
        .find_all("td")
        .iter()
        .map(|cell| cell.text_content().trim().to_string())
        .filter(|text| is_link(text))
        .collect();

    Ok(links)
}

fn is_link(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}
