// src/pipeline/run.rs
// =============================================================================
// One validation run, modelled as a small state machine:
//
//   Discovering --(links found)--> Validating --(no links left)--> Done
//        |
//        +--(fetch failed / table missing)--> Err (the run is over)
//
// Validation is strictly sequential: each link is fully checked (including
// its title) before the next one starts. Results therefore come out in
// exactly the order the links appear in the table, and a slow school server
// only slows the run down, it never reorders it.
//
// Once discovery has succeeded the run cannot fail anymore: broken links are
// result rows, not errors.
// =============================================================================

use std::vec::IntoIter;

use log::{debug, info};

use crate::checker::{extract_links_from_table, validate_link, FetchClient, LinkValidationResult};
use crate::config::ValidatorConfig;
use crate::error::ValidatorError;

enum Phase {
    Discovering,
    Validating {
        pending: IntoIter<String>,
        results: Vec<LinkValidationResult>,
    },
    Done(Vec<LinkValidationResult>),
}

/// Discovers all links of the configured table and validates each of them
pub async fn validate_links(
    client: &FetchClient,
    config: &ValidatorConfig,
) -> Result<Vec<LinkValidationResult>, ValidatorError> {
    let mut phase = Phase::Discovering;

    loop {
        phase = match phase {
            Phase::Discovering => {
                let links = extract_links_from_table(client, config).await?;
                info!("Validating {} links...", links.len());

                Phase::Validating {
                    results: Vec::with_capacity(links.len()),
                    pending: links.into_iter(),
                }
            }
            Phase::Validating {
                mut pending,
                mut results,
            } => match pending.next() {
                Some(url) => {
                    results.push(validate_link(client, &url).await);
                    Phase::Validating { pending, results }
                }
                None => Phase::Done(results),
            },
            Phase::Done(results) => {
                let unreachable = results.iter().filter(|r| !r.is_reachable()).count();
                debug!("{} of {} links could not be reached", unreachable, results.len());
                info!("Validation completed.");
                return Ok(results);
            }
        };
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. What does `phase = match phase { ... }` do?
//    - `match phase` moves the current phase (and the data it owns) into
//      the arm that handles it
//    - each arm returns the next phase, which is moved back into `phase`
//
// 2. What is IntoIter<String>?
//    - The owning iterator of a Vec
//    - `pending.next()` hands out each link by value, in order, so no
//      cloning is needed
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TABLE_ID: &str = "tablepress-stadtteilschulen";

    fn discovery_page(links: &[String]) -> String {
        let rows: String = links
            .iter()
            .map(|link| format!("<tr><td>STS</td><td>{}</td></tr>", link))
            .collect();
        format!(r#"<html><body><table id="{}">{}</table></body></html>"#, TABLE_ID, rows)
    }

    async fn serve_discovery(server: &MockServer, links: &[String]) {
        Mock::given(method("GET"))
            .and(path("/stadtteilschulen/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(discovery_page(links)))
            .mount(server)
            .await;
    }

    fn config_for(server: &MockServer) -> ValidatorConfig {
        ValidatorConfig::new(
            format!("{}/stadtteilschulen/", server.uri()),
            TABLE_ID,
            "test-agent",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_single_link_with_title() {
        let mock_server = MockServer::start().await;
        let link = format!("{}/example/", mock_server.uri());
        serve_discovery(&mock_server, &[link.clone()]).await;
        Mock::given(method("GET"))
            .and(path("/example/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<title>Example</title>"))
            .mount(&mock_server)
            .await;

        let client = FetchClient::new("test-agent").unwrap();
        let results = validate_links(&client, &config_for(&mock_server)).await.unwrap();

        assert_eq!(
            results,
            vec![LinkValidationResult {
                url: link.clone(),
                status_code: 200,
                effective_url: link,
                title: "Example".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_timed_out_link_does_not_abort_the_run() {
        let mock_server = MockServer::start().await;
        let slow = format!("{}/slow", mock_server.uri());
        let fast = format!("{}/fast", mock_server.uri());
        serve_discovery(&mock_server, &[slow.clone(), fast.clone()]).await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/fast"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = FetchClient::with_timeout("test-agent", Duration::from_millis(300)).unwrap();
        let results = validate_links(&client, &config_for(&mock_server)).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, slow);
        assert_eq!(results[0].status_code, 0);
        assert_eq!(results[0].effective_url, slow);
        assert!(results[0].title.starts_with("Error: "));
        assert_eq!(results[1].url, fast);
        assert_eq!(results[1].status_code, 200);
        assert_eq!(results[1].title, "127.0.0.1");
    }

    #[tokio::test]
    async fn test_order_and_duplicates_are_preserved() {
        let mock_server = MockServer::start().await;
        let links: Vec<String> = ["/c", "/a", "/b", "/a"]
            .iter()
            .map(|p| format!("{}{}", mock_server.uri(), p))
            .collect();
        serve_discovery(&mock_server, &links).await;
        Mock::given(method("GET"))
            .and(path("/a"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(50)))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/b"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/c"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = FetchClient::new("test-agent").unwrap();
        let results = validate_links(&client, &config_for(&mock_server)).await.unwrap();

        let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, links.iter().map(String::as_str).collect::<Vec<_>>());
        let statuses: Vec<u16> = results.iter().map(|r| r.status_code).collect();
        assert_eq!(statuses, vec![500, 200, 404, 200]);
    }

    #[tokio::test]
    async fn test_missing_table_aborts_without_results() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<table id=\"x\"></table>"))
            .mount(&mock_server)
            .await;

        let client = FetchClient::new("test-agent").unwrap();
        let err = validate_links(&client, &config_for(&mock_server))
            .await
            .unwrap_err();
        assert!(matches!(err, ValidatorError::TableNotFound { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_discovery_page_aborts() {
        let config = ValidatorConfig::new("http://127.0.0.1:1/", TABLE_ID, "test-agent").unwrap();
        let client = FetchClient::new("test-agent").unwrap();
        let err = validate_links(&client, &config).await.unwrap_err();
        assert!(matches!(err, ValidatorError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_empty_table_completes_with_no_results() {
        let mock_server = MockServer::start().await;
        serve_discovery(&mock_server, &[]).await;

        let client = FetchClient::new("test-agent").unwrap();
        let results = validate_links(&client, &config_for(&mock_server)).await.unwrap();
        assert!(results.is_empty());
    }
}
