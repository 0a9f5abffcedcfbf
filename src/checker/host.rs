// src/checker/host.rs
// =============================================================================
// Turns a URL into a short, readable host name ("www.example.org/a" ->
// "example.org"). Used as the title of a link when the page has none.
//
// This never fails:
// 1. Parse with the `url` crate and take the host
// 2. If that fails, grab whatever sits between "http(s)://" and the next "/"
// 3. If even that fails, hand back the input unchanged
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static HOST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://(?P<host>[^/]+)").expect("host pattern is valid"));

/// Returns the host of `url` without a leading `www.`
pub fn host_from_url(url: &str) -> String {
    let host = parsed_host(url)
        .or_else(|| fallback_host(url))
        .unwrap_or_else(|| url.to_string());

    strip_www(&host).to_string()
}

fn parsed_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}

fn fallback_host(url: &str) -> Option<String> {
    HOST_PATTERN
        .captures(url)
        .and_then(|caps| caps.name("host"))
        .map(|m| m.as_str().to_string())
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
