// src/checker/mod.rs
// =============================================================================
// This module contains all link discovery and checking logic.
//
// Submodules:
// - http: the HTTP client every request goes through
// - document: a small trait-based view of a parsed HTML page
// - table: finds the links in the discovery page's table
// - title: works out a page title (or falls back to the host name)
// - validate: checks a single link and turns failures into result rows
// - entities, host: small text helpers used for titles
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod document;
mod entities;
mod host;
mod http;
mod table;
mod title;
mod validate;

pub use http::FetchClient;
pub use table::extract_links_from_table;
pub use validate::{validate_link, LinkValidationResult};
