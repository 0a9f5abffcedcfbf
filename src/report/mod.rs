// src/report/mod.rs
// =============================================================================
// Turns validation results into text for the user.
//
// Submodules:
// - spreadsheet: CSV with configurable delimiter/quote and optional BOM
// - json: pretty JSON
// =============================================================================

mod json;
mod spreadsheet;

pub use json::results_to_json;
pub use spreadsheet::results_to_csv;
