// src/pipeline/mod.rs
// =============================================================================
// This module drives a complete validation run: discover the links, then
// validate them one after another.
// =============================================================================

mod run;

// Re-export the entry point of a run
pub use run::validate_links;
