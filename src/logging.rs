// src/logging.rs
// =============================================================================
// Sets up the `log` facade with an env_logger backend.
//
// All log lines go to stderr so that stdout only carries the report
// (`validate-links-sts > links.csv` must produce a clean file).
//
// The debug switch is passed in explicitly by main() after parsing the
// command line; nothing in here reads ambient process state except RUST_LOG,
// which still wins when a user sets it.
// =============================================================================

use std::io::Write;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes logging. `debug` raises our own level from info to debug.
pub fn init_logging(debug: bool) {
    let mut builder = Builder::from_env(Env::default());
    builder.target(Target::Stderr);

    if std::env::var("RUST_LOG").is_err() {
        // Keep dependencies (reqwest, hyper, html5ever) quiet either way
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module(env!("CARGO_CRATE_NAME"), level_for(debug));
    }

    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // try_init so tests or embedding code can install their own logger first
    if let Err(e) = builder.try_init() {
        log::debug!("Keeping the already installed logger: {}", e);
    }
}

fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
