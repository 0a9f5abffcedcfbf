// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (debug level only when asked for)
// 3. Build the configuration and the HTTP client
// 4. Run the validation pipeline
// 5. Write the report to stdout or a file
// 6. Exit with proper code (0 = report written, 1 = the run failed)
//
// Broken links do NOT change the exit code: they are part of the report.
// =============================================================================

mod checker;       // src/checker/ - link discovery and checking
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - run configuration
mod error;         // src/error.rs - error types
mod logging;       // src/logging.rs - log setup
mod pipeline;      // src/pipeline/ - one full validation run
mod report;        // src/report/ - CSV and JSON output

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use checker::FetchClient;
use cli::Cli;
use config::{CsvOptions, ValidatorConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);

    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: &Cli) -> Result<()> {
    // Validate everything we can before touching the network
    let config = ValidatorConfig::new(&cli.url, &cli.table_id, &cli.user_agent)?;
    let csv_options = CsvOptions::new(cli.delimiter, cli.quote, cli.include_bom())?;

    let client = FetchClient::new(config.user_agent())?;
    let results = pipeline::validate_links(&client, &config).await?;

    let output = if cli.json {
        report::results_to_json(&results)?
    } else {
        report::results_to_csv(&results, &csv_options)?
    };

    if cli.writes_to_stdout() {
        print!("{}", output);
    } else {
        tokio::fs::write(&cli.file, output)
            .await
            .with_context(|| format!("Failed to write {}", cli.file))?;
        info!("Results written to: {}", cli.file);
    }

    Ok(())
}
