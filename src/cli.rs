// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are no subcommands: running the binary validates the configured
// table. Every option has a default, so `validate-links-sts` on its own
// checks the Stadtteilschulen list and prints CSV to stdout.
// =============================================================================

use clap::builder::FalseyValueParser;
use clap::Parser;

use crate::config::{DEFAULT_SOURCE_URL, DEFAULT_TABLE_ID, DEFAULT_USER_AGENT};

/// Where the report goes when no file is given
pub const STDOUT: &str = "-";

#[derive(Parser, Debug)]
#[command(
    name = "validate-links-sts",
    version,
    about = "Validate links to Stadtteilschulen at gest-hamburg.de",
    long_about = "Fetches the Stadtteilschulen page, collects the school websites listed in its table \
                  and reports status code, final URL and page title for each of them."
)]
pub struct Cli {
    /// File to write the CSV output to ("-" for STDOUT)
    #[arg(short, long, default_value = STDOUT)]
    pub file: String,

    /// Disable BOM (Byte Order Mark) in output
    ///
    /// The BOM is never written to STDOUT.
    #[arg(long)]
    pub no_bom: bool,

    /// Output results in JSON format instead of CSV
    #[arg(long)]
    pub json: bool,

    /// Page containing the table of links
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub url: String,

    /// ID of the HTML table to extract links from
    #[arg(long, default_value = DEFAULT_TABLE_ID)]
    pub table_id: String,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// CSV field delimiter
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,

    /// CSV quote character
    #[arg(long, default_value_t = '"')]
    pub quote: char,

    /// Print debug messages to stderr (also enabled by DEBUG=1)
    ///
    /// Any DEBUG value other than "", "0", "false", "no" or "off" turns it on.
    #[arg(long, env = "DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,
}

impl Cli {
    pub fn writes_to_stdout(&self) -> bool {
        self.file == STDOUT
    }

    /// The BOM only makes sense in a file that Excel will open
    pub fn include_bom(&self) -> bool {
        !self.writes_to_stdout() && !self.no_bom
    }
}
