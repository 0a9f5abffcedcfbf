// src/config.rs
// =============================================================================
// Run configuration.
//
// ValidatorConfig says WHERE the links come from and HOW we identify
// ourselves to the servers we contact. It is built once before the run and
// only ever borrowed afterwards.
//
// CsvOptions controls how the results are rendered for spreadsheet import.
// =============================================================================

use url::Url;

use crate::error::ValidatorError;

/// Page listing the Stadtteilschulen of Hamburg
pub const DEFAULT_SOURCE_URL: &str = "https://gest-hamburg.de/stadtteilschulen/";

/// The TablePress table on that page holding the school websites
pub const DEFAULT_TABLE_ID: &str = "tablepress-stadtteilschulen";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; GESTBot/1.0; +https://gest-hamburg.de/)";

/// What to validate and how to identify ourselves while doing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    source_url: String,
    table_id: String,
    user_agent: String,
}

impl ValidatorConfig {
    /// Builds a config, rejecting empty fields and a source URL that is not
    /// an absolute URL
    pub fn new(
        source_url: impl Into<String>,
        table_id: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Result<Self, ValidatorError> {
        let config = Self {
            source_url: source_url.into(),
            table_id: table_id.into(),
            user_agent: user_agent.into(),
        };

        for (name, value) in [
            ("source URL", &config.source_url),
            ("table ID", &config.table_id),
            ("user agent", &config.user_agent),
        ] {
            if value.trim().is_empty() {
                return Err(ValidatorError::InvalidConfig(format!("{} must not be empty", name)));
            }
        }

        Url::parse(&config.source_url).map_err(|e| {
            ValidatorError::InvalidConfig(format!(
                "source URL '{}' is not valid: {}",
                config.source_url, e
            ))
        })?;

        Ok(config)
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Rendering options for the CSV report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub quote: u8,
    /// Prefix the output with a UTF-8 byte order mark so Excel picks the
    /// right encoding
    pub include_bom: bool,
}

impl CsvOptions {
    /// Builds options from user supplied characters.
    /// The csv writer works on bytes, so both characters must be ASCII.
    pub fn new(delimiter: char, quote: char, include_bom: bool) -> Result<Self, ValidatorError> {
        Ok(Self {
            delimiter: ascii_byte("delimiter", delimiter)?,
            quote: ascii_byte("quote", quote)?,
            include_bom,
        })
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            quote: b'"',
            include_bom: true,
        }
    }
}

fn ascii_byte(name: &str, c: char) -> Result<u8, ValidatorError> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(ValidatorError::InvalidConfig(format!(
            "CSV {} must be an ASCII character, got '{}'",
            name, c
        )))
    }
}
