// src/report/spreadsheet.rs
// =============================================================================
// Renders results as CSV for spreadsheet import.
//
// The school list is maintained in Excel, so the defaults are what German
// Excel expects: ";" as delimiter, every field quoted, and a UTF-8 BOM so
// umlauts in titles survive the import.
// =============================================================================

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::checker::LinkValidationResult;
use crate::config::CsvOptions;
use crate::error::ValidatorError;

/// Byte order mark telling Excel the file is UTF-8
const BOM: char = '\u{FEFF}';

const HEADER: [&str; 4] = ["URL", "Status", "Effective URL", "Title"];

/// Renders a header row plus one row per result, in order
pub fn results_to_csv(
    results: &[LinkValidationResult],
    options: &CsvOptions,
) -> Result<String, ValidatorError> {
    let mut buffer = Vec::new();
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(&mut buffer);

    writer.write_record(HEADER)?;
    for result in results {
        let status = result.status_code.to_string();
        writer.write_record([
            result.url.as_str(),
            status.as_str(),
            result.effective_url.as_str(),
            result.title.as_str(),
        ])?;
    }

    writer.flush()?;
    drop(writer);
    let csv = String::from_utf8(buffer)?;

    if options.include_bom {
        Ok(format!("{}{}", BOM, csv))
    } else {
        Ok(csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(url: &str, status_code: u16, effective_url: &str, title: &str) -> LinkValidationResult {
        LinkValidationResult {
            url: url.to_string(),
            status_code,
            effective_url: effective_url.to_string(),
            title: title.to_string(),
        }
    }

    fn no_bom() -> CsvOptions {
        CsvOptions {
            include_bom: false,
            ..CsvOptions::default()
        }
    }

    #[test]
    fn test_header_and_rows() {
        let results = vec![
            result("https://a.example/", 200, "https://a.example/", "A"),
            result("http://b.example/", 0, "http://b.example/", "Error: Request timed out"),
        ];
        let csv = results_to_csv(&results, &no_bom()).unwrap();
        assert_eq!(
            csv,
            "\"URL\";\"Status\";\"Effective URL\";\"Title\"\n\
             \"https://a.example/\";\"200\";\"https://a.example/\";\"A\"\n\
             \"http://b.example/\";\"0\";\"http://b.example/\";\"Error: Request timed out\"\n"
        );
    }

    #[test]
    fn test_quotes_empty_fields_and_escapes_quotes() {
        let results = vec![result("https://a.example/", 200, "https://a.example/", "Die \"Schule\"; Start")];
        let csv = results_to_csv(&results, &no_bom()).unwrap();
        assert!(csv.ends_with("\"Die \"\"Schule\"\"; Start\"\n"));

        let empty = vec![result("", 200, "", "")];
        let csv = results_to_csv(&empty, &no_bom()).unwrap();
        assert!(csv.ends_with("\"\";\"200\";\"\";\"\"\n"));
    }

    #[test]
    fn test_custom_delimiter_and_quote() {
        let options = CsvOptions::new(',', '\'', false).unwrap();
        let results = vec![result("https://a.example/", 301, "https://b.example/", "B")];
        let csv = results_to_csv(&results, &options).unwrap();
        assert!(csv.ends_with("'https://a.example/','301','https://b.example/','B'\n"));
    }

    #[test]
    fn test_bom_prefix() {
        let csv = results_to_csv(&[], &CsvOptions::default()).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(csv.trim_start_matches('\u{FEFF}'), "\"URL\";\"Status\";\"Effective URL\";\"Title\"\n");
    }
}
