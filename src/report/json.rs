// src/report/json.rs
// Pretty JSON rendering of the results, for scripts rather than spreadsheets.

use crate::checker::LinkValidationResult;
use crate::error::ValidatorError;

pub fn results_to_json(results: &[LinkValidationResult]) -> Result<String, ValidatorError> {
    let mut json = serde_json::to_string_pretty(results)?;
    json.push('\n');
    Ok(json)
}
