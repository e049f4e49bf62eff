//! JSON output of the whole result set.

use crate::processing::ResultSet;
use std::error::Error;

/// Pretty-printed JSON of every fact, subnet table included.
pub fn render_json(result: &ResultSet) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| format!("Error serializing result for {}: {e}", result.input))?;
    Ok(json)
}
