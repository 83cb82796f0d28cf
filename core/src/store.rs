use crate::record::Record;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a plain JSON array of record objects.
pub fn from_str(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> =
        serde_json::from_str(json).context("expected a JSON array of store records")?;
    Ok(records)
}

/// Load records from a store file. Accepts a plain JSON array as well as the
/// `var store = [...];` wrapper the site build emits for its search script.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading store file {}", path.display()))?;
    let records = from_str(strip_js_wrapper(&contents))
        .with_context(|| format!("parsing store file {}", path.display()))?;
    tracing::debug!(num_records = records.len(), path = %path.display(), "loaded store");
    Ok(records)
}

// The generated file assigns the array to a JS variable. Slice out the
// array literal; anything already starting with '[' passes through.
fn strip_js_wrapper(contents: &str) -> &str {
    let trimmed = contents.trim();
    if trimmed.starts_with('[') {
        return trimmed;
    }
    match (trimmed.find('['), trimmed.rfind(']')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}
