//! Reads a transcript file into one text string.

use std::path::Path;

use crate::Result;

/// Whether the file carries one of the accepted transcript extensions.
pub fn accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            super::ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Load a transcript file into a single text blob.
///
/// Plain-text files are decoded as UTF-8 directly. Delimited tables are
/// parsed and every row's values are serialized back out. Anything else is
/// decoded as UTF-8 on a best-effort basis. Decode errors propagate in
/// their native kind.
pub fn load(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;

    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "txt" => Ok(String::from_utf8(bytes)?),
        "csv" => table_to_string(&bytes),
        _ => Ok(String::from_utf8(bytes)?),
    }
}

/// Serialize an entire delimited table to a human-readable string.
///
/// All rows and columns, tab-separated, one line per row. The header row is
/// treated as data so nothing is filtered out.
fn table_to_string(bytes: &[u8]) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record?;
        lines.push(record.iter().collect::<Vec<_>>().join("\t"));
    }

    Ok(lines.join("\n"))
}
