// delimited.rs - Delimited text loader (.csv, .tsv, .txt)

use super::RawTable;
use std::path::Path;

/// Load a delimited text file into a raw table.
///
/// Header names and every string cell are whitespace-trimmed before any
/// downstream logic runs. Quoted cells are handled by the csv reader, so
/// a long-format cell holding "11,12" survives a comma delimiter. Short
/// rows are padded with empty cells to the header width.
pub fn load_delimited(path: &Path, delimiter: u8) -> Result<RawTable, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("Failed to open '{}': {}", path.display(), e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| format!("Failed to read header of '{}': {}", path.display(), e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.len() < 2 {
        return Err(format!(
            "'{}' must have at least a sample column and one marker column",
            path.display()
        ));
    }

    let mut rows = Vec::new();
    for (line_num, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            format!(
                "Failed to parse '{}' line {}: {}",
                path.display(),
                line_num + 2,
                e
            )
        })?;

        let mut row: Vec<String> = record.iter().map(|c| c.trim().to_string()).collect();
        if row.len() > headers.len() {
            return Err(format!(
                "'{}' line {} has {} columns, expected {}",
                path.display(),
                line_num + 2,
                row.len(),
                headers.len()
            ));
        }
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}
