// xlsx.rs - Spreadsheet loader (.xlsx)

use super::RawTable;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// Render one spreadsheet cell the way the delimited loaders see it:
/// trimmed text, integral floats without the ".0" excel adds to numeric
/// allele columns, empty cells as empty strings.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Load the first worksheet of an xlsx workbook into a raw table.
/// The first row is the header; remaining rows are data.
pub fn load_xlsx(path: &Path) -> Result<RawTable, String> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| format!("Failed to open '{}': {}", path.display(), e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| format!("'{}' contains no worksheets", path.display()))?
        .map_err(|e| format!("Failed to read worksheet of '{}': {}", path.display(), e))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = rows_iter
        .next()
        .ok_or_else(|| format!("'{}' worksheet is empty", path.display()))?
        .iter()
        .map(cell_to_string)
        .collect();

    if headers.len() < 2 {
        return Err(format!(
            "'{}' must have at least a sample column and one marker column",
            path.display()
        ));
    }

    let mut rows = Vec::new();
    for cells in rows_iter {
        let mut row: Vec<String> = cells.iter().map(cell_to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rendering() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String(" 12,14 ".to_string())), "12,14");
        assert_eq!(cell_to_string(&Data::Float(12.0)), "12");
        assert_eq!(cell_to_string(&Data::Float(9.3)), "9.3");
        assert_eq!(cell_to_string(&Data::Int(14)), "14");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_xlsx(Path::new("/nonexistent/profiles.xlsx")).unwrap_err();
        assert!(err.contains("Failed to open"), "unexpected error: {}", err);
    }
}
