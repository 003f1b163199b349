// mod.rs - File loaders module

pub mod delimited;
pub mod xlsx;

use std::path::Path;

/// Raw tabular file contents: trimmed header names and string rows, each
/// row padded to the header width. Shape detection and all profile logic
/// happen downstream of this.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Column index for an exact header name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Load one source file, selecting the parser by file extension.
/// An unrecognized extension is a fatal ingestion error.
pub fn load_table(path: &Path) -> Result<RawTable, String> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "csv" => delimited::load_delimited(path, b','),
        "tsv" | "txt" => delimited::load_delimited(path, b'\t'),
        "xlsx" => xlsx::load_xlsx(path),
        _ => Err(format!(
            "File extension '{}' in file '{}' is not supported (use .csv, .tsv, .txt, or .xlsx)",
            extension,
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unsupported_extension_is_fatal() {
        let err = load_table(Path::new("profiles.parquet")).unwrap_err();
        assert!(err.contains("parquet"), "unexpected error: {}", err);
        assert!(err.contains("not supported"), "unexpected error: {}", err);
    }

    #[test]
    fn test_extension_dispatch_csv_and_tsv() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("samples.csv");
        let mut f = std::fs::File::create(&csv_path).unwrap();
        writeln!(f, "Sample,mark1").unwrap();
        writeln!(f, "A,\"11,12\"").unwrap();
        let table = load_table(&csv_path).unwrap();
        assert_eq!(table.headers, vec!["Sample", "mark1"]);
        assert_eq!(table.rows[0], vec!["A", "11,12"]);

        let tsv_path = dir.path().join("samples.txt");
        let mut f = std::fs::File::create(&tsv_path).unwrap();
        writeln!(f, "Sample\tmark1").unwrap();
        writeln!(f, "A\t11,12").unwrap();
        let table = load_table(&tsv_path).unwrap();
        assert_eq!(table.rows[0], vec!["A", "11,12"]);
    }
}
