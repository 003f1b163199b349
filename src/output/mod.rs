// mod.rs - Report writers (per-sample CSV, summary CSV, summary HTML)

use crate::core::{MatchSummary, QueryReport};
use crate::data::{ProfileTable, StrProfile};
use std::fs::create_dir_all;
use std::path::Path;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

const SCORE_COLUMNS: [&str; 10] = [
    "Sample",
    "mixed",
    "query_sample",
    "n_shared_markers",
    "n_shared_alleles",
    "n_query_alleles",
    "n_reference_alleles",
    "tanabe_score",
    "masters_query_score",
    "masters_ref_score",
];

/// Write one query's full comparison table.
///
/// The query's own row comes first (flagged `query_sample`, score fields
/// blank), followed by the ranked comparison rows; score columns are
/// followed by one allele column per marker in the table vocabulary.
pub fn write_sample_report(
    file_path: &Path,
    report: &QueryReport,
    query: &StrProfile,
    references: &ProfileTable,
    marker_names: &[String],
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let mut writer = csv::Writer::from_path(file_path)
        .map_err(|e| format!("Failed to create '{}': {}", file_path.display(), e))?;

    let mut header: Vec<&str> = SCORE_COLUMNS.to_vec();
    header.extend(marker_names.iter().map(String::as_str));
    writer
        .write_record(&header)
        .map_err(|e| format!("Write error: {}", e))?;

    // Query row first, scores undefined by construction.
    let mut row = vec![
        report.sample_id.clone(),
        flag(report.mixed).to_string(),
        "True".to_string(),
    ];
    row.extend(std::iter::repeat(String::new()).take(7));
    row.extend(marker_names.iter().map(|m| query.allele(m).to_string()));
    writer
        .write_record(&row)
        .map_err(|e| format!("Write error: {}", e))?;

    for comparison in &report.comparisons {
        let scores = &comparison.scores;
        let mut row = vec![
            comparison.sample_id.clone(),
            String::new(),
            "False".to_string(),
            scores.n_shared_markers.to_string(),
            scores.n_shared_alleles.to_string(),
            scores.n_query_alleles.to_string(),
            scores.n_reference_alleles.to_string(),
            format!("{}", scores.tanabe_score),
            format!("{}", scores.masters_query_score),
            format!("{}", scores.masters_ref_score),
        ];
        let reference = references.get(&comparison.sample_id);
        row.extend(marker_names.iter().map(|m| {
            reference.map(|r| r.allele(m).to_string()).unwrap_or_default()
        }));
        writer
            .write_record(&row)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

const SUMMARY_COLUMNS: [&str; 7] = [
    "Sample",
    "mixed",
    "top_hit",
    "next_best",
    "tanabe_matches",
    "masters_query_matches",
    "masters_ref_matches",
];

fn summary_row(summary: &MatchSummary, query: Option<&StrProfile>, marker_names: &[String]) -> Vec<String> {
    let mut row = vec![
        summary.sample_id.clone(),
        flag(summary.mixed).to_string(),
        summary.top_hit.clone().unwrap_or_default(),
        summary.next_best.clone().unwrap_or_default(),
        summary.tanabe_matches.clone(),
        summary.masters_query_matches.clone(),
        summary.masters_ref_matches.clone(),
    ];
    row.extend(marker_names.iter().map(|m| {
        query.map(|q| q.allele(m).to_string()).unwrap_or_default()
    }));
    row
}

/// Write the run summary: one row per query with its match lists and its
/// own alleles as trailing per-marker columns.
pub fn write_summary_csv(
    file_path: &Path,
    summaries: &[MatchSummary],
    queries: &ProfileTable,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let mut writer = csv::Writer::from_path(file_path)
        .map_err(|e| format!("Failed to create '{}': {}", file_path.display(), e))?;

    let mut header: Vec<&str> = SUMMARY_COLUMNS.to_vec();
    header.extend(queries.marker_names.iter().map(String::as_str));
    writer
        .write_record(&header)
        .map_err(|e| format!("Write error: {}", e))?;

    for summary in summaries {
        let row = summary_row(summary, queries.get(&summary.sample_id), &queries.marker_names);
        writer
            .write_record(&row)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Summary written to: {}", file_path.display());
    Ok(())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Write the run summary as an interactive HTML table.
pub fn write_summary_html(
    file_path: &Path,
    summaries: &[MatchSummary],
    queries: &ProfileTable,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;

    let mut head_cells = String::new();
    for column in SUMMARY_COLUMNS
        .iter()
        .copied()
        .chain(queries.marker_names.iter().map(String::as_str))
    {
        head_cells.push_str(&format!("<th>{}</th>", escape_html(column)));
    }

    let mut body_rows = String::new();
    for summary in summaries {
        let row = summary_row(summary, queries.get(&summary.sample_id), &queries.marker_names);
        body_rows.push_str("      <tr>");
        for cell in row {
            body_rows.push_str(&format!("<td>{}</td>", escape_html(&cell)));
        }
        body_rows.push_str("</tr>\n");
    }

    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <link href="https://cdn.datatables.net/1.12.1/css/jquery.dataTables.min.css" rel="stylesheet">
  <style>
    body {{ font-family: Arial, Helvetica, sans-serif; margin: 0px; }}
    h1 {{ text-align: center; background-color: #111111; color: white; padding: 10px 0px; margin: 0px 0px 10px 0px; }}
    table {{ font-size: 8pt; }}
    footer {{ width: 100%; background: #111111; color: #fff; text-align: center; padding: 1.25rem 0; margin-top: 10px; }}
  </style>
</head>
<body>
  <h1>strmatch Results</h1>
  <div style="width:95%; margin:auto;">
    <table id="table1" class="display compact cell-border">
      <thead><tr>{head_cells}</tr></thead>
      <tbody>
{body_rows}      </tbody>
    </table>
  </div>
  <script src="https://code.jquery.com/jquery-3.6.0.slim.min.js" crossorigin="anonymous"></script>
  <script src="https://cdn.datatables.net/1.12.1/js/jquery.dataTables.min.js"></script>
  <script>
    $(document).ready(function () {{ $('#table1').DataTable(); }});
  </script>
  <footer>Generated by strmatch (v{version}) on {generated}</footer>
</body>
</html>
"#,
        head_cells = head_cells,
        body_rows = body_rows,
        version = env!("CARGO_PKG_VERSION"),
        generated = generated,
    );

    std::fs::write(file_path, html)
        .map_err(|e| format!("Failed to write '{}': {}", file_path.display(), e))?;
    println!("✅ HTML summary written to: {}", file_path.display());
    Ok(())
}
