// ingress.rs - Profile ingestion pipeline (wide/long detection, cleaning, renaming)

use crate::data::alleles::clean_allele_string;
use crate::data::loaders::{self, RawTable};
use crate::data::markers::{harmonize_marker_name, harmonize_markers};
use crate::data::profile::{ProfileTable, StrProfile};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Source table shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// One row per (sample, marker) with the calls spread over "Allele*"
    /// columns.
    Wide,
    /// One row per sample with one column per marker.
    Long,
}

/// Classify a source table. A table is wide when any trimmed column name
/// contains the substring "Allele".
pub fn detect_shape(headers: &[String]) -> TableShape {
    if headers.iter().any(|h| h.contains("Allele")) {
        TableShape::Wide
    } else {
        TableShape::Long
    }
}

/// Optional identifier rename table (old -> new), applied once during
/// ingestion. Unmatched identifiers pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct SampleMap {
    entries: Vec<(String, String)>,
}

impl SampleMap {
    /// Load a headerless two-column CSV: identifiers as they appear in
    /// the source files, then the replacement identifiers.
    pub fn from_csv(path: &Path) -> Result<Self, String> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| format!("Failed to open sample map '{}': {}", path.display(), e))?;

        let mut entries = Vec::new();
        for (line_num, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                format!(
                    "Failed to parse sample map '{}' line {}: {}",
                    path.display(),
                    line_num + 1,
                    e
                )
            })?;
            let old = record.get(0).unwrap_or("").trim().to_string();
            if old.is_empty() {
                continue;
            }
            let new = record
                .get(1)
                .ok_or_else(|| {
                    format!(
                        "Sample map '{}' line {} needs two columns",
                        path.display(),
                        line_num + 1
                    )
                })?
                .trim()
                .to_string();
            entries.push((old, new));
        }
        Ok(Self { entries })
    }

    /// Replacement identifier, if this one is mapped.
    pub fn rename(&self, sample_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(old, _)| old == sample_id)
            .map(|(_, new)| new.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Column naming and harmonization options for one ingestion call.
#[derive(Debug, Clone)]
pub struct IngressOptions {
    /// Name of the sample identifier column.
    pub sample_col: String,
    /// Name of the marker identifier column (wide format only).
    pub marker_col: String,
    /// Harmonize Penta marker spellings.
    pub penta_fix: bool,
}

impl Default for IngressOptions {
    fn default() -> Self {
        Self {
            sample_col: "Sample".to_string(),
            marker_col: "Marker".to_string(),
            penta_fix: true,
        }
    }
}

fn push_unique(order: &mut Vec<String>, name: &str) {
    if !order.iter().any(|m| m == name) {
        order.push(name.to_string());
    }
}

/// Collapse a wide-format table into one record per sample.
///
/// Rows are grouped by the sample column (groups emit in sorted sample
/// order); for each (sample, marker) every "Allele*" column value across
/// the group's rows is collected, skipping empty and literal "nan" cells,
/// then comma-joined and cleaned into the canonical allele string.
fn collapse_wide(
    table: &RawTable,
    options: &IngressOptions,
) -> Result<(Vec<StrProfile>, Vec<String>), String> {
    let sample_idx = table.column(&options.sample_col).ok_or_else(|| {
        format!(
            "Sample column '{}' not found (columns: {})",
            options.sample_col,
            table.headers.join(", ")
        )
    })?;
    let marker_idx = table.column(&options.marker_col).ok_or_else(|| {
        format!(
            "Marker column '{}' not found (columns: {})",
            options.marker_col,
            table.headers.join(", ")
        )
    })?;
    let allele_cols: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.contains("Allele"))
        .map(|(i, _)| i)
        .collect();

    let mut groups: BTreeMap<&str, Vec<&Vec<String>>> = BTreeMap::new();
    for row in &table.rows {
        groups.entry(row[sample_idx].as_str()).or_default().push(row);
    }

    let mut marker_order: Vec<String> = Vec::new();
    let mut records = Vec::new();
    for (sample_id, rows) in groups {
        let mut calls: HashMap<String, String> = HashMap::new();
        let mut local_order: Vec<String> = Vec::new();

        for row in rows {
            let marker = row[marker_idx].as_str();
            if marker.is_empty() {
                continue;
            }
            let joined = calls.entry(marker.to_string()).or_insert_with(|| {
                local_order.push(marker.to_string());
                String::new()
            });
            for &col in &allele_cols {
                let value = row[col].as_str();
                if value.is_empty() || value.eq_ignore_ascii_case("nan") {
                    continue;
                }
                if !joined.is_empty() {
                    joined.push(',');
                }
                joined.push_str(value);
            }
        }

        let mut profile = StrProfile::new(sample_id.to_string());
        for marker in &local_order {
            profile
                .markers
                .insert(marker.clone(), clean_allele_string(&calls[marker]));
        }
        if options.penta_fix {
            harmonize_markers(&mut profile.markers, false);
        }
        for marker in &local_order {
            let name = if options.penta_fix {
                harmonize_marker_name(marker, false)
            } else {
                marker.as_str()
            };
            push_unique(&mut marker_order, name);
        }
        records.push(profile);
    }

    Ok((records, marker_order))
}

/// Convert a long-format table: one record per row, every non-identifier
/// column a marker, missing cells as empty strings.
fn collect_long(
    table: &RawTable,
    options: &IngressOptions,
) -> Result<(Vec<StrProfile>, Vec<String>), String> {
    let sample_idx = table.column(&options.sample_col).ok_or_else(|| {
        format!(
            "Sample column '{}' not found (columns: {})",
            options.sample_col,
            table.headers.join(", ")
        )
    })?;

    let mut marker_order: Vec<String> = Vec::new();
    for (i, header) in table.headers.iter().enumerate() {
        if i == sample_idx {
            continue;
        }
        let name = if options.penta_fix {
            harmonize_marker_name(header, false)
        } else {
            header.as_str()
        };
        push_unique(&mut marker_order, name);
    }

    let mut records = Vec::new();
    for row in &table.rows {
        let mut profile = StrProfile::new(row[sample_idx].clone());
        for (i, header) in table.headers.iter().enumerate() {
            if i == sample_idx {
                continue;
            }
            profile
                .markers
                .insert(header.clone(), clean_allele_string(&row[i]));
        }
        if options.penta_fix {
            harmonize_markers(&mut profile.markers, false);
        }
        records.push(profile);
    }

    Ok((records, marker_order))
}

/// Ingest one or more STR profile files into a canonical profile table.
///
/// Files are parsed independently (shape detected per file) and
/// concatenated row-wise; the marker vocabulary is the union across files
/// in first-seen order. Sample renaming is applied after concatenation,
/// before the mandatory identifier-uniqueness check. Any file failure
/// aborts the whole call with no partial table.
pub fn str_ingress(
    paths: &[PathBuf],
    options: &IngressOptions,
    sample_map: Option<&SampleMap>,
) -> Result<ProfileTable, String> {
    if paths.is_empty() {
        return Err("No input files provided".to_string());
    }

    let mut records: Vec<StrProfile> = Vec::new();
    let mut marker_names: Vec<String> = Vec::new();

    for path in paths {
        let table = loaders::load_table(path)?;
        let (file_records, file_markers) = match detect_shape(&table.headers) {
            TableShape::Wide => collapse_wide(&table, options)?,
            TableShape::Long => collect_long(&table, options)?,
        };
        for marker in &file_markers {
            push_unique(&mut marker_names, marker);
        }
        records.extend(file_records);
    }

    if let Some(map) = sample_map {
        for record in &mut records {
            if let Some(new_id) = map.rename(&record.sample_id) {
                record.sample_id = new_id.to_string();
            }
        }
    }

    ProfileTable::new(records, marker_names)
}
