// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::data::{IngressOptions, SampleMap};
use std::path::{Path, PathBuf};

/// Validated, ready-to-run ingestion inputs derived from the raw args.
#[derive(Debug)]
pub struct ValidationResult {
    pub input_paths: Vec<PathBuf>,
    pub database_path: Option<PathBuf>,
    pub sample_map: Option<SampleMap>,
    pub ingress_options: IngressOptions,
}

const SUPPORTED_EXTENSIONS: [&str; 4] = ["csv", "tsv", "txt", "xlsx"];

fn check_extension(path: &Path) -> Result<(), String> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(format!(
            "File extension '{}' in file '{}' is not supported (use .csv, .tsv, .txt, or .xlsx)",
            extension,
            path.display()
        ))
    }
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    if args.input_files.is_empty() {
        return Err("At least one input file is required".to_string());
    }

    // Validate thresholds
    for (name, value) in [
        ("tan_threshold", args.tan_threshold),
        ("mas_q_threshold", args.mas_q_threshold),
        ("mas_r_threshold", args.mas_r_threshold),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(format!("{} must be between 0 and 100 (got {})", name, value));
        }
    }

    // Fail on unsupported extensions before reading anything
    let input_paths: Vec<PathBuf> = args.input_files.iter().map(PathBuf::from).collect();
    for path in &input_paths {
        check_extension(path)?;
    }

    let database_path = match &args.database {
        Some(database) => {
            let path = PathBuf::from(database);
            check_extension(&path)?;
            Some(path)
        }
        None => None,
    };

    let sample_map = match &args.sample_map {
        Some(map_path) => {
            let map = SampleMap::from_csv(Path::new(map_path))?;
            println!("📋 Loaded {} sample renames from '{}'", map.len(), map_path);
            Some(map)
        }
        None => None,
    };

    Ok(ValidationResult {
        input_paths,
        database_path,
        sample_map,
        ingress_options: IngressOptions {
            sample_col: args.sample_col.clone(),
            marker_col: args.marker_col.clone(),
            penta_fix: !args.no_penta_fix,
        },
    })
}
