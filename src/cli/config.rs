// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input_files: Option<Vec<String>>,
    pub database: Option<String>,
    pub sample_map: Option<String>,
    pub output_dir: Option<String>,

    // Scoring thresholds
    pub tan_threshold: Option<f64>,
    pub mas_q_threshold: Option<f64>,
    pub mas_r_threshold: Option<f64>,
    pub mix_threshold: Option<usize>,

    // Column naming
    pub sample_col: Option<String>,
    pub marker_col: Option<String>,
    pub amel_col: Option<String>,

    // Flags
    pub no_penta_fix: Option<bool>,
    pub score_amel: Option<bool>,
    pub check_markers: Option<bool>,
    pub no_html: Option<bool>,
    pub dry_run: Option<bool>,

    // Performance
    pub threads: Option<usize>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# strmatch.toml - Configuration file for strmatch
# Command line arguments will override these settings

# Input STR profile files (.csv, .tsv, .txt, .xlsx)
# input_files = ["profiles.csv"]

# Query inputs against a reference database instead of all-to-all
# database = "database.csv"

# Two-column headerless CSV renaming sample identifiers
# sample_map = "sample_map.csv"

# Output directory for reports and logs
output_dir = "./strmatch"

# Match-list score thresholds
tan_threshold = 80.0
mas_q_threshold = 80.0
mas_r_threshold = 80.0

# Markers with >2 alleles allowed before a sample is flagged as mixed
mix_threshold = 3

# Column naming in the source files
sample_col = "Sample"
marker_col = "Marker"
amel_col = "AMEL"

# Flags
# no_penta_fix = false
# score_amel = false
# check_markers = false
# no_html = false
# dry_run = false

# Number of worker threads (default: auto-detect)
# threads = 4
"#
        .to_string()
    }
}
