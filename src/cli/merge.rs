// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input_files.is_empty() {
            if let Some(files) = config.input_files {
                self.input_files = files;
            }
        }
        if self.database.is_none() {
            self.database = config.database;
        }
        if self.sample_map.is_none() {
            self.sample_map = config.sample_map;
        }
        if self.output_dir == "./strmatch" && config.output_dir.is_some() {
            self.output_dir = config.output_dir.unwrap();
        }

        // Thresholds (only override defaults, not explicit CLI values)
        if self.tan_threshold == 80.0 && config.tan_threshold.is_some() {
            self.tan_threshold = config.tan_threshold.unwrap();
        }
        if self.mas_q_threshold == 80.0 && config.mas_q_threshold.is_some() {
            self.mas_q_threshold = config.mas_q_threshold.unwrap();
        }
        if self.mas_r_threshold == 80.0 && config.mas_r_threshold.is_some() {
            self.mas_r_threshold = config.mas_r_threshold.unwrap();
        }
        if self.mix_threshold == 3 && config.mix_threshold.is_some() {
            self.mix_threshold = config.mix_threshold.unwrap();
        }

        // Column naming
        if self.sample_col == "Sample" && config.sample_col.is_some() {
            self.sample_col = config.sample_col.unwrap();
        }
        if self.marker_col == "Marker" && config.marker_col.is_some() {
            self.marker_col = config.marker_col.unwrap();
        }
        if self.amel_col == "AMEL" && config.amel_col.is_some() {
            self.amel_col = config.amel_col.unwrap();
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.no_penta_fix && config.no_penta_fix.unwrap_or(false) {
            self.no_penta_fix = true;
        }
        if !self.score_amel && config.score_amel.unwrap_or(false) {
            self.score_amel = true;
        }
        if !self.check_markers && config.check_markers.unwrap_or(false) {
            self.check_markers = true;
        }
        if !self.no_html && config.no_html.unwrap_or(false) {
            self.no_html = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
