// lib.rs - strmatch library root

//! # strmatch - STR profile similarity scoring for cell line authentication
//!
//! This library ingests short tandem repeat (STR) genotyping profiles from
//! heterogeneous tabular files, normalizes them into canonical per-sample
//! allele records, and computes pairwise Tanabe and Masters similarity
//! scores between samples or against a reference database, flagging
//! suspected mixed samples and producing ranked match summaries.
//!
//! ## Features
//!
//! - **Heterogeneous ingestion**: wide and long tabular layouts in CSV,
//!   TSV, TXT, and XLSX, detected per file
//! - **Canonical cleaning**: deduplicated, deterministically ordered
//!   allele strings and harmonized Penta marker spellings
//! - **Three similarity scores**: Tanabe, Masters (vs. query), Masters
//!   (vs. reference)
//! - **Mixing detection**: per-sample multi-allelic marker heuristic
//! - **Cross-reference preparation**: CLASTR-compatible marker
//!   validation and query payloads
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use strmatch::prelude::*;
//! use std::path::PathBuf;
//!
//! // Ingest profiles into a canonical table
//! let table = str_ingress(
//!     &[PathBuf::from("profiles.csv")],
//!     &IngressOptions::default(),
//!     None, // no sample renaming
//! )?;
//!
//! // Compare every sample against every other
//! let options = CompareOptions {
//!     use_amel: false,
//!     amel_col: "AMEL".to_string(),
//!     mix_threshold: 3,
//! };
//! let reports = compare_all(&table, &table, &options);
//!
//! for report in &reports {
//!     let summary = make_summary(report, &SummaryThresholds::default());
//!     println!("{}: top hit {:?}", summary.sample_id, summary.top_hit);
//! }
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{compare_all, make_summary, mixing_check, score_query};
    pub use crate::core::{
        CompareOptions, MatchSummary, QueryReport, ScoreResult, SummaryThresholds,
    };
    pub use crate::data::{clean_allele_string, str_ingress};
    pub use crate::data::{IngressOptions, ProfileTable, SampleMap, StrProfile, TableShape};
    pub use crate::output::{write_sample_report, write_summary_csv, write_summary_html};
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, ValidationResult};
pub use crate::core::{CompareOptions, MatchSummary, QueryReport, ScoreResult, SummaryThresholds};
pub use crate::data::{IngressOptions, ProfileTable, SampleMap, StrProfile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "strmatch v{} - STR profile similarity scoring for cell line authentication",
        VERSION
    )
}
