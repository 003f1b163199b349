// mod.rs - Core scoring logic module

pub mod batch;
pub mod crossref;
pub mod mixing;
pub mod scoring;
pub mod summary;

// Re-export main types for convenience
pub use batch::{compare_all, CompareOptions, Comparison, QueryReport};
pub use crossref::{clastr_payload, check_profile_markers, CrossRefAlgorithm, CrossRefOptions};
pub use mixing::mixing_check;
pub use scoring::{score_query, ScoreResult};
pub use summary::{make_summary, MatchSummary, SummaryThresholds};
