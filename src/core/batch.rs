// batch.rs - Batch comparison driver (every query against a reference set)

use crate::core::mixing::mixing_check;
use crate::core::scoring::{score_query, ScoreResult};
use crate::data::ProfileTable;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// One scored comparison against a reference sample.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub sample_id: String,
    pub scores: ScoreResult,
}

/// Everything computed for one query sample: the mixing flag, its
/// comparisons sorted by Tanabe score descending, and the reference
/// pairs skipped as unscorable.
#[derive(Debug, Clone)]
pub struct QueryReport {
    pub sample_id: String,
    pub mixed: bool,
    pub comparisons: Vec<Comparison>,
    /// (reference id, reason) for each degenerate pair excluded from the
    /// results.
    pub skipped: Vec<(String, String)>,
}

/// Scoring options for one comparison run.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub use_amel: bool,
    pub amel_col: String,
    pub mix_threshold: usize,
}

/// Compare every query sample against the reference table.
///
/// References are either a separately ingested database or the query
/// table itself (all-to-all); the identically named sample is never
/// compared to itself. Queries are independent, so the outer loop fans
/// out across the thread pool; report order matches query order. A
/// degenerate pair is recorded in `skipped` and the run continues - one
/// empty reference never aborts the batch.
pub fn compare_all(
    queries: &ProfileTable,
    references: &ProfileTable,
    options: &CompareOptions,
) -> Vec<QueryReport> {
    let total_comparisons = queries.len() * references.len();
    println!(
        "🔄 Comparing {} query samples against {} references ({} pairs)...",
        queries.len(),
        references.len(),
        total_comparisons
    );

    let pb = ProgressBar::new(queries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let reports: Vec<QueryReport> = queries
        .samples
        .par_iter()
        .map(|query| {
            let mixed = mixing_check(&query.markers, options.mix_threshold);
            let mut comparisons = Vec::new();
            let mut skipped = Vec::new();

            for reference in &references.samples {
                if reference.sample_id == query.sample_id {
                    continue;
                }
                match score_query(
                    &query.markers,
                    &reference.markers,
                    options.use_amel,
                    &options.amel_col,
                ) {
                    Ok(scores) => comparisons.push(Comparison {
                        sample_id: reference.sample_id.clone(),
                        scores,
                    }),
                    Err(reason) => skipped.push((reference.sample_id.clone(), reason)),
                }
            }

            comparisons
                .sort_by(|a, b| b.scores.tanabe_score.total_cmp(&a.scores.tanabe_score));

            pb.inc(1);
            QueryReport {
                sample_id: query.sample_id.clone(),
                mixed,
                comparisons,
                skipped,
            }
        })
        .collect();

    pb.finish_and_clear();
    println!("✅ Comparison run completed");
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ProfileTable, StrProfile};
    use std::collections::HashMap;

    fn profile(id: &str, pairs: &[(&str, &str)]) -> StrProfile {
        StrProfile {
            sample_id: id.to_string(),
            markers: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<String, String>>(),
        }
    }

    fn table() -> ProfileTable {
        let markers = vec![
            "mark1".to_string(),
            "mark2".to_string(),
            "AMEL".to_string(),
        ];
        ProfileTable::new(
            vec![
                profile("S1", &[("mark1", "11,12"), ("mark2", "5,7"), ("AMEL", "X")]),
                profile("S2", &[("mark1", "11,12"), ("mark2", "5,7"), ("AMEL", "X")]),
                profile("S3", &[("mark1", "11,13"), ("mark2", "8"), ("AMEL", "X,Y")]),
                profile("Empty", &[("mark1", ""), ("mark2", ""), ("AMEL", "")]),
            ],
            markers,
        )
        .unwrap()
    }

    fn options() -> CompareOptions {
        CompareOptions {
            use_amel: false,
            amel_col: "AMEL".to_string(),
            mix_threshold: 3,
        }
    }

    #[test]
    fn test_self_is_excluded_and_results_sorted() {
        let table = table();
        let reports = compare_all(&table, &table, &options());

        assert_eq!(reports.len(), 4);
        let s1 = &reports[0];
        assert_eq!(s1.sample_id, "S1");
        assert!(s1.comparisons.iter().all(|c| c.sample_id != "S1"));

        // S2 is identical, S3 is not; identical sorts first.
        assert_eq!(s1.comparisons[0].sample_id, "S2");
        assert_eq!(s1.comparisons[0].scores.tanabe_score, 100.0);
        assert!(s1.comparisons[0].scores.tanabe_score >= s1.comparisons[1].scores.tanabe_score);
    }

    #[test]
    fn test_degenerate_pairs_are_skipped_not_fatal() {
        let table = table();
        let reports = compare_all(&table, &table, &options());

        let s1 = &reports[0];
        assert_eq!(s1.comparisons.len(), 2);
        assert_eq!(s1.skipped.len(), 1);
        assert_eq!(s1.skipped[0].0, "Empty");

        // The empty query skips every reference but still yields a report.
        let empty = &reports[3];
        assert_eq!(empty.sample_id, "Empty");
        assert!(empty.comparisons.is_empty());
        assert_eq!(empty.skipped.len(), 3);
    }

    #[test]
    fn test_database_mode_uses_reference_table() {
        let queries = ProfileTable::new(
            vec![profile("Q1", &[("mark1", "11,12"), ("mark2", "5,7"), ("AMEL", "X")])],
            vec!["mark1".to_string(), "mark2".to_string(), "AMEL".to_string()],
        )
        .unwrap();
        let references = table();

        let reports = compare_all(&queries, &references, &options());
        assert_eq!(reports.len(), 1);
        // All four references compared (no name collision), one skipped.
        assert_eq!(reports[0].comparisons.len(), 3);
        assert_eq!(reports[0].skipped.len(), 1);
    }
}
