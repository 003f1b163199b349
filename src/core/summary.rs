// summary.rs - Per-query match summarization

use crate::core::batch::{Comparison, QueryReport};

/// Score thresholds for the three independent match lists.
#[derive(Debug, Clone, Copy)]
pub struct SummaryThresholds {
    pub tanabe: f64,
    pub masters_query: f64,
    pub masters_ref: f64,
}

impl Default for SummaryThresholds {
    fn default() -> Self {
        Self {
            tanabe: 80.0,
            masters_query: 80.0,
            masters_ref: 80.0,
        }
    }
}

/// One summary row per query sample. Top and next-best hits are absent
/// (not out-of-range indexing) when fewer than two references were
/// scorable.
#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub sample_id: String,
    pub mixed: bool,
    pub top_hit: Option<String>,
    pub next_best: Option<String>,
    pub tanabe_matches: String,
    pub masters_query_matches: String,
    pub masters_ref_matches: String,
}

fn format_hit(sample_id: &str, score: f64) -> String {
    format!("{}: {:.2}", sample_id, score)
}

fn matches_over<F>(comparisons: &[Comparison], threshold: f64, score: F) -> String
where
    F: Fn(&Comparison) -> f64,
{
    comparisons
        .iter()
        .filter(|c| score(c) >= threshold)
        .map(|c| format_hit(&c.sample_id, score(c)))
        .collect::<Vec<String>>()
        .join("; ")
}

/// Summarize one query's comparison run.
///
/// Assumes `report.comparisons` is sorted by Tanabe score descending
/// (the batch driver's output). Each threshold list collects every
/// reference meeting or exceeding its threshold, formatted
/// "identifier: score" and joined with "; ".
pub fn make_summary(report: &QueryReport, thresholds: &SummaryThresholds) -> MatchSummary {
    let comparisons = &report.comparisons;

    MatchSummary {
        sample_id: report.sample_id.clone(),
        mixed: report.mixed,
        top_hit: comparisons
            .first()
            .map(|c| format_hit(&c.sample_id, c.scores.tanabe_score)),
        next_best: comparisons
            .get(1)
            .map(|c| format_hit(&c.sample_id, c.scores.tanabe_score)),
        tanabe_matches: matches_over(comparisons, thresholds.tanabe, |c| c.scores.tanabe_score),
        masters_query_matches: matches_over(comparisons, thresholds.masters_query, |c| {
            c.scores.masters_query_score
        }),
        masters_ref_matches: matches_over(comparisons, thresholds.masters_ref, |c| {
            c.scores.masters_ref_score
        }),
    }
}
