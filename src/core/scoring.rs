// scoring.rs - Tanabe and Masters similarity scoring

use std::collections::{HashMap, HashSet};

/// Scores and allele counts for one query/reference comparison.
/// Computed fresh per pair, never cached, never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub n_shared_markers: usize,
    pub n_shared_alleles: usize,
    pub n_query_alleles: usize,
    pub n_reference_alleles: usize,
    pub tanabe_score: f64,
    pub masters_query_score: f64,
    pub masters_ref_score: f64,
}

fn allele_sets(profile: &HashMap<String, String>) -> HashMap<&str, HashSet<&str>> {
    profile
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.as_str(), v.split(',').collect()))
        .collect()
}

/// Score a query profile against a reference profile.
///
/// Markers with no alleles are discarded from both sides; scoring runs
/// over the intersection of the remaining marker names, minus the
/// sex-typing marker unless `use_amel` is set. Per-marker allele lists
/// are treated as sets, so caller-supplied duplicates like "5,5,7" count
/// once.
///
/// A zero query or reference allele count after filtering leaves the
/// scores undefined; this returns an error rather than dividing by zero,
/// and the batch driver skips such pairs.
pub fn score_query(
    query: &HashMap<String, String>,
    reference: &HashMap<String, String>,
    use_amel: bool,
    amel_col: &str,
) -> Result<ScoreResult, String> {
    let query_sets = allele_sets(query);
    let reference_sets = allele_sets(reference);

    let mut markers: Vec<&str> = query_sets
        .keys()
        .filter(|k| reference_sets.contains_key(*k))
        .copied()
        .collect();
    if !use_amel {
        markers.retain(|m| *m != amel_col);
    }

    let n_shared_markers = markers.len();
    let mut n_query_alleles = 0;
    let mut n_reference_alleles = 0;
    let mut n_shared_alleles = 0;

    for marker in markers {
        let q = &query_sets[marker];
        let r = &reference_sets[marker];
        n_query_alleles += q.len();
        n_reference_alleles += r.len();
        n_shared_alleles += q.intersection(r).count();
    }

    if n_query_alleles == 0 || n_reference_alleles == 0 {
        return Err("no scorable alleles shared between query and reference".to_string());
    }

    Ok(ScoreResult {
        n_shared_markers,
        n_shared_alleles,
        n_query_alleles,
        n_reference_alleles,
        tanabe_score: 100.0 * (2 * n_shared_alleles) as f64
            / (n_query_alleles + n_reference_alleles) as f64,
        masters_query_score: 100.0 * n_shared_alleles as f64 / n_query_alleles as f64,
        masters_ref_score: 100.0 * n_shared_alleles as f64 / n_reference_alleles as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn query() -> HashMap<String, String> {
        profile(&[
            ("mark1", "11,12"),
            ("mark2", ""),
            ("mark3", "13"),
            ("mark4", "5,5,7"),
            ("AMEL", "X"),
        ])
    }

    fn reference() -> HashMap<String, String> {
        profile(&[
            ("mark1", "11,12"),
            ("mark2", "3"),
            ("mark3", "13,14"),
            ("mark4", "5,7"),
            ("AMEL", "X"),
        ])
    }

    #[test]
    fn test_scoring_without_amel() {
        let scores = score_query(&query(), &reference(), false, "AMEL").unwrap();
        assert_eq!(scores.n_shared_markers, 3);
        assert_eq!(scores.n_shared_alleles, 5);
        assert_eq!(scores.n_query_alleles, 5);
        assert_eq!(scores.n_reference_alleles, 6);
        assert_eq!(format!("{:.2}", scores.tanabe_score), "90.91");
        assert_eq!(scores.masters_query_score, 100.0);
        assert_eq!(format!("{:.2}", scores.masters_ref_score), "83.33");
    }

    #[test]
    fn test_scoring_with_amel() {
        let scores = score_query(&query(), &reference(), true, "AMEL").unwrap();
        assert_eq!(scores.n_shared_markers, 4);
        assert_eq!(scores.n_shared_alleles, 6);
        assert_eq!(scores.n_query_alleles, 6);
        assert_eq!(scores.n_reference_alleles, 7);
        assert_eq!(format!("{:.2}", scores.tanabe_score), "92.31");
        assert_eq!(scores.masters_query_score, 100.0);
        assert_eq!(format!("{:.2}", scores.masters_ref_score), "85.71");
    }

    #[test]
    fn test_identical_profiles_score_100() {
        let q = profile(&[
            ("marker1", "12,14"),
            ("marker2", "12"),
            ("marker4", "13"),
            ("Penta D", "9,10"),
            ("Penta E", "12,14"),
            ("AMEL", "X"),
        ]);
        let r = profile(&[
            ("marker1", "12,14"),
            ("marker2", "12"),
            ("marker4", "13"),
            ("Penta D", "9,10"),
            ("Penta E", "12,14"),
            ("AMEL", "X"),
        ]);
        let scores = score_query(&q, &r, true, "AMEL").unwrap();
        assert_eq!(scores.n_shared_markers, 6);
        assert_eq!(scores.n_shared_alleles, 9);
        assert_eq!(scores.n_query_alleles, 9);
        assert_eq!(scores.n_reference_alleles, 9);
        assert_eq!(format!("{:.2}", scores.tanabe_score), "100.00");
        assert_eq!(scores.masters_query_score, 100.0);
        assert_eq!(format!("{:.2}", scores.masters_ref_score), "100.00");
    }

    #[test]
    fn test_partial_match_scores() {
        let q = profile(&[
            ("marker1", "12,14"),
            ("marker2", "12"),
            ("marker4", "13"),
            ("Penta D", "9,10"),
            ("Penta E", "12,14"),
            ("AMEL", "X"),
        ]);
        let r = profile(&[
            ("marker1", "14"),
            ("marker2", ""),
            ("marker4", "13,15"),
            ("Penta D", "13"),
            ("Penta E", ""),
            ("AMEL", "X,Y"),
        ]);
        let scores = score_query(&q, &r, true, "AMEL").unwrap();
        assert_eq!(scores.n_shared_markers, 4);
        assert_eq!(scores.n_shared_alleles, 3);
        assert_eq!(scores.n_query_alleles, 6);
        assert_eq!(scores.n_reference_alleles, 6);
        assert_eq!(format!("{:.2}", scores.tanabe_score), "50.00");
        assert_eq!(scores.masters_query_score, 50.0);
        assert_eq!(format!("{:.2}", scores.masters_ref_score), "50.00");
    }

    #[test]
    fn test_swapping_sides_swaps_masters_but_not_shared_counts() {
        let forward = score_query(&query(), &reference(), false, "AMEL").unwrap();
        let backward = score_query(&reference(), &query(), false, "AMEL").unwrap();

        assert_eq!(forward.n_shared_markers, backward.n_shared_markers);
        assert_eq!(forward.n_shared_alleles, backward.n_shared_alleles);
        assert_eq!(forward.n_query_alleles, backward.n_reference_alleles);
        assert_eq!(forward.n_reference_alleles, backward.n_query_alleles);
        assert_eq!(forward.tanabe_score, backward.tanabe_score);
        assert_eq!(forward.masters_query_score, backward.masters_ref_score);
        assert_eq!(forward.masters_ref_score, backward.masters_query_score);
    }

    #[test]
    fn test_degenerate_pair_is_an_error() {
        let empty = profile(&[("mark1", ""), ("mark2", "")]);
        assert!(score_query(&empty, &reference(), false, "AMEL").is_err());
        assert!(score_query(&query(), &empty, false, "AMEL").is_err());

        // No overlapping markers at all.
        let disjoint = profile(&[("other", "1,2")]);
        assert!(score_query(&query(), &disjoint, false, "AMEL").is_err());
    }

    #[test]
    fn test_amel_only_overlap_without_use_amel_is_degenerate() {
        let q = profile(&[("AMEL", "X"), ("mark1", "11")]);
        let r = profile(&[("AMEL", "X"), ("mark2", "12")]);
        assert!(score_query(&q, &r, false, "AMEL").is_err());
        let scores = score_query(&q, &r, true, "AMEL").unwrap();
        assert_eq!(scores.n_shared_markers, 1);
        assert_eq!(scores.tanabe_score, 100.0);
    }
}
