// mixing.rs - Mixed-sample heuristic

use crate::data::alleles::raw_allele_count;
use std::collections::HashMap;

/// Flag a sample as potentially mixed.
///
/// Counts the markers whose stored allele string splits into more than
/// two raw calls (before any deduplication); the sample is flagged when
/// that count strictly exceeds `three_allele_threshold`. Independent of
/// any reference comparison.
pub fn mixing_check(alleles: &HashMap<String, String>, three_allele_threshold: usize) -> bool {
    let past_threshold = alleles
        .values()
        .filter(|calls| raw_allele_count(calls) > 2)
        .count();

    past_threshold > three_allele_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<String, String> {
        [
            ("mark1", "11,12"),
            ("mark2", "3"),
            ("mark3", "13,14"),
            ("mark4", "5,7,9"),
            ("mark5", "5,7,9"),
            ("mark6", "5,7,9"),
            ("mark7", "5,7,9"),
            ("AMEL", "X"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_mixing_threshold_exceeded() {
        assert!(mixing_check(&sample(), 3));
    }

    #[test]
    fn test_mixing_threshold_not_exceeded() {
        assert!(!mixing_check(&sample(), 5));
    }

    #[test]
    fn test_raw_counts_not_deduplicated() {
        // "5,5,7" is three raw calls even though only two are distinct.
        let alleles: HashMap<String, String> =
            [("mark1", "5,5,7")].iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        assert!(mixing_check(&alleles, 0));
        assert!(!mixing_check(&alleles, 1));
    }

    #[test]
    fn test_empty_markers_do_not_count() {
        let alleles: HashMap<String, String> =
            [("mark1", ""), ("mark2", "1,2")].iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        assert!(!mixing_check(&alleles, 0));
    }
}
