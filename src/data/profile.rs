// profile.rs - Canonical STR profile data structures

use std::collections::{HashMap, HashSet};

/// One sample's canonical STR profile: marker name -> cleaned allele
/// string. Missing markers hold an empty string, never an absent key,
/// once the profile is part of a finalized table.
#[derive(Debug, Clone)]
pub struct StrProfile {
    pub sample_id: String,
    pub markers: HashMap<String, String>,
}

impl StrProfile {
    pub fn new(sample_id: String) -> Self {
        Self {
            sample_id,
            markers: HashMap::new(),
        }
    }

    /// Allele string for a marker, empty if the marker was never called.
    pub fn allele(&self, marker: &str) -> &str {
        self.markers.get(marker).map(String::as_str).unwrap_or("")
    }
}

/// Ordered collection of profiles sharing a marker-name vocabulary,
/// produced by one ingestion call.
#[derive(Debug, Clone, Default)]
pub struct ProfileTable {
    pub samples: Vec<StrProfile>,
    pub marker_names: Vec<String>,
}

impl ProfileTable {
    /// Build a table from ingested records and the marker vocabulary in
    /// first-seen order.
    ///
    /// Sample identifiers must be unique across the whole batch; a
    /// duplicate (including one produced by renaming) is a fatal error
    /// naming the offending identifier. Markers a record never saw are
    /// materialized as empty strings.
    pub fn new(records: Vec<StrProfile>, marker_names: Vec<String>) -> Result<Self, String> {
        let mut seen: HashSet<&str> = HashSet::new();
        for record in &records {
            if !seen.insert(&record.sample_id) {
                return Err(format!(
                    "Duplicate sample identifier '{}' in ingested profiles",
                    record.sample_id
                ));
            }
        }

        let mut samples = records;
        for sample in &mut samples {
            for marker in &marker_names {
                sample
                    .markers
                    .entry(marker.clone())
                    .or_insert_with(String::new);
            }
        }

        Ok(Self {
            samples,
            marker_names,
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Look up a profile by sample identifier.
    pub fn get(&self, sample_id: &str) -> Option<&StrProfile> {
        self.samples.iter().find(|s| s.sample_id == sample_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, pairs: &[(&str, &str)]) -> StrProfile {
        StrProfile {
            sample_id: id.to_string(),
            markers: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_duplicate_identifier_is_fatal() {
        let records = vec![
            profile("SampleA", &[("mark1", "11,12")]),
            profile("SampleA", &[("mark1", "13")]),
        ];
        let err = ProfileTable::new(records, vec!["mark1".to_string()]).unwrap_err();
        assert!(err.contains("SampleA"), "error should name the sample: {}", err);
    }

    #[test]
    fn test_missing_markers_filled_with_empty_string() {
        let records = vec![
            profile("SampleA", &[("mark1", "11,12")]),
            profile("SampleB", &[("mark2", "9")]),
        ];
        let table =
            ProfileTable::new(records, vec!["mark1".to_string(), "mark2".to_string()]).unwrap();

        let a = table.get("SampleA").unwrap();
        assert_eq!(a.allele("mark1"), "11,12");
        assert_eq!(a.allele("mark2"), "");
        let b = table.get("SampleB").unwrap();
        assert_eq!(b.allele("mark1"), "");
        assert_eq!(b.allele("mark2"), "9");
    }

    #[test]
    fn test_row_order_preserved() {
        let records = vec![
            profile("SampleB", &[("mark1", "1")]),
            profile("SampleA", &[("mark1", "2")]),
        ];
        let table = ProfileTable::new(records, vec!["mark1".to_string()]).unwrap();
        let ids: Vec<&str> = table.samples.iter().map(|s| s.sample_id.as_str()).collect();
        assert_eq!(ids, vec!["SampleB", "SampleA"]);
    }
}
