// markers.rs - Marker name harmonization and the CLASTR controlled vocabulary

use std::collections::HashMap;

/// Penta marker spellings: (canonical, space variant, underscore variant).
/// Single shared table used by both ingestion and cross-reference
/// formatting.
const PENTA_SYNONYMS: [(&str, &str, &str); 3] = [
    ("PentaC", "Penta C", "Penta_C"),
    ("PentaD", "Penta D", "Penta_D"),
    ("PentaE", "Penta E", "Penta_E"),
];

/// Marker names accepted by the CLASTR/Cellosaurus cross-reference API.
pub const VALID_CLASTR_MARKERS: [&str; 36] = [
    "Amel",
    "Amelogenin",
    "CSF1PO",
    "D2S1338",
    "D3S1358",
    "D5S818",
    "D7S820",
    "D8S1179",
    "D13S317",
    "D16S539",
    "D18S51",
    "D19S433",
    "D21S11",
    "FGA",
    "Penta D",
    "Penta E",
    "PentaD",
    "PentaE",
    "TH01",
    "TPOX",
    "vWA",
    "D1S1656",
    "D2S441",
    "D6S1043",
    "D10S1248",
    "D12S391",
    "D22S1045",
    "DXS101",
    "DYS391",
    "F13A01",
    "F13B",
    "FESFPS",
    "LPL",
    "Penta C",
    "PentaC",
    "SE33",
];

/// Fields carried in a cross-reference payload that are not marker names.
pub const RESERVED_QUERY_FIELDS: [&str; 4] =
    ["algorithm", "includeAmelogenin", "scoreFilter", "description"];

/// Rewrite a single marker name through the Penta synonym table.
///
/// Forward direction maps legacy spellings ("Penta C", "Penta_C") to the
/// canonical no-space form; reverse maps the canonical (or underscore)
/// form back to the space-separated spelling the cross-reference service
/// expects. Unrecognized names pass through unchanged.
pub fn harmonize_marker_name(name: &str, reverse: bool) -> &str {
    for (canonical, spaced, underscored) in PENTA_SYNONYMS {
        if !reverse {
            if name == spaced || name == underscored {
                return canonical;
            }
        } else if name == canonical || name == underscored {
            return spaced;
        }
    }
    name
}

/// Rewrite the Penta marker keys of one sample record in place.
///
/// A pure rename: values carry over unchanged. If the target spelling
/// already exists in the record, the moved value overwrites it. The
/// space variant is checked before the underscore variant.
pub fn harmonize_markers(markers: &mut HashMap<String, String>, reverse: bool) {
    for (canonical, spaced, underscored) in PENTA_SYNONYMS {
        if !reverse {
            if let Some(value) = markers.remove(spaced) {
                markers.insert(canonical.to_string(), value);
            } else if let Some(value) = markers.remove(underscored) {
                markers.insert(canonical.to_string(), value);
            }
        } else if let Some(value) = markers.remove(canonical) {
            markers.insert(spaced.to_string(), value);
        } else if let Some(value) = markers.remove(underscored) {
            markers.insert(spaced.to_string(), value);
        }
    }
}

/// Marker names not accepted by the cross-reference service.
///
/// Reserved payload fields are ignored; the result is sorted for stable
/// reporting. Incompatible markers are a warning, never an ingestion
/// error - they are simply excluded from that downstream query.
pub fn incompatible_markers<'a, I>(markers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut missing: Vec<String> = markers
        .into_iter()
        .filter(|m| !RESERVED_QUERY_FIELDS.contains(m))
        .filter(|m| !VALID_CLASTR_MARKERS.contains(m))
        .map(|m| m.to_string())
        .collect();
    missing.sort_unstable();
    missing.dedup();
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_forward_harmonization() {
        let mut samp = record(&[("Penta D", "9,10"), ("Penta_E", "12,14"), ("TH01", "7")]);
        harmonize_markers(&mut samp, false);
        assert_eq!(samp.get("PentaD").map(String::as_str), Some("9,10"));
        assert_eq!(samp.get("PentaE").map(String::as_str), Some("12,14"));
        assert_eq!(samp.get("TH01").map(String::as_str), Some("7"));
        assert!(!samp.contains_key("Penta D"));
        assert!(!samp.contains_key("Penta_E"));
    }

    #[test]
    fn test_reverse_restores_legacy_spelling() {
        let mut samp = record(&[("Penta C", "11"), ("Penta D", "9,10"), ("Penta E", "12")]);
        harmonize_markers(&mut samp, false);
        harmonize_markers(&mut samp, true);
        assert_eq!(samp.get("Penta C").map(String::as_str), Some("11"));
        assert_eq!(samp.get("Penta D").map(String::as_str), Some("9,10"));
        assert_eq!(samp.get("Penta E").map(String::as_str), Some("12"));
    }

    #[test]
    fn test_space_variant_wins_over_underscore() {
        let mut samp = record(&[("Penta D", "9"), ("Penta_D", "10")]);
        harmonize_markers(&mut samp, false);
        assert_eq!(samp.get("PentaD").map(String::as_str), Some("9"));
        // The underscore spelling was not consumed.
        assert_eq!(samp.get("Penta_D").map(String::as_str), Some("10"));
    }

    #[test]
    fn test_existing_canonical_key_is_overwritten() {
        let mut samp = record(&[("PentaE", "5"), ("Penta E", "12,14")]);
        harmonize_markers(&mut samp, false);
        assert_eq!(samp.len(), 1);
        assert_eq!(samp.get("PentaE").map(String::as_str), Some("12,14"));
    }

    #[test]
    fn test_harmonize_marker_name() {
        assert_eq!(harmonize_marker_name("Penta C", false), "PentaC");
        assert_eq!(harmonize_marker_name("Penta_C", false), "PentaC");
        assert_eq!(harmonize_marker_name("PentaC", true), "Penta C");
        assert_eq!(harmonize_marker_name("Penta_C", true), "Penta C");
        assert_eq!(harmonize_marker_name("D3S1358", false), "D3S1358");
    }

    #[test]
    fn test_incompatible_markers() {
        let markers = [
            "CSF1PO",
            "PentaD",
            "marker1",
            "AMEL",
            "algorithm",
            "scoreFilter",
        ];
        let missing = incompatible_markers(markers.iter().copied());
        assert_eq!(missing, vec!["AMEL".to_string(), "marker1".to_string()]);
    }

    #[test]
    fn test_compatible_markers_pass() {
        let markers = ["CSF1PO", "Penta D", "vWA", "Amelogenin"];
        assert!(incompatible_markers(markers.iter().copied()).is_empty());
    }
}
