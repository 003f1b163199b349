// crossref.rs - Cross-reference service preparation (CLASTR/Cellosaurus)

use crate::data::markers::{harmonize_markers, incompatible_markers};
use crate::data::StrProfile;
use serde_json::{json, Map, Value};

/// Similarity algorithm selector understood by the cross-reference API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossRefAlgorithm {
    Tanabe = 1,
    MastersQuery = 2,
    MastersRef = 3,
}

/// Query options carried in the payload alongside the marker fields.
#[derive(Debug, Clone, Copy)]
pub struct CrossRefOptions {
    pub algorithm: CrossRefAlgorithm,
    pub include_amelogenin: bool,
    pub score_filter: u32,
}

impl Default for CrossRefOptions {
    fn default() -> Self {
        Self {
            algorithm: CrossRefAlgorithm::Tanabe,
            include_amelogenin: false,
            score_filter: 80,
        }
    }
}

/// Marker names in this profile the cross-reference service will not
/// accept. Non-fatal: offending markers are reported and excluded from
/// that downstream query, never from ingestion.
pub fn check_profile_markers(profile: &StrProfile) -> Vec<String> {
    incompatible_markers(profile.markers.keys().map(String::as_str))
}

/// Build the JSON body for one cross-reference query.
///
/// Penta markers are rewritten back to the service's legacy
/// space-separated spelling; markers with no alleles are omitted; marker
/// fields are emitted in sorted order for stable payloads. Sending the
/// request (and parsing its response) is the network collaborator's
/// concern, not the core's.
pub fn clastr_payload(profile: &StrProfile, options: &CrossRefOptions) -> Value {
    let mut markers = profile.markers.clone();
    harmonize_markers(&mut markers, true);

    let mut body = Map::new();
    body.insert(
        "description".to_string(),
        Value::String(profile.sample_id.clone()),
    );
    body.insert("algorithm".to_string(), json!(options.algorithm as u8));
    body.insert(
        "includeAmelogenin".to_string(),
        json!(options.include_amelogenin),
    );
    body.insert("scoreFilter".to_string(), json!(options.score_filter));

    let mut fields: Vec<(String, String)> = markers
        .into_iter()
        .filter(|(_, alleles)| !alleles.is_empty())
        .collect();
    fields.sort();
    for (marker, alleles) in fields {
        body.insert(marker, Value::String(alleles));
    }

    Value::Object(body)
}
