// alleles.rs - Allele call string cleaning and canonicalization

/// Render an allele value without a superfluous trailing ".0"
/// ("14.0" becomes "14", "9.3" stays "9.3")
fn format_allele(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Clean a comma-separated allele string into its canonical form.
///
/// Tokens are trimmed and deduplicated. Numeric tokens sort ascending and
/// come first, rendered without a trailing ".0"; non-numeric tokens (e.g.
/// "X", "Y") sort lexicographically after them. Empty tokens and stray
/// "nan" cell representations are dropped, so an empty input stays empty.
pub fn clean_allele_string(raw: &str) -> String {
    let mut numeric: Vec<f64> = Vec::new();
    let mut text: Vec<&str> = Vec::new();

    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<f64>() {
            Ok(value) if value.is_nan() => {} // string form of a missing cell
            Ok(value) => numeric.push(value),
            Err(_) => text.push(token),
        }
    }

    numeric.sort_by(|a, b| a.total_cmp(b));
    numeric.dedup();
    text.sort_unstable();
    text.dedup();

    let mut out: Vec<String> = numeric.into_iter().map(format_allele).collect();
    out.extend(text.into_iter().map(|t| t.to_string()));
    out.join(",")
}

/// Number of raw allele calls in a stored allele string, before any
/// deduplication. An empty string counts as a single (empty) call.
pub fn raw_allele_count(alleles: &str) -> usize {
    alleles.split(',').count()
}
