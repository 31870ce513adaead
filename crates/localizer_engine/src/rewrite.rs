use std::collections::BTreeMap;

/// Replaces every literal occurrence of each mapped remote URL with its
/// local path.
///
/// Longer URLs are substituted first: when one mapped URL is a strict prefix
/// of another, replacing the short one first would clobber the head of the
/// long one and leave a corrupted tail behind. Ties fall back to lexical
/// order so the output is deterministic.
pub fn apply_mapping(text: &str, mapping: &BTreeMap<String, String>) -> String {
    let mut pairs: Vec<(&str, &str)> = mapping
        .iter()
        .map(|(remote, local)| (remote.as_str(), local.as_str()))
        .collect();
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut rewritten = text.to_string();
    for (remote, local) in pairs {
        rewritten = rewritten.replace(remote, local);
    }
    rewritten
}
