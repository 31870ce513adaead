use std::collections::BTreeMap;

use serde::Serialize;

/// One failed download: which URL and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub url: String,
    pub reason: String,
}

/// Persisted outcome of a run: the full remote-to-local mapping plus the
/// ordered error records. Overwrites the previous run's log; the log is an
/// audit artifact, not an accumulating journal.
#[derive(Debug, Default, Serialize)]
pub struct LocalizeReport {
    pub mapping: BTreeMap<String, String>,
    pub errors: Vec<ErrorRecord>,
}

impl LocalizeReport {
    /// Pretty-printed JSON, non-ASCII characters preserved as-is.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
