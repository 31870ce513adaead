use std::fs;
use std::path::{Path, PathBuf};

/// Looks for an already-downloaded `{stem}.*` file in the assets directory.
///
/// A hit means a prior run (possibly one that failed part-way) fetched this
/// URL already; the pipeline reuses the file instead of going to the network.
/// The extension is ignored on purpose, the stem alone identifies the URL.
pub fn find_cached_asset(assets_dir: &Path, stem: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(assets_dir).ok()?;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let matches_stem = name
            .strip_prefix(stem)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'));
        if matches_stem {
            return Some(entry.path());
        }
    }
    None
}
