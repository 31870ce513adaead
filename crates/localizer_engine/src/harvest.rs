use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::SystemTime;

use regex::Regex;

/// Anything `http(s)://` up to whitespace or a quoting/closing character.
/// Greedy on purpose; `trim_stray` cleans up what the tail overshoots.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s"'}]+"#).expect("url pattern compiles"));

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];
const IMAGE_MARKERS: &[&str] = &["/image", "oss", "cos"];

/// Heuristic allow-list: a URL is worth downloading when its lowercased form
/// carries a known image extension or a path/vendor marker. False positives
/// (`oss`/`cos` substrings in non-image URLs) and false negatives (unusual
/// extensions) are accepted tradeoffs.
pub fn is_image_candidate(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .chain(IMAGE_MARKERS.iter())
        .any(|needle| lower.contains(needle))
}

/// Extracts the set of distinct image-candidate URLs referenced in `text`.
pub fn extract_candidate_urls(text: &str) -> BTreeSet<String> {
    URL_RE
        .find_iter(text)
        .map(|m| trim_stray(m.as_str()))
        .filter(|url| is_image_candidate(url))
        .map(str::to_string)
        .collect()
}

fn trim_stray(url: &str) -> &str {
    url.trim_end_matches(&['\\', '"', '\'', '}', ')'][..])
}

/// Union of the URLs found in the primary text and, when present, a backup
/// text. The backup recovers links a prior run already replaced with local
/// paths in the primary file.
pub fn master_links(primary: &str, backup: Option<&str>) -> BTreeSet<String> {
    let mut links = extract_candidate_urls(primary);
    if let Some(backup) = backup {
        links.extend(extract_candidate_urls(backup));
    }
    links
}

/// The most-recently-modified `*.json` file in `dir`, skipping the
/// configured exclusion list. `None` when the directory is unreadable or no
/// candidate exists; the caller treats that as "no backup" and moves on.
pub fn latest_backup_file(dir: &Path, excludes: &[String]) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let excluded = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_none_or(|name| excludes.iter().any(|ex| ex == name));
        if excluded {
            continue;
        }
        let modified = match entry.metadata().and_then(|meta| meta.modified()) {
            Ok(time) => time,
            Err(_) => continue,
        };
        let is_newer = newest
            .as_ref()
            .map(|(best, _)| modified > *best)
            .unwrap_or(true);
        if is_newer {
            newest = Some((modified, path));
        }
    }
    newest.map(|(_, path)| path)
}
