use std::path::Path;

use sha2::{Digest, Sha256};
use url::Url;

/// Deterministic filename stem for a URL: `img_{short_hash(url)}`.
/// Same URL, same stem, across runs; that is what makes re-runs cheap.
pub fn asset_stem(url: &str) -> String {
    format!("img_{}", short_hash(url))
}

/// Full local filename for a URL: stem plus inferred extension.
pub fn asset_filename(url: &str, extension: &str) -> String {
    format!("{}{}", asset_stem(url), extension)
}

/// Extension for a downloaded asset, dot included.
///
/// The URL path wins when it has a suffix; otherwise the declared content
/// type decides. Anything unrecognized falls back to `.jpg`, matching the
/// filenames earlier runs have already written.
pub fn infer_extension(url: &str, content_type: Option<&str>) -> String {
    if let Ok(parsed) = Url::parse(url) {
        if let Some(ext) = Path::new(parsed.path()).extension().and_then(|e| e.to_str()) {
            if !ext.is_empty() {
                return format!(".{ext}");
            }
        }
    }
    match content_type.unwrap_or("") {
        ct if ct.contains("image/jpeg") => ".jpg".to_string(),
        ct if ct.contains("image/png") => ".png".to_string(),
        ct if ct.contains("image/gif") => ".gif".to_string(),
        ct if ct.contains("image/webp") => ".webp".to_string(),
        _ => ".jpg".to_string(),
    }
}

fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(12);
    for byte in digest.iter().take(6) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
