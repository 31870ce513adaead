use localizer_engine::{asset_filename, asset_stem, infer_extension};
use pretty_assertions::assert_eq;

#[test]
fn stem_is_deterministic_and_short() {
    let url = "https://img.example.net/a.png";
    let first = asset_stem(url);
    let second = asset_stem(url);
    assert_eq!(first, second);

    let hex = first.strip_prefix("img_").expect("img_ prefix");
    assert_eq!(hex.len(), 12);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));

    assert_ne!(first, asset_stem("https://img.example.net/b.png"));
}

#[test]
fn filename_joins_stem_and_extension() {
    let url = "https://img.example.net/photo";
    assert_eq!(
        asset_filename(url, ".gif"),
        format!("{}.gif", asset_stem(url))
    );
}

#[test]
fn extension_comes_from_url_path_first() {
    // The path suffix wins even when the content type disagrees.
    assert_eq!(
        infer_extension("https://x.test/photo.png?size=large", Some("image/jpeg")),
        ".png"
    );
    assert_eq!(infer_extension("https://x.test/anim.webp", None), ".webp");
}

#[test]
fn extension_falls_back_to_content_type() {
    assert_eq!(
        infer_extension("https://x.test/download", Some("image/webp")),
        ".webp"
    );
    assert_eq!(
        infer_extension("https://x.test/download", Some("image/png; charset=binary")),
        ".png"
    );
    assert_eq!(
        infer_extension("https://x.test/download", Some("image/gif")),
        ".gif"
    );
    assert_eq!(
        infer_extension("https://x.test/download", Some("image/jpeg")),
        ".jpg"
    );
}

#[test]
fn unknown_everything_defaults_to_jpg() {
    assert_eq!(infer_extension("https://x.test/download", None), ".jpg");
    assert_eq!(
        infer_extension("https://x.test/download", Some("application/octet-stream")),
        ".jpg"
    );
    assert_eq!(infer_extension("not a url at all", None), ".jpg");
}
