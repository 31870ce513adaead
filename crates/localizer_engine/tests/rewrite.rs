use std::collections::BTreeMap;

use localizer_engine::{apply_mapping, ErrorRecord, LocalizeReport};
use pretty_assertions::assert_eq;

fn mapping(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(remote, local)| (remote.to_string(), local.to_string()))
        .collect()
}

#[test]
fn replaces_every_occurrence_globally() {
    let text = r#""bg": "https://x.test/a.jpg", "bg2": "https://x.test/a.jpg""#;
    let mapping = mapping(&[("https://x.test/a.jpg", "./assets/img_abc123.jpg")]);
    assert_eq!(
        apply_mapping(text, &mapping),
        r#""bg": "./assets/img_abc123.jpg", "bg2": "./assets/img_abc123.jpg""#
    );
}

#[test]
fn prefix_url_cannot_corrupt_a_longer_one() {
    let text = "short https://x.test/a.jpg long https://x.test/a.jpg.png";
    let mapping = mapping(&[
        ("https://x.test/a.jpg", "./assets/img_aaaaaaaaaaaa.jpg"),
        ("https://x.test/a.jpg.png", "./assets/img_bbbbbbbbbbbb.png"),
    ]);
    assert_eq!(
        apply_mapping(text, &mapping),
        "short ./assets/img_aaaaaaaaaaaa.jpg long ./assets/img_bbbbbbbbbbbb.png"
    );
}

#[test]
fn empty_mapping_is_identity() {
    let text = "nothing mapped here: https://x.test/a.jpg";
    assert_eq!(apply_mapping(text, &BTreeMap::new()), text);
}

#[test]
fn report_serializes_mapping_and_errors() {
    let mut report = LocalizeReport::default();
    report.mapping.insert(
        "https://x.test/风景.png".to_string(),
        "./assets/img_0a1b2c3d4e5f.png".to_string(),
    );
    report.errors.push(ErrorRecord {
        url: "https://x.test/b.png".to_string(),
        reason: "HTTP 404".to_string(),
    });

    let json = report.to_pretty_json().unwrap();
    assert!(json.contains("\"mapping\""));
    assert!(json.contains("\"errors\""));
    // Non-ASCII characters survive serialization verbatim.
    assert!(json.contains("风景"));
    assert!(json.contains("HTTP 404"));

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        parsed["mapping"]["https://x.test/风景.png"],
        "./assets/img_0a1b2c3d4e5f.png"
    );
    assert_eq!(parsed["errors"][0]["url"], "https://x.test/b.png");
}
