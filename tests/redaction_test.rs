//! Integration tests for redaction and segmentation

use hogo::anonymization::config::{RedactionOptions, SubstitutionMode};
use hogo::anonymization::models::{Category, Detection, DetectionType, Source};
use hogo::anonymization::{
    apply_redaction, detect_all, name_to_initial, normalize, resolve_segments, ReadingMap, Segment,
};

fn address(value: &str) -> Detection {
    Detection::new("address_0", DetectionType::Address, Category::Address, value, Source::Regex)
}

#[test]
fn test_keep_prefecture_scenario() {
    let text = "東京都渋谷区神宮前3-14-5";
    let detections = detect_all(text, &[]);
    assert!(detections
        .iter()
        .any(|d| d.detection_type == DetectionType::Address && d.value == text));

    let kept = apply_redaction(
        text,
        &detections,
        &RedactionOptions {
            keep_prefecture: true,
            ..Default::default()
        },
    );
    assert!(kept.starts_with("東京都"));
    assert!(!kept.contains("渋谷区神宮前"));

    let masked = apply_redaction(text, &detections, &RedactionOptions::default());
    assert!(!masked.contains("東京都"));
    assert_eq!(masked, "[住所]");
}

#[test]
fn test_keep_prefecture_without_known_prefecture() {
    let detections = vec![address("渋谷区神宮前3-14-5")];
    let options = RedactionOptions {
        keep_prefecture: true,
        ..Default::default()
    };
    assert_eq!(apply_redaction("渋谷区神宮前3-14-5", &detections, &options), "[住所]");
}

#[test]
fn test_name_to_initial_without_readings() {
    let readings = ReadingMap::new();
    assert_eq!(name_to_initial("タナカ タロウ", &readings), "T.T.");
    assert_eq!(name_to_initial("佐藤 花子", &readings), "佐.花.");
}

#[test]
fn test_name_initials_use_furigana_reading() {
    let text = "氏名：田中 太郎\nフリガナ：タナカ タロウ\n担当：田中 太郎";
    let normalized = normalize(text);
    let detections: Vec<Detection> = detect_all(text, &[])
        .into_iter()
        .filter(|d| d.category == Category::Name && d.value == "田中 太郎")
        .collect();
    assert!(!detections.is_empty());

    let options = RedactionOptions {
        name_initial: true,
        ..Default::default()
    };
    let redacted = apply_redaction(&normalized, &detections, &options);
    assert_eq!(redacted, "氏名：T.T.\nフリガナ：タナカ タロウ\n担当：T.T.");
}

#[test]
fn test_disabled_detection_is_left_in_place() {
    let text = "電話：090-1234-5678\nメール：tanaka@example.com";
    let mut detections = detect_all(text, &[]);
    for detection in detections.iter_mut() {
        if detection.detection_type == DetectionType::Phone {
            detection.enabled = false;
        }
    }

    let redacted = apply_redaction(text, &detections, &RedactionOptions::default());
    assert!(redacted.contains("090-1234-5678"));
    assert!(!redacted.contains("tanaka@example.com"));
}

#[test]
fn test_overlap_prefers_longer_match() {
    let text = "東京都港区六本木";
    let custom = |v: &str| Detection::new(v, DetectionType::Custom, Category::Custom, v, Source::Dict);
    let segmentation = resolve_segments(
        text,
        &[custom("東京都"), custom("東京都港区")],
        &RedactionOptions::default(),
    );

    let flagged: Vec<&str> = segmentation
        .segments()
        .filter_map(|s| match s {
            Segment::Detection { original, .. } => Some(original),
            Segment::Text { .. } => None,
        })
        .collect();
    assert_eq!(flagged, vec!["東京都港区"]);
}

#[test]
fn test_segments_reassemble_text() {
    let text = normalize("氏名：田中 太郎\n電話：090-1234-5678\n予備：090-1234-5678");
    let detections = detect_all(&text, &[]);
    let segmentation = resolve_segments(&text, &detections, &RedactionOptions::default());

    assert_eq!(segmentation.render(false), text);

    let mut offset = 0;
    for segment in segmentation.segments() {
        let (start, end) = match segment {
            Segment::Text { start, end, .. } | Segment::Detection { start, end, .. } => (start, end),
        };
        assert_eq!(start, offset);
        assert!(end > start);
        offset = end;
    }
    assert_eq!(offset, text.len());

    let phones = segmentation
        .segments()
        .filter(|s| s.display(true) == "[電話番号]")
        .count();
    assert_eq!(phones, 2);
}

#[test]
fn test_positional_mode_matches_segments() {
    let text = normalize("住所：東京都港区六本木1-2-3\n東京都港区");
    let mut detections = detect_all(&text, &[]);
    detections.push(Detection::new(
        "custom_0",
        DetectionType::Custom,
        Category::Custom,
        "東京都港区",
        Source::Dict,
    ));

    let options = RedactionOptions {
        substitution: SubstitutionMode::Positional,
        ..Default::default()
    };
    let positional = apply_redaction(&text, &detections, &options);
    let rendered = resolve_segments(&text, &detections, &options).render(true);

    assert_eq!(positional, rendered);
    assert_eq!(positional, "住所：[住所]\n[非公開]");
}
