//! Integration tests for detection over résumé-style documents

use hogo::anonymization::config::RedactionOptions;
use hogo::anonymization::detector::context::western_year;
use hogo::anonymization::models::{Category, DetectionType, Source};
use hogo::anonymization::{apply_redaction, detect_all, normalize, EngineConfig, RedactionEngine};
use test_case::test_case;

const RESUME: &str = "履歴書\n\
作成日：2024年12月1日\n\
氏名：田中 太郎\n\
フリガナ：タナカ タロウ\n\
生年月日：昭和63年5月20日\n\
〒150-0001\n\
住所：東京都渋谷区神宮前3-14-5\n\
電話：090-1234-5678\n\
メール：tanaka@example.com\n\
GitHub: taro-dev\n\
\n\
職歴\n\
2020年4月 - 2024年3月 株式会社サンプル 開発部\n";

fn engine() -> RedactionEngine {
    let mut config = EngineConfig::default();
    config.detection.reference_year = Some(2025);
    RedactionEngine::new(config).expect("engine")
}

#[test]
fn test_contact_scenario() {
    let text = "氏名：田中 太郎\n電話：090-1234-5678\nメール：tanaka@example.com";
    let detections = detect_all(text, &[]);

    assert!(detections
        .iter()
        .any(|d| d.category == Category::Name && d.value.contains("田中")));
    assert!(detections
        .iter()
        .any(|d| d.detection_type == DetectionType::Phone && d.value == "090-1234-5678"));
    assert!(detections
        .iter()
        .any(|d| d.detection_type == DetectionType::Email && d.value == "tanaka@example.com"));

    let redacted = apply_redaction(&normalize(text), &detections, &RedactionOptions::default());
    for literal in ["田中 太郎", "090-1234-5678", "tanaka@example.com"] {
        assert!(!redacted.contains(literal), "{literal} leaked into {redacted}");
    }
}

#[test]
fn test_phone_not_detected_in_year_range() {
    let detections = detect_all("2020年4月 - 2024年3月", &[]);
    assert!(detections
        .iter()
        .all(|d| d.detection_type != DetectionType::Phone));
}

#[test]
fn test_birthday_not_detected_after_document_date_label() {
    let detections = detect_all("作成日：2024年12月1日", &[]);
    assert!(detections
        .iter()
        .all(|d| d.detection_type != DetectionType::Birthday));
}

#[test]
fn test_labeled_era_birthday() {
    let detections = detect_all("生年月日：昭和63年5月20日", &[]);
    let birthday = detections
        .iter()
        .find(|d| d.detection_type == DetectionType::Birthday)
        .expect("birthday detection");

    assert_eq!(birthday.value, "昭和63年5月20日");
    assert_eq!(birthday.category, Category::Personal);
    assert_eq!(western_year(&birthday.value), Some(1988));
}

#[test]
fn test_full_resume() {
    let engine = engine();
    let detections = engine.detect_all(RESUME, &[]);

    let has = |t: DetectionType, v: &str| detections.iter().any(|d| d.detection_type == t && d.value == v);
    assert!(has(DetectionType::NameLabel, "田中 太郎"));
    assert!(has(DetectionType::NameKana, "タナカ タロウ"));
    assert!(has(DetectionType::Birthday, "昭和63年5月20日"));
    assert!(has(DetectionType::Postal, "〒150-0001"));
    assert!(has(DetectionType::Address, "東京都渋谷区神宮前3-14-5"));
    assert!(has(DetectionType::Phone, "090-1234-5678"));
    assert!(has(DetectionType::Email, "tanaka@example.com"));
    assert!(has(DetectionType::SnsGithub, "taro-dev"));

    assert!(!detections.iter().any(|d| d.value.contains("2024年12月1日")));
    assert!(!detections.iter().any(|d| d.value.contains("2020年4月")));
}

#[test]
fn test_values_are_substrings_of_normalized_text() {
    let text = "氏名：山田　花子\nＴＥＬ：０３-１２３４-５６７８\nＭａｉｌ：ｈａｎａｋｏ@example.jp";
    let normalized = normalize(text);
    let detections = detect_all(text, &[]);

    assert!(!detections.is_empty());
    for detection in &detections {
        assert!(
            normalized.contains(&detection.value),
            "{} is not in the normalized text",
            detection.value
        );
    }
    assert!(detections.iter().any(|d| d.value == "03-1234-5678"));
    assert!(detections.iter().any(|d| d.value == "hanako@example.jp"));
}

#[test]
fn test_custom_keywords_and_ids() {
    let text = "前職：株式会社ホゴ（株式会社ホゴ テクノロジー）";
    let detections = detect_all(text, &["株式会社ホゴ".to_string(), "".to_string(), "株".to_string()]);

    let custom: Vec<_> = detections
        .iter()
        .filter(|d| d.category == Category::Custom)
        .collect();
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].source, Source::Dict);
    assert!((custom[0].confidence - 1.0).abs() < f32::EPSILON);

    let mut ids: Vec<&str> = detections.iter().map(|d| d.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), detections.len());
}

#[test]
fn test_recent_unlabeled_date_is_not_a_birthday() {
    let engine = engine();
    let detections = engine.detect_all("面談 2023年6月1日 実施\n1985年1月2日", &[]);
    let birthdays: Vec<&str> = detections
        .iter()
        .filter(|d| d.detection_type == DetectionType::Birthday)
        .map(|d| d.value.as_str())
        .collect();
    assert_eq!(birthdays, vec!["1985年1月2日"]);
}

fn values_of(text: &str, kind: DetectionType) -> Vec<String> {
    detect_all(text, &[])
        .into_iter()
        .filter(|d| d.detection_type == kind)
        .map(|d| d.value)
        .collect()
}

#[test_case("2019年 転居 〒123-4567", DetectionType::Postal, &["〒123-4567"] ; "postal with own mark on year line")]
#[test_case("2019年 郵便 123-4567", DetectionType::Postal, &["123-4567"] ; "postal labeled on year line")]
#[test_case("2019年 入社 123-4567", DetectionType::Postal, &[] ; "unlabeled postal on year line")]
#[test_case("2019年 TEL 03-1234-5678", DetectionType::Phone, &["03-1234-5678"] ; "phone labeled on year line")]
#[test_case("2019年 入社 03-1234-5678", DetectionType::Phone, &[] ; "unlabeled phone on year line")]
#[test_case("2020年4月-2024年3月 株式会社サンプル", DetectionType::Phone, &[] ; "compact year range")]
fn test_year_line_exemptions(text: &str, kind: DetectionType, expected: &[&str]) {
    assert_eq!(values_of(text, kind), expected);
}

#[test_case("電話：0312345678年", &[] ; "followed by year kanji")]
#[test_case("電話：0312345678月", &[] ; "followed by month kanji")]
#[test_case("電話：0312345678", &["0312345678"] ; "bare digits")]
fn test_phone_followed_by_date_suffix(text: &str, expected: &[&str]) {
    assert_eq!(values_of(text, DetectionType::Phone), expected);
}

#[test_case("ポートフォリオ：https://example.com/?x:taro_dev", &[] ; "inside url")]
#[test_case("連絡 x:taro_dev@example.com", &[] ; "inside email")]
#[test_case("X: @taro_dev", &["@taro_dev"] ; "plain handle")]
fn test_sns_handles_in_context(text: &str, expected: &[&str]) {
    assert_eq!(values_of(text, DetectionType::SnsTwitter), expected);
}

#[test]
fn test_url_keeps_embedded_handle() {
    let text = "ポートフォリオ：https://example.com/?x:taro_dev";
    assert_eq!(
        values_of(text, DetectionType::Url),
        vec!["https://example.com/?x:taro_dev"]
    );
}

#[test_case("所属長：鬼塚 虎之助", "鬼塚 虎之助", Source::Heuristic ; "heuristic after proximity label")]
#[test_case("承認者：鬼塚 虎之助", "鬼塚 虎之助", Source::Heuristic ; "heuristic after approver label")]
#[test_case("報告者：渡辺 龍平", "渡辺 龍平", Source::Dict ; "known surname after proximity label")]
#[test_case("上司：高橋", "高橋", Source::Dict ; "surname only after label")]
fn test_label_proximity_names(text: &str, expected: &str, source: Source) {
    let detections = detect_all(text, &[]);
    let name = detections
        .iter()
        .find(|d| d.category == Category::Name && d.value == expected)
        .unwrap_or_else(|| panic!("no name {expected} in {detections:?}"));
    assert_eq!(name.detection_type, DetectionType::NameContext);
    assert_eq!(name.source, source);
}
