//! Property tests for normalization, detection and redaction invariants

use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use hogo::anonymization::config::RedactionOptions;
use hogo::anonymization::{apply_redaction, detect_all, normalize, Category, Detection};
use proptest::prelude::*;
use std::collections::HashSet;

const NAMES: &[&str] = &["田中 太郎", "佐藤 花子", "鈴木 一郎", "高橋 美咲", "渡辺 健太"];

fn assert_detection_invariants(text: &str, detections: &[Detection]) -> Result<(), TestCaseError> {
    let normalized = normalize(text);
    let mut seen = HashSet::new();
    let mut ids = HashSet::new();

    for d in detections {
        prop_assert!(
            seen.insert((d.category, d.value.clone())),
            "duplicate ({}, {})",
            d.category,
            d.value
        );
        prop_assert!(ids.insert(d.id.clone()), "duplicate id {}", d.id);
        prop_assert!(
            normalized.contains(&d.value),
            "value {:?} not in normalized text",
            d.value
        );
        prop_assert!(d.confidence > 0.0 && d.confidence <= 1.0);
    }
    Ok(())
}

// ── Normalization ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalize_is_idempotent(text in ".{0,200}") {
        let once = normalize(&text);
        let twice = normalize(&once);
        prop_assert_eq!(&once, &twice, "normalize not idempotent");
    }

    #[test]
    fn normalize_preserves_line_count(text in "[a-zＡ-Ｚ０-９ 　\n田中]{0,100}") {
        prop_assert_eq!(text.lines().count(), normalize(&text).lines().count());
    }
}

// ── Detection ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn detections_hold_invariants_on_arbitrary_text(text in ".{0,200}") {
        let detections = detect_all(&text, &[]);
        assert_detection_invariants(&text, &detections)?;
    }

    #[test]
    fn detections_hold_invariants_on_contact_blocks(
        name_idx in 0..NAMES.len(),
        phone in "0[789]0-[3-8][0-9]{3}-[3-8][0-9]{3}",
        user in "[a-z]{3,10}",
        tld in "(com|jp)",
        fullwidth in any::<bool>(),
    ) {
        let name = NAMES[name_idx];
        let email = format!("{user}@example.{tld}");
        let mut text = format!("氏名：{name}\n電話：{phone}\nメール：{email}\n");
        if fullwidth {
            text = text.replace(':', "：").replace('0', "０");
        }

        let detections = detect_all(&text, &[]);
        assert_detection_invariants(&text, &detections)?;
        prop_assert!(detections.iter().any(|d| d.value == phone));
        prop_assert!(detections.iter().any(|d| d.value == email));
        prop_assert!(detections.iter().any(|d| d.category == Category::Name && d.value == name));
    }
}

// ── Redaction ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn redacted_output_never_contains_enabled_values(
        name_idx in 0..NAMES.len(),
        phone in "0[789]0-[3-8][0-9]{3}-[3-8][0-9]{3}",
        user in "[a-z]{3,10}",
        keep_prefecture in any::<bool>(),
    ) {
        let name = NAMES[name_idx];
        let email = format!("{user}@example.com");
        let text = format!("担当：{name}\n連絡先：{phone} / {email}\n");

        let normalized = normalize(&text);
        let detections = detect_all(&normalized, &[]);
        let options = RedactionOptions {
            keep_prefecture,
            ..Default::default()
        };
        let redacted = apply_redaction(&normalized, &detections, &options);

        for value in [name, phone.as_str(), email.as_str()] {
            prop_assert!(!redacted.contains(value), "{value} survived: {redacted}");
        }
    }

    #[test]
    fn disabled_detections_are_left_alone(
        phone in "0[789]0-[3-8][0-9]{3}-[3-8][0-9]{3}",
    ) {
        let text = format!("電話：{phone}");
        let mut detections = detect_all(&text, &[]);
        for d in &mut detections {
            d.enabled = false;
        }
        let redacted = apply_redaction(&text, &detections, &RedactionOptions::default());
        prop_assert_eq!(redacted, text);
    }
}

#[test]
fn fake_emails_are_detected() {
    for _ in 0..50 {
        let email: String = SafeEmail().fake();
        let text = format!("連絡先メール：{email}\n氏名：田中 太郎");
        let detections = detect_all(&text, &[]);

        assert_detection_invariants(&text, &detections).unwrap();
        assert!(
            detections
                .iter()
                .any(|d| d.category == Category::Contact && email.ends_with(&d.value) && d.value.contains('@')),
            "no e-mail detection for {email}"
        );
    }
}
