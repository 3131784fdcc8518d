//! Name detection from dictionaries and label proximity
//!
//! Two passes run over normalized text:
//!
//! 1. **Dictionary pass**: every known surname followed (optionally after a
//!    space) by a known given name becomes a `name_dict` candidate. A bare
//!    surname is only reported when a name label precedes it.
//! 2. **Label pass**: text right after labels such as `氏名：` or `担当者：` is
//!    inspected for a surname-led name, falling back to a kanji-run heuristic.

pub mod dictionary;

use super::PiiDetector;
use crate::anonymization::models::{Category, Detection, DetectionType, Source};
use crate::anonymization::normalizer::{chars_after, chars_before, is_horizontal_whitespace};
use dictionary::{BLOCKLIST, GIVEN_NAME_SET, MAX_GIVEN_NAME_CHARS, MAX_SURNAME_CHARS, SURNAME_SET};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

pub const DICT_CONFIDENCE: f32 = 0.92;
pub const SURNAME_ONLY_CONFIDENCE: f32 = 0.88;
pub const LABELED_DICT_CONFIDENCE: f32 = 0.90;
pub const HEURISTIC_CONFIDENCE: f32 = 0.75;

/// Characters searched backwards for a name label before a bare surname
const LABEL_LOOKBACK: usize = 30;
/// Characters inspected after a proximity label
const LABEL_WINDOW: usize = 16;
/// Characters inspected after a surname for a given name
const GIVEN_NAME_WINDOW: usize = 6;

/// Kanji that end labels directly glued to a name (担当者田中, 店長佐藤)
const LABEL_ENDING_KANJI: &str = "名者当員長任師生客様方人";

const BOUNDARY_PUNCTUATION: &str = "、。，．・：；「」『』【】（）〔〕［］｛｝〈〉《》！？／";

/// Labels that let a bare surname through the dictionary pass
static RE_NAME_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"記入者|申請者|連絡先|責任者|作成者|報告者|代表者|対応者|氏名|名前|担当|著者|上司|部長|課長|主任",
    )
    .expect("name label regex")
});

static RE_PROXIMITY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:担当者|記入者|申請者|連絡先|責任者|作成者|報告者|代表者|所属長|管理者|承認者|氏名|名前|著者|上司)(?:[ 　]*[：:][ 　]*|[ 　]+)",
    )
    .expect("proximity label regex")
});

static RE_KANJI_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Han}々]{1,4}").expect("kanji run regex"));

static RE_HEURISTIC_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Han}々]{2,4}[ 　]?[\p{Han}々]{1,4}").expect("heuristic name regex")
});

/// CJK unified ideograph or the iteration mark
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}' | '々')
}

pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}')
}

pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}')
}

/// Whether a candidate string plausibly is a personal name
pub fn is_likely_name(candidate: &str) -> bool {
    let compact: String = candidate.chars().filter(|c| !c.is_whitespace()).collect();
    let len = compact.chars().count();
    if !(2..=10).contains(&len) {
        return false;
    }
    if !compact.chars().any(is_kanji) || compact.chars().all(is_katakana) {
        return false;
    }
    !BLOCKLIST.iter().any(|word| compact.contains(word))
}

/// Longest table entry that prefixes `text`
fn longest_prefix<'a>(text: &'a str, table: &HashSet<&'static str>, max_chars: usize) -> Option<&'a str> {
    (1..=max_chars).rev().find_map(|n| {
        let prefix = chars_after(text, 0, n);
        (prefix.chars().count() == n && table.contains(prefix)).then_some(prefix)
    })
}

fn is_boundary_before(text: &str, pos: usize) -> bool {
    match text[..pos].chars().next_back() {
        None => true,
        Some(c) => {
            c.is_whitespace()
                || c.is_ascii_punctuation()
                || BOUNDARY_PUNCTUATION.contains(c)
                || LABEL_ENDING_KANJI.contains(c)
        }
    }
}

fn skip_horizontal_whitespace(text: &str, mut pos: usize) -> usize {
    while let Some(c) = text[pos..].chars().next() {
        if !is_horizontal_whitespace(c) {
            break;
        }
        pos += c.len_utf8();
    }
    pos
}

/// Dictionary and label-proximity name detector
#[derive(Debug, Default, Clone)]
pub struct NameDetector;

impl NameDetector {
    pub fn new() -> Self {
        Self
    }

    fn dictionary_pass(&self, text: &str, seen: &mut HashSet<String>, out: &mut Vec<Detection>) {
        let mut pos = 0;
        while let Some(current) = text[pos..].chars().next() {
            let Some(surname) = longest_prefix(&text[pos..], &SURNAME_SET, *MAX_SURNAME_CHARS) else {
                pos += current.len_utf8();
                continue;
            };

            if is_boundary_before(text, pos) {
                let given_start = skip_horizontal_whitespace(text, pos + surname.len());
                let window = chars_after(text, given_start, GIVEN_NAME_WINDOW);

                if let Some(given) = longest_prefix(window, &GIVEN_NAME_SET, *MAX_GIVEN_NAME_CHARS) {
                    let end = given_start + given.len();
                    let candidate = &text[pos..end];
                    if is_likely_name(candidate) {
                        push_unique(seen, out, DetectionType::NameDict, candidate, Source::Dict, DICT_CONFIDENCE);
                        pos = end;
                        continue;
                    }
                } else if surname.chars().count() >= 2
                    && RE_NAME_LABEL.is_match(chars_before(text, pos, LABEL_LOOKBACK))
                    && is_likely_name(surname)
                {
                    push_unique(
                        seen,
                        out,
                        DetectionType::NameContext,
                        surname,
                        Source::Dict,
                        SURNAME_ONLY_CONFIDENCE,
                    );
                }
            }

            pos += current.len_utf8();
        }
    }

    fn label_pass(&self, text: &str, seen: &mut HashSet<String>, out: &mut Vec<Detection>) {
        for label in RE_PROXIMITY_LABEL.find_iter(text) {
            let window = chars_after(text, label.end(), LABEL_WINDOW);

            if let Some(candidate) = surname_led_name(window) {
                if is_likely_name(candidate) {
                    push_unique(
                        seen,
                        out,
                        DetectionType::NameContext,
                        candidate,
                        Source::Dict,
                        LABELED_DICT_CONFIDENCE,
                    );
                    continue;
                }
            }

            if let Some(m) = RE_HEURISTIC_NAME.find(window) {
                let candidate = m.as_str().trim_end();
                if is_likely_name(candidate) {
                    push_unique(
                        seen,
                        out,
                        DetectionType::NameContext,
                        candidate,
                        Source::Heuristic,
                        HEURISTIC_CONFIDENCE,
                    );
                }
            }
        }
    }
}

/// Known surname at the start of `window` extended by a given name or kanji run
fn surname_led_name(window: &str) -> Option<&str> {
    let surname = longest_prefix(window, &SURNAME_SET, *MAX_SURNAME_CHARS)?;
    let rest_start = skip_horizontal_whitespace(window, surname.len());
    let rest = &window[rest_start..];
    let extension = longest_prefix(rest, &GIVEN_NAME_SET, *MAX_GIVEN_NAME_CHARS)
        .or_else(|| RE_KANJI_RUN.find(rest).map(|m| m.as_str()))?;
    Some(&window[..rest_start + extension.len()])
}

fn push_unique(
    seen: &mut HashSet<String>,
    out: &mut Vec<Detection>,
    kind: DetectionType,
    value: &str,
    source: Source,
    confidence: f32,
) {
    if !seen.insert(format!("{kind}:{value}")) {
        return;
    }
    let id = format!("{kind}_{}", out.len());
    out.push(Detection::new(id, kind, Category::Name, value, source).with_confidence(confidence));
}

impl PiiDetector for NameDetector {
    fn name(&self) -> &'static str {
        "names"
    }

    fn detect(&self, text: &str) -> Vec<Detection> {
        let mut seen = HashSet::new();
        let mut detections = Vec::new();
        self.dictionary_pass(text, &mut seen, &mut detections);
        self.label_pass(text, &mut seen, &mut detections);
        detections
    }
}
