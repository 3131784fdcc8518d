//! Furigana readings and name initials
//!
//! Résumé-style documents usually pair an 氏名 line with a フリガナ line.
//! [`ReadingMap::build`] collects those pairs so that names can be
//! redacted to romaji initials ("T.T.") instead of kanji pseudo-initials.

use crate::anonymization::detector::names::{is_hiragana, is_katakana};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Lines searched after a name line for its reading
const LOOKAHEAD_LINES: usize = 3;

static RE_NAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:氏[ ]?名|お?名[ ]?前)(?:[ 　]*[：:][ 　]*|[ 　]+)([\p{Han}々]+(?:[ 　][\p{Han}々]+)?)")
        .expect("name line regex")
});

static RE_READING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:フリガナ|ふりがな|よみがな|カナ)(?:[ 　]*[：:][ 　]*|[ 　]+)([\p{Katakana}\p{Hiragana}ー]+(?:[ 　][\p{Katakana}\p{Hiragana}ー]+)?)",
    )
    .expect("reading line regex")
});

/// Kanji name to katakana reading, built per document
#[derive(Debug, Clone, Default)]
pub struct ReadingMap {
    entries: HashMap<String, String>,
    compact: HashMap<String, String>,
}

impl ReadingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `text` for name lines and the reading lines that accompany them
    ///
    /// The reading is searched in the following lines first and then in the
    /// line directly above, where many résumé templates place it.
    pub fn build(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let mut map = Self::new();

        for (i, line) in lines.iter().enumerate() {
            let Some(name) = RE_NAME_LINE.captures(line).and_then(|c| c.get(1)) else {
                continue;
            };

            let following = lines.iter().skip(i + 1).take(LOOKAHEAD_LINES);
            let preceding = i.checked_sub(1).and_then(|p| lines.get(p));
            let reading = following
                .chain(preceding)
                .find_map(|l| RE_READING_LINE.captures(l).and_then(|c| c.get(1)));

            if let Some(reading) = reading {
                map.insert(name.as_str(), &to_katakana(reading.as_str()));
            }
        }

        tracing::debug!(entries = map.len(), "Reading map built");
        map
    }

    pub fn insert(&mut self, name: &str, reading: &str) {
        let name = name.trim();
        self.entries.insert(name.to_string(), reading.trim().to_string());
        self.compact.insert(strip_whitespace(name), reading.trim().to_string());
    }

    /// Reading for `name`, matching exactly first and then ignoring spaces
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.entries
            .get(name)
            .or_else(|| self.compact.get(&strip_whitespace(name)))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Fold hiragana into katakana, leaving everything else unchanged
pub fn to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + 0x60).unwrap_or(c),
            _ => c,
        })
        .collect()
}

fn is_kana_name(s: &str) -> bool {
    let mut has_kana = false;
    for c in s.chars() {
        if is_katakana(c) || is_hiragana(c) {
            has_kana = true;
        } else if !c.is_whitespace() {
            return false;
        }
    }
    has_kana
}

/// Hepburn initial of a kana character
fn romaji_initial(c: char) -> Option<char> {
    let c = to_katakana(&c.to_string()).chars().next()?;
    let initial = match c {
        'ア' | 'ァ' => 'A',
        'イ' | 'ィ' => 'I',
        'ウ' | 'ゥ' => 'U',
        'エ' | 'ェ' => 'E',
        'オ' | 'ォ' | 'ヲ' => 'O',
        'カ' | 'キ' | 'ク' | 'ケ' | 'コ' | 'ヵ' | 'ヶ' => 'K',
        'ガ' | 'ギ' | 'グ' | 'ゲ' | 'ゴ' => 'G',
        'サ' | 'シ' | 'ス' | 'セ' | 'ソ' => 'S',
        'ザ' | 'ズ' | 'ゼ' | 'ゾ' | 'ヅ' => 'Z',
        'ジ' | 'ヂ' => 'J',
        'タ' | 'ツ' | 'テ' | 'ト' | 'ッ' => 'T',
        'チ' => 'C',
        'ダ' | 'デ' | 'ド' => 'D',
        'ナ' | 'ニ' | 'ヌ' | 'ネ' | 'ノ' | 'ン' => 'N',
        'ハ' | 'ヒ' | 'ヘ' | 'ホ' => 'H',
        'フ' => 'F',
        'バ' | 'ビ' | 'ブ' | 'ベ' | 'ボ' => 'B',
        'パ' | 'ピ' | 'プ' | 'ペ' | 'ポ' => 'P',
        'マ' | 'ミ' | 'ム' | 'メ' | 'モ' => 'M',
        'ヤ' | 'ユ' | 'ヨ' | 'ャ' | 'ュ' | 'ョ' => 'Y',
        'ラ' | 'リ' | 'ル' | 'レ' | 'ロ' => 'R',
        'ワ' | 'ヮ' => 'W',
        'ヴ' => 'V',
        _ => return None,
    };
    Some(initial)
}

/// Convert a name into initials
///
/// Kana names and names with a known reading become romaji initials; other
/// names fall back to kanji pseudo-initials.
///
/// # Examples
///
/// ```
/// use hogo::anonymization::reading::{name_to_initial, ReadingMap};
///
/// let map = ReadingMap::new();
/// assert_eq!(name_to_initial("タナカ タロウ", &map), "T.T.");
/// assert_eq!(name_to_initial("佐藤 花子", &map), "佐.花.");
/// assert_eq!(name_to_initial("田中", &map), "田.中.");
/// ```
pub fn name_to_initial(name: &str, readings: &ReadingMap) -> String {
    let name = name.trim();
    let reading = if is_kana_name(name) {
        Some(name)
    } else {
        readings.get(name)
    };

    if let Some(reading) = reading {
        let initials: Vec<String> = reading
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .map(|c| romaji_initial(c).unwrap_or(c).to_string())
            .collect();
        if !initials.is_empty() {
            return format!("{}.", initials.join("."));
        }
    }

    let parts: Vec<&str> = name.split_whitespace().collect();
    let chars: Vec<char> = match parts.as_slice() {
        [] => return String::new(),
        [single] => single.chars().take(2).collect(),
        many => many.iter().filter_map(|p| p.chars().next()).collect(),
    };
    chars.iter().map(|c| format!("{c}.")).collect()
}
