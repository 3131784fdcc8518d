//! Context filters that suppress pattern matches in non-PII surroundings
//!
//! Every check works on small character windows around the raw match, so
//! the balance between recall and precision lives here rather than in the
//! rule regexes.

use crate::anonymization::normalizer::{chars_after, chars_before};
use regex::Regex;
use std::sync::LazyLock;

/// Characters inspected on each side of a numeric match for year ranges
pub const YEAR_RANGE_WINDOW: usize = 8;
/// Characters searched backwards for a PII label on year-led lines
pub const PII_LABEL_WINDOW: usize = 20;
/// Characters searched backwards for date labels before a birthday
pub const DATE_LABEL_WINDOW: usize = 30;

static RE_YEAR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[^0-9])(?:19|20)\d{2}(?:[ ]?年(?:[ ]?\d{1,2}[ ]?月)?)?[ ]?[-‐－~〜～―—][ ]?(?:(?:19|20)\d{2}|現在)|[~〜～][ ]?現在",
    )
    .expect("year range regex")
});

static RE_YEAR_LINE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:19|20)\d{2}[ ]?[年/.\-]|(?:昭和|平成|令和)[ ]?(?:\d{1,2}|元)[ ]?年|[SHR]\d{1,2}[./])")
        .expect("year line regex")
});

static RE_PII_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)電話|tel|携帯|fax|連絡先|〒|郵便").expect("pii label regex")
});

static RE_LEADING_PII_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:〒|郵便)").expect("leading pii label regex"));

static RE_DOCUMENT_DATE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"作成日|提出日|更新日|記入日|発行日|印刷日|出力日|日付|現在|応募日|送付日|記載日")
        .expect("document date label regex")
});

static RE_BIRTHDAY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)生年月日|誕生日|生まれ|dob|date of birth").expect("birthday label regex")
});

static RE_ERA_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d{4})|(昭和|平成|令和)[ ]?(\d{1,2}|元))").expect("era year regex")
});

static RE_EMAIL_LOCAL_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+\-]+$").expect("email local regex"));

static RE_EMAIL_REST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]*@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}")
        .expect("email rest regex")
});

static RE_DOMAIN_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}").expect("domain regex")
});

static RE_URL_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S*$").expect("url tail regex"));

/// Whether the tight window around `[start, end)` reads as a year range
///
/// The window edges are widened over digit runs so a year cut by the
/// character count stays whole.
pub fn in_year_range(text: &str, start: usize, end: usize) -> bool {
    let from = start - chars_before(text, start, YEAR_RANGE_WINDOW).len();
    let from = text[..from].trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let to = end + chars_after(text, end, YEAR_RANGE_WINDOW).len();
    let to = text.len() - text[to..].trim_start_matches(|c: char| c.is_ascii_digit()).len();
    RE_YEAR_RANGE.is_match(&text[from..to])
}

/// Whether the line holding `start` begins with a year or era token
pub fn line_starts_with_year(text: &str, start: usize) -> bool {
    let line_start = text[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    RE_YEAR_LINE_START.is_match(text[line_start..start].trim_start())
}

/// Whether a contact label occurs shortly before `start`
pub fn has_pii_label_before(text: &str, start: usize) -> bool {
    RE_PII_LABEL.is_match(chars_before(text, start, PII_LABEL_WINDOW))
}

/// Whether the match carries its own 〒/郵便 label
fn has_leading_pii_label(text: &str, start: usize, end: usize) -> bool {
    RE_LEADING_PII_LABEL.is_match(&text[start..end])
}

/// Shared year-range / year-line rejection for numeric identifiers
pub fn rejects_numeric(text: &str, start: usize, end: usize) -> bool {
    if in_year_range(text, start, end) {
        return true;
    }
    line_starts_with_year(text, start)
        && !has_pii_label_before(text, start)
        && !has_leading_pii_label(text, start, end)
}

/// Phone rejection: numeric checks plus a trailing 年/月
pub fn rejects_phone(text: &str, start: usize, end: usize) -> bool {
    if rejects_numeric(text, start, end) {
        return true;
    }
    matches!(text[end..].chars().next(), Some('年' | '月'))
}

/// Postal rejection: numeric checks plus a leading digit unless 〒-prefixed
pub fn rejects_postal(text: &str, start: usize, end: usize) -> bool {
    if rejects_numeric(text, start, end) {
        return true;
    }
    let preceded_by_digit = text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit());
    preceded_by_digit && !text[start..end].starts_with('〒')
}

/// SNS rejection: e-mail fragments and URL-owned text
pub fn rejects_sns(text: &str, start: usize, end: usize) -> bool {
    is_email_fragment(text, start, end) || is_url_owned(text, start)
}

/// Whether the match is part of an e-mail address
fn is_email_fragment(text: &str, start: usize, end: usize) -> bool {
    let before = chars_before(text, start, 64);
    if RE_EMAIL_LOCAL_TAIL.is_match(before) && RE_EMAIL_REST.is_match(&text[start..]) {
        return true;
    }
    RE_DOMAIN_SUFFIX.is_match(&text[end..])
}

/// Whether the match continues a URL
fn is_url_owned(text: &str, start: usize) -> bool {
    RE_URL_TAIL.is_match(chars_before(text, start, 200))
}

/// Whether a document-date label precedes `start`
pub fn has_document_date_label(text: &str, start: usize) -> bool {
    RE_DOCUMENT_DATE_LABEL.is_match(chars_before(text, start, DATE_LABEL_WINDOW))
}

/// Whether a birthday label precedes `start`
pub fn has_birthday_label(text: &str, start: usize) -> bool {
    RE_BIRTHDAY_LABEL.is_match(chars_before(text, start, DATE_LABEL_WINDOW))
}

/// Western calendar year of a date value (Western or 昭和/平成/令和 era)
///
/// # Examples
///
/// ```
/// use hogo::anonymization::detector::context::western_year;
///
/// assert_eq!(western_year("昭和63年5月20日"), Some(1988));
/// assert_eq!(western_year("令和元年5月1日"), Some(2019));
/// assert_eq!(western_year("1990年1月2日"), Some(1990));
/// ```
pub fn western_year(value: &str) -> Option<i32> {
    let caps = RE_ERA_YEAR.captures(value)?;
    if let Some(year) = caps.get(1) {
        return year.as_str().parse().ok();
    }
    let base = match caps.get(2)?.as_str() {
        "昭和" => 1925,
        "平成" => 1988,
        "令和" => 2018,
        _ => return None,
    };
    let offset = match caps.get(3)?.as_str() {
        "元" => 1,
        n => n.parse::<i32>().ok()?,
    };
    Some(base + offset)
}

/// Recent-date suppression for unlabeled birthdays
#[derive(Debug, Clone, Copy)]
pub struct BirthdayPolicy {
    /// Year considered "now"
    pub reference_year: i32,
    /// Dates at most this many years old are treated as document metadata
    pub recent_year_window: u32,
}

impl BirthdayPolicy {
    /// Policy anchored at the current local year
    pub fn current(recent_year_window: u32) -> Self {
        use chrono::Datelike;
        Self {
            reference_year: chrono::Local::now().year(),
            recent_year_window,
        }
    }

    /// Whether a birthday match at `[start, end)` should be dropped
    pub fn rejects(&self, text: &str, start: usize, value: &str) -> bool {
        if has_document_date_label(text, start) {
            return true;
        }
        if has_birthday_label(text, start) {
            return false;
        }
        match western_year(value) {
            Some(year) => self.reference_year - year <= self.recent_year_window as i32,
            None => false,
        }
    }
}

impl Default for BirthdayPolicy {
    fn default() -> Self {
        Self::current(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, needle: &str) -> (usize, usize) {
        let start = text.find(needle).unwrap();
        (start, start + needle.len())
    }

    #[test]
    fn test_year_range_detection() {
        let text = "2020年4月 - 2024年3月 株式会社サンプル";
        let (s, e) = span(text, "2024");
        assert!(in_year_range(text, s, e));

        let text = "2020年4月-2024年3月";
        let (s, e) = span(text, "2024");
        assert!(in_year_range(text, s, e));

        let text = "電話：090-1234-5678";
        let (s, e) = span(text, "090-1234-5678");
        assert!(!in_year_range(text, s, e));
    }

    #[test]
    fn test_year_range_window_keeps_edge_years_whole() {
        // 8 chars back from 2024 start inside 2020
        let text = "経歴 2020年4月 - 2024年3月";
        let (s, e) = span(text, "2024年3");
        assert!(in_year_range(text, s, e));
    }

    #[test]
    fn test_year_line_rejects_unless_labeled() {
        let text = "2019年 入社 123-4567";
        let (s, e) = span(text, "123-4567");
        assert!(rejects_numeric(text, s, e));

        let text = "2019年 転居 〒123-4567";
        let (s, e) = span(text, "〒123-4567");
        assert!(!rejects_numeric(text, s, e));
        assert!(!rejects_postal(text, s, e));

        let text = "2019年 TEL 03-1234-5678";
        let (s, e) = span(text, "03-1234-5678");
        assert!(!rejects_phone(text, s, e));
    }

    #[test]
    fn test_phone_followed_by_month() {
        let text = "0312345678月";
        assert!(rejects_phone(text, 0, 10));
    }

    #[test]
    fn test_postal_preceded_by_digit() {
        let text = "9123-4567";
        assert!(rejects_postal(text, 1, text.len()));
        let text = "〒123-4567";
        assert!(!rejects_postal(text, 0, text.len()));
    }

    #[test]
    fn test_sns_inside_email_is_rejected() {
        let text = "連絡 max:tanaka@example.com";
        let (s, e) = span(text, "x:tanaka");
        assert!(rejects_sns(text, s, e));
    }

    #[test]
    fn test_sns_inside_url_is_rejected() {
        let text = "https://example.com/?x:handle";
        let (s, e) = span(text, "x:handle");
        assert!(rejects_sns(text, s, e));
    }

    #[test]
    fn test_birthday_policy() {
        let policy = BirthdayPolicy {
            reference_year: 2026,
            recent_year_window: 20,
        };

        let text = "作成日：2024年12月1日";
        let (s, _) = span(text, "2024");
        assert!(policy.rejects(text, s, "2024年12月1日"));

        let text = "生年月日：2015年4月1日";
        let (s, _) = span(text, "2015");
        assert!(!policy.rejects(text, s, "2015年4月1日"));

        let text = "2015年4月1日 入学";
        assert!(policy.rejects(text, 0, "2015年4月1日"));

        let text = "1990年4月1日";
        assert!(!policy.rejects(text, 0, "1990年4月1日"));
    }

    #[test]
    fn test_western_year_eras() {
        assert_eq!(western_year("平成2年1月1日"), Some(1990));
        assert_eq!(western_year("令和5年1月1日"), Some(2023));
        assert_eq!(western_year("不明"), None);
    }
}
