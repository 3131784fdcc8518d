//! Text normalization applied before any matching
//!
//! Canonicalizes width and spacing variants so that every detector sees the
//! same text. The function is pure and idempotent.

/// Japanese typeset colon; other colon variants fold into it
pub const JAPANESE_COLON: char = '\u{FF1A}';

const FULLWIDTH_SEMICOLON: char = '\u{FF1B}';

/// Normalize raw text into the canonical form used by all detectors
///
/// In order: fullwidth digits and Latin letters become halfwidth, colon
/// variants fold into [`JAPANESE_COLON`], the fullwidth semicolon becomes
/// `;`, and runs of two or more horizontal whitespace characters collapse
/// into one ASCII space. Line breaks are left untouched.
///
/// # Examples
///
/// ```
/// use hogo::anonymization::normalizer::normalize;
///
/// assert_eq!(normalize("ＴＥＬ：０９０"), "TEL：090");
/// assert_eq!(normalize("田中\u{3000}\u{3000}太郎"), "田中 太郎");
/// ```
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending: Option<char> = None;
    let mut run = 0usize;

    for raw in input.chars() {
        let c = fold_char(raw);
        if is_horizontal_whitespace(c) {
            if run == 0 {
                pending = Some(c);
            }
            run += 1;
            continue;
        }
        flush_whitespace(&mut out, pending.take(), run);
        run = 0;
        out.push(c);
    }
    flush_whitespace(&mut out, pending, run);

    out
}

fn flush_whitespace(out: &mut String, first: Option<char>, run: usize) {
    match (first, run) {
        (Some(c), 1) => out.push(c),
        (Some(_), _) => out.push(' '),
        (None, _) => {}
    }
}

fn fold_char(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => {
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        '\u{FE13}' | '\u{FE55}' | '\u{2236}' => JAPANESE_COLON,
        FULLWIDTH_SEMICOLON => ';',
        _ => c,
    }
}

/// Whitespace that does not break a line
pub fn is_horizontal_whitespace(c: char) -> bool {
    c.is_whitespace() && !matches!(c, '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Up to `n` characters ending at byte offset `end`
pub(crate) fn chars_before(text: &str, end: usize, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    let head = &text[..end];
    let start = head
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &head[start..]
}

/// Up to `n` characters starting at byte offset `start`
pub(crate) fn chars_after(text: &str, start: usize, n: usize) -> &str {
    let tail = &text[start..];
    let end = tail
        .char_indices()
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or(tail.len());
    &tail[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("０１２３４５６７８９", "0123456789" ; "fullwidth digits")]
    #[test_case("ＡＢＣｘｙｚ", "ABCxyz" ; "fullwidth latin")]
    #[test_case("氏名\u{FE55}田中", "氏名：田中" ; "small colon")]
    #[test_case("a；b", "a;b" ; "fullwidth semicolon")]
    #[test_case("a  \t b", "a b" ; "ascii whitespace run")]
    #[test_case("田中\u{3000}太郎", "田中\u{3000}太郎" ; "single ideographic space kept")]
    #[test_case("一\n\n二", "一\n\n二" ; "line breaks untouched")]
    #[test_case("末尾  ", "末尾 " ; "trailing run")]
    fn test_normalize(input: &str, expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_normalize_is_idempotent_on_mixed_input() {
        let input = "ＴＥＬ\u{FE13}０３－１２３４  ５６７８\u{3000}\u{3000}ｍａｉｌ";
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_char_windows() {
        let text = "生年月日：昭和63年";
        let colon = text.find('：').unwrap();
        assert_eq!(chars_before(text, colon, 2), "月日");
        assert_eq!(chars_before(text, colon, 100), "生年月日");
        assert_eq!(chars_before(text, colon, 0), "");
        assert_eq!(chars_after(text, colon, 3), "：昭和");
        assert_eq!(chars_after(text, colon, 100), "：昭和63年");
    }
}
