// file: src/extractor/text.rs
// description: line normalization and name cleanup shared by the line-based extractors
// reference: pdf text layout quirks of the certificate portal

use crate::extractor::patterns::*;

/// Line terminators recognised when splitting extracted PDF text. Page breaks
/// arrive as form feeds, so plain `str::lines` is not enough.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits text into trimmed, non-empty lines in document order.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.split(LINE_BREAKS)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Removes parentheticals and trailing registry numbers from a candidate name
/// and collapses whitespace.
pub fn cleanup_name(s: &str) -> String {
    let s = PARENTHESIZED.replace_all(s, "");
    let s = INN_SUFFIX.replace_all(&s, "");
    let s = OGRN_SUFFIX.replace_all(&s, "");
    MULTI_SPACE
        .replace_all(&s, " ")
        .trim_matches(|c: char| matches!(c, ' ' | ',' | ';' | '—' | '-'))
        .to_string()
}

pub fn strip_parentheticals(s: &str) -> String {
    PARENTHESIZED.replace_all(s, "").trim().to_string()
}

pub fn looks_like_address(s: &str) -> bool {
    ADDRESS_TOKENS.is_match(s) || POSTAL_CODE.is_match(s)
}

/// A plausible person or organization name: at least four characters, at
/// least one letter, and not a fragment of the certificate header itself.
pub fn is_good_name(s: &str) -> bool {
    if s.chars().count() < 4 {
        return false;
    }
    let lower = s.to_lowercase();
    if lower.contains("сертификат") || lower.contains("certificate") {
        return false;
    }
    LETTER.is_match(s)
}

/// Company names are frequently followed by the address on the same line.
pub fn cut_before_address(s: &str) -> &str {
    match ADDRESS_START.find(s) {
        Some(m) => s[..m.start()].trim(),
        None => s.trim(),
    }
}

pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
