//! Stripping of characters that cannot appear in XML text

use std::borrow::Cow;

/// Check if `c` is illegal in XML 1.0 character data
///
/// Covers U+0000–U+0008, U+000B–U+000C, U+000E–U+001F, U+FFFE and U+FFFF.
/// Surrogates (U+D800–U+DFFF) are illegal too, but cannot occur in a Rust
/// `str`.
pub fn is_xml_illegal(c: char) -> bool {
    matches!(
        c,
        '\u{0000}'..='\u{0008}' | '\u{000B}'..='\u{000C}' | '\u{000E}'..='\u{001F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

/// Remove every XML-illegal character from `text`
///
/// Borrows when there is nothing to strip.
pub fn strip_xml_illegal(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_xml_illegal) {
        Cow::Owned(text.chars().filter(|&c| !is_xml_illegal(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Illegal characters present in `text`, escaped for display, first occurrence order
pub fn illegal_chars_found(text: &str) -> Vec<String> {
    let mut found: Vec<char> = Vec::new();
    for c in text.chars().filter(|&c| is_xml_illegal(c)) {
        if !found.contains(&c) {
            found.push(c);
        }
    }
    found.iter().map(|c| c.escape_unicode().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_every_occurrence() {
        assert_eq!(strip_xml_illegal("a\u{0}b\u{1}c\u{0}"), "abc");
        assert_eq!(strip_xml_illegal("x\u{FFFE}y\u{FFFF}"), "xy");
        assert_eq!(strip_xml_illegal("\u{B}\u{C}\u{1F}"), "");
    }

    #[test]
    fn test_keeps_whitespace_controls() {
        let text = "tab\there\nline\rreturn";
        assert!(matches!(strip_xml_illegal(text), Cow::Borrowed(_)));
        assert_eq!(strip_xml_illegal(text), text);
    }

    #[test]
    fn test_reports_each_char_once() {
        assert_eq!(
            illegal_chars_found("\u{1}a\u{1}\u{8}"),
            vec!["\\u{1}".to_string(), "\\u{8}".to_string()]
        );
        assert!(illegal_chars_found("plain").is_empty());
    }
}
