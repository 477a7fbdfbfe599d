//! Replacement of code points that XML 1.0 does not allow.

/// Substitute for illegal code points.
pub const PLACEHOLDER: char = '?';

/// Check if a code point may appear in an XML 1.0 document.
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Replace every illegal code point with [`PLACEHOLDER`], one for one.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if is_xml_char(c) { c } else { PLACEHOLDER })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_text_unchanged() {
        let text = "L     MW 10\n\tT     MW 12\r\nÄÖÜ 漢字 🚀";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn test_control_characters_replaced() {
        assert_eq!(sanitize("A\u{0}B\u{1B}C"), "A?B?C");
        assert_eq!(sanitize("\u{FFFE}\u{FFFF}"), "??");
    }

    #[test]
    fn test_length_preserved() {
        let text = "x\u{7}y\u{8}z";
        assert_eq!(sanitize(text).chars().count(), text.chars().count());
    }

    #[test]
    fn test_idempotent() {
        let samples = ["", "plain", "\u{0}\u{1}\u{2}", "mixed\u{B}\u{C}text\u{FFFE}", "\u{10FFFF}"];
        for sample in samples {
            let once = sanitize(sample);
            assert_eq!(sanitize(&once), once);
            assert!(once.chars().all(is_xml_char));
        }
    }

    #[test]
    fn test_boundaries() {
        assert!(is_xml_char('\u{20}'));
        assert!(!is_xml_char('\u{1F}'));
        assert!(is_xml_char('\u{D7FF}'));
        assert!(is_xml_char('\u{E000}'));
        assert!(is_xml_char('\u{FFFD}'));
        assert!(!is_xml_char('\u{FFFE}'));
        assert!(is_xml_char('\u{10000}'));
    }
}
