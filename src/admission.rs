//! Keystroke admission rules
//!
//! Decides, one character at a time, whether a keystroke may enter the field.
//! The rules keep the text parseable in the active mode and steer the user
//! toward the conventional `0x...` and `0...` notations.

use crate::display_mode::DisplayMode;

/// Backspace as delivered by the host's character events
pub const BACKSPACE: char = '\u{8}';

/// Delete as delivered by the host's character events
pub const DELETE: char = '\u{7f}';

/// Check whether `candidate` may be inserted into a field showing
/// `current_text` in `mode`.
///
/// Backspace and delete are always admissible.
///
/// # Examples
///
/// ```
/// use radix_edit::{is_char_admissible, DisplayMode};
///
/// assert!(!is_char_admissible("", DisplayMode::Decimal, '0'));
/// assert!(is_char_admissible("0", DisplayMode::Hexadecimal, 'x'));
/// assert!(!is_char_admissible("0", DisplayMode::Octal, '0'));
/// assert!(!is_char_admissible("", DisplayMode::Binary, '2'));
/// ```
pub fn is_char_admissible(current_text: &str, mode: DisplayMode, candidate: char) -> bool {
    if candidate == BACKSPACE || candidate == DELETE {
        return true;
    }

    let only_zero = current_text == "0";

    match mode {
        // A leading 0 would read as octal
        DisplayMode::Decimal => {
            if current_text.is_empty() && candidate == '0' {
                false
            } else {
                candidate.is_ascii_digit()
            }
        }
        DisplayMode::Hexadecimal => {
            if only_zero && candidate == '0' {
                false
            } else if only_zero && matches!(candidate, 'x' | 'X') {
                true
            } else {
                candidate.is_ascii_hexdigit()
            }
        }
        DisplayMode::Octal => {
            if only_zero && candidate == '0' {
                false
            } else {
                matches!(candidate, '0'..='7')
            }
        }
        DisplayMode::Binary => matches!(candidate, '0' | '1'),
    }
}

/// Filter a run of typed characters against `current_text` as if each one
/// were typed in turn at the end of the field.
///
/// Returns the admitted characters. Editing characters are dropped since
/// they do not insert anything.
pub fn filter_typed(current_text: &str, mode: DisplayMode, typed: &str) -> String {
    let mut text = current_text.to_string();
    let mut admitted = String::new();
    for ch in typed.chars() {
        if ch == BACKSPACE || ch == DELETE {
            continue;
        }
        if is_char_admissible(&text, mode, ch) {
            text.push(ch);
            admitted.push(ch);
        }
    }
    admitted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printable_ascii() -> impl Iterator<Item = char> {
        (0x20u8..0x7f).map(char::from)
    }

    #[test]
    fn test_editing_keys_always_admitted() {
        for mode in DisplayMode::ALL {
            for text in ["", "0", "0x", "123"] {
                assert!(is_char_admissible(text, mode, BACKSPACE));
                assert!(is_char_admissible(text, mode, DELETE));
            }
        }
    }

    #[test]
    fn test_decimal_rules() {
        assert!(!is_char_admissible("", DisplayMode::Decimal, '0'));
        assert!(is_char_admissible("", DisplayMode::Decimal, '7'));
        assert!(is_char_admissible("1", DisplayMode::Decimal, '0'));
        for ch in printable_ascii() {
            let expected = ch.is_ascii_digit();
            assert_eq!(is_char_admissible("5", DisplayMode::Decimal, ch), expected, "{ch:?}");
        }
    }

    #[test]
    fn test_hex_prefix_rules() {
        assert!(!is_char_admissible("0", DisplayMode::Hexadecimal, '0'));
        assert!(is_char_admissible("0", DisplayMode::Hexadecimal, 'x'));
        assert!(is_char_admissible("0", DisplayMode::Hexadecimal, 'X'));
        assert!(is_char_admissible("", DisplayMode::Hexadecimal, '0'));
        assert!(!is_char_admissible("", DisplayMode::Hexadecimal, 'x'));
        assert!(!is_char_admissible("1", DisplayMode::Hexadecimal, 'x'));
        assert!(!is_char_admissible("0x", DisplayMode::Hexadecimal, 'x'));
        assert!(!is_char_admissible("0x1", DisplayMode::Hexadecimal, 'X'));
        assert!(is_char_admissible("0x", DisplayMode::Hexadecimal, '0'));
    }

    #[test]
    fn test_hex_character_set() {
        for ch in printable_ascii() {
            let expected = ch.is_ascii_hexdigit();
            assert_eq!(is_char_admissible("0x1", DisplayMode::Hexadecimal, ch), expected, "{ch:?}");
        }
    }

    #[test]
    fn test_octal_rules() {
        assert!(is_char_admissible("", DisplayMode::Octal, '0'));
        assert!(!is_char_admissible("0", DisplayMode::Octal, '0'));
        assert!(is_char_admissible("0", DisplayMode::Octal, '7'));
        assert!(is_char_admissible("01", DisplayMode::Octal, '0'));
        assert!(!is_char_admissible("01", DisplayMode::Octal, '8'));
        assert!(!is_char_admissible("0", DisplayMode::Octal, 'x'));
    }

    #[test]
    fn test_binary_rules() {
        for ch in printable_ascii() {
            let expected = ch == '0' || ch == '1';
            assert_eq!(is_char_admissible("", DisplayMode::Binary, ch), expected, "{ch:?}");
            assert_eq!(is_char_admissible("0", DisplayMode::Binary, ch), expected, "{ch:?}");
        }
    }

    #[test]
    fn test_filter_typed() {
        assert_eq!(filter_typed("", DisplayMode::Decimal, "0012"), "12");
        assert_eq!(filter_typed("", DisplayMode::Hexadecimal, "00xff"), "0xff");
        assert_eq!(filter_typed("", DisplayMode::Octal, "0089"), "0");
        assert_eq!(filter_typed("1", DisplayMode::Binary, "1021\u{8}"), "101");
    }
}
