//! Value codec: text to 64-bit value and back
//!
//! Parsing follows the conventions of the C library's unsigned conversion
//! (leading whitespace, optional sign, optional `0x` in base 16) so values
//! pasted from calculators and debuggers are accepted. The full unsigned
//! 64-bit range is carried in an `i64` by reinterpreting the bit pattern.
//!
//! For every mode and every non-negative `v`,
//! `parse_value(&format_value(v, mode), mode.radix()) == Ok(v)`.

use crate::display_mode::DisplayMode;
use crate::error::{ParseError, ParseResult};

/// Result of scanning the numeric prefix of a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scan {
    /// Accumulated value, saturated at `u64::MAX` on overflow
    value: u64,
    /// Bytes consumed, zero when no digits were found
    consumed: usize,
    overflowed: bool,
}

/// Remove the grouping characters calculators put into copied values.
fn strip_grouping(text: &str) -> String {
    text.chars().filter(|c| *c != ',' && *c != ' ').collect()
}

fn scan_unsigned(s: &str, radix: u32) -> Scan {
    let no_digits = Scan { value: 0, consumed: 0, overflowed: false };
    if !(2..=36).contains(&radix) {
        return no_digits;
    }

    let mut pos = s.len() - s.trim_start().len();

    let mut negative = false;
    match s[pos..].chars().next() {
        Some('-') => {
            negative = true;
            pos += 1;
        }
        Some('+') => pos += 1,
        _ => {}
    }

    if radix == 16 {
        let rest = &s[pos..];
        let has_prefix = rest.starts_with("0x") || rest.starts_with("0X");
        if has_prefix && rest[2..].chars().next().is_some_and(|c| c.is_ascii_hexdigit()) {
            pos += 2;
        }
    }

    let digits_start = pos;
    let mut value: u64 = 0;
    let mut overflowed = false;
    for ch in s[pos..].chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        pos += 1;
        if !overflowed {
            match value
                .checked_mul(u64::from(radix))
                .and_then(|v| v.checked_add(u64::from(digit)))
            {
                Some(next) => value = next,
                None => overflowed = true,
            }
        }
    }

    if pos == digits_start {
        return no_digits;
    }

    let value = if overflowed {
        u64::MAX
    } else if negative {
        value.wrapping_neg()
    } else {
        value
    };

    Scan { value, consumed: pos, overflowed }
}

/// Parse `text` in `radix` into a 64-bit value.
///
/// Commas and spaces are ignored anywhere in the input. Values above
/// `i64::MAX` come back negative, carrying the unsigned bit pattern.
///
/// # Examples
///
/// ```
/// use radix_edit::{parse_value, ParseError};
///
/// assert_eq!(parse_value("0x1F", 16), Ok(31));
/// assert_eq!(parse_value(",1 234", 10), Ok(1234));
/// assert_eq!(parse_value("12a", 10), Err(ParseError::TrailingGarbage));
/// assert_eq!(parse_value("xyz", 16), Err(ParseError::NotNumeric));
/// assert_eq!(parse_value("", 2), Err(ParseError::Empty));
/// ```
pub fn parse_value(text: &str, radix: u32) -> ParseResult<i64> {
    let cooked = strip_grouping(text);
    if cooked.is_empty() {
        return Err(ParseError::Empty);
    }

    let scan = scan_unsigned(&cooked, radix);
    if scan.consumed == 0 {
        Err(ParseError::NotNumeric)
    } else if scan.consumed < cooked.len() {
        Err(ParseError::TrailingGarbage)
    } else if scan.overflowed {
        Err(ParseError::OutOfRange)
    } else {
        Ok(scan.value as i64)
    }
}

/// Parse `text` using the radix of `mode`.
pub fn parse_in_mode(text: &str, mode: DisplayMode) -> ParseResult<i64> {
    parse_value(text, mode.radix())
}

/// Render `value` as the canonical display string for `mode`.
///
/// Negative values have no representation and render as an empty string.
///
/// # Examples
///
/// ```
/// use radix_edit::{format_value, DisplayMode};
///
/// assert_eq!(format_value(255, DisplayMode::Hexadecimal), "0xff");
/// assert_eq!(format_value(8, DisplayMode::Octal), "010");
/// assert_eq!(format_value(-1, DisplayMode::Decimal), "");
/// ```
pub fn format_value(value: i64, mode: DisplayMode) -> String {
    if value < 0 {
        return String::new();
    }

    let bits = value as u64;
    match mode {
        DisplayMode::Decimal => format!("{bits}"),
        DisplayMode::Hexadecimal => format!("0x{bits:x}"),
        DisplayMode::Octal => format!("0{bits:o}"),
        DisplayMode::Binary => format!("{bits:b}"),
    }
}
