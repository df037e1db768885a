//! Behavior tests for the numeric field
//!
//! These drive the field through its public API the way a host does:
//! keystrokes, base switches and clipboard commands.

use radix_edit::admission::BACKSPACE;
use radix_edit::command::build_context_menu;
use radix_edit::keyboard::map_shortcut;
use radix_edit::{
    Clipboard, DisplayMode, FieldCommand, MemoryClipboard, NumericField, ParseError,
};

#[test]
fn test_typing_zero_first_in_decimal_is_rejected() {
    let mut field = NumericField::new(None, DisplayMode::Decimal);
    assert!(!field.type_char('0'));
    assert_eq!(field.text(), "");
}

#[test]
fn test_typing_hex_prefix() {
    let mut field = NumericField::new(None, DisplayMode::Hexadecimal);
    assert!(field.type_char('0'));
    assert!(field.type_char('x'));
    assert!(!field.type_char('x'));
    assert!(field.type_char('F'));
    assert_eq!(field.text(), "0xF");
    assert_eq!(field.value(), Some(15));
}

#[test]
fn test_second_leading_zero_in_octal_is_rejected() {
    let mut field = NumericField::new(None, DisplayMode::Octal);
    assert!(field.type_char('0'));
    assert!(!field.type_char('0'));
    assert!(field.type_char('1'));
    assert!(field.type_char('0'));
    assert_eq!(field.text(), "010");
    assert_eq!(field.value(), Some(8));
}

#[test]
fn test_backspace_then_retype() {
    let mut field = NumericField::new(None, DisplayMode::Hexadecimal);
    field.type_str("0x");
    assert_eq!(field.try_value(), Err(ParseError::TrailingGarbage));
    field.type_char(BACKSPACE);
    assert_eq!(field.text(), "0");
    assert!(!field.type_char('0'));
    assert!(field.type_char('X'));
}

#[test]
fn test_hex_to_decimal_to_binary() {
    let mut field = NumericField::new(None, DisplayMode::Hexadecimal);
    field.set_text("0xFF");
    field.change_mode(DisplayMode::Decimal);
    assert_eq!(field.text(), "255");
    field.change_mode(DisplayMode::Binary);
    assert_eq!(field.text(), "11111111");
}

#[test]
fn test_values_above_i64_max_survive_base_switch() {
    let mut field = NumericField::new(None, DisplayMode::Hexadecimal);
    field.set_text("0x8000000000000000");
    assert_eq!(field.value(), Some(i64::MIN));
    // Negative bit patterns have no rendering
    field.change_mode(DisplayMode::Decimal);
    assert_eq!(field.text(), "");
}

#[test]
fn test_paste_overwrites_or_clears() {
    let mut field = NumericField::new(Some(99), DisplayMode::Decimal);
    let mut clipboard = MemoryClipboard::with_text("12,345");
    field.paste(&mut clipboard);
    assert_eq!(field.text(), "12345");

    for bad in ["abc", "12a", "99999999999999999999999", "0x10"] {
        let mut field = NumericField::new(Some(99), DisplayMode::Decimal);
        let mut clipboard = MemoryClipboard::with_text(bad);
        field.paste(&mut clipboard);
        assert_eq!(field.text(), "", "paste of {bad:?} should clear");
    }
}

#[test]
fn test_paste_uses_current_mode() {
    let mut clipboard = MemoryClipboard::with_text("777");
    let mut octal = NumericField::new(None, DisplayMode::Octal);
    octal.paste(&mut clipboard);
    assert_eq!(octal.value(), Some(0o777));

    let mut binary = NumericField::new(Some(1), DisplayMode::Binary);
    binary.paste(&mut clipboard);
    assert_eq!(binary.text(), "");
}

#[test]
fn test_cut_copies_literal_text() {
    let mut field = NumericField::new(None, DisplayMode::Decimal);
    field.set_text("1 000");
    let mut clipboard = MemoryClipboard::new();
    field.cut(&mut clipboard);
    assert_eq!(clipboard.get_text().as_deref(), Some("1 000"));
    assert!(field.is_empty());
}

#[test]
fn test_shortcuts_dispatch_into_field() {
    let mut field = NumericField::new(Some(42), DisplayMode::Decimal);
    let mut clipboard = MemoryClipboard::new();

    let copy = map_shortcut('C', true, false).unwrap();
    field.execute(copy, &mut clipboard);
    assert_eq!(clipboard.contents(), Some("42"));

    assert_eq!(map_shortcut('x', true, true), None);

    let cut = map_shortcut('x', true, false).unwrap();
    field.execute(cut, &mut clipboard);
    assert!(field.is_empty());

    let paste = map_shortcut('v', true, false).unwrap();
    field.execute(paste, &mut clipboard);
    assert_eq!(field.value(), Some(42));
}

#[test]
fn test_context_menu_drives_mode_switch() {
    let mut field = NumericField::new(Some(10), DisplayMode::Decimal);
    let mut clipboard = MemoryClipboard::new();

    let menu = field.context_menu(&mut clipboard);
    assert_eq!(menu, build_context_menu(DisplayMode::Decimal, true, false));

    let hex = menu
        .iter()
        .find(|item| item.label == "Hex")
        .map(|item| item.command)
        .unwrap();
    field.execute(hex, &mut clipboard);
    assert_eq!(field.text(), "0xa");
    assert_eq!(field.cue_banner(), "Hex");

    let menu = field.context_menu(&mut clipboard);
    assert!(menu
        .iter()
        .any(|item| item.checked && item.command == FieldCommand::SetMode(DisplayMode::Hexadecimal)));
}

#[test]
fn test_fields_are_independent() {
    let mut a = NumericField::new(Some(1), DisplayMode::Decimal);
    let b = NumericField::new(Some(1), DisplayMode::Decimal);
    a.change_mode(DisplayMode::Binary);
    a.set_value(6);
    assert_eq!(a.text(), "110");
    assert_eq!(b.text(), "1");
    assert_eq!(b.mode(), DisplayMode::Decimal);
}
