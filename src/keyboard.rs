//! Keyboard handling for the numeric field
//!
//! This module maps host keyboard events to typed text or field commands.
//! Ctrl+X, Ctrl+C and Ctrl+V become Cut, Copy and Paste unless Shift is held.

use eframe::egui;

use crate::command::FieldCommand;

/// Keyboard input relevant to a numeric field
#[derive(Debug, Clone, PartialEq)]
pub enum KeyboardInput {
    /// Printable text, still to be gated by the admission filter
    Text(String),
    /// Clipboard shortcut
    Command(FieldCommand),
    /// Paste shortcut where the host already read the clipboard
    PasteText(String),
}

/// Map a key press to a clipboard command.
///
/// `key` is the letter on the key, in either case.
pub fn map_shortcut(key: char, ctrl: bool, shift: bool) -> Option<FieldCommand> {
    if !ctrl || shift {
        return None;
    }

    match key.to_ascii_lowercase() {
        'x' => Some(FieldCommand::Cut),
        'c' => Some(FieldCommand::Copy),
        'v' => Some(FieldCommand::Paste),
        _ => None,
    }
}

/// Process an egui event for a focused numeric field.
///
/// egui turns the platform's clipboard chords into `Cut`, `Copy` and
/// `Paste` events; those are dropped while Shift is held. Text committed by
/// an input method is treated like typed text, and preedit text is dropped
/// so that nothing reaches the widget unfiltered. Editing keys are left to
/// the text widget.
pub fn process_keyboard_event(event: &egui::Event, modifiers: egui::Modifiers) -> Option<KeyboardInput> {
    match event {
        egui::Event::Cut | egui::Event::Copy | egui::Event::Paste(_) if modifiers.shift => None,
        egui::Event::Cut => Some(KeyboardInput::Command(FieldCommand::Cut)),
        egui::Event::Copy => Some(KeyboardInput::Command(FieldCommand::Copy)),
        egui::Event::Paste(text) => Some(KeyboardInput::PasteText(text.clone())),
        egui::Event::Text(text) | egui::Event::Ime(egui::ImeEvent::Commit(text)) => printable_text(text),
        _ => None,
    }
}

fn printable_text(text: &str) -> Option<KeyboardInput> {
    // Filter out control characters
    let printable: String = text.chars().filter(|ch| !ch.is_control()).collect();
    if printable.is_empty() {
        None
    } else {
        Some(KeyboardInput::Text(printable))
    }
}

/// Whether the field should take `event` away from the text widget
pub fn is_field_event(event: &egui::Event) -> bool {
    matches!(
        event,
        egui::Event::Cut
            | egui::Event::Copy
            | egui::Event::Paste(_)
            | egui::Event::Text(_)
            | egui::Event::Ime(egui::ImeEvent::Preedit(_) | egui::ImeEvent::Commit(_))
    )
}
