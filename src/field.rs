//! Numeric entry field
//!
//! Holds the displayed text and the display mode, and implements the
//! behavior a host needs: gated keystroke entry, value access, base
//! switching and clipboard commands.

use log::debug;

use crate::admission::{is_char_admissible, BACKSPACE, DELETE};
use crate::clipboard::Clipboard;
use crate::codec::{format_value, parse_in_mode};
use crate::command::{build_context_menu, FieldCommand, MenuItem};
use crate::display_mode::DisplayMode;
use crate::error::ParseResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericField {
    /// Text as shown, not necessarily a parseable value
    text: String,
    mode: DisplayMode,
}

impl NumericField {
    /// Create a field showing `initial` formatted in `mode`, or an empty
    /// field when no initial value is given.
    pub fn new(initial: Option<i64>, mode: DisplayMode) -> Self {
        let text = initial.map(|v| format_value(v, mode)).unwrap_or_default();
        Self { text, mode }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text verbatim, without keystroke filtering.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Parsed value in the current mode; `None` when empty or unparseable.
    pub fn value(&self) -> Option<i64> {
        self.try_value().ok()
    }

    /// Parsed value with the reason for failure.
    pub fn try_value(&self) -> ParseResult<i64> {
        parse_in_mode(&self.text, self.mode)
    }

    pub fn set_value(&mut self, value: i64) {
        self.text = format_value(value, self.mode);
    }

    /// Show `value` if present, or clear the field.
    fn show(&mut self, value: Option<i64>) {
        match value {
            Some(v) => self.set_value(v),
            None => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Watermark for the current mode
    pub fn cue_banner(&self) -> &'static str {
        self.mode.cue_banner()
    }

    /// Switch base, carrying the value across.
    ///
    /// Text that does not parse in the old mode leaves the field empty.
    pub fn change_mode(&mut self, new_mode: DisplayMode) {
        if new_mode == self.mode {
            return;
        }

        let value = self.value();
        debug!("Display mode {} -> {} (value {value:?})", self.mode, new_mode);
        self.mode = new_mode;
        self.show(value);
    }

    /// Offer a typed character to the field.
    ///
    /// Admitted characters are appended; backspace and delete remove the
    /// last character. Returns whether the keystroke was admitted.
    pub fn type_char(&mut self, ch: char) -> bool {
        if !is_char_admissible(&self.text, self.mode, ch) {
            return false;
        }

        if ch == BACKSPACE || ch == DELETE {
            self.text.pop();
        } else {
            self.text.push(ch);
        }
        true
    }

    /// Offer each character of `typed` in turn. Returns how many were admitted.
    pub fn type_str(&mut self, typed: &str) -> usize {
        typed.chars().filter(|&ch| self.type_char(ch)).count()
    }

    /// Copy the literal text to the clipboard. Does nothing when empty.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) {
        if self.text.is_empty() {
            return;
        }
        if let Err(e) = clipboard.set_text(&self.text) {
            debug!("Copy failed: {e}");
        }
    }

    /// Copy the literal text to the clipboard and clear the field.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) {
        if self.text.is_empty() {
            return;
        }
        self.copy(clipboard);
        self.clear();
    }

    /// Paste clipboard text. Nothing happens if the clipboard holds no text.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) {
        match clipboard.get_text() {
            Some(text) if !text.is_empty() => self.paste_text(&text),
            _ => debug!("Paste ignored: clipboard has no text"),
        }
    }

    /// Parse `pasted` in the current mode and show the result.
    ///
    /// Valid text replaces the field; anything else clears it.
    pub fn paste_text(&mut self, pasted: &str) {
        let parsed = parse_in_mode(pasted, self.mode);
        if let Err(e) = parsed {
            debug!("Pasted text {pasted:?} rejected in {} mode: {e}", self.mode);
        }
        self.show(parsed.ok());
    }

    /// Context menu entries for the field's current state
    pub fn context_menu(&self, clipboard: &mut dyn Clipboard) -> Vec<MenuItem> {
        build_context_menu(self.mode, !self.text.is_empty(), clipboard.has_text())
    }

    /// Run a command picked from the context menu or a keyboard shortcut.
    pub fn execute(&mut self, command: FieldCommand, clipboard: &mut dyn Clipboard) {
        match command {
            FieldCommand::SetMode(mode) => self.change_mode(mode),
            FieldCommand::Cut => self.cut(clipboard),
            FieldCommand::Copy => self.copy(clipboard),
            FieldCommand::Paste => self.paste(clipboard),
        }
    }
}
