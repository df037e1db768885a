//! Field commands and the context menu model
//!
//! The host presents the menu however it likes; whatever entry the user
//! picks comes back as a [`FieldCommand`] for `NumericField::execute`.

use crate::display_mode::DisplayMode;

/// Actions a host can route into a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCommand {
    /// Switch the display base, keeping the value
    SetMode(DisplayMode),
    Cut,
    Copy,
    Paste,
}

impl FieldCommand {
    pub fn label(&self) -> &'static str {
        match self {
            FieldCommand::SetMode(mode) => mode.cue_banner(),
            FieldCommand::Cut => "Cut",
            FieldCommand::Copy => "Copy",
            FieldCommand::Paste => "Paste",
        }
    }
}

/// One entry of the context menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub command: FieldCommand,
    /// Shown with a check mark
    pub checked: bool,
    /// Greyed out when false
    pub enabled: bool,
}

impl MenuItem {
    fn new(command: FieldCommand, checked: bool, enabled: bool) -> Self {
        Self { label: command.label(), command, checked, enabled }
    }
}

/// Build the context menu for a field in `mode`.
///
/// Mode entries come first with the current one checked, then Cut and Copy
/// (greyed when the field is empty), then Paste (greyed when there is no
/// clipboard text).
pub fn build_context_menu(mode: DisplayMode, field_has_text: bool, clipboard_has_text: bool) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = DisplayMode::ALL
        .iter()
        .map(|&m| MenuItem::new(FieldCommand::SetMode(m), m == mode, true))
        .collect();

    items.push(MenuItem::new(FieldCommand::Cut, false, field_has_text));
    items.push(MenuItem::new(FieldCommand::Copy, false, field_has_text));
    items.push(MenuItem::new(FieldCommand::Paste, false, clipboard_has_text));
    items
}
