//! Demo host window for the numeric field
//!
//! This module contains the eframe::App implementation: one numeric field,
//! its context menu, and an OK button that reports the entered value.

use eframe::egui;
use log::{debug, warn};

use crate::admission;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::command::FieldCommand;
use crate::config::{self, SharedFieldConfig, KEY_DISPLAY_MODE};
use crate::field::NumericField;
use crate::keyboard::{self, KeyboardInput};

pub struct RadixEditApp {
    field: NumericField,
    clipboard: Box<dyn Clipboard>,
    config: SharedFieldConfig,
    shortcuts_enabled: bool,
    /// Message shown after OK is pressed
    result_message: Option<String>,
}

impl RadixEditApp {
    pub fn new(field: NumericField, config: SharedFieldConfig) -> Self {
        let clipboard = SystemClipboard::new();
        if !clipboard.is_available() {
            warn!("System clipboard unavailable; cut, copy and paste are disabled");
        }
        Self::with_clipboard(field, config, Box::new(clipboard))
    }

    pub fn with_clipboard(field: NumericField, config: SharedFieldConfig, clipboard: Box<dyn Clipboard>) -> Self {
        let shortcuts_enabled = config
            .lock()
            .map(|cfg| cfg.clipboard_shortcuts_enabled())
            .unwrap_or(true);

        Self {
            field,
            clipboard,
            config,
            shortcuts_enabled,
            result_message: None,
        }
    }

    pub fn field(&self) -> &NumericField {
        &self.field
    }

    /// Run a field command and persist mode changes.
    pub fn execute(&mut self, command: FieldCommand) {
        self.field.execute(command, self.clipboard.as_mut());

        if let FieldCommand::SetMode(mode) = command {
            if let Ok(mut cfg) = self.config.lock() {
                cfg.set_property(KEY_DISPLAY_MODE, mode);
            }
            if let Err(e) = config::save_shared_config(&self.config) {
                warn!("Failed to save configuration: {e}");
            }
        }
    }

    /// Take keyboard events meant for the focused field out of the queue.
    fn route_field_events(&mut self, ctx: &egui::Context) {
        ctx.input_mut(|input| {
            let events = std::mem::take(&mut input.events);
            input.events = self.route_events(events, input.modifiers);
        });
    }

    /// Apply field events in arrival order and return what the text widget
    /// should still see.
    ///
    /// Typed text is passed on only as far as the admission filter allows.
    /// Clipboard events run as field commands where they occur; text typed
    /// ahead of a clipboard command is applied to the field first so the
    /// command sees it.
    fn route_events(&mut self, events: Vec<egui::Event>, modifiers: egui::Modifiers) -> Vec<egui::Event> {
        let last_clipboard = if self.shortcuts_enabled {
            events.iter().rposition(|event| {
                matches!(
                    keyboard::process_keyboard_event(event, modifiers),
                    Some(KeyboardInput::Command(_) | KeyboardInput::PasteText(_))
                )
            })
        } else {
            None
        };

        let mut projected = self.field.text().to_string();
        let mut passed = Vec::with_capacity(events.len());

        for (index, event) in events.into_iter().enumerate() {
            if !keyboard::is_field_event(&event) {
                passed.push(event);
                continue;
            }

            match keyboard::process_keyboard_event(&event, modifiers) {
                Some(KeyboardInput::Text(text)) if last_clipboard.is_some_and(|last| index < last) => {
                    self.field.type_str(&text);
                    projected = self.field.text().to_string();
                }
                Some(KeyboardInput::Text(text)) => {
                    let admitted = admission::filter_typed(&projected, self.field.mode(), &text);
                    if !admitted.is_empty() {
                        projected.push_str(&admitted);
                        passed.push(egui::Event::Text(admitted));
                    }
                }
                Some(input) => {
                    self.apply_clipboard_input(input);
                    projected = self.field.text().to_string();
                }
                None => {}
            }
        }

        passed
    }

    fn apply_clipboard_input(&mut self, input: KeyboardInput) {
        if !self.shortcuts_enabled {
            debug!("Clipboard shortcut ignored: {input:?}");
            return;
        }

        match input {
            KeyboardInput::Command(command) => self.execute(command),
            KeyboardInput::PasteText(text) => self.field.paste_text(&text),
            KeyboardInput::Text(_) => {}
        }
    }

    fn show_context_menu(&mut self, ui: &mut egui::Ui) -> Option<FieldCommand> {
        let mut chosen = None;
        for item in self.field.context_menu(self.clipboard.as_mut()) {
            let button = egui::Button::new(item.label).selected(item.checked);
            if ui.add_enabled(item.enabled, button).clicked() {
                chosen = Some(item.command);
                ui.close();
            }
        }
        chosen
    }
}

/// Text reported by the OK button
pub fn describe_value(value: Option<i64>) -> String {
    match value {
        Some(v) => {
            let bits = v as u64;
            format!("The decimal value is: {bits}\nThe hex value is: 0x{bits:x}")
        }
        None => "No value entered".to_string(),
    }
}

impl eframe::App for RadixEditApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let field_id = egui::Id::new("numeric_field");
        if ctx.memory(|mem| mem.has_focus(field_id)) {
            self.route_field_events(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Right-click the field to change the base.");

            let mut buffer = self.field.text().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut buffer)
                    .id(field_id)
                    .hint_text(self.field.cue_banner())
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                self.field.set_text(buffer);
            }

            if response.secondary_clicked() {
                response.request_focus();
            }

            let mut chosen = None;
            response.context_menu(|ui| {
                chosen = self.show_context_menu(ui);
            });
            if let Some(command) = chosen {
                debug!("Context menu command: {command:?}");
                self.execute(command);
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    self.result_message = Some(describe_value(self.field.value()));
                }
                if ui.button("Cancel").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });

        let mut close_result = false;
        if let Some(message) = &self.result_message {
            egui::Window::new("Example")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        close_result = true;
                    }
                });
        }
        if close_result {
            self.result_message = None;
        }
    }
}
