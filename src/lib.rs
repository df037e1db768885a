/// DISPLAY MODES: Decimal, hex, octal and binary
/// Radix, cue banner and configuration names for each base
pub mod display_mode;

/// ADMISSION: Per-keystroke character filter
pub mod admission;

/// CODEC: Text to 64-bit value and back
/// Parser with malformed-input and overflow detection, plus the canonical formatter
pub mod codec;

/// FIELD: The numeric entry field state and behavior
pub mod field;

/// COMMANDS: Mode switches, clipboard commands and the context menu model
pub mod command;

pub mod clipboard;
pub mod config;
pub mod error;
pub mod keyboard;

/// Demo host window
pub mod app;

pub use admission::is_char_admissible;
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use codec::{format_value, parse_value};
pub use command::{FieldCommand, MenuItem};
pub use display_mode::DisplayMode;
pub use error::ParseError;
pub use field::NumericField;
