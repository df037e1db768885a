//! Display modes for the numeric field
//!
//! A display mode selects the numeric base the field accepts and renders:
//! the admissible keystrokes, the parse radix and the format prefix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Base 10, no prefix
    #[default]
    Decimal,
    /// Base 16, rendered with a `0x` prefix
    #[serde(rename = "hex")]
    Hexadecimal,
    /// Base 8, rendered with a leading `0`
    Octal,
    /// Base 2, no prefix
    Binary,
}

impl DisplayMode {
    /// All modes in context menu order.
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::Decimal,
        DisplayMode::Hexadecimal,
        DisplayMode::Octal,
        DisplayMode::Binary,
    ];

    /// Radix used when parsing text entered in this mode
    pub fn radix(self) -> u32 {
        match self {
            DisplayMode::Decimal => 10,
            DisplayMode::Hexadecimal => 16,
            DisplayMode::Octal => 8,
            DisplayMode::Binary => 2,
        }
    }

    /// Watermark shown while the field is empty; also the context menu label.
    pub fn cue_banner(self) -> &'static str {
        match self {
            DisplayMode::Decimal => "Decimal",
            DisplayMode::Hexadecimal => "Hex",
            DisplayMode::Octal => "Octal",
            DisplayMode::Binary => "Binary",
        }
    }

    /// Name used in configuration files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Decimal => "decimal",
            DisplayMode::Hexadecimal => "hex",
            DisplayMode::Octal => "octal",
            DisplayMode::Binary => "binary",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" | "dec" => Ok(DisplayMode::Decimal),
            "hex" | "hexadecimal" => Ok(DisplayMode::Hexadecimal),
            "octal" | "oct" => Ok(DisplayMode::Octal),
            "binary" | "bin" => Ok(DisplayMode::Binary),
            _ => Err(ConfigError::InvalidParameter {
                parameter: "displayMode".to_string(),
                value: s.to_string(),
                reason: "expected one of decimal, hex, octal, binary".to_string(),
            }),
        }
    }
}
