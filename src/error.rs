//! Error types for radix-edit
//!
//! Structured error types for the value codec, the clipboard seam and the
//! configuration layer.

use std::error::Error as StdError;
use std::fmt;

/// Reasons a string fails to parse as a 64-bit value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left after stripping commas and spaces
    Empty,
    /// No digits could be consumed
    NotNumeric,
    /// Digits were followed by other characters
    TrailingGarbage,
    /// Magnitude does not fit in 64 bits
    OutOfRange,
}

/// Clipboard access errors
#[derive(Debug)]
pub enum ClipboardError {
    /// The clipboard could not be opened
    Unavailable { reason: String },
    /// The clipboard was opened but the write failed
    WriteFailed { reason: String },
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file could not be read, written or decoded
    FileError { path: String, error: String },
    /// Invalid configuration parameter
    InvalidParameter { parameter: String, value: String, reason: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "no value entered"),
            ParseError::NotNumeric => write!(f, "not a number"),
            ParseError::TrailingGarbage => write!(f, "unexpected characters after number"),
            ParseError::OutOfRange => write!(f, "value does not fit in 64 bits"),
        }
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable { reason } =>
                write!(f, "Clipboard unavailable: {reason}"),
            ClipboardError::WriteFailed { reason } =>
                write!(f, "Failed to write clipboard: {reason}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileError { path, error } =>
                write!(f, "Configuration file error '{path}': {error}"),
            ConfigError::InvalidParameter { parameter, value, reason } =>
                write!(f, "Invalid configuration parameter '{parameter}' = '{value}': {reason}"),
        }
    }
}

impl StdError for ParseError {}
impl StdError for ClipboardError {}
impl StdError for ConfigError {}

/// Specialized result types for different components
pub type ParseResult<T> = Result<T, ParseError>;
pub type ClipboardResult<T> = Result<T, ClipboardError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
