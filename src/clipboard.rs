//! Clipboard access for the numeric field
//!
//! The field only needs two operations from the clipboard: read the current
//! text and replace it. [`Clipboard`] is that seam; [`SystemClipboard`]
//! backs it with the desktop clipboard and [`MemoryClipboard`] keeps the text
//! in process for tests and headless hosts.

use log::debug;

use crate::error::{ClipboardError, ClipboardResult};

/// Text clipboard used by cut, copy and paste
pub trait Clipboard {
    /// Current clipboard text, or `None` when there is none or the clipboard
    /// cannot be read.
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> ClipboardResult<()>;

    /// Whether a paste would have anything to work with
    fn has_text(&mut self) -> bool {
        self.get_text().is_some_and(|text| !text.is_empty())
    }
}

/// In-process clipboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { contents: Some(text.into()) }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.contents.clone()
    }

    fn set_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Desktop clipboard backed by `arboard`
///
/// The handle is opened once; if that fails the clipboard behaves as
/// permanently empty and writes report [`ClipboardError::Unavailable`].
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    unavailable_reason: Option<String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Self { inner: Some(clipboard), unavailable_reason: None },
            Err(e) => {
                debug!("System clipboard unavailable: {e}");
                Self { inner: None, unavailable_reason: Some(e.to_string()) }
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        let clipboard = self.inner.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                // Non-text content reads as "no text"
                debug!("Clipboard read returned no text: {e}");
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) -> ClipboardResult<()> {
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable {
                reason: self
                    .unavailable_reason
                    .clone()
                    .unwrap_or_else(|| "not initialized".to_string()),
            });
        };
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed { reason: e.to_string() })
    }
}
