//! Typed text accumulator.

use crate::layout::KeyKind;
use std::fmt;

/// Append / delete-last string buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Removes the last character. No-op on an empty buffer.
    pub fn delete_last(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Applies a committed key.
    pub fn apply(&mut self, kind: &KeyKind) {
        match kind {
            KeyKind::Character(text) => self.push_str(text),
            KeyKind::Space => self.text.push(' '),
            KeyKind::Delete => {
                self.delete_last();
            }
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}
