//! Key records: label, kind and pixel bounds.

use crate::util::{Point, Rect};

/// Label of the wide key that appends a single space.
pub const SPACE_LABEL: &str = "Space";
/// Label of the wide key that removes the last character.
pub const DELETE_LABEL: &str = "Delete";

/// What committing a key does to the text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyKind {
    /// Appends the contained text verbatim (may be more than one character)
    Character(String),
    /// Appends a single space
    Space,
    /// Removes the last character, if any
    Delete,
}

impl KeyKind {
    /// Classifies a label. "Space" and "Delete" are the only special labels.
    pub fn from_label(label: &str) -> Self {
        match label {
            SPACE_LABEL => Self::Space,
            DELETE_LABEL => Self::Delete,
            other => Self::Character(other.to_string()),
        }
    }

    /// Whether this is one of the wide special keys.
    pub fn is_special(&self) -> bool {
        !matches!(self, Self::Character(_))
    }
}

/// A single key on the virtual keyboard.
///
/// Identity is the label; geometry is the top-left corner plus size, in the
/// same pixel space as the landmark coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Display label (e.g. "A", "Space", "Delete")
    pub label: String,
    /// Behaviour on commit, derived from the label
    pub kind: KeyKind,
    /// Bounding box in pixels
    pub bounds: Rect,
}

impl Key {
    /// Creates a key whose kind is derived from its label.
    pub fn new(label: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
        let label = label.into();
        Self {
            kind: KeyKind::from_label(&label),
            label,
            bounds: Rect {
                x,
                y,
                width,
                height,
            },
        }
    }

    /// Closed-open containment test against the key's bounds.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}
