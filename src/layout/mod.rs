//! Keyboard layout model and hit testing.
//!
//! - [`Key`]/[`KeyKind`]: one key's label, behaviour and pixel bounds
//! - [`Layout`]: the immutable, ordered key collection built at startup
//! - [`locate`]: first-match-wins hit test of a fingertip against the keys

pub mod grid;
pub mod hit_test;
pub mod key;

pub use hit_test::{locate, locate_index};
pub use key::{DELETE_LABEL, Key, KeyKind, SPACE_LABEL};

use crate::util::Point;
use thiserror::Error;

/// Reasons a key list is rejected as a layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout contains no keys")]
    Empty,

    #[error("key '{label}' has a non-positive size")]
    InvalidSize { label: String },

    #[error("keys '{first}' and '{second}' overlap")]
    Overlap { first: String, second: String },
}

/// Ordered, validated collection of keys.
///
/// Iteration order is the hit-test tie-break. Construction through
/// [`Layout::new`] guarantees no two keys overlap, so the tie-break never
/// matters for a validated layout.
#[derive(Debug, Clone)]
pub struct Layout {
    keys: Vec<Key>,
}

impl Default for Layout {
    /// The built-in AZERTY grid (see [`grid`]).
    fn default() -> Self {
        Self {
            keys: grid::default_keys(),
        }
    }
}

impl Layout {
    /// Validates and wraps a key list.
    pub fn new(keys: Vec<Key>) -> Result<Self, LayoutError> {
        if keys.is_empty() {
            return Err(LayoutError::Empty);
        }

        if let Some(key) = keys.iter().find(|k| !k.bounds.is_valid()) {
            return Err(LayoutError::InvalidSize {
                label: key.label.clone(),
            });
        }

        for (i, first) in keys.iter().enumerate() {
            if let Some(second) = keys[i + 1..]
                .iter()
                .find(|other| first.bounds.intersects(&other.bounds))
            {
                log::warn!(
                    "Rejecting layout: '{}' overlaps '{}'",
                    first.label,
                    second.label
                );
                return Err(LayoutError::Overlap {
                    first: first.label.clone(),
                    second: second.label.clone(),
                });
            }
        }

        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Key> {
        self.keys.get(index)
    }

    /// Hit test against this layout.
    pub fn locate(&self, point: Point) -> Option<&Key> {
        locate(point, &self.keys)
    }

    /// Hit test returning the key's position in the layout.
    pub fn locate_index(&self, point: Point) -> Option<usize> {
        locate_index(point, &self.keys)
    }
}
