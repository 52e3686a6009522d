//! Utility functions for colors and pixel-space geometry.
//!
//! This module provides:
//! - Color name lookup for the configuration file (constants live in draw::color)
//! - [`Point`] and [`Rect`] helpers shared by the layout, hit tester and renderer

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
/// - "gray" / "grey", "dark-gray" / "dark-grey"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "gray" | "grey" => Some(GRAY),
        "dark-gray" | "dark-grey" => Some(DARK_GRAY),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A pixel coordinate in frame space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixel space (top-left plus size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Exclusive bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    /// Closed-open containment: `x <= px < x + w` and `y <= py < y + h`.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Returns true if the two rectangles share any pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DARK_GRAY, WHITE};

    #[test]
    fn name_color_mapping() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color("Dark-Grey").unwrap(), DARK_GRAY);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn rect_rejects_empty_sizes() {
        assert!(Rect::new(0, 0, 0, 10).is_none());
        assert!(Rect::new(0, 0, 10, -1).is_none());
        assert!(Rect::new(50, 580, 1185, 100).unwrap().is_valid());
    }

    #[test]
    fn rect_contains_is_closed_open() {
        let rect = Rect::new(50, 50, 85, 85).unwrap();
        assert!(rect.contains(Point::new(50, 50)));
        assert!(rect.contains(Point::new(134, 134)));
        assert!(!rect.contains(Point::new(135, 100)));
        assert!(!rect.contains(Point::new(100, 135)));
        assert!(!rect.contains(Point::new(49, 100)));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let left = Rect::new(0, 0, 10, 10).unwrap();
        let right = Rect::new(10, 0, 10, 10).unwrap();
        let overlapping = Rect::new(9, 9, 10, 10).unwrap();
        assert!(!left.intersects(&right));
        assert!(left.intersects(&overlapping));
        assert!(overlapping.intersects(&right));
    }
}
